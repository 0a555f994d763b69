pub mod add;
pub mod guess;
pub mod helper;
pub mod init;
pub mod metrics;
pub mod sort;

/// Outcome of an `add` or `guess` session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub inserted: usize,
    pub skipped: usize,
}
