//! Catalog engine: documents on disk, their flattened translations, and the
//! project-wide queries over them.
//!
//! ## Module Structure
//!
//! - `structure`: Single-path nested fragments and the deep merge used on save
//! - `translation`: One leaf value plus its back-references
//! - `collection`: `Scope` filters and the shared access traits
//! - `repository`: One `<domain>.<language>.<ext>` document
//! - `repository_collection`: Every repository of a project
//! - `file_scanner`: Search path resolution and file discovery
//! - `project`: Missing-translation search, insertion, sort and save
//! - `metrics`: Completion per language and the missing-keys export
//! - `guess`: External machine suggestions

pub mod collection;
pub mod file_scanner;
pub mod guess;
pub mod metrics;
pub mod project;
pub mod repository;
pub mod repository_collection;
pub mod structure;
pub mod translation;

pub use collection::{RepositoryAccess, Scope, TranslationAccess, TranslationCollection};
pub use guess::{CommandGuesser, Guesser};
pub use metrics::{LanguageMetrics, Metrics};
pub use project::{Candidate, Project};
pub use repository::Repository;
pub use repository_collection::RepositoryCollection;
pub use structure::Structure;
pub use translation::{RepositoryRef, Translation, TranslationRef};
