//! transcat - YAML translation catalog manager
//!
//! transcat is a CLI tool and library for projects that keep their
//! translations in `<domain>.<language>.yml` documents. It finds keys that are
//! present in the master language but missing elsewhere, helps fill them in
//! one at a time, keeps documents sorted and reports completion per language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: `.transcat.yml` loading and validation
//! - `core`: Catalog engine (repositories, translations, missing-key search)
//! - `error`: Engine error type
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
