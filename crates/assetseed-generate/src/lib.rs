//! Synthetic asset document generation for assetseed.
//!
//! This crate draws asset records from the fixed vocabularies in
//! `assetseed-core` and writes one pretty-printed JSON file per document.

pub mod corpus;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use corpus::{Facet, facet_counts, list_document_files, read_document};
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use generators::DocumentGenerator;
pub use model::{GenerateOptions, GenerationReport};
