//! Data models for document analysis results.

mod analysis;

pub use analysis::{parse_analysis, pretty_or_raw, DocumentAnalysis, DOCUMENT_TYPES};
