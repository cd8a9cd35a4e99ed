//! govdoc - government document processor.
//!
//! A linear pipeline: accept free text or an uploaded file (PDF/image),
//! extract raw text, and ask Google's Gemini API for structured JSON
//! describing the document (type, extracted fields, compliance status).

pub mod cli;
pub mod config;
pub mod extract;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod server;
pub mod utils;
