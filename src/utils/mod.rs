//! Shared utility functions.
//!
//! - `html`: HTML escaping for safe rendering
//! - `mime`: file-kind detection for uploads

mod html;
mod mime;

pub use html::html_escape;
pub use mime::{detect_file_kind, FileKind};
