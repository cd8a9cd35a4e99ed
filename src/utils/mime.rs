//! File-kind detection for uploaded documents.
//!
//! Detection is content-first (magic bytes via `infer`), falling back to
//! the file extension: browser-reported MIME types and extensions are
//! both unreliable on their own.

use std::path::Path;

/// The file kinds the processor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Png,
    Jpeg,
}

impl FileKind {
    /// Parse a MIME type string into a kind.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.to_lowercase().as_str() {
            "application/pdf" => Some(Self::Pdf),
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// Detect the kind of a file on disk.
///
/// Returns `None` for unreadable files of unknown extension and for
/// types the processor does not accept.
pub fn detect_file_kind(path: &Path) -> Option<FileKind> {
    if let Ok(Some(kind)) = infer::get_from_path(path) {
        if let Some(found) = FileKind::from_mime(kind.mime_type()) {
            return Some(found);
        }
    }

    let guess = mime_guess::from_path(path).first_raw()?;
    FileKind::from_mime(guess)
}
