//! Error types module
//!
//! The attachment pipeline has exactly two classes of failure: validation
//! (unsupported type, oversize) detected synchronously before any read, and
//! read failure from the underlying byte source. Both are recoverable and
//! surfaced to the user verbatim through [`AttachmentError`]'s `Display`
//! output; neither is retried automatically.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("Unsupported file type: {content_type}. Supported: images (JPEG, PNG, GIF, WebP) and documents (PDF, TXT, MD, JSON, LaTeX)")]
    UnsupportedType { content_type: String },

    #[error("File too large: {size_mb:.2}MB. Maximum: {max_mb}MB")]
    TooLarge { size_mb: f64, max_mb: u64 },

    #[error("Failed to read file")]
    ReadFailed(#[source] io::Error),
}

impl AttachmentError {
    /// True for failures detected before the byte read (type or size).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AttachmentError::UnsupportedType { .. } | AttachmentError::TooLarge { .. }
        )
    }

    /// True for failures of the underlying byte-read primitive.
    pub fn is_read(&self) -> bool {
        matches!(self, AttachmentError::ReadFailed(_))
    }
}
