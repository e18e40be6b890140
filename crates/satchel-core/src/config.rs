//! Configuration module
//!
//! This module provides the attachment policy: the size ceiling and the
//! content-type allow-list a selection must satisfy before it is read and
//! encoded. The policy is built once when a composer is constructed; it is
//! not configurable per call.

use serde::{Deserialize, Serialize};

/// Hard ceiling on attachment size: 4 MiB.
pub const MAX_ATTACHMENT_BYTES: u64 = 4 * 1024 * 1024;

/// Content types that render as an inline image preview.
pub const IMAGE_CONTENT_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// Content types accepted for attachment (images plus documents).
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
    "text/plain",
    "text/markdown",
    "application/json",
    "application/x-latex",
    "text/x-latex",
    "application/x-tex",
    "text/x-tex",
];

/// Content type assumed for `.tex` / `.latex` files whose source reports an
/// empty or generic type.
pub const LATEX_CONTENT_TYPE: &str = "application/x-latex";

/// Returns true if `content_type` is one of the inline-previewable image types.
pub fn is_image_type(content_type: &str) -> bool {
    IMAGE_CONTENT_TYPES.contains(&content_type)
}

/// Map a file name's extension to a declared content type.
///
/// Used by hosts (such as the CLI) that select files from sources which do
/// not report a MIME type. Only extensions covered by the allow-list are
/// mapped; anything else returns `None` and the declared type stays empty.
pub fn content_type_for_extension(file_name: &str) -> Option<&'static str> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())?;

    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "pdf" => Some("application/pdf"),
        "txt" => Some("text/plain"),
        "md" | "markdown" => Some("text/markdown"),
        "json" => Some("application/json"),
        "tex" | "latex" => Some(LATEX_CONTENT_TYPE),
        _ => None,
    }
}

/// Attachment acceptance policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttachmentPolicy {
    pub max_file_size: u64,
    pub allowed_content_types: Vec<String>,
}

impl AttachmentPolicy {
    pub fn new(max_file_size: u64, allowed_content_types: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_content_types,
        }
    }

    /// The size ceiling expressed in whole MiB, as rendered in user-facing
    /// messages.
    pub fn max_file_size_mb(&self) -> u64 {
        self.max_file_size / (1024 * 1024)
    }
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            max_file_size: MAX_ATTACHMENT_BYTES,
            allowed_content_types: ALLOWED_CONTENT_TYPES
                .iter()
                .map(|ct| ct.to_string())
                .collect(),
        }
    }
}
