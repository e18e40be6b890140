use serde::{Deserialize, Serialize};

use crate::config::is_image_type;
use crate::display::format_size;

/// A validated, transport-encoded representation of one user-selected file.
///
/// `payload` is the standard base64 encoding of exactly the file's bytes with
/// no data-URI prefix. `preview` is present if and only if `content_type` is
/// one of the inline-previewable image types, and carries the same payload in
/// self-contained `data:` URI form for direct rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub file_size: u64,
    pub payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl Attachment {
    /// True when the attachment renders as an inline image.
    pub fn is_image(&self) -> bool {
        is_image_type(&self.content_type)
    }

    /// Size string shown next to the file name in the composer.
    pub fn display_size(&self) -> String {
        format_size(self.file_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_attachment() -> Attachment {
        Attachment {
            file_name: "photo.png".to_string(),
            content_type: "image/png".to_string(),
            file_size: 2048,
            payload: "aGVsbG8=".to_string(),
            preview: Some("data:image/png;base64,aGVsbG8=".to_string()),
        }
    }

    #[test]
    fn test_is_image() {
        assert!(image_attachment().is_image());

        let doc = Attachment {
            file_name: "notes.txt".to_string(),
            content_type: "text/plain".to_string(),
            file_size: 10,
            payload: "aGVsbG8=".to_string(),
            preview: None,
        };
        assert!(!doc.is_image());
    }

    #[test]
    fn test_display_size() {
        assert_eq!(image_attachment().display_size(), "2.0 KB");
    }

    #[test]
    fn test_preview_omitted_from_json_when_absent() {
        let doc = Attachment {
            file_name: "notes.txt".to_string(),
            content_type: "text/plain".to_string(),
            file_size: 10,
            payload: "aGVsbG8=".to_string(),
            preview: None,
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("preview").is_none());
        assert_eq!(json["file_name"], "notes.txt");
    }

    #[test]
    fn test_serde_round_trip() {
        let attachment = image_attachment();
        let json = serde_json::to_string(&attachment).unwrap();
        let back: Attachment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attachment);
    }
}
