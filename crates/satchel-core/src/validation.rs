//! Attachment validation
//!
//! Ordered checks against the attachment policy, first failure wins: content
//! type (with an extension fallback for typeless LaTeX files), then size.
//! Validation works purely on the declared metadata of a selection; it never
//! reads file bytes.

use crate::config::{AttachmentPolicy, LATEX_CONTENT_TYPE};
use crate::error::AttachmentError;

/// Extensions accepted when the declared content type is missing or generic.
/// Some selection sources report no MIME type for LaTeX files.
const LATEX_EXTENSIONS: &[&str] = &[".tex", ".latex"];

/// Attachment validator
///
/// Built once from an [`AttachmentPolicy`]; stateless thereafter.
pub struct AttachmentValidator {
    max_file_size: u64,
    allowed_content_types: Vec<String>,
}

impl AttachmentValidator {
    pub fn new(max_file_size: u64, allowed_content_types: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_content_types,
        }
    }

    pub fn from_policy(policy: &AttachmentPolicy) -> Self {
        Self::new(
            policy.max_file_size,
            policy.allowed_content_types.clone(),
        )
    }

    /// Resolve the content type for a selection, or reject it.
    ///
    /// Returns the normalized (lowercased) declared type when it is in the
    /// allow-list, the inferred LaTeX type when only the file extension
    /// matches, and `UnsupportedType` carrying the declared type otherwise.
    pub fn resolve_content_type(
        &self,
        file_name: &str,
        declared: &str,
    ) -> Result<String, AttachmentError> {
        let normalized = declared.trim().to_lowercase();

        if self
            .allowed_content_types
            .iter()
            .any(|ct| ct == &normalized)
        {
            return Ok(normalized);
        }

        let lower_name = file_name.to_lowercase();
        if LATEX_EXTENSIONS
            .iter()
            .any(|ext| lower_name.ends_with(ext))
        {
            return Ok(LATEX_CONTENT_TYPE.to_string());
        }

        Err(AttachmentError::UnsupportedType {
            content_type: declared.to_string(),
        })
    }

    /// Reject sizes above the ceiling. A size exactly at the ceiling passes.
    pub fn validate_size(&self, size: u64) -> Result<(), AttachmentError> {
        if size > self.max_file_size {
            return Err(AttachmentError::TooLarge {
                size_mb: size as f64 / (1024.0 * 1024.0),
                max_mb: self.max_file_size / (1024 * 1024),
            });
        }
        Ok(())
    }

    /// Run all checks in order and return the resolved content type.
    pub fn validate(
        &self,
        file_name: &str,
        declared_content_type: &str,
        size: u64,
    ) -> Result<String, AttachmentError> {
        let content_type = self.resolve_content_type(file_name, declared_content_type)?;
        self.validate_size(size)?;
        Ok(content_type)
    }
}

impl Default for AttachmentValidator {
    fn default() -> Self {
        Self::from_policy(&AttachmentPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> AttachmentValidator {
        AttachmentValidator::default()
    }

    #[test]
    fn test_resolve_content_type_allowed() {
        let v = validator();
        assert_eq!(
            v.resolve_content_type("photo.png", "image/png").unwrap(),
            "image/png"
        );
        assert_eq!(
            v.resolve_content_type("doc.pdf", "application/pdf").unwrap(),
            "application/pdf"
        );
    }

    #[test]
    fn test_resolve_content_type_normalizes_case() {
        let v = validator();
        assert_eq!(
            v.resolve_content_type("photo.png", "IMAGE/PNG").unwrap(),
            "image/png"
        );
    }

    #[test]
    fn test_resolve_content_type_rejects_unknown() {
        let v = validator();
        let err = v
            .resolve_content_type("archive.zip", "application/zip")
            .unwrap_err();
        match err {
            AttachmentError::UnsupportedType { content_type } => {
                assert_eq!(content_type, "application/zip");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_latex_extension_fallback_empty_type() {
        let v = validator();
        assert_eq!(
            v.resolve_content_type("notes.tex", "").unwrap(),
            "application/x-latex"
        );
    }

    #[test]
    fn test_latex_extension_fallback_case_insensitive() {
        let v = validator();
        assert_eq!(
            v.resolve_content_type("paper.LATEX", "").unwrap(),
            "application/x-latex"
        );
        assert_eq!(
            v.resolve_content_type("MACROS.TeX", "application/octet-stream")
                .unwrap(),
            "application/x-latex"
        );
    }

    #[test]
    fn test_latex_fallback_requires_extension() {
        let v = validator();
        assert!(v.resolve_content_type("notes.text", "").is_err());
        assert!(v.resolve_content_type("latex", "").is_err());
    }

    #[test]
    fn test_validate_size_at_ceiling() {
        let v = validator();
        assert!(v.validate_size(4 * 1024 * 1024).is_ok());
    }

    #[test]
    fn test_validate_size_one_over_ceiling() {
        let v = validator();
        let err = v.validate_size(4 * 1024 * 1024 + 1).unwrap_err();
        assert_eq!(err.to_string(), "File too large: 4.00MB. Maximum: 4MB");
    }

    #[test]
    fn test_validate_type_checked_before_size() {
        // An oversize file of an unsupported type reports the type failure.
        let v = validator();
        let err = v
            .validate("big.zip", "application/zip", 100 * 1024 * 1024)
            .unwrap_err();
        assert!(matches!(err, AttachmentError::UnsupportedType { .. }));
    }

    #[test]
    fn test_validate_all_supported_types_small_size() {
        let v = validator();
        for ct in crate::config::ALLOWED_CONTENT_TYPES {
            let resolved = v.validate("file.bin", ct, 1024).unwrap();
            assert_eq!(&resolved, ct);
        }
    }
}
