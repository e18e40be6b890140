//! Preparation pipeline: validate → read → encode → preview.
//!
//! Validation runs synchronously on the declared metadata; a selection that
//! fails it is rejected without touching the byte source. The read is the
//! single asynchronous step. Encoding covers exactly the bytes the read
//! yielded, and the image preview is the same payload in data-URI form.

use tracing::{debug, info, warn};

use satchel_core::config::is_image_type;
use satchel_core::{Attachment, AttachmentError, AttachmentPolicy, AttachmentValidator};

use crate::encode::{data_uri, encode_payload};
use crate::source::{ByteSource, SelectedFile};

/// Turns a validated selection into a transport-ready [`Attachment`].
pub struct Preparer {
    validator: AttachmentValidator,
}

impl Preparer {
    pub fn new(policy: &AttachmentPolicy) -> Self {
        Self {
            validator: AttachmentValidator::from_policy(policy),
        }
    }

    /// Validate `file` and encode its content from `source`.
    ///
    /// Validation failures return before the source is read. A read failure
    /// surfaces as the generic read error with the underlying I/O error as
    /// its source. No retry, no timeout, no partial result.
    pub async fn prepare(
        &self,
        file: &SelectedFile,
        source: &dyn ByteSource,
    ) -> Result<Attachment, AttachmentError> {
        let content_type = self
            .validator
            .validate(&file.name, &file.content_type, file.size)?;
        debug!(
            file_name = %file.name,
            content_type = %content_type,
            declared_size = file.size,
            "Selection passed validation"
        );

        let data = source.read().await.map_err(AttachmentError::ReadFailed)?;
        if data.len() as u64 != file.size {
            warn!(
                file_name = %file.name,
                declared_size = file.size,
                read_size = data.len(),
                "Declared size disagrees with read content"
            );
        }

        let file_size = data.len() as u64;
        let payload = encode_payload(&data);
        let preview = is_image_type(&content_type).then(|| data_uri(&content_type, &payload));

        info!(
            file_name = %file.name,
            content_type = %content_type,
            file_size,
            has_preview = preview.is_some(),
            "Attachment prepared"
        );

        Ok(Attachment {
            file_name: file.name.clone(),
            content_type,
            file_size,
            payload,
            preview,
        })
    }
}

impl Default for Preparer {
    fn default() -> Self {
        Self::new(&AttachmentPolicy::default())
    }
}
