//! Composer attachment state
//!
//! A composer instance holds at most one current attachment plus the
//! transient processing/error indicators around it. Replacement is
//! last-write-wins: a new successful selection displaces the old attachment
//! wholesale, a failed attempt leaves the slot empty with a message, and
//! removal clears everything.
//!
//! Busy discipline is cooperative. The composer advertises
//! [`is_processing`](Composer::is_processing) and the host is expected to
//! disable its selection control while that is true; there is no internal
//! lock. A generation counter guards against the one race the convention
//! cannot prevent: a read completing after the selection it belongs to has
//! been superseded or removed. Such completions are discarded.

use std::sync::Arc;

use tracing::{debug, info};

use satchel_core::{Attachment, AttachmentError, AttachmentPolicy};

use crate::preparer::Preparer;
use crate::source::{ByteSource, SelectedFile};

/// Host callback for attachment changes.
///
/// Invoked with `Some` when a selection succeeds and with `None` when an
/// attempt fails or the attachment is removed. Hosts that need to tell
/// rejection from removal apart inspect [`Composer::last_error`].
pub trait AttachmentObserver: Send + Sync {
    fn attachment_changed(&self, attachment: Option<&Attachment>);
}

/// No-op implementation for hosts that poll composer state instead.
pub struct NoOpObserver;

impl AttachmentObserver for NoOpObserver {
    fn attachment_changed(&self, _attachment: Option<&Attachment>) {}
}

/// Identifies one selection attempt. A token issued by
/// [`Composer::begin_selection`] is only honored while it is the latest;
/// removal or a newer selection invalidates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionToken {
    generation: u64,
}

/// Single-slot attachment state for one composer instance.
pub struct Composer {
    preparer: Preparer,
    observer: Arc<dyn AttachmentObserver>,
    current: Option<Attachment>,
    processing: bool,
    last_error: Option<String>,
    generation: u64,
}

impl Composer {
    pub fn new(policy: &AttachmentPolicy, observer: Arc<dyn AttachmentObserver>) -> Self {
        Self {
            preparer: Preparer::new(policy),
            observer,
            current: None,
            processing: false,
            last_error: None,
            generation: 0,
        }
    }

    /// Composer with the default policy and no observer.
    pub fn with_default_policy() -> Self {
        Self::new(&AttachmentPolicy::default(), Arc::new(NoOpObserver))
    }

    pub fn current(&self) -> Option<&Attachment> {
        self.current.as_ref()
    }

    /// True while a selection's read is outstanding. Hosts disable their
    /// selection control while this holds.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Message from the most recent failed attempt, cleared on the next
    /// attempt and on removal.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start a selection attempt: clears any previous error and marks the
    /// composer busy. The returned token must be handed back to
    /// [`complete_selection`](Self::complete_selection).
    pub fn begin_selection(&mut self) -> SelectionToken {
        self.last_error = None;
        self.processing = true;
        self.generation += 1;
        SelectionToken {
            generation: self.generation,
        }
    }

    /// Apply the outcome of a selection attempt.
    ///
    /// Returns false and mutates nothing when `token` is stale, i.e. when a
    /// newer selection or a removal happened after the token was issued.
    /// Otherwise the slot is replaced unconditionally: the attachment on
    /// success, empty with the error's message on failure.
    pub fn complete_selection(
        &mut self,
        token: SelectionToken,
        outcome: Result<Attachment, AttachmentError>,
    ) -> bool {
        if token.generation != self.generation {
            debug!(
                token_generation = token.generation,
                current_generation = self.generation,
                "Discarding stale selection completion"
            );
            return false;
        }

        self.processing = false;
        match outcome {
            Ok(attachment) => {
                info!(
                    file_name = %attachment.file_name,
                    file_size = attachment.file_size,
                    "Attachment installed"
                );
                self.current = Some(attachment);
                self.last_error = None;
                self.observer.attachment_changed(self.current.as_ref());
            }
            Err(err) => {
                self.current = None;
                self.last_error = Some(err.to_string());
                self.observer.attachment_changed(None);
            }
        }
        true
    }

    /// Run a full selection attempt inline: begin, prepare, complete.
    ///
    /// Returns the installed attachment on success.
    pub async fn select(
        &mut self,
        file: &SelectedFile,
        source: &dyn ByteSource,
    ) -> Option<&Attachment> {
        let token = self.begin_selection();
        let outcome = self.preparer.prepare(file, source).await;
        self.complete_selection(token, outcome);
        self.current()
    }

    /// Remove the current attachment.
    ///
    /// Clears the slot, the error message, and the busy flag, and notifies
    /// the observer. An in-flight read is not cancelled; its completion
    /// becomes stale and is discarded. Idempotent.
    pub fn remove(&mut self) {
        self.generation += 1;
        self.current = None;
        self.last_error = None;
        self.processing = false;
        self.observer.attachment_changed(None);
    }
}
