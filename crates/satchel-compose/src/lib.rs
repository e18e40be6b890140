//! Satchel Compose Library
//!
//! This crate turns a host's file selection into a transport-ready
//! [`Attachment`](satchel_core::Attachment) and tracks the composer's
//! single-slot attachment state. The flow is validate → read → encode →
//! preview; the byte read is the only asynchronous step.

pub mod composer;
pub mod encode;
pub mod preparer;
pub mod source;

// Re-export commonly used types
pub use composer::{AttachmentObserver, Composer, NoOpObserver, SelectionToken};
pub use preparer::Preparer;
pub use source::{ByteSource, DataUriSource, FsSource, MemorySource, SelectedFile};
