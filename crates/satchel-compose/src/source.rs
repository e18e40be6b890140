//! Byte-source abstraction
//!
//! This module defines the `ByteSource` trait the preparer reads through,
//! plus the implementations shipped with the crate: filesystem, in-memory,
//! and data-URI. A read is single-shot and all-or-nothing: it yields the
//! complete byte content or fails entirely, with no partial or chunked
//! delivery and no retry.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use satchel_core::config::content_type_for_extension;

use crate::encode::{decode_payload, strip_data_uri};

/// Declared metadata of a host-selected file.
///
/// `content_type` is whatever the selection source reports and may be empty;
/// validation resolves the effective type (including the LaTeX extension
/// fallback) before anything is read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub content_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            content_type: content_type.into(),
        }
    }
}

/// Source of a selected file's bytes.
///
/// Implementations wrap the platform's file-reading primitive. Exactly one
/// completion per call: the full content or an error, never both, never
/// repeated.
#[async_trait]
pub trait ByteSource: Send + Sync {
    async fn read(&self) -> io::Result<Vec<u8>>;
}

/// Filesystem-backed source.
#[derive(Clone, Debug)]
pub struct FsSource {
    path: PathBuf,
}

impl FsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the declared metadata for this path from filesystem state.
    ///
    /// The declared content type comes from the extension map; files with an
    /// unmapped extension get an empty declared type, matching selection
    /// sources that report none.
    pub async fn selected_file(&self) -> io::Result<SelectedFile> {
        let metadata = fs::metadata(&self.path).await?;
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let content_type = content_type_for_extension(&name).unwrap_or_default();
        Ok(SelectedFile::new(name, metadata.len(), content_type))
    }
}

#[async_trait]
impl ByteSource for FsSource {
    async fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path).await
    }
}

/// In-memory source for hosts that already hold the content.
#[derive(Clone, Debug)]
pub struct MemorySource {
    data: Vec<u8>,
}

impl MemorySource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

#[async_trait]
impl ByteSource for MemorySource {
    async fn read(&self) -> io::Result<Vec<u8>> {
        Ok(self.data.clone())
    }
}

/// Source for hosts (webviews) that hand over a `data:` URI or bare base64
/// instead of raw bytes.
#[derive(Clone, Debug)]
pub struct DataUriSource {
    uri: String,
}

impl DataUriSource {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

#[async_trait]
impl ByteSource for DataUriSource {
    async fn read(&self) -> io::Result<Vec<u8>> {
        decode_payload(strip_data_uri(self.uri.trim()))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
