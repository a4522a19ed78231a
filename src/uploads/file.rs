use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where an uploaded document's bytes live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileData {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// A document picked by the user, with the metadata the browser would declare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: String,
    pub size: u64,
    pub data: FileData,
}

impl UploadedFile {
    pub fn from_bytes(name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            content_type: content_type.to_string(),
            size: bytes.len() as u64,
            data: FileData::Bytes(bytes),
        }
    }

    /// Describes a file on disk without reading it; the type is declared from its extension
    pub async fn from_path(path: &Path) -> Result<Self> {
        let metadata = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            content_type: content_type_for(path).to_string(),
            name,
            size: metadata.len(),
            data: FileData::Path(path.to_path_buf()),
        })
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        match &self.data {
            FileData::Bytes(bytes) => Ok(bytes.clone()),
            FileData::Path(path) => tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
