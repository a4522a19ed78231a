use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::content_context;

/// Where tournament Markdown files come from
pub trait ContentSource: Send + Sync {
    /// Names of the Markdown files available, sorted. Never fails; problems are logged.
    fn list_content_files(&self) -> Vec<String>;

    /// Raw contents of one file returned by `list_content_files`
    fn read(&self, name: &str) -> Result<String>;
}

/// Content directory on disk, one `.md` file per tournament
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn ensure_dir(&self) -> Result<bool> {
        if self.dir.exists() {
            return Ok(true);
        }
        fs::create_dir_all(&self.dir).context("Failed to create content directory")?;
        info!("Created empty content directory: {}", self.dir.display());
        Ok(false)
    }

    fn markdown_files(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).context("Failed to read content directory")? {
            let path = entry?.path();
            if !Self::is_markdown(&path) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn is_markdown(path: &Path) -> bool {
        path.is_file() && path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
    }
}

impl ContentSource for DirectorySource {
    fn list_content_files(&self) -> Vec<String> {
        let listing = self.ensure_dir().and_then(|existed| {
            if existed { self.markdown_files() } else { Ok(Vec::new()) }
        });

        listing.unwrap_or_else(|e| {
            warn!("Failed to list content in {}: {:#}", self.dir.display(), e);
            Vec::new()
        })
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        fs::read_to_string(&path).with_context(|| content_context(&path.display().to_string()))
    }
}

/// In-memory content, for tests and previews
#[derive(Default)]
pub struct MemorySource {
    files: BTreeMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, contents: &str) -> Self {
        self.files.insert(name.to_string(), contents.to_string());
        self
    }
}

impl ContentSource for MemorySource {
    fn list_content_files(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    fn read(&self, name: &str) -> Result<String> {
        self.files
            .get(name)
            .cloned()
            .with_context(|| format!("No content file named {}", name))
    }
}
