use super::file::UploadedFile;

pub const DEFAULT_MAX_SIZE_MB: u64 = 5;

pub const ALLOWED_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "application/pdf"];

/// Result of checking one document; `error` is set exactly when `is_valid` is false
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileValidation {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl FileValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn invalid(reason: String) -> Self {
        Self {
            is_valid: false,
            error: Some(reason),
        }
    }
}

/// Size is checked before type; the limit is inclusive.
pub fn validate(file: &UploadedFile, max_size_mb: u64) -> FileValidation {
    let max_bytes = max_size_mb.saturating_mul(1024 * 1024);
    if file.size > max_bytes {
        return FileValidation::invalid(format!("File size must be less than {}MB", max_size_mb));
    }

    if !ALLOWED_TYPES.contains(&file.content_type.as_str()) {
        return FileValidation::invalid("Only JPG, PNG, and PDF files are allowed".to_string());
    }

    FileValidation::valid()
}
