use reqwest::StatusCode;
use thiserror::Error;

/// Ways a registration submission can fail
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Honeypot filled in. Deliberately vague.
    #[error("Invalid submission")]
    InvalidSubmission,

    #[error("Registration failed (HTTP {}). Please try again later.", .0.as_u16())]
    Http(StatusCode),

    /// The endpoint answered but reported `success: false`
    #[error("{0}")]
    Rejected(String),

    /// 2xx with a body that is not the expected JSON
    #[error("Failed to submit registration. Please try again later.")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Failed to submit registration. Please try again later.")]
    Transport(#[source] anyhow::Error),
}

/// Form-level checks that stop a submission before any file is encoded
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in the required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Please accept the terms to continue")]
    ConsentRequired,

    #[error("Registration for '{0}' is closed")]
    RegistrationClosed(String),

    #[error("'{section}' is not a section of this tournament")]
    UnknownSection { section: String },

    #[error("Please fix the file errors before submitting")]
    InvalidFiles,

    #[error("Failed to read uploaded documents. Please try again.")]
    Encoding,
}

/// Add context to content read errors
pub fn content_context(name: &str) -> String {
    format!("Failed to read content file: {}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(SubmissionError::InvalidSubmission.to_string(), "Invalid submission");
        assert_eq!(
            SubmissionError::Http(StatusCode::INTERNAL_SERVER_ERROR).to_string(),
            "Registration failed (HTTP 500). Please try again later."
        );
        assert_eq!(
            FormError::MissingFields(vec!["email", "phone"]).to_string(),
            "Please fill in the required fields: email, phone"
        );
    }
}
