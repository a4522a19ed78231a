use serde::{Deserialize, Serialize};

/// Player and parent details collected by the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFields {
    pub section: String,
    pub player_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub parent_name: String,
    pub consent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub federation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Hidden field; people leave it empty, bots tend to fill it
    #[serde(default)]
    pub honeypot: String,
}

impl RegistrationFields {
    /// Names of required fields that are still blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("section", &self.section),
            ("playerName", &self.player_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("dateOfBirth", &self.date_of_birth),
            ("parentName", &self.parent_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Base64 document payloads keyed the way the registration endpoint expects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedDocuments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_certificate_file_name: Option<String>,
    #[serde(rename = "photoID", skip_serializing_if = "Option::is_none")]
    pub photo_id: Option<String>,
    #[serde(rename = "photoIDFileName", skip_serializing_if = "Option::is_none")]
    pub photo_id_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_proof: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_proof_file_name: Option<String>,
}

/// JSON body posted to the registration endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationSubmission {
    pub tournament_id: String,
    #[serde(flatten)]
    pub fields: RegistrationFields,
    #[serde(flatten)]
    pub documents: EncodedDocuments,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl RegistrationSubmission {
    pub fn new(tournament_id: &str, fields: RegistrationFields, documents: EncodedDocuments) -> Self {
        Self {
            tournament_id: tournament_id.to_string(),
            fields,
            documents,
            form_token: None,
            timestamp: None,
        }
    }
}

/// Body returned by the registration endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub registration_id: Option<String>,
}

/// Outcome handed back to the form; callers only branch on `success`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<String>,
}

impl SubmissionResult {
    pub fn succeeded(message: String, registration_id: Option<String>) -> Self {
        Self {
            success: true,
            message,
            registration_id,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            registration_id: None,
        }
    }
}
