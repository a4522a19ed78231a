use chrono::{SecondsFormat, Utc};
use log::{info, warn};

use super::token::form_token;
use super::transport::Transport;
use crate::domain::{RegistrationSubmission, ServerResponse, SubmissionResult};
use crate::errors::SubmissionError;

const GENERIC_REJECTION: &str = "Registration failed. Please try again.";

/// Sends registration payloads to the configured endpoint
pub struct SubmissionClient<T: Transport> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> SubmissionClient<T> {
    pub fn new(transport: T, endpoint: &str) -> Self {
        Self {
            transport,
            endpoint: endpoint.to_string(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submits one registration. Every failure comes back as `success: false`.
    pub async fn submit(&self, payload: RegistrationSubmission) -> SubmissionResult {
        let tournament_id = payload.tournament_id.clone();
        match self.try_submit(payload).await {
            Ok(result) => {
                info!("Registration accepted for tournament {}", tournament_id);
                result
            }
            Err(e) => {
                warn!("Registration for tournament {} failed: {:?}", tournament_id, e);
                SubmissionResult::failed(e.to_string())
            }
        }
    }

    async fn try_submit(
        &self,
        mut payload: RegistrationSubmission,
    ) -> Result<SubmissionResult, SubmissionError> {
        let now = Utc::now();
        payload.timestamp = Some(now.to_rfc3339_opts(SecondsFormat::Millis, true));
        payload.form_token = Some(form_token(
            &payload.tournament_id,
            &payload.fields.email,
            now.timestamp_millis(),
        ));

        if !payload.fields.honeypot.is_empty() {
            return Err(SubmissionError::InvalidSubmission);
        }

        let body = serde_json::to_value(&payload).map_err(|e| SubmissionError::Transport(e.into()))?;
        let response = self
            .transport
            .post_json(&self.endpoint, &body)
            .await
            .map_err(SubmissionError::Transport)?;

        if !response.status.is_success() {
            return Err(SubmissionError::Http(response.status));
        }

        let parsed: ServerResponse =
            serde_json::from_str(&response.body).map_err(SubmissionError::MalformedResponse)?;
        Self::interpret(parsed)
    }

    fn interpret(response: ServerResponse) -> Result<SubmissionResult, SubmissionError> {
        if !response.success {
            let message = response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_REJECTION.to_string());
            return Err(SubmissionError::Rejected(message));
        }

        Ok(SubmissionResult::succeeded(
            response
                .message
                .unwrap_or_else(|| "Registration submitted successfully".to_string()),
            response.registration_id,
        ))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::{EncodedDocuments, RegistrationFields};
    use crate::submission::transport::TransportResponse;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::Value;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers every POST with a canned response and records what it was sent
    pub(crate) struct FakeTransport {
        reply: Option<(StatusCode, String)>,
        calls: AtomicUsize,
        last_body: Mutex<Option<Value>>,
    }

    impl FakeTransport {
        pub(crate) fn replying(status: StatusCode, body: &str) -> Self {
            Self {
                reply: Some((status, body.to_string())),
                calls: AtomicUsize::new(0),
                last_body: Mutex::new(None),
            }
        }

        pub(crate) fn unreachable() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
                last_body: Mutex::new(None),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn last_body(&self) -> Option<Value> {
            self.last_body.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn post_json(&self, _url: &str, body: &Value) -> Result<TransportResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_body.lock().unwrap() = Some(body.clone());
            match &self.reply {
                Some((status, body)) => Ok(TransportResponse {
                    status: *status,
                    body: body.clone(),
                }),
                None => Err(anyhow!("connection refused")),
            }
        }
    }

    fn payload() -> RegistrationSubmission {
        let fields = RegistrationFields {
            section: "U-10".to_string(),
            player_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9999999999".to_string(),
            date_of_birth: "2016-02-01".to_string(),
            parent_name: "Vikram Rao".to_string(),
            consent: true,
            ..Default::default()
        };
        RegistrationSubmission::new("open-2025", fields, EncodedDocuments::default())
    }

    fn client(transport: FakeTransport) -> SubmissionClient<FakeTransport> {
        SubmissionClient::new(transport, "http://registrations.test/submit")
    }

    #[tokio::test]
    async fn test_success_response_is_passed_through() {
        let client = client(FakeTransport::replying(
            StatusCode::OK,
            r#"{"success": true, "message": "ok", "registrationId": "R1"}"#,
        ));

        let result = client.submit(payload()).await;

        assert_eq!(
            result,
            SubmissionResult {
                success: true,
                message: "ok".to_string(),
                registration_id: Some("R1".to_string()),
            }
        );
        assert_eq!(client.transport().calls(), 1);
    }

    #[tokio::test]
    async fn test_sent_body_carries_timestamp_and_token() {
        let client = client(FakeTransport::replying(StatusCode::OK, r#"{"success": true}"#));
        client.submit(payload()).await;

        let body = client.transport().last_body().unwrap();
        assert_eq!(body["tournamentId"], "open-2025");
        assert_eq!(body["section"], "U-10");
        assert_eq!(body["formToken"].as_str().unwrap().len(), 16);
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_honeypot_never_reaches_network() {
        let client = client(FakeTransport::replying(StatusCode::OK, r#"{"success": true}"#));
        let mut payload = payload();
        payload.fields.honeypot = "http://spam.example".to_string();

        let result = client.submit(payload).await;

        assert!(!result.success);
        assert_eq!(result.message, "Invalid submission");
        assert_eq!(client.transport().calls(), 0);
    }

    #[tokio::test]
    async fn test_http_error_becomes_failure() {
        let client = client(FakeTransport::replying(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>oops</html>",
        ));

        let result = client.submit(payload()).await;

        assert!(!result.success);
        assert!(result.message.contains("500"));
        assert!(result.registration_id.is_none());
    }

    #[tokio::test]
    async fn test_server_rejection_message_is_surfaced() {
        let rejecting = client(FakeTransport::replying(
            StatusCode::OK,
            r#"{"success": false, "message": "Section is full"}"#,
        ));
        let result = rejecting.submit(payload()).await;
        assert!(!result.success);
        assert_eq!(result.message, "Section is full");

        let silent = client(FakeTransport::replying(StatusCode::OK, r#"{"success": false}"#));
        let result = silent.submit(payload()).await;
        assert_eq!(result.message, GENERIC_REJECTION);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_gives_generic_message() {
        let result = client(FakeTransport::unreachable()).submit(payload()).await;
        assert!(!result.success);
        assert_eq!(
            result.message,
            "Failed to submit registration. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_a_failure() {
        let result = client(FakeTransport::replying(StatusCode::OK, "thanks!"))
            .submit(payload())
            .await;
        assert!(!result.success);
        assert_eq!(
            result.message,
            "Failed to submit registration. Please try again later."
        );
    }
}
