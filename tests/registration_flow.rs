use anyhow::Result;
use async_trait::async_trait;
use axum::{Json, Router, http::StatusCode, routing::post};
use reqwest::StatusCode as ReqwestStatus;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use knights_academy::content::{ContentLoader, DirectorySource};
use knights_academy::domain::RegistrationFields;
use knights_academy::form::{FormState, RegistrationForm};
use knights_academy::http::HttpTransport;
use knights_academy::services::{RegistrationRequest, RegistrationService};
use knights_academy::submission::{SubmissionClient, Transport, TransportResponse};
use knights_academy::uploads::{FileSlot, UploadedFile};

const OPEN_2025: &str = r#"---
slug: open-2025
title: City Open 2025
status: published
registrationOpen: true
dateStart: 2025-09-06
dateEnd: 2025-09-07
registrationDeadline: 2025-08-30
location: Pune
venue: Academy Hall
rounds: 7
date: 2025-06-01
sections:
  - name: U-10
    description: Born 2015 or later
  - name: Open
    description: No age limit
    additionalNotes: Bring your own clock
---

Full details follow.
"#;

struct SuccessTransport {
    calls: AtomicUsize,
}

#[async_trait]
impl Transport for SuccessTransport {
    async fn post_json(&self, _url: &str, _body: &Value) -> Result<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TransportResponse {
            status: ReqwestStatus::OK,
            body: r#"{"success": true, "message": "ok", "registrationId": "R1"}"#.to_string(),
        })
    }
}

fn content_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("open-2025.md"), OPEN_2025).unwrap();
    dir
}

fn player_fields() -> RegistrationFields {
    RegistrationFields {
        section: "U-10".to_string(),
        player_name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9999999999".to_string(),
        date_of_birth: "2016-02-01".to_string(),
        parent_name: "Vikram Rao".to_string(),
        consent: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_register_for_open_tournament_end_to_end() {
    let dir = content_dir("knights_academy_it_end_to_end");
    let loader = ContentLoader::new(DirectorySource::new(&dir));

    let active = loader.get_active();
    assert_eq!(active.len(), 1);
    let tournament = &active[0];
    assert_eq!(tournament.slug, "open-2025");
    assert_eq!(tournament.section_names(), vec!["U-10", "Open"]);

    let client = SubmissionClient::new(
        SuccessTransport {
            calls: AtomicUsize::new(0),
        },
        "http://registrations.test",
    );
    let mut form = RegistrationForm::default();
    form.fields = player_fields();
    form.select_file(
        FileSlot::BirthCertificate,
        UploadedFile::from_bytes("birth.pdf", "application/pdf", b"%PDF-1.4".to_vec()),
    );

    let result = form.submit(tournament, &client).await;

    assert!(result.success);
    assert_eq!(result.message, "ok");
    assert_eq!(result.registration_id.as_deref(), Some("R1"));
    assert!(form.fields.is_empty());
    assert!(form.files().is_empty());
    assert!(matches!(form.state(), FormState::Succeeded { .. }));
    assert_eq!(client.transport().calls.load(Ordering::SeqCst), 1);

    fs::remove_dir_all(&dir).unwrap();
}

async fn spawn_endpoint(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/register", addr)
}

#[tokio::test]
async fn test_http_transport_against_local_endpoint() {
    let router = Router::new().route(
        "/register",
        post(|Json(body): Json<Value>| async move {
            let ok = body["tournamentId"] == "open-2025"
                && body["photoIDFileName"] == "id.png"
                && body["formToken"].as_str().map(str::len) == Some(16);
            Json(json!({
                "success": ok,
                "message": if ok { "Registered" } else { "Bad payload" },
                "registrationId": "REG-42"
            }))
        }),
    );
    let endpoint = spawn_endpoint(router).await;

    let dir = content_dir("knights_academy_it_http");
    let id_path = dir.join("id.png");
    fs::write(&id_path, [0x89, b'P', b'N', b'G']).unwrap();

    let service = RegistrationService::with_parts(
        ContentLoader::new(DirectorySource::new(&dir)),
        SubmissionClient::new(HttpTransport::new("KnightsAcademyTest/1.0", Some(10)).unwrap(), &endpoint),
        5,
    );
    let result = service
        .register(RegistrationRequest {
            tournament: "open-2025".to_string(),
            fields: player_fields(),
            documents: vec![(FileSlot::PhotoId, id_path)],
        })
        .await
        .unwrap();

    assert!(result.success, "{}", result.message);
    assert_eq!(result.message, "Registered");
    assert_eq!(result.registration_id.as_deref(), Some("REG-42"));

    fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_server_error_keeps_form_for_retry() {
    let router = Router::new().route(
        "/register",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let endpoint = spawn_endpoint(router).await;

    let dir = content_dir("knights_academy_it_500");
    let loader = ContentLoader::new(DirectorySource::new(&dir));
    let tournament = loader.get_by_slug("open-2025").unwrap();

    let client = SubmissionClient::new(HttpTransport::new("KnightsAcademyTest/1.0", Some(10)).unwrap(), &endpoint);
    let mut form = RegistrationForm::default();
    form.fields = player_fields();
    let before = form.fields.clone();

    let result = form.submit(&tournament, &client).await;

    assert!(!result.success);
    assert!(!result.message.is_empty());
    assert_eq!(form.fields, before);
    assert!(matches!(form.state(), FormState::Failed { .. }));

    fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_register_rejects_unknown_tournament_and_bad_documents() {
    let dir = content_dir("knights_academy_it_rejects");
    let gif = dir.join("photo.gif");
    fs::write(&gif, b"GIF89a").unwrap();

    let service = RegistrationService::with_parts(
        ContentLoader::new(DirectorySource::new(&dir)),
        SubmissionClient::new(
            SuccessTransport {
                calls: AtomicUsize::new(0),
            },
            "http://registrations.test",
        ),
        5,
    );

    let unknown = RegistrationRequest {
        tournament: "winter-2030".to_string(),
        fields: player_fields(),
        documents: Vec::new(),
    };
    assert!(service.register(unknown).await.is_err());

    let bad_document = RegistrationRequest {
        tournament: "open-2025".to_string(),
        fields: player_fields(),
        documents: vec![(FileSlot::PhotoId, gif)],
    };
    let error = service.register(bad_document).await.unwrap_err();
    assert!(error.to_string().contains("Only JPG, PNG, and PDF files are allowed"));

    fs::remove_dir_all(&dir).unwrap();
}
