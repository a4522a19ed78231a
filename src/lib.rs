pub mod api;
pub mod cli;
pub mod config;
pub mod content;
pub mod domain;
pub mod errors;
pub mod form;
pub mod http;
pub mod services;
pub mod submission;
pub mod uploads;

use anyhow::{Result, bail};
use clap::Parser;
use cli::Cli;
use std::path::Path;

use crate::cli::{Command, RegisterArgs};
use crate::config::settings::AppConfig;
use crate::domain::RegistrationFields;
use crate::services::{CatalogService, RegistrationRequest, RegistrationService, ServerService};
use crate::uploads::{FileSlot, UploadedFile};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: Option<u16>, config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let port = port.unwrap_or(config.server.port);
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_list(active: bool, config: &AppConfig) -> Result<()> {
    let catalog = CatalogService::new(config);
    for page in catalog.list(active) {
        let status = if page.registration_open { "open" } else { "closed" };
        println!(
            "{}..{}  {}  [{}]  {}",
            page.date_start, page.date_end, page.slug, status, page.title
        );
    }
    Ok(())
}

pub fn handle_show(slug: &str, config: &AppConfig) -> Result<()> {
    let catalog = CatalogService::new(config);
    let Some(page) = catalog.show(slug) else {
        bail!("Tournament '{}' not found", slug);
    };
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

pub fn handle_check_file(path: &Path, max_size_mb: Option<u64>, config: &AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let file = runtime.block_on(UploadedFile::from_path(path))?;
    let limit = max_size_mb.unwrap_or(config.uploads.max_size_mb);

    let validation = uploads::validate(&file, limit);
    match validation.error {
        None => {
            println!("{} ({}, {} bytes) is accepted", file.name, file.content_type, file.size);
            Ok(())
        }
        Some(reason) => bail!("{} is rejected: {}", file.name, reason),
    }
}

pub fn handle_register(args: &RegisterArgs, config: &AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let service = RegistrationService::new(config)?;
        service.register(build_request(args)).await
    })?;

    if !result.success {
        bail!("{}", result.message);
    }

    println!("{}", result.message);
    if let Some(id) = result.registration_id {
        println!("Registration ID: {}", id);
    }
    Ok(())
}

fn build_request(args: &RegisterArgs) -> RegistrationRequest {
    let fields = RegistrationFields {
        section: args.section.clone(),
        player_name: args.player_name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        date_of_birth: args.date_of_birth.clone(),
        parent_name: args.parent_name.clone(),
        consent: args.consent,
        federation_id: args.federation_id.clone(),
        rating: args.rating.clone(),
        team_school: args.team_school.clone(),
        byes: args.byes.clone(),
        special_requests: args.special_requests.clone(),
        honeypot: String::new(),
    };

    let documents = [
        (FileSlot::BirthCertificate, &args.birth_certificate),
        (FileSlot::PhotoId, &args.photo_id),
        (FileSlot::PaymentProof, &args.payment_proof),
    ]
    .into_iter()
    .filter_map(|(slot, path)| path.clone().map(|path| (slot, path)))
    .collect();

    RegistrationRequest {
        tournament: args.tournament.clone(),
        fields,
        documents,
    }
}
