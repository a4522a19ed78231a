use anyhow::{Context, Result, bail};
use log::info;
use std::path::PathBuf;

use crate::config::settings::AppConfig;
use crate::content::ContentLoader;
use crate::domain::{RegistrationFields, SubmissionResult};
use crate::form::RegistrationForm;
use crate::http::HttpTransport;
use crate::submission::{SubmissionClient, Transport};
use crate::uploads::{FileSlot, UploadedFile};

/// One registration as entered on the command line
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub tournament: String,
    pub fields: RegistrationFields,
    pub documents: Vec<(FileSlot, PathBuf)>,
}

/// Drives the registration form for a published tournament
pub struct RegistrationService<T: Transport> {
    loader: ContentLoader,
    client: SubmissionClient<T>,
    max_size_mb: u64,
}

impl RegistrationService<HttpTransport> {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let transport = HttpTransport::from_settings(&config.submission)?;
        Ok(Self::with_parts(
            ContentLoader::from_settings(&config.content),
            SubmissionClient::new(transport, &config.submission.endpoint),
            config.uploads.max_size_mb,
        ))
    }
}

impl<T: Transport> RegistrationService<T> {
    pub fn with_parts(loader: ContentLoader, client: SubmissionClient<T>, max_size_mb: u64) -> Self {
        Self {
            loader,
            client,
            max_size_mb,
        }
    }

    /// Fails only for problems the form never gets to see (unknown tournament,
    /// unreadable or rejected documents). Everything else is in the result.
    pub async fn register(&self, request: RegistrationRequest) -> Result<SubmissionResult> {
        let tournament = self
            .loader
            .get_by_slug(&request.tournament)
            .with_context(|| format!("No published tournament '{}'", request.tournament))?;

        let mut form = RegistrationForm::new(self.max_size_mb);
        form.fields = request.fields;

        for (slot, path) in &request.documents {
            let file = UploadedFile::from_path(path).await?;
            let validation = form.select_file(*slot, file);
            if let Some(reason) = validation.error {
                bail!("{} ({}): {}", slot.field_name(), path.display(), reason);
            }
        }

        info!("Submitting registration for {}", tournament.slug);
        Ok(form.submit(&tournament, &self.client).await)
    }
}
