use log::{info, warn};
use std::collections::HashMap;

use crate::domain::{RegistrationFields, RegistrationSubmission, SubmissionResult, TournamentRecord};
use crate::errors::FormError;
use crate::submission::{SubmissionClient, Transport};
use crate::uploads::{self, FileSlot, FileSlots, FileValidation, UploadedFile};

/// Where the form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded {
        message: String,
        registration_id: Option<String>,
    },
    Failed {
        message: String,
    },
}

/// Registration form for one tournament page.
///
/// A successful submit clears fields and documents. A failed one keeps both
/// so the user can fix things and try again.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub fields: RegistrationFields,
    files: FileSlots,
    file_errors: HashMap<FileSlot, String>,
    state: FormState,
    max_size_mb: u64,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(uploads::DEFAULT_MAX_SIZE_MB)
    }
}

impl RegistrationForm {
    pub fn new(max_size_mb: u64) -> Self {
        Self {
            fields: RegistrationFields::default(),
            files: FileSlots::default(),
            file_errors: HashMap::new(),
            state: FormState::Idle,
            max_size_mb,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn files(&self) -> &FileSlots {
        &self.files
    }

    pub fn file_error(&self, slot: FileSlot) -> Option<&str> {
        self.file_errors.get(&slot).map(String::as_str)
    }

    /// Validates a newly picked document. Rejected files leave the slot empty.
    pub fn select_file(&mut self, slot: FileSlot, file: UploadedFile) -> FileValidation {
        let validation = uploads::validate(&file, self.max_size_mb);
        match &validation.error {
            None => {
                self.files.set(slot, file);
                self.file_errors.remove(&slot);
            }
            Some(reason) => {
                self.files.clear(slot);
                self.file_errors.insert(slot, reason.clone());
            }
        }
        validation
    }

    pub fn remove_file(&mut self, slot: FileSlot) {
        self.files.clear(slot);
        self.file_errors.remove(&slot);
    }

    /// Empties fields, documents and errors
    pub fn reset(&mut self) {
        self.fields = RegistrationFields::default();
        self.files = FileSlots::default();
        self.file_errors.clear();
        self.state = FormState::Idle;
    }

    pub fn check(&self, tournament: &TournamentRecord) -> Result<(), FormError> {
        if !tournament.registration_open {
            return Err(FormError::RegistrationClosed(tournament.title.clone()));
        }

        let missing = self.fields.missing_required();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        if !self.fields.consent {
            return Err(FormError::ConsentRequired);
        }

        if !tournament.has_section(&self.fields.section) {
            return Err(FormError::UnknownSection {
                section: self.fields.section.clone(),
            });
        }

        if !self.file_errors.is_empty() {
            return Err(FormError::InvalidFiles);
        }

        Ok(())
    }

    /// Runs the full submit cycle against `tournament`
    pub async fn submit<T: Transport>(
        &mut self,
        tournament: &TournamentRecord,
        client: &SubmissionClient<T>,
    ) -> SubmissionResult {
        self.state = FormState::Validating;
        if let Err(e) = self.check(tournament) {
            return self.fail(e.to_string());
        }

        let documents = match uploads::process_all(&self.files).await {
            Ok(documents) => documents,
            Err(e) => {
                warn!("Failed to encode documents for {}: {:#}", tournament.slug, e);
                return self.fail(FormError::Encoding.to_string());
            }
        };

        self.state = FormState::Submitting;
        let payload = RegistrationSubmission::new(&tournament.slug, self.fields.clone(), documents);
        let result = client.submit(payload).await;

        if result.success {
            info!("Registration form for {} submitted", tournament.slug);
            self.reset();
            self.state = FormState::Succeeded {
                message: result.message.clone(),
                registration_id: result.registration_id.clone(),
            };
            result
        } else {
            self.fail(result.message)
        }
    }

    fn fail(&mut self, message: String) -> SubmissionResult {
        self.state = FormState::Failed {
            message: message.clone(),
        };
        SubmissionResult::failed(message)
    }
}
