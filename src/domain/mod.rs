pub mod dates;
pub mod models;
pub mod registration;

#[cfg(test)]
pub(crate) mod fixtures;

pub use models::{ContactInfo, SectionEntry, TournamentRecord, TournamentStatus};
pub use registration::{
    EncodedDocuments, RegistrationFields, RegistrationSubmission, ServerResponse, SubmissionResult,
};
