pub mod catalog;
pub mod registration;
pub mod server;

pub use catalog::CatalogService;
pub use registration::{RegistrationRequest, RegistrationService};
pub use server::ServerService;
