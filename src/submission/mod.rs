pub mod client;
pub mod token;
pub mod transport;

pub use client::SubmissionClient;
pub use token::form_token;
pub use transport::{Transport, TransportResponse};
