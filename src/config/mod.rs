pub mod contact;
pub mod settings;

pub use contact::{DefaultContact, NOTES_PLACEHOLDER, default_images};
pub use settings::AppConfig;
