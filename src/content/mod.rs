pub mod fallback;
pub mod front_matter;
pub mod loader;
pub mod normalizer;
pub mod site_settings;
pub mod source;

pub use loader::ContentLoader;
pub use normalizer::{TournamentPage, normalize};
pub use site_settings::SiteSettings;
pub use source::{ContentSource, DirectorySource, MemorySource};
