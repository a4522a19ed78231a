use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "knights-academy tournament backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Serve tournament content as JSON
    Serve {
        /// Port number (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List published tournaments
    List {
        /// Only tournaments open for registration
        #[arg(long)]
        active: bool,
    },
    /// Print the normalized page data of one tournament
    Show {
        slug: String,
    },
    /// Check a document against the upload rules
    CheckFile {
        path: PathBuf,
        /// Size limit in MB (defaults to the configured limit)
        #[arg(long)]
        max_size_mb: Option<u64>,
    },
    /// Submit a registration for a tournament
    Register(RegisterArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct RegisterArgs {
    /// Tournament slug
    #[arg(long)]
    pub tournament: String,
    /// Section (category) name, e.g. "U-10"
    #[arg(long)]
    pub section: String,
    #[arg(long)]
    pub player_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub date_of_birth: String,
    #[arg(long)]
    pub parent_name: String,
    /// Confirm the parent/guardian consent
    #[arg(long)]
    pub consent: bool,
    #[arg(long)]
    pub federation_id: Option<String>,
    #[arg(long)]
    pub rating: Option<String>,
    #[arg(long)]
    pub team_school: Option<String>,
    #[arg(long)]
    pub byes: Option<String>,
    #[arg(long)]
    pub special_requests: Option<String>,
    #[arg(long)]
    pub birth_certificate: Option<PathBuf>,
    #[arg(long)]
    pub photo_id: Option<PathBuf>,
    #[arg(long)]
    pub payment_proof: Option<PathBuf>,
}
