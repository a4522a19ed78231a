use anyhow::Result;

use knights_academy::cli::Command;
use knights_academy::config::AppConfig;
use knights_academy::{
    handle_check_file, handle_list, handle_register, handle_serve, handle_show, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    let config = AppConfig::load();
    execute_command(&command, config)
}

fn execute_command(command: &Command, config: AppConfig) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port, config),
        Command::List { active } => handle_list(*active, &config),
        Command::Show { slug } => handle_show(slug, &config),
        Command::CheckFile { path, max_size_mb } => handle_check_file(path, *max_size_mb, &config),
        Command::Register(args) => handle_register(args, &config),
    }
}
