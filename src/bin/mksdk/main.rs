//! mksdk CLI - assemble a Darwin-style platform SDK

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mksdk::util::shell::Shell;

mod cli;
mod commands;

use cli::{Cli, Commands, MessageFormat};

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("mksdk=debug")
    } else {
        EnvFilter::new("mksdk=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let shell = Shell::from_flags(
        cli.quiet,
        cli.verbose,
        cli.color,
        cli.message_format == MessageFormat::Json,
    );

    if let Err(e) = run(cli.command, &shell) {
        shell.error(format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(command: Commands, shell: &Shell) -> Result<()> {
    match command {
        Commands::Create(args) => commands::create::execute(args, shell),
        Commands::Settings(args) => commands::settings::execute(args),
        Commands::Stub(args) => commands::stub::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
