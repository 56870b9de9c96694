//! EduAudio CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use eduaudio::cli::{Cli, Commands, ConfigCommands};
use eduaudio::logging::{self, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The player draws on the terminal, so its logs go to a file
    let target = match cli.command {
        Commands::Play { .. } => LogTarget::File(logging::log_file_path()),
        _ => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(target) {
        eprintln!("Warning: {:#}", e);
    }
    tracing::debug!("command line: {:?}", cli);

    match cli.command {
        Commands::Play {
            lecture,
            url,
            start,
            rate,
            volume,
        } => commands::play::handle(commands::play::PlayArgs {
            lecture,
            url,
            start,
            rate,
            volume,
        }),
        Commands::Share {
            seconds,
            lecture,
            no_copy,
        } => commands::share::handle(seconds, lecture.as_deref(), no_copy),
        Commands::Info { lecture, at, json } => {
            commands::info::handle(lecture.as_deref(), at, json)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
