mod cli;
mod commands;
mod config;
mod error;
mod hash;
mod io_utils;
mod network;
mod output;
mod project;
mod registry;
mod token;

use clap::Parser;
use cli::{App, Command};
use output::{OutputConfig, OutputMode};

fn build_output_config(app: &App) -> OutputConfig {
    OutputConfig {
        mode: if app.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
        quiet: app.quiet,
        no_color: app.no_color,
        verbose: app.verbose,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let app = App::parse();
    let output_cfg = build_output_config(&app);

    let exit_code = match app.command {
        Command::Completion(args) => commands::completion::run(args),
        command => commands::project::run(app.config, command, output_cfg),
    };

    std::process::exit(exit_code);
}
