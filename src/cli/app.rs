use super::project::{AddArgs, InitArgs, RegenerateArgs, RemoveArgs, VerifyArgs};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dep-agent")]
#[command(about = "Manage webhook projects and their per-network tokens", long_about = None)]
#[command(version)]
pub struct App {
    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable ANSI color output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Verbose diagnostics (never prints secrets)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (default: platform config dir/dep-agent/config.yaml)
    #[arg(long, env = "DEP_AGENT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty configuration file.
    Init(InitArgs),

    /// Add a new project with one token per whitelisted network.
    Add(AddArgs),

    /// Regenerate every token of a project and print the new hashes.
    Regenerate(RegenerateArgs),

    /// Check a client address and presented hash against a project.
    Verify(VerifyArgs),

    /// List configured projects (no secrets).
    List,

    /// Remove a project from the configuration.
    Remove(RemoveArgs),

    /// Generate shell completion scripts.
    Completion(CompletionArgs),
}

#[derive(Parser, Debug)]
pub struct CompletionArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CompletionShell {
    #[value(name = "bash")]
    Bash,
    #[value(name = "zsh")]
    Zsh,
    #[value(name = "fish")]
    Fish,
    #[value(name = "powershell")]
    Powershell,
    #[value(name = "elvish")]
    Elvish,
    #[value(name = "nushell")]
    Nushell,
}
