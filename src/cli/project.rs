use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Replace an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Name of project.
    #[arg(long)]
    pub name: String,

    /// Maximum arguments limit for each of the hooks in the project.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub max_args: i64,

    /// Path to script to be executed on webhook call; repeatable
    #[arg(long)]
    pub hook: Vec<String>,

    /// Path to script to be executed before the event.
    #[arg(long)]
    pub pre_hook: Option<String>,

    /// Path to script to be executed after the event.
    #[arg(long)]
    pub post_hook: Option<String>,

    /// Path to script to be executed in case of error.
    #[arg(long)]
    pub error_hook: Option<String>,

    /// Work directory (default: home directory)
    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    /// Whitelisted network CIDR which can access the webhook; repeatable
    #[arg(long, default_value = "0.0.0.0/0")]
    pub ip_cidr: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct RegenerateArgs {
    /// Project UUID
    pub uuid: String,
}

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Project UUID
    pub uuid: String,

    /// Client IP address (IPv4 or IPv6 literal)
    #[arg(long)]
    pub ip: String,

    /// Presented hash: literal, '-', '@file', or 'env:NAME'
    #[arg(long, allow_hyphen_values = true)]
    pub hash: String,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Project UUID
    pub uuid: String,
}
