use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "config.yaml";

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    ProjectDirs::from("dev", "dep-agent", "dep-agent")
        .map(|d| d.config_dir().join(CONFIG_FILE_NAME))
        .ok_or_else(|| anyhow::anyhow!("Unable to determine default config dir"))
}

/// Explicit path (flag or env) wins over the platform default.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default_config_path(),
    }
}

pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}
