use super::error::{ConfigError, ConfigResult};
use super::Configuration;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub fn load(path: &Path) -> ConfigResult<Configuration> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(err) => return Err(ConfigError::io(path, err)),
    };
    if data.trim().is_empty() {
        return Ok(Configuration::default());
    }
    let cfg: Configuration = serde_yaml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), projects = cfg.projects.len(), "loaded configuration");
    Ok(cfg)
}

/// Like [`load`], but a missing file is an empty configuration.
pub fn load_or_default(path: &Path) -> ConfigResult<Configuration> {
    match load(path) {
        Err(ConfigError::ConfigNotFound { .. }) => Ok(Configuration::default()),
        other => other,
    }
}

/// Writes the whole document. An existing file is only replaced when
/// `overwrite` is set; otherwise it is left untouched.
///
/// Assumes a single writer per file: the existence check and the final rename
/// are not atomic together, and the temp path beside `path` is fixed.
/// The file holds secrets, so on unix it is written owner-only (0600).
pub fn save(path: &Path, cfg: &Configuration, overwrite: bool) -> ConfigResult<()> {
    if path.exists() && !overwrite {
        return Err(ConfigError::FileExists {
            path: path.to_path_buf(),
        });
    }
    let payload = serde_yaml::to_string(cfg).map_err(|source| ConfigError::Serialize { source })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
    }

    let tmp_path = path.with_extension("yaml.tmp");
    fs::write(&tmp_path, payload).map_err(|e| ConfigError::io(&tmp_path, e))?;
    if let Err(err) = restrict_permissions(&tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(ConfigError::io(&tmp_path, err));
    }
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(ConfigError::io(path, err));
    }
    info!(path = %path.display(), projects = cfg.projects.len(), "saved configuration");
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
