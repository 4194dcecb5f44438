mod error;
mod paths;
mod store;

pub use error::{ConfigError, ConfigResult};
pub use paths::{home_dir, resolve_config_path};
pub use store::{load, load_or_default, save};

use crate::project::Project;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The persisted document: every project this agent knows about.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Trims `uuid` and rejects anything that is not a well-formed UUID.
pub fn check_uuid(uuid: &str) -> ConfigResult<&str> {
    let uuid = uuid.trim();
    if uuid.is_empty() || Uuid::parse_str(uuid).is_err() {
        return Err(ConfigError::InvalidUuid {
            uuid: uuid.to_string(),
        });
    }
    Ok(uuid)
}

impl Configuration {
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn find_by_uuid(&self, uuid: &str) -> ConfigResult<&Project> {
        let uuid = check_uuid(uuid)?;
        self.projects
            .iter()
            .find(|p| p.uuid == uuid)
            .ok_or_else(|| ConfigError::NotFound {
                uuid: uuid.to_string(),
            })
    }

    pub fn find_by_uuid_mut(&mut self, uuid: &str) -> ConfigResult<&mut Project> {
        let uuid = check_uuid(uuid)?;
        self.projects
            .iter_mut()
            .find(|p| p.uuid == uuid)
            .ok_or_else(|| ConfigError::NotFound {
                uuid: uuid.to_string(),
            })
    }

    /// Appends a project, keeping UUIDs unique across the document.
    pub fn insert(&mut self, project: Project) -> ConfigResult<()> {
        if self.projects.iter().any(|p| p.uuid == project.uuid) {
            return Err(ConfigError::invalid(
                "uuid",
                format!("{} is already registered", project.uuid),
            ));
        }
        self.projects.push(project);
        Ok(())
    }

    pub fn remove(&mut self, uuid: &str) -> ConfigResult<Project> {
        let uuid = check_uuid(uuid)?;
        let index = self
            .projects
            .iter()
            .position(|p| p.uuid == uuid)
            .ok_or_else(|| ConfigError::NotFound {
                uuid: uuid.to_string(),
            })?;
        Ok(self.projects.remove(index))
    }
}
