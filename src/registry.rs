use crate::config::{self, ConfigResult, Configuration};
use crate::project::{NetworkHash, Project, ProjectInput};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// What `list` reveals about a project. Secrets and tokens stay on disk.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub uuid: String,
    pub name: String,
    pub max_args: i64,
    pub hook_count: usize,
    pub work_dir: String,
    pub networks: Vec<String>,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        ProjectSummary {
            uuid: project.uuid.clone(),
            name: project.name.clone(),
            max_args: project.max_args,
            hook_count: project.hooks.len(),
            work_dir: project.work_dir.clone(),
            networks: project.tokens.networks().map(str::to_string).collect(),
        }
    }
}

/// Writes an empty configuration. Refuses to replace an existing file unless
/// `force` is set.
pub fn init(path: &Path, force: bool) -> ConfigResult<()> {
    config::save(path, &Configuration::default(), force)
}

pub fn add_project(path: &Path, input: ProjectInput) -> ConfigResult<Project> {
    let project = Project::new(input);
    project.validate()?;

    let mut cfg = config::load_or_default(path)?;
    cfg.insert(project.clone())?;
    config::save(path, &cfg, true)?;

    info!(
        uuid = %project.uuid,
        name = %project.name,
        networks = project.tokens.len(),
        "added project"
    );
    Ok(project)
}

pub fn regenerate(path: &Path, uuid: &str) -> ConfigResult<Vec<NetworkHash>> {
    let uuid = config::check_uuid(uuid)?;
    let mut cfg = config::load(path)?;
    let hashes = cfg.find_by_uuid_mut(uuid)?.regenerate_all();
    config::save(path, &cfg, true)?;

    info!(uuid, networks = hashes.len(), "regenerated tokens");
    Ok(hashes)
}

pub fn list_projects(path: &Path) -> ConfigResult<Vec<ProjectSummary>> {
    let cfg = config::load_or_default(path)?;
    Ok(cfg.projects().iter().map(ProjectSummary::from).collect())
}

pub fn remove_project(path: &Path, uuid: &str) -> ConfigResult<Project> {
    let mut cfg = config::load(path)?;
    let removed = cfg.remove(uuid)?;
    config::save(path, &cfg, true)?;

    info!(uuid = %removed.uuid, name = %removed.name, "removed project");
    Ok(removed)
}

/// The check a webhook listener performs for an incoming call.
pub fn verify(
    path: &Path,
    uuid: &str,
    client_ip: &str,
    presented_hash: &str,
) -> ConfigResult<bool> {
    let cfg = config::load(path)?;
    let project = cfg.find_by_uuid(uuid)?;
    let allowed = project.authorize(client_ip, presented_hash);
    debug!(uuid = %project.uuid, client_ip, allowed, "verified webhook caller");
    Ok(allowed)
}
