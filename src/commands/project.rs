use crate::cli::{AddArgs, Command, InitArgs, RegenerateArgs, RemoveArgs, VerifyArgs};
use crate::config::{home_dir, resolve_config_path};
use crate::error::{AppError, AppResult};
use crate::io_utils::read_input;
use crate::output::{finish, CommandOutput, OutputConfig};
use crate::project::{NetworkHash, ProjectInput};
use crate::registry::{self, ProjectSummary};
use serde_json::json;
use std::path::{Path, PathBuf};

fn format_hashes(hashes: &[NetworkHash]) -> String {
    hashes
        .iter()
        .map(|h| format!("{} : {}", h.network, h.hash))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(config: Option<PathBuf>, command: Command, cfg: OutputConfig) -> i32 {
    let result = (|| -> AppResult<CommandOutput> {
        let path = resolve_config_path(config).map_err(|e| AppError::internal(e.to_string()))?;
        execute(&path, command)
    })();
    finish(cfg, result)
}

pub(crate) fn execute(path: &Path, command: Command) -> AppResult<CommandOutput> {
    match command {
        Command::Init(args) => init(path, args),
        Command::Add(args) => add(path, args),
        Command::Regenerate(args) => regenerate(path, args),
        Command::Verify(args) => verify(path, args),
        Command::List => list(path),
        Command::Remove(args) => remove(path, args),
        Command::Completion(_) => Err(AppError::internal(
            "completion does not operate on a configuration file",
        )),
    }
}

fn init(path: &Path, args: InitArgs) -> AppResult<CommandOutput> {
    registry::init(path, args.force)?;
    Ok(CommandOutput::new(
        json!({ "config": path.display().to_string() }),
        format!("initialized configuration: {}", path.display()),
    ))
}

fn add(path: &Path, args: AddArgs) -> AppResult<CommandOutput> {
    let work_dir = args
        .work_dir
        .or_else(home_dir)
        .map(|p| p.display().to_string());
    let project = registry::add_project(
        path,
        ProjectInput {
            name: args.name,
            max_args: args.max_args,
            hooks: args.hook,
            pre_hook: args.pre_hook,
            post_hook: args.post_hook,
            error_hook: args.error_hook,
            work_dir,
            networks: args.ip_cidr,
        },
    )?;
    let hashes = project.hashes();
    let text = format!(
        "created project: {} ({})\n{}",
        project.name,
        project.uuid,
        format_hashes(&hashes)
    );
    Ok(CommandOutput::new(
        json!({
            "project": ProjectSummary::from(&project),
            "hashes": hashes,
        }),
        text,
    ))
}

fn regenerate(path: &Path, args: RegenerateArgs) -> AppResult<CommandOutput> {
    let hashes = registry::regenerate(path, &args.uuid)?;
    Ok(CommandOutput::new(
        json!({ "uuid": args.uuid.trim(), "hashes": hashes }),
        format_hashes(&hashes),
    ))
}

fn verify(path: &Path, args: VerifyArgs) -> AppResult<CommandOutput> {
    let hash = read_input(&args.hash)?;
    if !registry::verify(path, &args.uuid, &args.ip, &hash)? {
        return Err(AppError::unauthorized(format!(
            "client {} is not authorized for project {}",
            args.ip,
            args.uuid.trim()
        ))
        .with_details(json!({ "uuid": args.uuid.trim(), "ip": args.ip })));
    }
    Ok(CommandOutput::new(
        json!({ "uuid": args.uuid.trim(), "ip": args.ip, "authorized": true }),
        "authorized",
    ))
}

fn list(path: &Path) -> AppResult<CommandOutput> {
    let projects = registry::list_projects(path)?;
    let text = projects
        .iter()
        .map(|p| format!("{}  {}  networks={}", p.uuid, p.name, p.networks.join(",")))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(CommandOutput::new(json!({ "projects": projects }), text))
}

fn remove(path: &Path, args: RemoveArgs) -> AppResult<CommandOutput> {
    let removed = registry::remove_project(path, &args.uuid)?;
    Ok(CommandOutput::new(
        json!({ "removed": removed.uuid }),
        format!("removed project: {} ({})", removed.name, removed.uuid),
    ))
}
