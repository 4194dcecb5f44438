mod app;
mod project;

pub use app::{App, Command, CompletionArgs, CompletionShell};
pub use project::{AddArgs, InitArgs, RegenerateArgs, RemoveArgs, VerifyArgs};
