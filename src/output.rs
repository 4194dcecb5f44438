use crate::error::{AppError, AppResult};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub mode: OutputMode,
    pub quiet: bool,
    pub no_color: bool,
    pub verbose: bool,
}

#[derive(Debug)]
pub struct CommandOutput {
    pub data: Value,
    pub text: String,
}

impl CommandOutput {
    pub fn new(data: Value, text: impl Into<String>) -> Self {
        Self {
            data,
            text: text.into(),
        }
    }
}

pub fn emit_ok(cfg: OutputConfig, output: CommandOutput) {
    match cfg.mode {
        OutputMode::Json => {
            let body = json!({
                "ok": true,
                "data": output.data,
            });
            println!("{}", body);
        }
        OutputMode::Text => {
            if !output.text.is_empty() {
                println!("{}", output.text);
            } else if !cfg.quiet {
                println!("OK");
            }
        }
    }
}

pub fn emit_err(cfg: OutputConfig, err: AppError) {
    match cfg.mode {
        OutputMode::Json => {
            println!("{}", err.as_json());
        }
        OutputMode::Text => {
            let mut line = if cfg.verbose {
                format!("[{}] {}", err.code(), err)
            } else {
                err.to_string()
            };
            if cfg.verbose {
                if let Some(details) = &err.details {
                    line.push_str(&format!(" {details}"));
                }
            }
            if cfg.no_color {
                eprintln!("{line}");
            } else {
                eprintln!("\u{1b}[31m{line}\u{1b}[0m");
            }
        }
    }
}

/// Prints the command result and maps it to a process exit code.
pub fn finish(cfg: OutputConfig, result: AppResult<CommandOutput>) -> i32 {
    match result {
        Ok(out) => {
            emit_ok(cfg, out);
            0
        }
        Err(err) => {
            let code = err.exit_code();
            emit_err(cfg, err);
            code
        }
    }
}
