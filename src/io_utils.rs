use crate::error::{AppError, AppResult};
use std::io::Read;

/// Resolves a value given as a literal, '-' (stdin), '@file', or 'env:NAME'.
pub fn read_input(value: &str) -> AppResult<String> {
    if value == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::internal(format!("failed to read stdin: {e}")))?;
        return Ok(buf.trim().to_string());
    }
    if let Some(rest) = value.strip_prefix('@') {
        let data = std::fs::read_to_string(rest)
            .map_err(|e| AppError::internal(format!("failed to read file {rest}: {e}")))?;
        return Ok(data.trim().to_string());
    }
    if let Some(env) = value.strip_prefix("env:") {
        return std::env::var(env)
            .map(|v| v.trim().to_string())
            .map_err(|_| AppError::internal(format!("env var {env} not set")));
    }
    Ok(value.to_string())
}
