use crate::config::ConfigError;
use serde_json::{json, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidConfiguration,
    InvalidUuid,
    NotFound,
    FileExists,
    Unauthorized,
    Internal,
}

#[derive(Debug, Clone)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    pub details: Option<Value>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn code(&self) -> &'static str {
        match self.kind {
            ErrorKind::InvalidConfiguration => "INVALID_CONFIGURATION",
            ErrorKind::InvalidUuid => "INVALID_UUID",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::FileExists => "FILE_EXISTS",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::InvalidConfiguration => 10,
            ErrorKind::InvalidUuid => 11,
            ErrorKind::NotFound => 12,
            ErrorKind::FileExists => 13,
            ErrorKind::Unauthorized => 14,
            ErrorKind::Internal => 15,
        }
    }

    pub fn as_json(&self) -> Value {
        let mut error = json!({
            "code": self.code(),
            "message": self.message,
        });
        if let Some(details) = &self.details {
            error["details"] = details.clone();
        }
        json!({ "ok": false, "error": error })
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        let message = err.to_string();
        match err {
            ConfigError::InvalidConfiguration { field, .. } => {
                AppError::new(ErrorKind::InvalidConfiguration, message)
                    .with_details(json!({ "field": field }))
            }
            ConfigError::InvalidUuid { uuid } => {
                AppError::new(ErrorKind::InvalidUuid, message).with_details(json!({ "uuid": uuid }))
            }
            ConfigError::NotFound { uuid } => {
                AppError::new(ErrorKind::NotFound, message).with_details(json!({ "uuid": uuid }))
            }
            ConfigError::ConfigNotFound { path } => AppError::new(ErrorKind::NotFound, message)
                .with_details(json!({ "path": path.display().to_string() })),
            ConfigError::FileExists { path } => AppError::new(ErrorKind::FileExists, message)
                .with_details(json!({ "path": path.display().to_string() })),
            ConfigError::Io { path, .. } | ConfigError::Parse { path, .. } => {
                AppError::internal(message)
                    .with_details(json!({ "path": path.display().to_string() }))
            }
            ConfigError::Serialize { .. } => AppError::internal(message),
        }
    }
}
