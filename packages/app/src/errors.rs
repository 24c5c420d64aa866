//! Error types for the dispatcher
//!
//! Failed logins and storage writes never surface here: the first is shown
//! inline in the login dialog, the second is logged and skipped.

use inkspire_content::ConfigError;
use inkspire_editor::EditError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Invalid payload for {action}: {message}")]
    InvalidPayload { action: String, message: String },
}
