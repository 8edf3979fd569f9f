use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("Notification request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lunar conversion error: {message}")]
    LunarConversion { message: String },

    #[error("Invalid birth date '{value}': {reason}")]
    InvalidBirthDate { value: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReminderError {
    pub fn lunar(message: impl Into<String>) -> Self {
        Self::LunarConversion {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReminderError>;
