use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP client error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LookupError {
    /// Short message suitable for the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::ApiError(_) => "Could not set up the HTTP client".to_string(),
            LookupError::IoError(e) => format!("Could not write output: {}", e),
            LookupError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid --{}: {}", field.replace('_', "-"), reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
