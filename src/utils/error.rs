use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Menu item {id} not found")]
    NotFound { id: u64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl MenuError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        MenuError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::ValidationError { .. }
            | MenuError::NotFound { .. } => ErrorCategory::Input,
            MenuError::ConfigError { .. }
            | MenuError::InvalidConfigValueError { .. }
            | MenuError::TomlError(_) => ErrorCategory::Configuration,
            MenuError::IoError(_) | MenuError::SerializationError(_) | MenuError::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// Input errors never end the session; everything else is reported and the caller decides.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::ValidationError { message, .. } => message.clone(),
            MenuError::NotFound { id } => format!("There is no menu item with id {}.", id),
            MenuError::ConfigError { message } => {
                format!("The restaurant configuration is invalid: {}", message)
            }
            MenuError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            MenuError::TomlError(_) => "The configuration file is not valid TOML.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MenuError::ValidationError { field, .. } if field == "price" => {
                "Enter a price greater than 0 and less than 100, e.g. 12.50"
            }
            MenuError::ValidationError { .. } => "Correct the highlighted field and try again",
            MenuError::NotFound { .. } => "Use 'view menu' to list the current item ids",
            MenuError::ConfigError { .. }
            | MenuError::InvalidConfigValueError { .. }
            | MenuError::TomlError(_) => "Fix the restaurant TOML file or run without --config",
            MenuError::IoError(_) => "Check that the file exists and is readable",
            MenuError::SerializationError(_) | MenuError::CsvError(_) => {
                "Retry the export; this usually indicates a bug"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            MenuError::validation("name", "Please fill in all fields").category(),
            ErrorCategory::Input
        );
        assert_eq!(
            MenuError::ConfigError {
                message: "bad".to_string()
            }
            .category(),
            ErrorCategory::Configuration
        );
        assert!(MenuError::NotFound { id: 3 }.is_recoverable());
    }

    #[test]
    fn test_price_suggestion() {
        let err = MenuError::validation("price", "Price must be less than $100");
        assert_eq!(err.user_friendly_message(), "Price must be less than $100");
        assert!(err.recovery_suggestion().contains("less than 100"));
    }
}
