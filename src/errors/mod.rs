use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, Error)]
pub enum RoleboardError {
    // Fetch collaborator errors
    #[error("Failed to fetch '{category}': {reason}")]
    FetchFailure {
        category: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Payload shape errors
    #[error("Malformed payload for '{category}': {reason}")]
    MalformedPayload {
        category: String,
        reason: String,
    },

    // Word-cloud weight errors
    #[error("Invalid word-cloud weight {value}: {reason}")]
    InvalidWeight {
        value: u64,
        reason: String,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Validation errors
    #[error("Validation error for '{field}': value '{value}' violates '{constraint}'")]
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // User input errors
    #[error("Unknown category '{name}'")]
    UnknownCategory {
        name: String,
        available: Vec<String>,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },

    // Multiple errors (one per failed category)
    #[error("{} errors during {context}", .errors.len())]
    MultipleErrors {
        errors: Vec<RoleboardError>,
        context: String,
    },
}

impl RoleboardError {
    pub fn fetch_failure(category: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::FetchFailure {
            category: category.to_string(),
            url: url.map(|s| s.to_string()),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn malformed_payload(category: &str, reason: &str) -> Self {
        Self::MalformedPayload {
            category: category.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_weight(value: u64, reason: &str) -> Self {
        Self::InvalidWeight {
            value,
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Folds per-category failures into one error; `None` when nothing failed.
    pub fn from_failures(errors: Vec<RoleboardError>, context: &str) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        Some(Self::MultipleErrors {
            errors,
            context: context.to_string(),
        })
    }

    /// Re-tags a payload error raised before the category was known.
    pub fn for_category(self, category: &str) -> Self {
        match self {
            Self::MalformedPayload { reason, .. } => Self::malformed_payload(category, &reason),
            Self::FetchFailure { url, status_code, reason, .. } => Self::FetchFailure {
                category: category.to_string(),
                url,
                status_code,
                reason,
            },
            other => other,
        }
    }

    /// Every error is scoped to a single category; only configuration and
    /// system problems stop the whole run.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::FetchFailure { .. } => true,
            Self::MalformedPayload { .. } => true,
            Self::InvalidWeight { .. } => true,
            Self::UnknownCategory { .. } => true,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => false,
            Self::ConfigurationFileError { .. } => false,
            Self::SystemError { .. } => false,
            Self::MultipleErrors { errors, .. } => errors.iter().all(|e| e.is_recoverable()),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::FetchFailure { .. } => ErrorSeverity::Medium,
            Self::MalformedPayload { .. } => ErrorSeverity::Medium,
            Self::InvalidWeight { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::UnknownCategory { .. } => ErrorSeverity::Low,
            Self::MultipleErrors { errors, .. } => {
                errors.iter()
                    .map(|e| e.severity())
                    .max()
                    .unwrap_or(ErrorSeverity::Low)
            }
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::FetchFailure { category, url, status_code, reason } => {
                let mut msg = format!("Could not fetch '{}': {}", category, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 The chart shows a placeholder until the next refresh");
                msg
            }
            Self::MalformedPayload { category, reason } => {
                format!("Payload for '{}' has an unrecognized shape: {}\n💡 Expected a list of labeled counts or a {{name: count}} object", category, reason)
            }
            Self::InvalidWeight { value, reason } => {
                format!("Word-cloud weight {} rejected: {}\n💡 Weights must be positive counts", value, reason)
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::UnknownCategory { name, available } => {
                let mut msg = format!("Category '{}' not found", name);
                if !available.is_empty() {
                    msg.push_str(&format!("\n💡 Available categories: {}", available.join(", ")));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
            Self::MultipleErrors { errors, context } => {
                let mut msg = format!("Multiple errors occurred during {}:\n", context);
                for (i, error) in errors.iter().enumerate() {
                    msg.push_str(&format!("  {}. {}\n", i + 1, error.user_message().replace('\n', "\n     ")));
                }
                msg
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for roleboard operations
pub type RoleboardResult<T> = Result<T, RoleboardError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log a category-scoped failure without interrupting the other categories
    pub fn handle_category_error(category: &str, error: &RoleboardError) {
        let severity = error.severity();
        log::error!("[{}] {} ({})", severity.name(), error.technical_details(), category);
        log::warn!("{} {}", severity.emoji(), error.user_message());
    }
}

/// Convert from standard library errors
impl From<std::io::Error> for RoleboardError {
    fn from(error: std::io::Error) -> Self {
        RoleboardError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for RoleboardError {
    fn from(error: serde_json::Error) -> Self {
        RoleboardError::MalformedPayload {
            category: "unknown".to_string(),
            reason: format!("{} (line {})", error, error.line()),
        }
    }
}

impl From<toml::de::Error> for RoleboardError {
    fn from(error: toml::de::Error) -> Self {
        RoleboardError::ConfigurationFileError {
            path: "config.toml".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for RoleboardError {
    fn from(error: reqwest::Error) -> Self {
        RoleboardError::FetchFailure {
            category: "unknown".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
