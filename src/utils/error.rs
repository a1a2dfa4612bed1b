use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Activity '{name}' already exists")]
    DuplicateName { name: String },

    #[error("No activity named '{name}'")]
    ActivityNotFound { name: String },

    #[error("Activity '{activity}' has no location named '{location}'")]
    LocationNotFound { activity: String, location: String },

    #[error("The catalog has no activities")]
    EmptyCatalog,

    #[error("No activity matches '{name}'")]
    NoMatch { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Lookup,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl ErrorSeverity {
    /// Process exit code for a session that ended with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Low => 0,
            Self::Medium => 2,
            Self::High => 1,
        }
    }
}

impl CatalogError {
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidField { .. } | Self::DuplicateName { .. } => ErrorCategory::Validation,
            Self::ActivityNotFound { .. }
            | Self::LocationNotFound { .. }
            | Self::EmptyCatalog
            | Self::NoMatch { .. } => ErrorCategory::Lookup,
            Self::IoError(_) => ErrorCategory::Storage,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    /// `EmptyCatalog` and `NoMatch` are the two ways a removal can miss.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ActivityNotFound { .. }
                | Self::LocationNotFound { .. }
                | Self::EmptyCatalog
                | Self::NoMatch { .. }
        )
    }

    /// The line the menu prints when an operation fails.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidField { .. } => {
                "Error loading new activity- unable to create new activity".to_string()
            }
            Self::DuplicateName { .. } => {
                "Error adding new activity- activity already exists".to_string()
            }
            Self::ActivityNotFound { .. } => "Error- no matching activities found".to_string(),
            Self::LocationNotFound { .. } => "Error- no matching locations found".to_string(),
            Self::EmptyCatalog => "Error: no activities currently saved".to_string(),
            Self::NoMatch { .. } => "Error: no matching activity found".to_string(),
            Self::IoError(_) => "Error saving activities- could not open file".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidField { .. } => {
                "Fill in every field and use a cost of zero or more"
            }
            Self::DuplicateName { .. } => "Choose a different activity name",
            Self::ActivityNotFound { .. } | Self::NoMatch { .. } => {
                "Check the activity name; names are case-sensitive"
            }
            Self::LocationNotFound { .. } => {
                "Check the location name; names are case-sensitive"
            }
            Self::EmptyCatalog => "Add an activity first",
            Self::IoError(_) => "Make sure the export directory exists and is writable",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file and start again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
