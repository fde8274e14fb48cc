use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error on {path}: {source}")]
    FileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Malformed API response: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Invalid registration timestamp '{value}': {source}")]
    TimestampError {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Roster is missing required column '{column}'")]
    MissingColumnError { column: String },

    #[error("Cannot compute the most frequent value of an empty sequence")]
    EmptyInput,

    #[error("Representative lookup failed: {message}")]
    LookupError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Network,
    Template,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        EtlError::FileError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::CsvError(_)
            | EtlError::TimestampError { .. }
            | EtlError::MissingColumnError { .. }
            | EtlError::EmptyInput => ErrorCategory::Input,
            EtlError::FileError { .. } => ErrorCategory::Output,
            EtlError::ApiError(_)
            | EtlError::SerializationError(_)
            | EtlError::LookupError { .. } => ErrorCategory::Network,
            EtlError::TemplateError(_) => ErrorCategory::Template,
            EtlError::MissingConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Template | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::CsvError(_) => "Check that every roster row has the same number of fields as the header",
            EtlError::TimestampError { .. } => "Registration dates must look like MM/DD/YY HH:MM",
            EtlError::MissingColumnError { .. } => {
                "The roster header needs first_name, zipcode, homephone and regdate columns"
            }
            EtlError::EmptyInput => "Add at least one attendee row to the roster",
            EtlError::FileError { .. } => {
                "Check that the file exists and the output directory is writable"
            }
            EtlError::SerializationError(_) => "Check that --api-endpoint points at the civic information API",
            EtlError::ApiError(_) | EtlError::LookupError { .. } => {
                "Check network access and the API_KEY environment variable"
            }
            EtlError::TemplateError(_) => "Fix the syntax of the letter template",
            EtlError::MissingConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Run with --help to review the available options"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read the attendee roster: {}", self),
            ErrorCategory::Output => format!("File access failed: {}", self),
            ErrorCategory::Network => format!("Representative service unavailable: {}", self),
            ErrorCategory::Template => format!("Could not render the letter template: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
