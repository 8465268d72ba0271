use thiserror::Error;

#[derive(Error, Debug)]
pub enum PapersError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("XML parsing error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("Record {record_index} is missing required field `{field}`")]
    MissingFieldError { record_index: usize, field: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid affiliation pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error in `{field}`: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for `{field}` ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration `{field}`")]
    MissingConfigError { field: String },
}

/// 錯誤分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

/// 錯誤嚴重程度，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PapersError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PapersError::ApiError(_) => ErrorCategory::Network,
            PapersError::XmlError(_)
            | PapersError::MissingFieldError { .. }
            | PapersError::SerializationError(_) => ErrorCategory::Data,
            PapersError::CsvError(_) | PapersError::IoError(_) => ErrorCategory::Storage,
            PapersError::PatternError(_)
            | PapersError::ConfigValidationError { .. }
            | PapersError::InvalidConfigValueError { .. }
            | PapersError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PapersError::ApiError(_) => {
                "Check your network connection and that the E-utilities endpoints are reachable"
            }
            PapersError::XmlError(_) | PapersError::SerializationError(_) => {
                "The API returned an unexpected response; verify the configured endpoints"
            }
            PapersError::MissingFieldError { .. } => {
                "The detail response contained an incomplete record; retry or narrow the query"
            }
            PapersError::CsvError(_) | PapersError::IoError(_) => {
                "Check that the output path exists and is writable"
            }
            PapersError::PatternError(_) => "Use plain words as academic keywords",
            PapersError::ConfigValidationError { .. }
            | PapersError::InvalidConfigValueError { .. }
            | PapersError::MissingConfigError { .. } => {
                "Review the command-line options and the configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach PubMed: {}", self),
            ErrorCategory::Data => format!("Could not read the PubMed response: {}", self),
            ErrorCategory::Storage => format!("Could not write the report: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PapersError>;
