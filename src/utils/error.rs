use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid {field}: {reason}")]
    InvalidName { field: String, reason: String },

    #[error("Invalid birth date '{value}': {reason}")]
    InvalidBirthDate { value: String, reason: String },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid config value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::IoError(e) => format!("A file could not be read or written: {}", e),
            RosterError::CsvError(e) => format!("The roster CSV could not be processed: {}", e),
            RosterError::SerializationError(e) => {
                format!("The roster JSON could not be processed: {}", e)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RosterError::IoError(_) => {
                "Check that the input file exists and the output directory is writable"
            }
            RosterError::CsvError(_) => {
                "Check the CSV header: version,first_name,last_name,birth_date"
            }
            RosterError::SerializationError(_) => {
                "Check that the JSON file contains an array of person records"
            }
            RosterError::InvalidName { .. } => {
                "Fill in the missing name field in the roster record"
            }
            RosterError::InvalidBirthDate { .. } => {
                "Use an ISO date (YYYY-MM-DD) that is not in the future"
            }
            RosterError::MissingConfigError { .. }
            | RosterError::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected configuration"
            }
            RosterError::ProcessingError { .. } => {
                "Fix the offending record reported in the error message"
            }
        }
    }
}
