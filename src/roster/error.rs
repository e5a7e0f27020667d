use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Student ID must be numeric: '{0}'")]
    InvalidId(String),

    #[error("Duplicate Student ID: {0}")]
    DuplicateId(String),

    #[error("Programme must be either 'Computing' or 'Business', got '{0}'")]
    InvalidProgramme(String),

    #[error("CGPA must be a number between 0.0 and 4.0, got '{0}'")]
    InvalidGpa(String),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecordLine { line: usize, reason: String },

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The in-memory collection was changed but writing it to disk failed.
    /// Memory and disk disagree until the next successful save.
    #[error("Change kept in memory but not saved to disk: {0}")]
    Unsaved(#[source] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl RosterError {
    /// True for failures caused by the caller's input rather than the environment.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RosterError::InvalidId(_)
                | RosterError::DuplicateId(_)
                | RosterError::InvalidProgramme(_)
                | RosterError::InvalidGpa(_)
                | RosterError::NotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
