use thiserror::Error;

/// Errors raised by the fallible helpers in this crate.
#[derive(Debug, Error)]
pub enum UtilError {
    #[error("Item with {field} = {value} not found")]
    NotFound { field: &'static str, value: String },
    #[error("{0}")]
    Assertion(String),
    #[error("{0}")]
    MissingValue(String),
    #[error("Missing env variable: {0}")]
    MissingEnv(String),
    #[error("could not generate a strong password of length {length} after {attempts} attempts")]
    PasswordGeneration { length: usize, attempts: usize },
    #[error("password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("invalid date string: {0}")]
    InvalidDate(String),
    #[error("Invalid string value for logger context: {0}")]
    InvalidLoggerSetting(String),
    #[error("unknown naming convention: {0}")]
    UnknownConvention(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = UtilError> = std::result::Result<T, E>;
