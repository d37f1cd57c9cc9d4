use crate::error::{Result, UtilError};

/// Value of the environment variable `key`; unset and empty are both errors.
pub fn get_env(key: &str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(UtilError::MissingEnv(key.to_string())),
    }
}
