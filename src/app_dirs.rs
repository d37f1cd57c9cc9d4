use directories::ProjectDirs;
use std::path::PathBuf;

pub const APP_NAME: &str = "pmd-util";

/// Where log files and persisted settings live.
pub struct AppDirs;

impl AppDirs {
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME);
            Some(state_dir.join("logs").join("app.log"))
        } else {
            ProjectDirs::from("", "", APP_NAME)
                .map(|proj_dirs| proj_dirs.data_local_dir().join("logs").join("app.log"))
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|pd| pd.config_dir().join("logger.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_ends_with_app_log() {
        if let Some(path) = AppDirs::log_path() {
            assert!(path.ends_with("logs/app.log"));
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }
}
