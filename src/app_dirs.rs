use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "typo";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME)
    }

    pub fn config_path() -> PathBuf {
        Self::project()
            .map(|pd| pd.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("typo_config.json"))
    }

    pub fn log_path() -> PathBuf {
        if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME)
                .join("typo.log")
        } else {
            Self::project()
                .map(|pd| pd.data_local_dir().join("typo.log"))
                .unwrap_or_else(|| PathBuf::from("typo.log"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_named_for_the_app() {
        assert!(AppDirs::config_path().ends_with("config.json"));
        assert!(AppDirs::log_path().ends_with("typo.log"));
    }
}
