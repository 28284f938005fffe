use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::error::{Result, TypoError};

/// Number of words in a test, limited to the sizes offered by the selector
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum WordCount {
    #[default]
    #[strum(serialize = "10")]
    Ten,
    #[strum(serialize = "25")]
    TwentyFive,
    #[strum(serialize = "50")]
    Fifty,
    #[strum(serialize = "100")]
    Hundred,
}

impl WordCount {
    pub const ALL: [WordCount; 4] = [
        WordCount::Ten,
        WordCount::TwentyFive,
        WordCount::Fifty,
        WordCount::Hundred,
    ];

    pub fn get(self) -> usize {
        match self {
            WordCount::Ten => 10,
            WordCount::TwentyFive => 25,
            WordCount::Fifty => 50,
            WordCount::Hundred => 100,
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&wc| wc == self).unwrap_or(0)
    }

    /// The next larger size, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl TryFrom<usize> for WordCount {
    type Error = TypoError;

    fn try_from(value: usize) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|wc| wc.get() == value)
            .ok_or(TypoError::UnsupportedWordCount(value))
    }
}

impl From<WordCount> for usize {
    fn from(wc: WordCount) -> Self {
        wc.get()
    }
}

/// clap value parser for `--words`
pub fn parse_word_count(s: &str) -> std::result::Result<WordCount, String> {
    let value: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    WordCount::try_from(value).map_err(|e| e.to_string())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub word_count: WordCount,
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
