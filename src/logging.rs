//! Log setup. The terminal belongs to the UI, so everything goes to a file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

pub const LOG_ENV: &str = "TYPO_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// Explicit directive first, then `TYPO_LOG`, then `info`
pub fn env_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

pub fn init(path: &Path, directive: Option<&str>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    // a subscriber may already be installed (tests), keep it
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
