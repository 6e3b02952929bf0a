// Runtime configuration: currently only the location of the store file.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// File name used when `USERS_FILE` is not set.
pub const DEFAULT_USERS_FILE: &str = "users.json";

/// Environment variable overriding the store location.
pub const USERS_FILE_ENV: &str = "USERS_FILE";

#[derive(Debug, Clone)]
pub struct Config {
    pub users_file: PathBuf,
}

impl Config {
    /// Read `USERS_FILE` from the environment or fall back to
    /// `users.json` in the current working directory.
    pub fn from_env() -> Result<Self> {
        Self::resolve(std::env::var_os(USERS_FILE_ENV))
    }

    fn resolve(override_path: Option<OsString>) -> Result<Self> {
        let users_file = match override_path {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => std::env::current_dir()
                .context("Failed to resolve current directory")?
                .join(DEFAULT_USERS_FILE),
        };
        tracing::debug!(path = %users_file.display(), "store file resolved");
        Ok(Config { users_file })
    }
}
