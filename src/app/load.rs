//! Resolve and load the application config.

use std::path::{Path, PathBuf};

use tracing::info;

use super::discovery::discover_config_file;
use crate::domain::config::parse::parse_config_content;
use crate::domain::{AppConfig, AppError, normalize};
use crate::ports::ConfigFilesystem;
use crate::services::LocalFilesystem;

/// Where to look for the config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfigOptions {
    /// Explicit config file; skips discovery when set.
    pub path: Option<PathBuf>,
    /// Directory discovery starts from and relative `path` resolves against.
    /// Defaults to the process working directory.
    pub start_dir: Option<PathBuf>,
}

impl AppConfigOptions {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()), start_dir: None }
    }

    pub fn with_start_dir(start_dir: impl Into<PathBuf>) -> Self {
        Self { path: None, start_dir: Some(start_dir.into()) }
    }
}

/// Resolve the config file path without reading it.
pub fn resolve_config_path<F: ConfigFilesystem>(
    options: &AppConfigOptions,
    fs: &F,
) -> Result<PathBuf, AppError> {
    let start_dir = resolve_start_dir(options.start_dir.as_deref())?;

    match &options.path {
        Some(path) => {
            let path = normalize(&start_dir.join(path));
            if !fs.is_file(&path) {
                return Err(AppError::NotFound(path));
            }
            Ok(path)
        }
        None => discover_config_file(&start_dir, fs),
    }
}

/// Resolve, read and parse the config. All-or-nothing.
pub fn load_app_config<F: ConfigFilesystem>(
    options: &AppConfigOptions,
    fs: &F,
) -> Result<AppConfig, AppError> {
    let config_path = resolve_config_path(options, fs)?;
    let content = fs.read_to_string(&config_path)?;
    let config = parse_config_content(&content, &config_path)?;

    info!(
        path = %config_path.display(),
        projects = config.code().projects().len(),
        "loaded config"
    );
    Ok(config)
}

fn resolve_start_dir(start_dir: Option<&Path>) -> Result<PathBuf, AppError> {
    let dir = match start_dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => std::env::current_dir()?.join(dir),
        None => std::env::current_dir()?,
    };
    Ok(normalize(&dir))
}

impl AppConfig {
    /// Load the config from the local filesystem.
    pub fn load(options: &AppConfigOptions) -> Result<Self, AppError> {
        load_app_config(options, &LocalFilesystem::new())
    }
}
