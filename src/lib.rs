//! apibuilder-config: locate and parse `.apibuilder/config` for code generation.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{AppConfigOptions, discover_config_file, load_app_config, resolve_config_path};
pub use domain::{
    AppConfig, AppError, Code, DiscoveryStop, Generator, LATEST_VERSION, Project, Targets,
    parse_project_dir,
};
pub use ports::ConfigFilesystem;
pub use services::LocalFilesystem;
