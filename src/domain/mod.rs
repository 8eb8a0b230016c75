pub mod config;
pub mod error;
pub mod paths;

pub use config::{AppConfig, Code, Generator, LATEST_VERSION, Project, Targets};
pub use error::{AppError, DiscoveryStop};
pub use paths::{APIBUILDER_DIR, CONFIG_FILE, GIT_DIR, normalize, parse_project_dir};
