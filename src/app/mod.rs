pub mod cli;
pub mod discovery;
pub mod load;

pub use discovery::{discover_config_file, find_repository_root};
pub use load::{AppConfigOptions, load_app_config, resolve_config_path};
