mod config_filesystem;

pub use config_filesystem::ConfigFilesystem;
