mod mock_config_filesystem;

pub use mock_config_filesystem::MockConfigFilesystem;
