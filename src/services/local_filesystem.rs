use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ConfigFilesystem;

/// `std::fs`-backed config filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigFilesystem for LocalFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::NotFound(path.to_path_buf()),
            _ => AppError::Io(err),
        })
    }
}
