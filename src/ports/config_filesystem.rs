//! Filesystem access needed to locate and read `.apibuilder/config`.
//!
//! Paths are absolute. Discovery only ever probes for existence and
//! reads one file, so the port stays read-only.

use std::path::Path;

use crate::domain::AppError;

/// Port for the read-only filesystem queries config resolution makes.
pub trait ConfigFilesystem {
    /// Check whether a regular file exists at `path`.
    fn is_file(&self, path: &Path) -> bool;

    /// Check whether anything (file or directory) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;
}
