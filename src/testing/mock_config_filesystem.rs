use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigFilesystem;

/// In-memory config filesystem for testing.
///
/// Adding a file or directory registers all of its ancestors as directories.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockConfigFilesystem {
    pub files: RefCell<HashMap<PathBuf, String>>,
    pub dirs: RefCell<HashSet<PathBuf>>,
    pub probed: RefCell<Vec<PathBuf>>,
}

#[allow(dead_code)]
impl MockConfigFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.borrow_mut().insert(path.to_path_buf(), content.to_string());
        self
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path.as_ref());
        self
    }

    fn add_dir(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl ConfigFilesystem for MockConfigFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        self.probed.borrow_mut().push(path.to_path_buf());
        self.files.borrow().contains_key(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.probed.borrow_mut().push(path.to_path_buf());
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        self.files.borrow().get(path).cloned().ok_or_else(|| AppError::NotFound(path.to_path_buf()))
    }
}
