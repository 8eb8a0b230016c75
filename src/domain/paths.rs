use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// The `.apibuilder/` marker directory name.
pub const APIBUILDER_DIR: &str = ".apibuilder";

/// Config file name inside the marker directory.
pub const CONFIG_FILE: &str = "config";

/// Version-control marker bounding the upward search.
pub const GIT_DIR: &str = ".git";

/// `.apibuilder/`
pub fn apibuilder_dir(root: &Path) -> PathBuf {
    root.join(APIBUILDER_DIR)
}

/// `.apibuilder/config`
pub fn config_file(root: &Path) -> PathBuf {
    apibuilder_dir(root).join(CONFIG_FILE)
}

/// `.git`
pub fn git_marker(dir: &Path) -> PathBuf {
    dir.join(GIT_DIR)
}

/// Compute the project root owning a config file path.
///
/// Returns everything above the last `.apibuilder` segment. When the path
/// has no such segment the file is taken to sit directly in the project
/// root, so its parent is returned.
pub fn parse_project_dir(config_path: &Path) -> PathBuf {
    let marker = OsStr::new(APIBUILDER_DIR);
    let components: Vec<Component<'_>> = config_path.components().collect();

    if let Some(index) =
        components.iter().rposition(|c| matches!(c, Component::Normal(name) if *name == marker))
    {
        return components[..index].iter().collect();
    }

    match config_path.parent() {
        Some(parent) => parent.to_path_buf(),
        None => config_path.to_path_buf(),
    }
}

/// Resolve `.` and `..` segments without touching the filesystem.
///
/// `..` above the root stays at the root; leading `..` on a relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
