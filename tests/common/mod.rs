//! Shared testing utilities for apibuilder-config tests.

use apibuilder_config::{LocalFilesystem, app::find_repository_root};
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_CONFIG: &str = r#"code:
  apicollective:
    apibuilder:
      version: latest
      generators:
        play_2_3_client: generated/app/ApibuilderClient.scala
        play_2_x_routes: api/conf/routes
    apibuilder-spec:
      version: latest
      generators:
        play_2_3_client: generated/app/ApibuilderSpec.scala
    apibuilder-generator:
      version: latest
      generators:
        play_2_3_client: generated/app/ApibuilderGenerator.scala

  foo:
    bar:
      version: 0.0.1
      generators:
        ruby_client: /tmp/client.rb
"#;

/// Isolated project tree under a temp directory.
///
/// Scenarios that rely on the project not being inside any git checkout
/// call [`TestContext::inside_git_checkout`] first, since a `.git` above the
/// system temp directory would widen the discovery range.
#[allow(dead_code)]
pub struct TestContext {
    _root: TempDir,
    project_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an empty project directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp directory")
            .join("project");
        fs::create_dir_all(&project_dir).expect("Failed to create project directory");
        Self { _root: root, project_dir }
    }

    /// Absolute path to the project root.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Path to `.apibuilder/config` in the project root.
    pub fn config_path(&self) -> PathBuf {
        self.project_dir.join(".apibuilder").join("config")
    }

    /// Write `.apibuilder/config` in the project root.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.config_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create .apibuilder");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Write an arbitrary file relative to the project root.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create parent directory");
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Mark the project root as a git repository.
    pub fn git_init(&self) {
        fs::create_dir_all(self.project_dir.join(".git")).expect("Failed to create .git");
    }

    /// Whether a `.git` exists at or above the project root.
    pub fn inside_git_checkout(&self) -> bool {
        find_repository_root(&self.project_dir, &LocalFilesystem::new()).is_some()
    }

    /// Create (and return) a subdirectory of the project root.
    pub fn subdir(&self, relative: &str) -> PathBuf {
        let dir = self.project_dir.join(relative);
        fs::create_dir_all(&dir).expect("Failed to create subdirectory");
        dir
    }

    /// Build a command for the `apibuilder-config` binary running in `dir`.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("apibuilder-config")
            .expect("Failed to locate apibuilder-config binary");
        cmd.current_dir(dir.as_ref()).env_remove("RUST_LOG");
        cmd
    }

    /// Build a command running in the project root.
    pub fn cli(&self) -> Command {
        self.cli_in(&self.project_dir)
    }
}
