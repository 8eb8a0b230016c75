//! Typed model of `.apibuilder/config`.

pub mod parse;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::AppError;

/// Version sentinel meaning "whatever the server has most recently published".
pub const LATEST_VERSION: &str = "latest";

/// Output paths for a generator, accepted as one path or many. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets(Vec<String>);

impl Targets {
    /// Wrap a sequence of paths; `None` when it is empty.
    pub fn new(targets: Vec<String>) -> Option<Self> {
        if targets.is_empty() { None } else { Some(Targets(targets)) }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Targets {
    fn from(target: &str) -> Self {
        Targets(vec![target.to_string()])
    }
}

impl From<String> for Targets {
    fn from(target: String) -> Self {
        Targets(vec![target])
    }
}

impl TryFrom<Vec<String>> for Targets {
    type Error = AppError;

    fn try_from(targets: Vec<String>) -> Result<Self, Self::Error> {
        Targets::new(targets)
            .ok_or_else(|| AppError::parse_error("targets", "at least one target is required"))
    }
}

impl TryFrom<Vec<&str>> for Targets {
    type Error = AppError;

    fn try_from(targets: Vec<&str>) -> Result<Self, Self::Error> {
        Targets::try_from(targets.into_iter().map(str::to_string).collect::<Vec<_>>())
    }
}

/// A code generator and the files it writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generator {
    name: String,
    targets: Vec<String>,
}

impl Generator {
    pub fn new(name: impl Into<String>, targets: impl Into<Targets>) -> Self {
        Self { name: name.into(), targets: targets.into().into_vec() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }
}

/// One `org/name` entry under `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    org: String,
    name: String,
    version: String,
    generators: Vec<Generator>,
}

impl Project {
    pub fn new(
        org: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        generators: &[Generator],
    ) -> Self {
        Self {
            org: org.into(),
            name: name.into(),
            version: version.into(),
            generators: generators.to_vec(),
        }
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn generators(&self) -> &[Generator] {
        &self.generators
    }

    pub fn is_latest(&self) -> bool {
        self.version == LATEST_VERSION
    }

    /// Look up a generator by name.
    pub fn generator(&self, name: &str) -> Option<&Generator> {
        self.generators.iter().find(|g| g.name == name)
    }
}

/// The `code` section: every declared project, flattened across orgs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Code {
    projects: Vec<Project>,
}

impl Code {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, org: &str, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.org == org && p.name == name)
    }

    pub fn projects_for_org<'a>(&'a self, org: &'a str) -> impl Iterator<Item = &'a Project> + 'a {
        self.projects.iter().filter(move |p| p.org == org)
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Resolved application config for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    project_dir: PathBuf,
    config_path: PathBuf,
    code: Code,
}

impl AppConfig {
    pub fn new(project_dir: PathBuf, config_path: PathBuf, code: Code) -> Self {
        Self { project_dir, config_path, code }
    }

    /// Root of the codebase being configured.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// File this config was read from.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn code(&self) -> &Code {
        &self.code
    }
}
