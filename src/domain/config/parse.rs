//! Pure parse/validate for `.apibuilder/config` content.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use super::{AppConfig, Code, Generator, Project, Targets};
use crate::domain::AppError;
use crate::domain::paths::parse_project_dir;

/// Parse config content read from `config_path` into an [`AppConfig`].
///
/// Empty documents and a missing or null `code` key yield zero projects.
pub fn parse_config_content(content: &str, config_path: &Path) -> Result<AppConfig, AppError> {
    let document: Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::parse_error(config_path.display().to_string(), e))?;

    let dto: dto::ConfigDto = if document.is_null() {
        dto::ConfigDto::default()
    } else {
        serde_yaml::from_value(document)
            .map_err(|e| AppError::parse_error(config_path.display().to_string(), e))?
    };

    let code = match dto.code {
        Some(orgs) => parse_code(orgs)?,
        None => Code::default(),
    };

    Ok(AppConfig::new(parse_project_dir(config_path), config_path.to_path_buf(), code))
}

fn parse_code(orgs: Mapping) -> Result<Code, AppError> {
    let mut projects = Vec::new();

    for (org_key, org_value) in orgs {
        let org = scalar_key(&org_key, "code")?;
        let what = format!("code.{}", org);
        let org_projects = match org_value {
            Value::Mapping(mapping) => mapping,
            Value::Null => continue,
            _ => return Err(AppError::parse_error(what, "expected a mapping of project names")),
        };

        for (project_key, project_value) in org_projects {
            let name = scalar_key(&project_key, &what)?;
            let project_what = format!("{}.{}", what, name);
            projects.push(parse_project(&org, &name, project_value, &project_what)?);
        }
    }

    Ok(Code::new(projects))
}

fn parse_project(org: &str, name: &str, value: Value, what: &str) -> Result<Project, AppError> {
    let dto: dto::ProjectDto = serde_yaml::from_value(value).map_err(|e| {
        AppError::parse_error(
            what,
            format!("expected a mapping with version and generators ({})", e),
        )
    })?;

    let version = match dto.version {
        Some(dto::ScalarDto::Text(text)) => text,
        Some(dto::ScalarDto::Number(number)) => number.to_string(),
        None => return Err(AppError::parse_error(what, "missing version")),
    };

    let declared =
        dto.generators.ok_or_else(|| AppError::parse_error(what, "missing generators"))?;

    let mut generators = Vec::with_capacity(declared.len());
    for (key, value) in declared {
        let generators_what = format!("{}.generators", what);
        let generator_name = scalar_key(&key, &generators_what)?;
        let generator_what = format!("{}.{}", generators_what, generator_name);
        generators.push(Generator::new(generator_name, parse_targets(value, &generator_what)?));
    }

    Ok(Project::new(org, name, version, &generators))
}

fn parse_targets(value: Value, what: &str) -> Result<Targets, AppError> {
    let targets = match value {
        Value::String(target) => return Ok(Targets::from(target)),
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(target) => Ok(target),
                _ => Err(AppError::parse_error(what, "targets must be path strings")),
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => {
            return Err(AppError::parse_error(
                what,
                "expected a path string or a sequence of path strings",
            ));
        }
    };

    Targets::new(targets)
        .ok_or_else(|| AppError::parse_error(what, "at least one target is required"))
}

fn scalar_key(key: &Value, parent: &str) -> Result<String, AppError> {
    match key {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        _ => Err(AppError::parse_error(parent, "keys must be plain strings")),
    }
}

mod dto {
    use serde::Deserialize;
    use serde_yaml::Mapping;

    #[derive(Debug, Default, Deserialize)]
    pub struct ConfigDto {
        pub code: Option<Mapping>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ProjectDto {
        pub version: Option<ScalarDto>,
        pub generators: Option<Mapping>,
    }

    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    pub enum ScalarDto {
        Text(String),
        Number(serde_yaml::Number),
    }
}
