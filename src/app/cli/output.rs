use std::fmt::Write;

use clap::ValueEnum;

use crate::domain::{AppConfig, AppError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Render the projects of a config for display.
pub fn render_projects(config: &AppConfig, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => {
            let mut rendered = serde_json::to_string_pretty(config)?;
            rendered.push('\n');
            Ok(rendered)
        }
        OutputFormat::Text => Ok(render_text(config)),
    }
}

fn render_text(config: &AppConfig) -> String {
    let mut out = String::new();
    for project in config.code().projects() {
        let _ = writeln!(out, "{}/{}@{}", project.org(), project.name(), project.version());
        for generator in project.generators() {
            for target in generator.targets() {
                let _ = writeln!(out, "  {} -> {}", generator.name(), target);
            }
        }
    }
    out
}
