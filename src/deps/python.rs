//! Python manifest parsing: pinned requirements and project metadata.

use super::{split_requirement, CommandHints};
use crate::core::DependencyRecord;
use std::collections::BTreeMap;
use std::path::Path;

pub fn parse_requirements(content: &str, root: &Path, hints: &mut CommandHints) -> DependencyRecord {
    let dependencies: BTreeMap<String, String> =
        content.lines().filter_map(split_requirement).collect();

    hints.setup("python -m venv venv");
    hints.setup("pip install -r requirements.txt");
    if root.join("app.py").is_file() {
        hints.run("python app.py");
    }
    if root.join("main.py").is_file() {
        hints.run("python main.py");
    }

    DependencyRecord {
        dependencies,
        ..DependencyRecord::default()
    }
    .with_count()
}

/// Handles both poetry (`[tool.poetry.dependencies]`) and PEP 621
/// (`[project] dependencies = [...]`) layouts.
pub fn parse_pyproject(content: &str, _root: &Path, hints: &mut CommandHints) -> DependencyRecord {
    let value: toml::Value = match content.parse() {
        Ok(value) => value,
        Err(_) => return DependencyRecord::default(),
    };

    let mut dependencies = BTreeMap::new();

    if let Some(poetry_deps) = value
        .get("tool")
        .and_then(|tool| tool.get("poetry"))
        .and_then(|poetry| poetry.get("dependencies"))
        .and_then(|deps| deps.as_table())
    {
        for (name, spec) in poetry_deps {
            dependencies.insert(name.clone(), version_of(spec));
        }
        hints.setup("poetry install");
    } else if let Some(project_deps) = value
        .get("project")
        .and_then(|project| project.get("dependencies"))
        .and_then(|deps| deps.as_array())
    {
        for entry in project_deps {
            if let Some((name, version)) = entry.as_str().and_then(split_requirement) {
                dependencies.insert(name, version);
            }
        }
        hints.setup("pip install -e .");
    }

    DependencyRecord {
        dependencies,
        ..DependencyRecord::default()
    }
    .with_count()
}

fn version_of(spec: &toml::Value) -> String {
    match spec {
        toml::Value::String(version) => version.clone(),
        toml::Value::Table(table) => table
            .get("version")
            .and_then(|v| v.as_str())
            .unwrap_or("latest")
            .to_string(),
        _ => "latest".to_string(),
    }
}
