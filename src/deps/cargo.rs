//! Rust manifest (`Cargo.toml`) parsing.

use super::CommandHints;
use crate::core::DependencyRecord;
use std::collections::BTreeMap;
use std::path::Path;

pub fn parse_cargo_toml(content: &str, _root: &Path, hints: &mut CommandHints) -> DependencyRecord {
    let value: toml::Value = match content.parse() {
        Ok(value) => value,
        Err(_) => return DependencyRecord::default(),
    };

    let record = DependencyRecord {
        dependencies: table_versions(value.get("dependencies")),
        dev_dependencies: table_versions(value.get("dev-dependencies")),
        ..DependencyRecord::default()
    }
    .with_count();

    hints.setup("cargo build");
    hints.run("cargo run");

    record
}

fn table_versions(table: Option<&toml::Value>) -> BTreeMap<String, String> {
    let Some(table) = table.and_then(|value| value.as_table()) else {
        return BTreeMap::new();
    };
    table
        .iter()
        .map(|(name, spec)| (name.clone(), version_of(spec)))
        .collect()
}

// Dependency specs are either `crate = "1.0"` or an inline table carrying a
// `version` key; path/git-only specs have no version at all.
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
