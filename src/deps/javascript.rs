//! JavaScript package manifest (`package.json`) parsing.

use super::CommandHints;
use crate::core::DependencyRecord;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

pub fn parse_package_json(content: &str, _root: &Path, hints: &mut CommandHints) -> DependencyRecord {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(_) => return DependencyRecord::default(),
    };

    let record = DependencyRecord {
        dependencies: string_map(&value["dependencies"]),
        dev_dependencies: string_map(&value["devDependencies"]),
        scripts: string_map(&value["scripts"]),
        total_count: 0,
    }
    .with_count();

    if record.scripts.contains_key("start") {
        hints.run("npm start");
    }
    if record.scripts.contains_key("dev") {
        hints.run("npm run dev");
    }
    if record.scripts.contains_key("build") {
        hints.setup("npm run build");
    }
    hints.setup("npm install");

    record
}

fn string_map(value: &Value) -> BTreeMap<String, String> {
    value
        .as_object()
        .map(|object| {
            object
                .iter()
                .filter_map(|(key, val)| {
                    val.as_str().map(|s| (key.clone(), s.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}
