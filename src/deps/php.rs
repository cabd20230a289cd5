//! PHP composer manifest (`composer.json`) parsing.

use super::CommandHints;
use crate::core::DependencyRecord;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

pub fn parse_composer(content: &str, _root: &Path, hints: &mut CommandHints) -> DependencyRecord {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(_) => return DependencyRecord::default(),
    };

    let record = DependencyRecord {
        dependencies: string_map(&value["require"]),
        dev_dependencies: string_map(&value["require-dev"]),
        ..DependencyRecord::default()
    }
    .with_count();

    if !record.is_empty() {
        hints.setup("composer install");
    }

    record
}

fn string_map(value: &Value) -> BTreeMap<String, String> {
    value
        .as_object()
        .map(|object| {
            object
                .iter()
                .filter_map(|(key, val)| val.as_str().map(|s| (key.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_require_and_require_dev() {
        let content = r#"{
            "require": {"php": ">=8.1", "laravel/framework": "^10.0"},
            "require-dev": {"phpunit/phpunit": "^10.0"}
        }"#;
        let mut hints = CommandHints::default();
        let record = parse_composer(content, Path::new("."), &mut hints);

        assert_eq!(record.total_count, 3);
        assert_eq!(record.dependencies["laravel/framework"], "^10.0");
        assert_eq!(record.dev_dependencies["phpunit/phpunit"], "^10.0");
        assert_eq!(hints.setup_instructions, vec!["composer install".to_string()]);
    }

    #[test]
    fn invalid_json_is_empty() {
        let mut hints = CommandHints::default();
        let record = parse_composer("not json", Path::new("."), &mut hints);
        assert_eq!(record, DependencyRecord::default());
    }
}
