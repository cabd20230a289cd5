//! Go module file (`go.mod`) parsing.

use super::CommandHints;
use crate::core::DependencyRecord;
use std::collections::BTreeMap;
use std::path::Path;

/// Handles both single-line `require module v1.2.3` statements and
/// multi-line `require ( ... )` blocks.
pub fn parse_go_mod(content: &str, _root: &Path, hints: &mut CommandHints) -> DependencyRecord {
    let mut dependencies = BTreeMap::new();
    let mut in_block = false;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with("require (") {
            in_block = true;
            continue;
        }
        if in_block {
            if line.starts_with(')') {
                in_block = false;
                continue;
            }
            insert_requirement(&mut dependencies, line);
        } else if let Some(rest) = line.strip_prefix("require ") {
            insert_requirement(&mut dependencies, rest);
        }
    }

    hints.setup("go mod download");
    hints.run("go run main.go");

    DependencyRecord {
        dependencies,
        ..DependencyRecord::default()
    }
    .with_count()
}

fn insert_requirement(dependencies: &mut BTreeMap<String, String>, line: &str) {
    let mut parts = line.split_whitespace();
    if let (Some(module), Some(version)) = (parts.next(), parts.next()) {
        dependencies.insert(module.to_string(), version.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_single_line_and_block_requires() {
        let content = r#"
module example.com/demo

go 1.21

require github.com/gorilla/mux v1.8.0

require (
    github.com/spf13/cobra v1.8.0
    golang.org/x/sync v0.5.0 // indirect
)
"#;
        let mut hints = CommandHints::default();
        let record = parse_go_mod(content, Path::new("."), &mut hints);

        assert_eq!(record.total_count, 3);
        assert_eq!(record.dependencies["github.com/gorilla/mux"], "v1.8.0");
        assert_eq!(record.dependencies["golang.org/x/sync"], "v0.5.0");
        assert_eq!(hints.setup_instructions, vec!["go mod download".to_string()]);
    }

    #[test]
    fn empty_file_is_empty_record() {
        let mut hints = CommandHints::default();
        let record = parse_go_mod("module x\n", Path::new("."), &mut hints);
        assert!(record.dependencies.is_empty());
    }
}
