//! Ruby bundler manifest (`Gemfile`) parsing.

use super::CommandHints;
use crate::core::DependencyRecord;
use std::collections::BTreeMap;
use std::path::Path;

pub fn parse_gemfile(content: &str, _root: &Path, hints: &mut CommandHints) -> DependencyRecord {
    let mut dependencies = BTreeMap::new();

    for line in content.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("gem ") else {
            continue;
        };
        let mut parts = rest.split(',').map(str::trim);
        let Some(name) = parts.next().map(unquote) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        // A second quoted argument is a version constraint; anything else
        // (e.g. `require:`, `group:`) means unpinned.
        let version = parts
            .next()
            .map(unquote)
            .filter(|v| !v.is_empty() && !v.contains(':'))
            .unwrap_or_else(|| "latest".to_string());
        dependencies.insert(name, version);
    }

    if !dependencies.is_empty() {
        hints.setup("bundle install");
    }

    DependencyRecord {
        dependencies,
        ..DependencyRecord::default()
    }
    .with_count()
}

fn unquote(token: &str) -> String {
    token.trim_matches(|c| c == '\'' || c == '"').to_string()
}
