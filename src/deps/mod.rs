//! Multi-ecosystem dependency extraction.
//!
//! A registry maps manifest file names to parsers. Parsers uphold a
//! never-fail contract: any malformed manifest yields an empty
//! [`DependencyRecord`] so one broken file cannot abort the pipeline.

pub mod cargo;
pub mod gomod;
pub mod java;
pub mod javascript;
pub mod php;
pub mod python;
pub mod ruby;

use crate::core::DependencyRecord;
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::Path;

/// Setup-instruction and run-command hints accumulated while parsing
/// manifests, in ecosystem-idiomatic form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandHints {
    pub setup_instructions: Vec<String>,
    pub run_commands: Vec<String>,
}

impl CommandHints {
    pub fn setup(&mut self, command: &str) {
        self.setup_instructions.push(command.to_string());
    }

    pub fn run(&mut self, command: &str) {
        self.run_commands.push(command.to_string());
    }
}

type ParserFn = fn(content: &str, root: &Path, hints: &mut CommandHints) -> DependencyRecord;

/// Manifest registry in fixed order; keys double as the snapshot's
/// `dependencies` map keys.
static REGISTRY: &[(&str, ParserFn)] = &[
    ("package.json", javascript::parse_package_json),
    ("requirements.txt", python::parse_requirements),
    ("pyproject.toml", python::parse_pyproject),
    ("Gemfile", ruby::parse_gemfile),
    ("composer.json", php::parse_composer),
    ("pom.xml", java::parse_pom),
    ("build.gradle", java::parse_gradle),
    ("Cargo.toml", cargo::parse_cargo_toml),
    ("go.mod", gomod::parse_go_mod),
];

/// Parse every manifest present at the project root. A manifest that is
/// absent simply contributes nothing; one that exists but cannot be read or
/// parsed contributes an empty record.
pub fn extract(root: &Path) -> (BTreeMap<String, DependencyRecord>, CommandHints) {
    let mut records = BTreeMap::new();
    let mut hints = CommandHints::default();

    for (manifest, parser) in REGISTRY {
        let path = root.join(manifest);
        if !path.is_file() {
            continue;
        }
        let record = match std::fs::read_to_string(&path) {
            Ok(content) => parser(&content, root, &mut hints),
            Err(err) => {
                debug!("cannot read manifest {}: {err}", path.display());
                DependencyRecord::default()
            }
        };
        info!("{manifest}: {} dependencies", record.total_count);
        records.insert(manifest.to_string(), record);
    }

    (records, hints)
}

/// Normalize one requirement line in pip style: `==` pins, `>=` keeps the
/// bound, anything else means "latest".
pub(crate) fn split_requirement(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if let Some((name, version)) = line.split_once("==") {
        Some((name.trim().to_string(), version.trim().to_string()))
    } else if let Some((name, version)) = line.split_once(">=") {
        Some((name.trim().to_string(), format!(">={}", version.trim())))
    } else {
        Some((line.to_string(), "latest".to_string()))
    }
}
