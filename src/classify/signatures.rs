//! Declarative technology signatures and the matcher that evaluates them
//! against the aggregated scan corpus.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

/// A named technology with an ordered pattern list. Patterns are tried in
/// order and the first hit marks the technology detected; there is no
/// per-pattern scoring.
pub struct TechnologySignature {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TechCategory {
    FrontendFramework,
    BackendFramework,
    Language,
    BuildTool,
    TestingTool,
    Other,
}

/// All detected stacks derived from a single matching pass, each sorted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectedStacks {
    pub technologies: Vec<String>,
    pub frameworks: Vec<String>,
    pub languages: Vec<String>,
    pub build_systems: Vec<String>,
    pub testing_frameworks: Vec<String>,
}

pub static SIGNATURES: &[TechnologySignature] = &[
    // Frontend frameworks
    TechnologySignature { name: "React", patterns: &[r"import.*react", r#""react":"#, r"useState", r"useEffect"] },
    TechnologySignature { name: "Vue.js", patterns: &[r"import.*vue", r#""vue":"#, r"<template>", r"v-if", r"v-for"] },
    TechnologySignature { name: "Angular", patterns: &[r"@angular", r"angular\.json", r"@Component"] },
    TechnologySignature { name: "Svelte", patterns: &[r"\.svelte$", r"svelte"] },
    TechnologySignature { name: "Next.js", patterns: &[r"next\.config", r"getStaticProps", r"getServerSideProps"] },
    // Backend frameworks
    TechnologySignature { name: "Express.js", patterns: &[r#""express":"#, r"app\.listen", r"express\(\)"] },
    TechnologySignature { name: "Django", patterns: &[r"django", r"models\.Model", r"settings\.py", r"urls\.py"] },
    TechnologySignature { name: "Flask", patterns: &[r"from flask", r"Flask\(__name__\)", r"@app\.route"] },
    TechnologySignature { name: "FastAPI", patterns: &[r"from fastapi", r"FastAPI\(\)", r"@app\.get"] },
    TechnologySignature { name: "Spring Framework", patterns: &[r"@SpringBootApplication", r"@Controller", r"spring-boot"] },
    // Languages
    TechnologySignature { name: "JavaScript", patterns: &[r"\.js$", r"\.mjs$", r"function ", r"const "] },
    TechnologySignature { name: "TypeScript", patterns: &[r"\.ts$", r"\.tsx$", r"interface ", r"type "] },
    TechnologySignature { name: "Python", patterns: &[r"\.py$", r"def ", r"import "] },
    TechnologySignature { name: "Java", patterns: &[r"\.java$", r"public class", r"import java"] },
    TechnologySignature { name: "C#", patterns: &[r"\.cs$", r"using System", r"namespace "] },
    TechnologySignature { name: "C++", patterns: &[r"\.cpp$", r"\.hpp$", r"#include <", r"std::"] },
    TechnologySignature { name: "Go", patterns: &[r"\.go$", r"package main", r#"import ""#] },
    TechnologySignature { name: "Rust", patterns: &[r"\.rs$", r"Cargo\.toml", r"fn main"] },
    TechnologySignature { name: "PHP", patterns: &[r"\.php$", r"<\?php"] },
    TechnologySignature { name: "Ruby", patterns: &[r"\.rb$", r"Gemfile", r"require "] },
    // Databases
    TechnologySignature { name: "PostgreSQL", patterns: &[r"postgresql", r"psql", r"pg_"] },
    TechnologySignature { name: "MySQL", patterns: &[r"mysql", r"CREATE TABLE"] },
    TechnologySignature { name: "MongoDB", patterns: &[r"mongodb", r"mongoose"] },
    TechnologySignature { name: "Redis", patterns: &[r"redis", r"REDIS_URL"] },
    TechnologySignature { name: "SQLite", patterns: &[r"sqlite", r"\.db$"] },
    // Infrastructure
    TechnologySignature { name: "Docker", patterns: &[r"Dockerfile", r"docker-compose", r"FROM "] },
    TechnologySignature { name: "Kubernetes", patterns: &[r"apiVersion:", r"kubectl"] },
    // Testing
    TechnologySignature { name: "Jest", patterns: &[r"jest", r"describe\(", r"it\("] },
    TechnologySignature { name: "Mocha", patterns: &[r"mocha"] },
    TechnologySignature { name: "PyTest", patterns: &[r"pytest", r"test_"] },
    // Build tools
    TechnologySignature { name: "Webpack", patterns: &[r"webpack"] },
    TechnologySignature { name: "Vite", patterns: &[r"vite"] },
    TechnologySignature { name: "npm", patterns: &[r"package\.json", r"package-lock\.json"] },
    TechnologySignature { name: "Yarn", patterns: &[r"yarn\.lock"] },
    TechnologySignature { name: "pip", patterns: &[r"requirements\.txt"] },
    TechnologySignature { name: "Maven", patterns: &[r"pom\.xml"] },
    TechnologySignature { name: "Gradle", patterns: &[r"build\.gradle"] },
    TechnologySignature { name: "Make", patterns: &[r"Makefile"] },
    TechnologySignature { name: "Cargo", patterns: &[r"Cargo\.toml"] },
];

// Category buckets checked in this fixed precedence order; the first bucket
// naming a technology wins, so no technology lands in two buckets.
static FRONTEND_FRAMEWORKS: &[&str] = &["React", "Vue.js", "Angular", "Svelte", "Next.js"];
static BACKEND_FRAMEWORKS: &[&str] =
    &["Express.js", "Django", "Flask", "FastAPI", "Spring Framework"];
static LANGUAGES: &[&str] = &[
    "JavaScript", "TypeScript", "Python", "Java", "C#", "C++", "Go", "Rust", "PHP", "Ruby",
];
static BUILD_TOOLS: &[&str] = &[
    "Webpack", "Vite", "npm", "Yarn", "pip", "Maven", "Gradle", "Make", "Cargo",
];
static TESTING_TOOLS: &[&str] = &["Jest", "Mocha", "PyTest"];

pub fn category_of(name: &str) -> TechCategory {
    static PRECEDENCE: &[(&[&str], TechCategory)] = &[
        (FRONTEND_FRAMEWORKS, TechCategory::FrontendFramework),
        (BACKEND_FRAMEWORKS, TechCategory::BackendFramework),
        (LANGUAGES, TechCategory::Language),
        (BUILD_TOOLS, TechCategory::BuildTool),
        (TESTING_TOOLS, TechCategory::TestingTool),
    ];

    PRECEDENCE
        .iter()
        .find(|(names, _)| names.contains(&name))
        .map(|(_, category)| *category)
        .unwrap_or(TechCategory::Other)
}

/// Signature evaluator with all patterns compiled up front.
///
/// A malformed pattern is a configuration error: construction fails instead
/// of a signature silently dropping out of a later scan.
pub struct SignatureMatcher {
    compiled: Vec<(&'static str, Vec<Regex>)>,
}

impl SignatureMatcher {
    pub fn new() -> Result<Self> {
        let mut compiled = Vec::with_capacity(SIGNATURES.len());
        for signature in SIGNATURES {
            let mut regexes = Vec::with_capacity(signature.patterns.len());
            for pattern in signature.patterns {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .multi_line(true)
                    .build()
                    .with_context(|| {
                        format!("invalid pattern {pattern:?} for signature {}", signature.name)
                    })?;
                regexes.push(regex);
            }
            compiled.push((signature.name, regexes));
        }
        Ok(Self { compiled })
    }

    /// Evaluate every signature against the corpus and bucket the hits by
    /// category. Each signature short-circuits on its first matching pattern.
    pub fn detect(&self, corpus: &str) -> DetectedStacks {
        let mut technologies = BTreeSet::new();
        let mut frameworks = BTreeSet::new();
        let mut languages = BTreeSet::new();
        let mut build_systems = BTreeSet::new();
        let mut testing_frameworks = BTreeSet::new();

        for (name, regexes) in &self.compiled {
            if !regexes.iter().any(|regex| regex.is_match(corpus)) {
                continue;
            }
            technologies.insert(name.to_string());
            match category_of(name) {
                TechCategory::FrontendFramework | TechCategory::BackendFramework => {
                    frameworks.insert(name.to_string());
                }
                TechCategory::Language => {
                    languages.insert(name.to_string());
                }
                TechCategory::BuildTool => {
                    build_systems.insert(name.to_string());
                }
                TechCategory::TestingTool => {
                    testing_frameworks.insert(name.to_string());
                }
                TechCategory::Other => {}
            }
        }

        DetectedStacks {
            technologies: technologies.into_iter().collect(),
            frameworks: frameworks.into_iter().collect(),
            languages: languages.into_iter().collect(),
            build_systems: build_systems.into_iter().collect(),
            testing_frameworks: testing_frameworks.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_builtin_patterns_compile() {
        SignatureMatcher::new().unwrap();
    }

    #[test]
    fn express_detected_from_manifest_and_listen_call() {
        let matcher = SignatureMatcher::new().unwrap();
        let corpus = r#" package.json server.js {"dependencies":{"express":"^4.0.0"}} app.listen(3000) "#;
        let stacks = matcher.detect(corpus);
        assert!(stacks.technologies.contains(&"Express.js".to_string()));
        assert!(stacks.frameworks.contains(&"Express.js".to_string()));
        assert!(stacks.build_systems.contains(&"npm".to_string()));
    }

    #[test]
    fn categories_are_disjoint_buckets() {
        let matcher = SignatureMatcher::new().unwrap();
        let stacks = matcher.detect(" main.rs Cargo.toml fn main ");
        assert!(stacks.languages.contains(&"Rust".to_string()));
        assert!(stacks.build_systems.contains(&"Cargo".to_string()));
        assert!(!stacks.frameworks.contains(&"Rust".to_string()));
        // Every bucketed name also appears in the overall set.
        for name in stacks.languages.iter().chain(&stacks.build_systems) {
            assert!(stacks.technologies.contains(name));
        }
    }

    #[test]
    fn detected_sets_are_sorted() {
        let matcher = SignatureMatcher::new().unwrap();
        let stacks = matcher.detect(" webpack vite yarn.lock package.json ");
        let mut sorted = stacks.build_systems.clone();
        sorted.sort();
        assert_eq!(stacks.build_systems, sorted);
    }

    #[test]
    fn empty_corpus_detects_nothing() {
        let matcher = SignatureMatcher::new().unwrap();
        assert_eq!(matcher.detect(""), DetectedStacks::default());
    }

    #[test]
    fn uncategorized_technology_still_recorded() {
        let matcher = SignatureMatcher::new().unwrap();
        let stacks = matcher.detect(" docker-compose.yml ");
        assert!(stacks.technologies.contains(&"Docker".to_string()));
        assert!(stacks.frameworks.is_empty());
    }
}
