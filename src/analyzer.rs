//! Pipeline orchestration: one scan in, one snapshot out.
//!
//! Only root validation is fail-fast; everything downstream degrades
//! per-file, per-manifest or per-collaborator without aborting the run.
//! Each run owns its own snapshot; no state is shared between runs.

use crate::chunk::{self, ChunkRequest};
use crate::classify::{self, archetype, signatures::SignatureMatcher};
use crate::config::ScanConfig;
use crate::core::ProjectSnapshot;
use crate::io::walker::{TreeWalker, WalkedFile};
use crate::{deps, git, insights, quality};
use anyhow::Result;
use chrono::Utc;
use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal precondition failures. Raised before any snapshot exists.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("project path does not exist: {0}")]
    RootMissing(PathBuf),
    #[error("project path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

pub struct ProjectAnalyzer {
    root: PathBuf,
    config: ScanConfig,
}

impl ProjectAnalyzer {
    /// Validate the root path. This is the only fail-fast check in the
    /// pipeline.
    pub fn new(root: &Path, config: ScanConfig) -> Result<Self, SnapshotError> {
        if !root.exists() {
            return Err(SnapshotError::RootMissing(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(SnapshotError::NotADirectory(root.to_path_buf()));
        }
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run the full pipeline. In chunked mode only the requested slice of
    /// the (deterministically sorted) file list feeds the content-derived
    /// stages; dependency and git extraction always run against the root.
    pub fn analyze(&self, chunk_request: Option<ChunkRequest>) -> Result<ProjectSnapshot> {
        let project_name = self
            .root
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "project".to_string());
        let mut snapshot = ProjectSnapshot::new(&project_name, &self.root, Utc::now());

        info!("scanning {}", self.root.display());
        let outcome = TreeWalker::new(self.root.clone())
            .with_config(self.config.clone())
            .walk();
        let truncated = outcome.truncated;
        let total_found = outcome.files.len();

        let files = match chunk_request {
            Some(request) => {
                let page = chunk::paginate(outcome.files, request);
                snapshot.chunk_metadata = Some(page.state.metadata(page.items.len()));
                page.items
            }
            None => outcome.files,
        };
        info!("processing {} of {total_found} files", files.len());

        self.accumulate_files(&mut snapshot, &files);

        let corpus = build_corpus(&files);
        let matcher = SignatureMatcher::new()?;
        let stacks = matcher.detect(&corpus);
        info!("detected {} technologies", stacks.technologies.len());
        snapshot.technologies = stacks.technologies;
        snapshot.frameworks = stacks.frameworks;
        snapshot.languages = stacks.languages;
        snapshot.build_systems = stacks.build_systems;
        snapshot.testing_frameworks = stacks.testing_frameworks;

        let (dependencies, hints) = deps::extract(&self.root);
        snapshot.dependencies = dependencies;
        snapshot.setup_instructions = hints.setup_instructions;
        snapshot.run_commands = hints.run_commands;

        snapshot.git_info = git::collect(&self.root);

        let paths: Vec<String> = files.iter().map(|f| f.record.path.clone()).collect();
        snapshot.project_type = archetype::classify(&archetype::ArchetypeSignals {
            technologies: &snapshot.technologies,
            config_files: &snapshot.config_files,
            paths: &paths,
            project_name: &project_name,
        });
        info!("project type: {}", snapshot.project_type);

        let generated = insights::generate(&snapshot);
        snapshot.insights = generated.insights;
        snapshot.recommendations = generated.recommendations;
        snapshot.security_findings = generated.security_findings;
        snapshot.performance_insights = generated.performance_insights;

        if truncated {
            snapshot.insights.push(format!(
                "Scan truncated at {} files; totals cover the scanned subset",
                self.config.max_files
            ));
        }

        let (metrics, quality_recommendations) = quality::score(&quality::QualityInputs {
            has_tests: !snapshot.test_files.is_empty(),
            has_documentation: !snapshot.documentation_files.is_empty(),
            has_version_control: snapshot.git_info.is_git_repo,
            has_build_system: !snapshot.build_systems.is_empty(),
            manifest_count: snapshot.dependencies.len(),
            dependency_total: snapshot.total_dependency_count(),
            has_frameworks: !snapshot.frameworks.is_empty(),
            file_type_count: snapshot.file_types.len(),
            languages: snapshot.languages.clone(),
        });
        snapshot.code_quality_metrics = metrics;
        snapshot.recommendations.extend(quality_recommendations);

        Ok(snapshot)
    }

    /// Fold per-file data into the snapshot: totals, histogram, role lists
    /// and the file-structure map (text files only).
    fn accumulate_files(&self, snapshot: &mut ProjectSnapshot, files: &[WalkedFile]) {
        for file in files {
            snapshot.total_files += 1;
            *snapshot
                .file_types
                .entry(file.record.extension.clone())
                .or_insert(0) += 1;

            let file_name = file
                .record
                .path
                .rsplit('/')
                .next()
                .unwrap_or(&file.record.path);
            let roles = classify::classify(&file.record.path, file_name);
            if roles.is_config {
                snapshot.config_files.push(file.record.path.clone());
            }
            if roles.is_entry_point {
                snapshot.main_entry_points.push(file.record.path.clone());
            }
            if roles.is_test {
                snapshot.test_files.push(file.record.path.clone());
            }
            if roles.is_documentation {
                snapshot.documentation_files.push(file.record.path.clone());
            }

            if let Some(lines) = file.record.lines {
                snapshot.total_lines_of_code += lines;
                snapshot
                    .file_structure
                    .insert(file.record.path.clone(), file.record.clone());
            }
        }
    }
}

/// One aggregated haystack: every relative path plus every cached file body.
fn build_corpus(files: &[WalkedFile]) -> String {
    let mut corpus = String::new();
    for file in files {
        corpus.push_str(&file.record.path);
        corpus.push('\n');
    }
    for file in files {
        if let Some(content) = &file.content {
            corpus.push_str(content);
            corpus.push('\n');
        }
    }
    corpus
}
