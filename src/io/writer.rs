//! Snapshot finalization, cross-chunk merging and atomic persistence.

use crate::core::ProjectSnapshot;
use anyhow::{Context, Result};
use chrono::Utc;
use log::warn;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;

/// Refresh the modification timestamps and dedupe the list-valued fields
/// that accumulate across pipeline stages, preserving first-seen order.
pub fn finalize(snapshot: &mut ProjectSnapshot) {
    let now = Utc::now();
    snapshot.last_modified = now;
    snapshot.last_analyzed = now;

    dedupe_preserving_order(&mut snapshot.recommendations);
    dedupe_preserving_order(&mut snapshot.setup_instructions);
    dedupe_preserving_order(&mut snapshot.run_commands);
    dedupe_preserving_order(&mut snapshot.config_files);
    dedupe_preserving_order(&mut snapshot.test_files);
    dedupe_preserving_order(&mut snapshot.documentation_files);
}

/// Read a previously written snapshot artifact back into memory.
pub fn read_snapshot(path: &Path) -> Result<ProjectSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot at {}", path.display()))
}

/// Fold a chunk's snapshot into the artifact already on disk. When no prior
/// artifact exists (or it cannot be parsed) the page stands alone, so a
/// resumed scan degrades instead of aborting.
pub fn accumulate(path: &Path, page: ProjectSnapshot) -> ProjectSnapshot {
    match read_snapshot(path) {
        Ok(mut base) => {
            merge(&mut base, page);
            base
        }
        Err(err) => {
            warn!("no prior chunk artifact to merge into ({err:#}); starting fresh");
            page
        }
    }
}

/// Serialize the snapshot as pretty JSON, writing to a temporary file in the
/// destination directory and renaming into place so a partially written
/// artifact is never observable.
pub fn write_snapshot(snapshot: &ProjectSnapshot, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    serde_json::to_writer_pretty(&mut tmp, snapshot).context("failed to serialize snapshot")?;
    tmp.persist(path)
        .with_context(|| format!("failed to persist snapshot to {}", path.display()))?;
    Ok(())
}

/// Fold a later chunk's snapshot into an accumulated one. Counts add, sets
/// union, maps extend; scalar judgements (archetype, quality, AI fields)
/// take the newest chunk's values.
pub fn merge(base: &mut ProjectSnapshot, next: ProjectSnapshot) {
    base.total_files += next.total_files;
    base.total_lines_of_code += next.total_lines_of_code;

    for (ext, count) in next.file_types {
        *base.file_types.entry(ext).or_insert(0) += count;
    }
    base.file_structure.extend(next.file_structure);
    base.dependencies = next.dependencies;

    merge_sorted_set(&mut base.technologies, next.technologies);
    merge_sorted_set(&mut base.frameworks, next.frameworks);
    merge_sorted_set(&mut base.languages, next.languages);
    merge_sorted_set(&mut base.build_systems, next.build_systems);
    merge_sorted_set(&mut base.testing_frameworks, next.testing_frameworks);

    append_unique(&mut base.main_entry_points, next.main_entry_points);
    append_unique(&mut base.config_files, next.config_files);
    append_unique(&mut base.test_files, next.test_files);
    append_unique(&mut base.documentation_files, next.documentation_files);
    append_unique(&mut base.insights, next.insights);
    append_unique(&mut base.recommendations, next.recommendations);
    append_unique(&mut base.security_findings, next.security_findings);
    append_unique(&mut base.performance_insights, next.performance_insights);
    append_unique(&mut base.setup_instructions, next.setup_instructions);
    append_unique(&mut base.run_commands, next.run_commands);

    base.project_type = next.project_type;
    base.code_quality_metrics = next.code_quality_metrics;
    base.git_info = next.git_info;
    base.ai_summary = next.ai_summary;
    base.ai_architecture_analysis = next.ai_architecture_analysis;
    base.ai_security_assessment = next.ai_security_assessment;
    base.ai_performance_analysis = next.ai_performance_analysis;
    base.last_modified = next.last_modified;
    base.last_analyzed = next.last_analyzed;
    base.chunk_metadata = next.chunk_metadata;
}

fn merge_sorted_set(base: &mut Vec<String>, extra: Vec<String>) {
    base.extend(extra);
    base.sort();
    base.dedup();
}

fn append_unique(base: &mut Vec<String>, extra: Vec<String>) {
    for item in extra {
        if !base.contains(&item) {
            base.push(item);
        }
    }
}

fn dedupe_preserving_order(items: &mut Vec<String>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}
