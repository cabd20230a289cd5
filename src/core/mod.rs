//! Core data model shared across the analysis pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Metadata for a single scanned file, keyed by relative path in the
/// snapshot's `fileStructure` map.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FileRecord {
    #[serde(skip)]
    pub path: String,
    pub size: u64,
    pub lines: Option<usize>,
    pub extension: String,
    pub language: String,
    pub modified: Option<DateTime<Utc>>,
}

/// Normalized dependency data for one manifest file.
///
/// Version constraints are either an exact pin, a `>=` lower bound, or the
/// literal `"latest"` when the manifest leaves the version unspecified.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DependencyRecord {
    pub dependencies: BTreeMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: BTreeMap<String, String>,
    pub total_count: usize,
}

impl DependencyRecord {
    /// Recompute `total_count` from the dependency and dev-dependency maps.
    pub fn with_count(mut self) -> Self {
        self.total_count = self.dependencies.len() + self.dev_dependencies.len();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty() && self.scripts.is_empty()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub overall_score: f64,
    pub factors: BTreeMap<String, bool>,
    pub complexity: u32,
}

impl Default for QualityMetrics {
    fn default() -> Self {
        Self {
            overall_score: 0.0,
            factors: BTreeMap::new(),
            complexity: 0,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GitInfo {
    pub is_git_repo: bool,
    pub branch_count: usize,
    pub commit_count: usize,
    pub last_commit: String,
}

/// Progress metadata attached to a snapshot produced in chunked mode.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChunkMetadata {
    pub files_in_chunk: usize,
    pub completion_percentage: u32,
    pub total_files_found: usize,
    pub has_more_chunks: bool,
}

/// Serializable cursor describing where a chunked scan stands.
///
/// Re-requesting the same `(chunk_index, chunk_size)` on an unchanged tree
/// returns the identical file subset; the walker's lexicographic ordering is
/// what makes this hold.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChunkState {
    pub chunk_index: usize,
    pub chunk_size: usize,
    pub files_processed: usize,
    pub total_estimate: usize,
    pub completion_percentage: u32,
    pub has_more: bool,
}

impl ChunkState {
    pub fn metadata(&self, files_in_chunk: usize) -> ChunkMetadata {
        ChunkMetadata {
            files_in_chunk,
            completion_percentage: self.completion_percentage,
            total_files_found: self.total_estimate,
            has_more_chunks: self.has_more,
        }
    }
}

/// The aggregate analysis artifact for one project scan.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub version: String,
    pub project_id: String,
    pub project_name: String,
    pub project_path: String,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub last_analyzed: DateTime<Utc>,

    pub technologies: Vec<String>,
    pub frameworks: Vec<String>,
    pub languages: Vec<String>,
    pub total_files: usize,
    pub total_lines_of_code: usize,
    pub file_types: BTreeMap<String, usize>,
    pub dependencies: BTreeMap<String, DependencyRecord>,

    pub project_type: String,
    pub main_entry_points: Vec<String>,
    pub config_files: Vec<String>,
    pub test_files: Vec<String>,
    pub documentation_files: Vec<String>,
    pub build_systems: Vec<String>,
    pub testing_frameworks: Vec<String>,

    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub security_findings: Vec<String>,
    pub performance_insights: Vec<String>,
    pub code_quality_metrics: QualityMetrics,

    pub ai_summary: String,
    pub ai_architecture_analysis: String,
    pub ai_security_assessment: String,
    pub ai_performance_analysis: String,

    pub setup_instructions: Vec<String>,
    pub run_commands: Vec<String>,
    pub file_structure: BTreeMap<String, FileRecord>,
    pub git_info: GitInfo,

    #[serde(rename = "chunk_metadata", skip_serializing_if = "Option::is_none")]
    pub chunk_metadata: Option<ChunkMetadata>,
}

impl ProjectSnapshot {
    pub fn new(name: &str, path: &Path, now: DateTime<Utc>) -> Self {
        Self {
            version: "1.0".to_string(),
            project_id: name.to_string(),
            project_name: name.to_string(),
            project_path: path.display().to_string(),
            created_at: now,
            last_modified: now,
            last_analyzed: now,
            technologies: Vec::new(),
            frameworks: Vec::new(),
            languages: Vec::new(),
            total_files: 0,
            total_lines_of_code: 0,
            file_types: BTreeMap::new(),
            dependencies: BTreeMap::new(),
            project_type: String::new(),
            main_entry_points: Vec::new(),
            config_files: Vec::new(),
            test_files: Vec::new(),
            documentation_files: Vec::new(),
            build_systems: Vec::new(),
            testing_frameworks: Vec::new(),
            insights: Vec::new(),
            recommendations: Vec::new(),
            security_findings: Vec::new(),
            performance_insights: Vec::new(),
            code_quality_metrics: QualityMetrics::default(),
            ai_summary: String::new(),
            ai_architecture_analysis: String::new(),
            ai_security_assessment: String::new(),
            ai_performance_analysis: String::new(),
            setup_instructions: Vec::new(),
            run_commands: Vec::new(),
            file_structure: BTreeMap::new(),
            git_info: GitInfo::default(),
            chunk_metadata: None,
        }
    }

    /// Sum of per-manifest dependency counts across all ecosystems.
    pub fn total_dependency_count(&self) -> usize {
        self.dependencies.values().map(|d| d.total_count).sum()
    }
}

/// Map a lower-cased file extension (with leading dot) to a display language.
pub fn language_for_extension(ext: &str) -> &'static str {
    static LANGUAGE_MAP: &[(&str, &str)] = &[
        (".js", "JavaScript"),
        (".mjs", "JavaScript"),
        (".cjs", "JavaScript"),
        (".jsx", "JavaScript"),
        (".ts", "TypeScript"),
        (".tsx", "TypeScript"),
        (".py", "Python"),
        (".java", "Java"),
        (".cpp", "C++"),
        (".cc", "C++"),
        (".hpp", "C++"),
        (".c", "C"),
        (".h", "C/C++"),
        (".cs", "C#"),
        (".php", "PHP"),
        (".rb", "Ruby"),
        (".go", "Go"),
        (".rs", "Rust"),
        (".swift", "Swift"),
        (".kt", "Kotlin"),
        (".scala", "Scala"),
        (".css", "CSS"),
        (".scss", "SCSS"),
        (".sass", "Sass"),
        (".less", "Less"),
        (".html", "HTML"),
        (".htm", "HTML"),
        (".xml", "XML"),
        (".svg", "SVG"),
        (".json", "JSON"),
        (".yaml", "YAML"),
        (".yml", "YAML"),
        (".toml", "TOML"),
        (".sql", "SQL"),
        (".sh", "Shell"),
        (".bat", "Batch"),
        (".ps1", "PowerShell"),
        (".md", "Markdown"),
    ];

    LANGUAGE_MAP
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, lang)| *lang)
        .unwrap_or("Unknown")
}
