//! Scan configuration with conservative defaults for unattended runs.

/// Tunable limits and filters applied during directory traversal.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    /// Names pruned from traversal. Directories are matched exactly; files
    /// are skipped when their name merely *contains* one of these tokens.
    /// The containment check is deliberately loose and can over-match
    /// (e.g. `template.py` contains `temp`); known limitation.
    pub ignore_names: Vec<String>,
    /// Directory levels below the root beyond which subtrees are pruned.
    pub max_depth: usize,
    /// Hard cap on scanned files; exceeding it truncates the walk.
    pub max_files: usize,
    /// Per-file size cap for content caching, in bytes. Larger files keep
    /// their metadata but are excluded from the analysis corpus.
    pub max_content_bytes: u64,
    /// Extensions (lower-case, with leading dot) whose content is cached
    /// for signature matching and line counting.
    pub text_extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_names: DEFAULT_IGNORE_NAMES.iter().map(|s| s.to_string()).collect(),
            max_depth: 6,
            max_files: 5000,
            max_content_bytes: 1024 * 1024,
            text_extensions: DEFAULT_TEXT_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ScanConfig {
    pub fn is_text_extension(&self, ext: &str) -> bool {
        self.text_extensions.iter().any(|e| e == ext)
    }

    /// Files with no useful extension that still carry analyzable text.
    pub fn is_text_filename(&self, name: &str) -> bool {
        matches!(
            name.to_lowercase().as_str(),
            "dockerfile" | "makefile" | "rakefile" | "gemfile"
        )
    }
}

static DEFAULT_IGNORE_NAMES: &[&str] = &[
    "node_modules",
    ".git",
    "__pycache__",
    ".venv",
    "venv",
    "env",
    "dist",
    "build",
    ".next",
    "target",
    "bin",
    "obj",
    "out",
    ".idea",
    ".vscode",
    ".vs",
    ".nyc_output",
    "coverage",
    "site-packages",
    "logs",
    "tmp",
    ".tmp",
    "uploads",
    ".pytest_cache",
    // The tool's own artifact; scanning it would shift chunk boundaries
    // between runs.
    "insightsproject.json",
];

static DEFAULT_TEXT_EXTENSIONS: &[&str] = &[
    ".js", ".ts", ".jsx", ".tsx", ".py", ".java", ".cpp", ".c", ".h", ".cs", ".php", ".rb",
    ".go", ".rs", ".swift", ".kt", ".scala", ".css", ".scss", ".sass", ".less", ".html",
    ".htm", ".xml", ".svg", ".json", ".md", ".txt", ".yaml", ".yml", ".toml", ".ini",
    ".conf", ".config", ".sql", ".sh", ".bat", ".ps1", ".cmd", ".dockerfile", ".vue",
    ".svelte", ".elm", ".clj", ".hs", ".ml", ".fs", ".dart", ".r", ".jl", ".lua", ".pl",
    ".tex", ".rst", ".adoc",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_common_build_artifacts() {
        let config = ScanConfig::default();
        assert!(config.ignore_names.iter().any(|n| n == "node_modules"));
        assert!(config.ignore_names.iter().any(|n| n == "target"));
        assert!(config.ignore_names.iter().any(|n| n == "insightsproject.json"));
        assert_eq!(config.max_files, 5000);
    }

    #[test]
    fn text_detection_by_extension_and_name() {
        let config = ScanConfig::default();
        assert!(config.is_text_extension(".rs"));
        assert!(!config.is_text_extension(".png"));
        assert!(config.is_text_filename("Dockerfile"));
        assert!(!config.is_text_filename("image.png"));
    }
}
