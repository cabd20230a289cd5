//! Directory traversal with ignore rules, depth limits and file-count caps.

use crate::config::ScanConfig;
use crate::core::{language_for_extension, FileRecord};
use chrono::{DateTime, Utc};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// One scanned file: its metadata record plus cached text content when the
/// file is an eligible text file that could be read.
#[derive(Clone, Debug)]
pub struct WalkedFile {
    pub record: FileRecord,
    pub content: Option<String>,
}

/// The full result of a walk, ordered lexicographically by relative path.
///
/// The explicit sort is load-bearing: chunked scans slice this ordering, so
/// it must be identical across invocations on an unchanged tree. Raw OS
/// traversal order is not.
#[derive(Clone, Debug, Default)]
pub struct WalkOutcome {
    pub files: Vec<WalkedFile>,
    pub truncated: bool,
}

pub struct TreeWalker {
    root: PathBuf,
    config: ScanConfig,
}

impl TreeWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Walk the tree. Per-file I/O failures are skipped, never fatal; the
    /// walk only reports truncation when the file cap is hit.
    pub fn walk(&self) -> WalkOutcome {
        let mut files = Vec::new();
        let mut truncated = false;

        // Depth counts directory levels; files sit one level deeper than
        // their directory, hence the +1. Traversal is name-sorted so the
        // subset kept when the file cap fires is the same on every run,
        // not whatever readdir happened to yield first.
        let walker = WalkDir::new(&self.root)
            .max_depth(self.config.max_depth + 1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.keep_entry(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("skipping unreadable entry: {err}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if files.len() >= self.config.max_files {
                truncated = true;
                break;
            }
            if let Some(file) = self.scan_file(&entry) {
                files.push(file);
            }
        }

        files.sort_by(|a, b| a.record.path.cmp(&b.record.path));
        WalkOutcome { files, truncated }
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        if entry.file_type().is_dir() {
            // Exact-name pruning for directories.
            !self.config.ignore_names.iter().any(|token| name == *token)
        } else {
            // Loose containment for files; see ScanConfig::ignore_names.
            !self
                .config
                .ignore_names
                .iter()
                .any(|token| name.contains(token.as_str()))
        }
    }

    fn scan_file(&self, entry: &DirEntry) -> Option<WalkedFile> {
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                debug!("cannot stat {}: {err}", entry.path().display());
                return None;
            }
        };

        let rel_path = relative_path(entry.path(), &self.root);
        let extension = extension_of(entry.path());
        let modified = metadata
            .modified()
            .ok()
            .map(|time| DateTime::<Utc>::from(time));

        let name = entry.file_name().to_string_lossy();
        let is_text = self.config.is_text_extension(&extension) || self.config.is_text_filename(&name);

        let content = if is_text && metadata.len() <= self.config.max_content_bytes {
            match std::fs::read_to_string(entry.path()) {
                Ok(text) => Some(text),
                Err(err) => {
                    debug!("cannot read {}: {err}", entry.path().display());
                    None
                }
            }
        } else {
            None
        };

        let lines = content.as_deref().map(|text| text.lines().count());
        let language = language_for_extension(&extension).to_string();

        Some(WalkedFile {
            record: FileRecord {
                path: rel_path,
                size: metadata.len(),
                lines,
                extension,
                language,
                modified,
            },
            content,
        })
    }
}

/// Relative path with forward slashes so snapshot keys are stable across
/// platforms.
fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let display = rel.display().to_string();
    if std::path::MAIN_SEPARATOR == '/' {
        display
    } else {
        display.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Lower-cased extension with leading dot, or empty string.
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn walk_is_sorted_by_relative_path() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "zeta.rs", "fn z() {}\n");
        write(dir.path(), "alpha.rs", "fn a() {}\n");
        write(dir.path(), "src/middle.rs", "fn m() {}\n");

        let outcome = TreeWalker::new(dir.path().to_path_buf()).walk();
        let paths: Vec<_> = outcome.files.iter().map(|f| f.record.path.as_str()).collect();
        assert_eq!(paths, vec!["alpha.rs", "src/middle.rs", "zeta.rs"]);
        assert!(!outcome.truncated);
    }

    #[test]
    fn ignored_directories_are_pruned_exactly() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "node_modules/pkg/index.js", "module.exports = 1;\n");
        write(dir.path(), "node_modules_backup/kept.js", "kept\n");
        write(dir.path(), "app.js", "console.log(1);\n");

        let outcome = TreeWalker::new(dir.path().to_path_buf()).walk();
        let paths: Vec<_> = outcome.files.iter().map(|f| f.record.path.as_str()).collect();
        assert_eq!(paths, vec!["app.js", "node_modules_backup/kept.js"]);
    }

    #[test]
    fn file_names_containing_ignore_tokens_are_skipped() {
        let dir = TempDir::new().unwrap();
        // "tmp" is an ignore token; containment intentionally over-matches.
        write(dir.path(), "scratch.tmp.js", "x\n");
        write(dir.path(), "main.js", "x\n");

        let outcome = TreeWalker::new(dir.path().to_path_buf()).walk();
        let paths: Vec<_> = outcome.files.iter().map(|f| f.record.path.as_str()).collect();
        assert_eq!(paths, vec!["main.js"]);
    }

    #[test]
    fn file_cap_truncates_instead_of_failing() {
        let dir = TempDir::new().unwrap();
        for i in 0..10 {
            write(dir.path(), &format!("file{i}.txt"), "line\n");
        }
        let config = ScanConfig {
            max_files: 4,
            ..ScanConfig::default()
        };
        let outcome = TreeWalker::new(dir.path().to_path_buf())
            .with_config(config)
            .walk();
        assert_eq!(outcome.files.len(), 4);
        assert!(outcome.truncated);
    }

    #[test]
    fn file_cap_keeps_the_name_sorted_prefix() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.txt", "x\n");
        write(dir.path(), "e.txt", "x\n");
        write(dir.path(), "a/nested.txt", "x\n");
        write(dir.path(), "d.txt", "x\n");
        write(dir.path(), "c.txt", "x\n");

        let config = ScanConfig {
            max_files: 3,
            ..ScanConfig::default()
        };
        // Two runs must select the same subset, and that subset is the
        // depth-first name-sorted prefix, independent of readdir order.
        for _ in 0..2 {
            let outcome = TreeWalker::new(dir.path().to_path_buf())
                .with_config(config.clone())
                .walk();
            let paths: Vec<_> = outcome.files.iter().map(|f| f.record.path.as_str()).collect();
            assert_eq!(paths, vec!["a/nested.txt", "b.txt", "c.txt"]);
            assert!(outcome.truncated);
        }
    }

    #[test]
    fn depth_limit_prunes_deep_subtrees() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/b/kept.txt", "x\n");
        write(dir.path(), "a/b/c/d/dropped.txt", "x\n");

        let config = ScanConfig {
            max_depth: 2,
            ..ScanConfig::default()
        };
        let outcome = TreeWalker::new(dir.path().to_path_buf())
            .with_config(config)
            .walk();
        let paths: Vec<_> = outcome.files.iter().map(|f| f.record.path.as_str()).collect();
        assert_eq!(paths, vec!["a/b/kept.txt"]);
    }

    #[test]
    fn oversized_files_keep_metadata_but_no_content() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "big.txt", &"x".repeat(128));
        let config = ScanConfig {
            max_content_bytes: 16,
            ..ScanConfig::default()
        };
        let outcome = TreeWalker::new(dir.path().to_path_buf())
            .with_config(config)
            .walk();
        assert_eq!(outcome.files.len(), 1);
        let file = &outcome.files[0];
        assert!(file.content.is_none());
        assert_eq!(file.record.lines, None);
        assert_eq!(file.record.size, 128);
    }
}
