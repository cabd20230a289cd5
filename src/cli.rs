use clap::Parser;
use std::path::PathBuf;

/// Default snapshot file name, written into the scanned project root.
pub const DEFAULT_ARTIFACT: &str = "insightsproject.json";

#[derive(Parser, Debug)]
#[command(name = "repolens")]
#[command(about = "Project introspection: technology, dependency and quality snapshots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project directory to analyze
    pub path: PathBuf,

    /// Snapshot output file (defaults to <path>/insightsproject.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Process the tree in bounded, resumable chunks
    #[arg(long)]
    pub chunk_mode: bool,

    /// Files per chunk in chunked mode
    #[arg(long, default_value = "500")]
    pub chunk_size: usize,

    /// Zero-based chunk to process in chunked mode
    #[arg(long, default_value = "0")]
    pub chunk_index: usize,

    /// Hard cap on scanned files before the walk truncates
    #[arg(long, default_value = "5000")]
    pub max_files: usize,

    /// Directory depth beyond which subtrees are pruned
    #[arg(long, default_value = "6")]
    pub max_depth: usize,

    /// Per-file content cap in bytes for the analysis corpus
    #[arg(long, default_value = "1048576")]
    pub max_content_bytes: u64,

    /// Call the configured AI endpoint to fill the ai* snapshot fields
    #[arg(long)]
    pub ai: bool,
}
