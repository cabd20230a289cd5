// Export modules for library usage
pub mod ai;
pub mod analyzer;
pub mod chunk;
pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod deps;
pub mod git;
pub mod insights;
pub mod io;
pub mod quality;

// Re-export commonly used types
pub use crate::analyzer::{ProjectAnalyzer, SnapshotError};
pub use crate::chunk::{ChunkPage, ChunkRequest};
pub use crate::config::ScanConfig;
pub use crate::core::{
    ChunkMetadata, ChunkState, DependencyRecord, FileRecord, GitInfo, ProjectSnapshot,
    QualityMetrics,
};

pub use crate::classify::signatures::{DetectedStacks, SignatureMatcher};
pub use crate::io::walker::{TreeWalker, WalkOutcome, WalkedFile};
pub use crate::io::writer::{finalize, merge, write_snapshot};
