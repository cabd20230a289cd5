//! Bounded, resumable pagination over a deterministically ordered file list.

use crate::core::ChunkState;
use serde::{Deserialize, Serialize};

/// A chunk request: which slice of the sorted ordering to process.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkRequest {
    pub index: usize,
    pub size: usize,
}

/// One page of work plus the cursor describing overall progress.
#[derive(Clone, Debug)]
pub struct ChunkPage<T> {
    pub items: Vec<T>,
    pub state: ChunkState,
}

/// Slice `[index·size, (index+1)·size)` out of an already-sorted list.
///
/// The input ordering is the contract: given the same tree and the same
/// ordering, the same request always returns the same subset, which is what
/// makes chunked scans resumable.
pub fn paginate<T>(mut sorted: Vec<T>, request: ChunkRequest) -> ChunkPage<T> {
    let total = sorted.len();
    let size = request.size.max(1);
    let start = request.index.saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);

    let items: Vec<T> = sorted.drain(start..end).collect();
    let files_processed = end;
    let has_more = end < total;

    let completion_percentage = if total == 0 {
        100
    } else {
        let pct = (files_processed as f64 / total as f64 * 100.0).round() as u32;
        pct.min(100)
    };

    ChunkPage {
        items,
        state: ChunkState {
            chunk_index: request.index,
            chunk_size: size,
            files_processed,
            total_estimate: total,
            completion_percentage,
            has_more,
        },
    }
}
