use pretty_assertions::assert_eq;
use repolens::chunk::ChunkRequest;
use repolens::config::ScanConfig;
use repolens::io::writer;
use repolens::ProjectAnalyzer;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_tree(dir: &Path, count: usize) {
    for i in 0..count {
        let path = dir.join(format!("src/module{i:02}.rs"));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("pub fn f{i}() -> usize {{ {i} }}\n")).unwrap();
    }
}

#[test]
fn sequential_chunks_cover_all_files_without_duplicates() {
    let dir = TempDir::new().unwrap();
    let total = 23;
    let chunk_size = 5;
    write_tree(dir.path(), total);

    let analyzer = ProjectAnalyzer::new(dir.path(), ScanConfig::default()).unwrap();

    let mut seen = BTreeSet::new();
    let mut merged = None;
    let mut index = 0;
    loop {
        let snapshot = analyzer
            .analyze(Some(ChunkRequest {
                index,
                size: chunk_size,
            }))
            .unwrap();
        let meta = snapshot.chunk_metadata.clone().unwrap();

        for path in snapshot.file_structure.keys() {
            assert!(seen.insert(path.clone()), "duplicate file {path} in chunk {index}");
        }

        merged = Some(match merged.take() {
            None => snapshot,
            Some(mut base) => {
                writer::merge(&mut base, snapshot);
                base
            }
        });

        if !meta.has_more_chunks {
            break;
        }
        index += 1;
    }

    assert_eq!(index + 1, 5); // ceil(23 / 5)
    assert_eq!(seen.len(), total);

    let merged = merged.unwrap();
    assert_eq!(merged.total_files, total);
    assert_eq!(merged.file_structure.len(), total);
    assert!(merged.languages.contains(&"Rust".to_string()));
}

#[test]
fn persisted_artifact_accumulates_across_chunk_runs() {
    let dir = TempDir::new().unwrap();
    let total = 11;
    let chunk_size = 4;
    write_tree(dir.path(), total);

    // Written outside the scanned tree so later chunk runs do not scan it.
    let out_dir = TempDir::new().unwrap();
    let artifact = out_dir.path().join("snapshot.json");
    let analyzer = ProjectAnalyzer::new(dir.path(), ScanConfig::default()).unwrap();

    // Each iteration is a separate invocation: analyze one chunk, fold it
    // into whatever the previous run left on disk, write the result back.
    for index in 0..3 {
        let mut snapshot = analyzer
            .analyze(Some(ChunkRequest {
                index,
                size: chunk_size,
            }))
            .unwrap();
        if index > 0 {
            snapshot = writer::accumulate(&artifact, snapshot);
        }
        writer::finalize(&mut snapshot);
        writer::write_snapshot(&snapshot, &artifact).unwrap();
    }

    let final_snapshot = writer::read_snapshot(&artifact).unwrap();
    assert_eq!(final_snapshot.total_files, total);
    assert_eq!(final_snapshot.file_structure.len(), total);
    assert!(final_snapshot.languages.contains(&"Rust".to_string()));
    let meta = final_snapshot.chunk_metadata.unwrap();
    assert_eq!(meta.completion_percentage, 100);
    assert!(!meta.has_more_chunks);
}

#[test]
fn repeating_a_chunk_request_returns_the_same_subset() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), 12);
    let analyzer = ProjectAnalyzer::new(dir.path(), ScanConfig::default()).unwrap();
    let request = Some(ChunkRequest { index: 1, size: 4 });

    let first = analyzer.analyze(request).unwrap();
    let second = analyzer.analyze(request).unwrap();

    let first_paths: Vec<_> = first.file_structure.keys().cloned().collect();
    let second_paths: Vec<_> = second.file_structure.keys().cloned().collect();
    assert_eq!(first_paths, second_paths);
    assert_eq!(first.chunk_metadata, second.chunk_metadata);
}

#[test]
fn chunk_metadata_tracks_progress() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), 10);
    let analyzer = ProjectAnalyzer::new(dir.path(), ScanConfig::default()).unwrap();

    let snapshot = analyzer
        .analyze(Some(ChunkRequest { index: 0, size: 4 }))
        .unwrap();
    let meta = snapshot.chunk_metadata.unwrap();
    assert_eq!(meta.files_in_chunk, 4);
    assert_eq!(meta.total_files_found, 10);
    assert_eq!(meta.completion_percentage, 40);
    assert!(meta.has_more_chunks);

    let last = analyzer
        .analyze(Some(ChunkRequest { index: 2, size: 4 }))
        .unwrap();
    let meta = last.chunk_metadata.unwrap();
    assert_eq!(meta.files_in_chunk, 2);
    assert_eq!(meta.completion_percentage, 100);
    assert!(!meta.has_more_chunks);
}

#[test]
fn chunked_snapshot_serializes_chunk_metadata_in_snake_case() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), 6);
    let analyzer = ProjectAnalyzer::new(dir.path(), ScanConfig::default()).unwrap();
    let snapshot = analyzer
        .analyze(Some(ChunkRequest { index: 0, size: 4 }))
        .unwrap();

    let value = serde_json::to_value(&snapshot).unwrap();
    let meta = &value["chunk_metadata"];
    assert!(meta["files_in_chunk"].is_number());
    assert!(meta["completion_percentage"].is_number());
    assert!(meta["total_files_found"].is_number());
    assert!(meta["has_more_chunks"].is_boolean());
}
