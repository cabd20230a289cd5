use anyhow::Result;
use clap::Parser;
use repolens::ai::{self, AiClient, CondensedSummary};
use repolens::chunk::ChunkRequest;
use repolens::cli::{Cli, DEFAULT_ARTIFACT};
use repolens::config::ScanConfig;
use repolens::io::writer;
use repolens::ProjectAnalyzer;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ScanConfig {
        max_files: cli.max_files,
        max_depth: cli.max_depth,
        max_content_bytes: cli.max_content_bytes,
        ..ScanConfig::default()
    };

    let analyzer = ProjectAnalyzer::new(&cli.path, config)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| analyzer.root().join(DEFAULT_ARTIFACT));

    let chunk_request = cli.chunk_mode.then_some(ChunkRequest {
        index: cli.chunk_index,
        size: cli.chunk_size,
    });
    let mut snapshot = analyzer.analyze(chunk_request)?;

    // Chunks after the first fold into the artifact the previous runs wrote.
    if cli.chunk_mode && cli.chunk_index > 0 {
        snapshot = writer::accumulate(&output, snapshot);
    }

    if cli.ai {
        match AiClient::from_env() {
            Some(client) => {
                let summary = CondensedSummary::from_snapshot(&snapshot);
                ai::apply(&mut snapshot, client.augment(&summary));
            }
            None => log::warn!("--ai requested but no endpoint configured; skipping"),
        }
    }

    writer::finalize(&mut snapshot);
    writer::write_snapshot(&snapshot, &output)?;

    println!(
        "{}: {} files, {} lines, quality {:.1}/10 -> {}",
        snapshot.project_type,
        snapshot.total_files,
        snapshot.total_lines_of_code,
        snapshot.code_quality_metrics.overall_score,
        output.display()
    );

    Ok(())
}
