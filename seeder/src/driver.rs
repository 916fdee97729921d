use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{ Context, Result };
use chrono::Utc;
use common::config::GenerationConfig;
use common::generator::DatasetGenerator;
use common::models::{ RunSummary, WorkerOutcome };
use futures::future::join_all;
use tracing::{ error, info };

use crate::datasets;

/// Create the output directory if it is missing; an existing one is fine.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
	fs::create_dir_all(dir).with_context(|| format!("Failed to create output directory: {dir:?}"))
}

/// Generate every dataset, one worker per dataset.
pub async fn run_generation(config: GenerationConfig) -> Result<RunSummary> {
	run_generators(config, datasets::all()).await
}

/// Fan `generators` out to blocking workers and wait for all of them.
///
/// A failing worker never cancels the others. Its outcome is recorded in the
/// returned summary alongside the successful ones.
pub async fn run_generators(
	config: GenerationConfig,
	generators: Vec<Box<dyn DatasetGenerator>>
) -> Result<RunSummary> {
	config.validate()?;
	ensure_output_dir(&config.output_dir)?;

	let start = Instant::now();
	info!("Launching {} generators into {:?}", generators.len(), config.output_dir);

	let workers = generators.into_iter().map(|generator| {
		let config = config.clone();
		let dataset = generator.dataset();
		let handle = tokio::task::spawn_blocking(move || generator.run(&config));
		async move {
			match handle.await {
				Ok(Ok(report)) => WorkerOutcome::Completed(report),
				Ok(Err(e)) =>
					WorkerOutcome::Failed {
						dataset: dataset.name().to_string(),
						reason: e.to_string(),
					},
				Err(e) =>
					WorkerOutcome::Failed {
						dataset: dataset.name().to_string(),
						reason: format!("worker panicked: {}", e),
					},
			}
		}
	});
	let outcomes = join_all(workers).await;

	for outcome in &outcomes {
		if let WorkerOutcome::Failed { dataset, reason } = outcome {
			error!("Generating {} failed: {}", dataset, reason);
		}
	}

	let summary = RunSummary {
		outcomes,
		duration_ms: start.elapsed().as_millis() as u64,
		timestamp: Utc::now(),
	};
	info!(
		"Finished generating data: {} rows across {} datasets in {} ms, {} failed",
		summary.total_rows(),
		summary.outcomes.len(),
		summary.duration_ms,
		summary.failures().len()
	);

	Ok(summary)
}
