use anyhow::{ bail, Result };
use common::config::GenerationConfig;
use seeder::driver::run_generation;

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::fmt::init();

	let summary = run_generation(GenerationConfig::default()).await?;

	let failures = summary.failures();
	if !failures.is_empty() {
		let datasets: Vec<&str> = failures
			.iter()
			.map(|outcome| outcome.dataset())
			.collect();
		bail!("{} dataset(s) failed: {}", failures.len(), datasets.join(", "));
	}

	Ok(())
}
