use std::fs;

use chrono::NaiveDate;
use common::config::GenerationConfig;
use common::error::{ GenerationError, Result };
use common::generator::{ Dataset, DatasetGenerator, GenerationStats };
use common::models::WorkerOutcome;
use common::sink::RowSink;
use common::source::RandomSource;
use seeder::datasets::UsersGenerator;
use seeder::driver::{ run_generation, run_generators };

fn tiny_config(dir: &std::path::Path) -> GenerationConfig {
	GenerationConfig {
		users_count: 10,
		employee_roles_count: 10,
		employees_count: 10,
		stores_count: 10,
		store_shifts_count: 25,
		today: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
		..GenerationConfig::default()
	}.with_output_dir(dir)
}

struct FailingGenerator;

impl DatasetGenerator for FailingGenerator {
	fn dataset(&self) -> Dataset {
		Dataset::Stores
	}

	fn write_rows(
		&self,
		_config: &GenerationConfig,
		_source: &mut RandomSource,
		_sink: &mut RowSink
	) -> Result<GenerationStats> {
		Err(GenerationError::Config("simulated failure".to_string()))
	}
}

struct PanickingGenerator;

impl DatasetGenerator for PanickingGenerator {
	fn dataset(&self) -> Dataset {
		Dataset::Employees
	}

	fn write_rows(
		&self,
		_config: &GenerationConfig,
		_source: &mut RandomSource,
		_sink: &mut RowSink
	) -> Result<GenerationStats> {
		panic!("simulated crash");
	}
}

#[tokio::test]
async fn produces_six_non_empty_files() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("nested").join("resources");
	let config = tiny_config(&output);

	let summary = run_generation(config.clone()).await.unwrap();
	assert_eq!(summary.outcomes.len(), 6);
	assert!(summary.failures().is_empty());

	let mut files: Vec<String> = fs::read_dir(&output)
		.unwrap()
		.map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
		.collect();
	files.sort();
	let mut expected: Vec<String> = Dataset::ALL.iter().map(|d| d.file_name()).collect();
	expected.sort();
	assert_eq!(files, expected);

	for dataset in Dataset::ALL {
		let metadata = fs::metadata(dataset.output_path(&config)).unwrap();
		assert!(metadata.len() > 0, "{} is empty", dataset);
	}
}

#[tokio::test]
async fn existing_output_directory_is_reused() {
	let dir = tempfile::tempdir().unwrap();
	let config = tiny_config(dir.path());

	run_generation(config.clone()).await.unwrap();
	let summary = run_generation(config).await.unwrap();
	assert!(summary.failures().is_empty());
	assert_eq!(summary.total_rows(), 10 + 10 + 10 + 10 + 10 + 25);
}

#[tokio::test]
async fn one_failing_worker_does_not_stop_the_others() {
	let dir = tempfile::tempdir().unwrap();
	let config = tiny_config(dir.path());

	let generators: Vec<Box<dyn DatasetGenerator>> = vec![
		Box::new(UsersGenerator),
		Box::new(FailingGenerator),
		Box::new(PanickingGenerator)
	];
	let summary = run_generators(config.clone(), generators).await.unwrap();

	assert_eq!(summary.outcomes.len(), 3);
	assert!(summary.outcomes[0].is_success());

	let failures = summary.failures();
	assert_eq!(failures.len(), 2);
	match failures[0] {
		WorkerOutcome::Failed { dataset, reason } => {
			assert_eq!(dataset, "stores");
			assert!(reason.contains("simulated failure"));
		}
		WorkerOutcome::Completed(_) => panic!("expected a failure"),
	}
	match failures[1] {
		WorkerOutcome::Failed { dataset, reason } => {
			assert_eq!(dataset, "employees");
			assert!(reason.contains("panicked"));
		}
		WorkerOutcome::Completed(_) => panic!("expected a failure"),
	}

	assert!(Dataset::Users.output_path(&config).exists());
}

#[tokio::test]
async fn invalid_config_is_rejected_before_launch() {
	let dir = tempfile::tempdir().unwrap();
	let output = dir.path().join("never");
	let config = GenerationConfig { users_count: 0, ..tiny_config(&output) };

	assert!(run_generation(config).await.is_err());
	assert!(!output.exists());
}
