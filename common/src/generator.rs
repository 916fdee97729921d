use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Utc;
use tracing::info;

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::models::GenerationReport;
use crate::sink::RowSink;
use crate::source::RandomSource;

/// One output file per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
	Users,
	UserProfiles,
	EmployeeRoles,
	Employees,
	Stores,
	StoreShifts,
}

impl Dataset {
	pub const ALL: [Dataset; 6] = [
		Dataset::Users,
		Dataset::UserProfiles,
		Dataset::EmployeeRoles,
		Dataset::Employees,
		Dataset::Stores,
		Dataset::StoreShifts,
	];

	pub fn name(self) -> &'static str {
		match self {
			Dataset::Users => "users",
			Dataset::UserProfiles => "user_profiles",
			Dataset::EmployeeRoles => "employee_roles",
			Dataset::Employees => "employees",
			Dataset::Stores => "stores",
			Dataset::StoreShifts => "store_shifts",
		}
	}

	pub fn file_name(self) -> String {
		format!("{}.csv", self.name())
	}

	/// Random stream reserved for this dataset when runs are seeded
	pub fn stream(self) -> u64 {
		self as u64
	}

	pub fn output_path(self, config: &GenerationConfig) -> PathBuf {
		config.output_dir.join(self.file_name())
	}
}

impl fmt::Display for Dataset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Counters a generator hands back once its rows are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
	pub rows: u64,
	pub draws: u64,
}

impl GenerationStats {
	/// Stats for a dataset without a uniqueness constraint
	pub fn plain(rows: u64) -> Self {
		Self { rows, draws: rows }
	}
}

pub trait DatasetGenerator: Send + Sync {
	/// Dataset this generator writes
	fn dataset(&self) -> Dataset;

	/// Produce every row into `sink`
	fn write_rows(
		&self,
		config: &GenerationConfig,
		source: &mut RandomSource,
		sink: &mut RowSink
	) -> Result<GenerationStats>;

	/// Regenerate the dataset's file from scratch and report how it went
	fn run(&self, config: &GenerationConfig) -> Result<GenerationReport> {
		config.validate()?;
		let dataset = self.dataset();
		info!("Begin generating {}", dataset);

		let report = measure_generation(dataset, || {
			let mut sink = RowSink::create(dataset.output_path(config))?;
			let mut source = RandomSource::new(config.seed, dataset.stream());
			let stats = self.write_rows(config, &mut source, &mut sink)?;
			sink.finish()?;
			Ok(stats)
		})?;

		info!(
			"End generating {}: {} rows in {} ms ({:.0} rows/s, acceptance {:.4})",
			dataset,
			report.rows,
			report.duration_ms,
			report.rows_per_second,
			report.acceptance_rate
		);
		Ok(report)
	}
}

// Helper function to measure a generation run and build its report
pub fn measure_generation<F>(dataset: Dataset, f: F) -> Result<GenerationReport>
	where F: FnOnce() -> Result<GenerationStats>
{
	let start = Instant::now();
	let stats = f()?;
	let duration = start.elapsed();

	let duration_ms = duration.as_millis() as u64;
	let rows_per_second = if duration_ms > 0 {
		(stats.rows as f64) / ((duration_ms as f64) / 1000.0)
	} else {
		stats.rows as f64 // Avoid division by zero
	};
	let acceptance_rate = if stats.draws > 0 {
		(stats.rows as f64) / (stats.draws as f64)
	} else {
		1.0
	};

	Ok(GenerationReport {
		dataset: dataset.name().to_string(),
		rows: stats.rows,
		draws: stats.draws,
		acceptance_rate,
		duration_ms,
		rows_per_second,
		timestamp: Utc::now(),
	})
}
