use chrono::{ DateTime, NaiveDate, Utc };
use serde::{ Deserialize, Serialize };

// Field order below is the column order written to disk.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
	pub id: u64,
	pub username: String,
	pub password: String,
	pub access_level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
	pub user_id: u64,
	pub bio: String,
	pub location: String,
	pub birthday: NaiveDate,
	pub gender: u8,
	pub marital_status: u8,
	pub page_preference: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRole {
	pub id: u64,
	pub role_name: String,
	pub role_desc: String,
	pub role_level: u32,
	pub user_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
	pub id: u64,
	pub first_name: String,
	pub last_name: String,
	pub gender: u8,
	pub employment_date: NaiveDate,
	pub termination_date: Option<NaiveDate>,
	pub salary: f64,
	pub role_id: u64,
	pub user_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
	pub id: u64,
	pub name: String,
	pub description: String,
	pub category: u8,
	pub address: String,
	pub city: String,
	pub state: String,
	pub zip_code: String,
	pub country: String,
	pub open_date: NaiveDate,
	pub close_date: Option<NaiveDate>,
	pub user_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreShift {
	pub store_id: u64,
	pub employee_id: u64,
	pub start_date: NaiveDate,
	pub end_date: NaiveDate,
	pub user_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
	pub dataset: String,
	pub rows: u64,
	/// Candidate draws made to produce `rows` (equal to `rows` without a uniqueness constraint)
	pub draws: u64,
	pub acceptance_rate: f64,
	pub duration_ms: u64,
	pub rows_per_second: f64,
	pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WorkerOutcome {
	Completed(GenerationReport),
	Failed {
		dataset: String,
		reason: String,
	},
}

impl WorkerOutcome {
	pub fn dataset(&self) -> &str {
		match self {
			WorkerOutcome::Completed(report) => &report.dataset,
			WorkerOutcome::Failed { dataset, .. } => dataset,
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, WorkerOutcome::Completed(_))
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
	pub outcomes: Vec<WorkerOutcome>,
	pub duration_ms: u64,
	pub timestamp: DateTime<Utc>,
}

impl RunSummary {
	pub fn failures(&self) -> Vec<&WorkerOutcome> {
		self.outcomes
			.iter()
			.filter(|outcome| !outcome.is_success())
			.collect()
	}

	pub fn total_rows(&self) -> u64 {
		self.outcomes
			.iter()
			.filter_map(|outcome| {
				match outcome {
					WorkerOutcome::Completed(report) => Some(report.rows),
					WorkerOutcome::Failed { .. } => None,
				}
			})
			.sum()
	}
}
