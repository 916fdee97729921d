use std::path::PathBuf;

use chrono::{ NaiveDate, Utc };
use sha2::{ Digest, Sha256 };

use crate::domains::AccessLevel;
use crate::error::{ GenerationError, Result };

pub const USERS_COUNT: u64 = 10_000;
pub const EMPLOYEE_ROLES_COUNT: u64 = 1_000_000;
pub const EMPLOYEES_COUNT: u64 = 1_000_000;
pub const STORES_COUNT: u64 = 1_000_000;
pub const STORE_SHIFTS_COUNT: u64 = 10_000_000;

pub const MIN_ROLE_LEVEL: u32 = 1;
pub const MAX_ROLE_LEVEL: u32 = 100;

pub const TERMINATION_PROBABILITY: f64 = 0.2;
pub const CLOSE_PROBABILITY: f64 = 0.1;

pub const PAGE_PREFERENCE: u32 = 5;
pub const DEFAULT_PASSWORD: &str = "a";

pub const PROGRESS_INTERVAL: u64 = 1_000_000;
pub const MAX_DRAW_ATTEMPTS: u64 = 100_000;

pub const DEFAULT_OUTPUT_DIR: &str = "./resources";

/// Immutable settings shared by every dataset generator.
///
/// Each worker receives its own clone; nothing in here is mutated once the
/// driver starts.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
	pub output_dir: PathBuf,

	pub users_count: u64,
	pub employee_roles_count: u64,
	pub employees_count: u64,
	pub stores_count: u64,
	pub store_shifts_count: u64,

	pub min_role_level: u32,
	pub max_role_level: u32,

	/// Chance that an employee row carries a termination date
	pub termination_probability: f64,
	/// Chance that a store row carries a close date
	pub close_probability: f64,

	pub page_preference: u32,
	pub access_level: AccessLevel,
	/// Hex SHA-256 digest written to every user row
	pub password_hash: String,

	/// Accepted rows between progress log lines
	pub progress_interval: u64,
	/// Consecutive collisions tolerated before a unique draw gives up
	pub max_draw_attempts: u64,

	/// Base seed for deterministic runs; `None` seeds every worker from entropy
	pub seed: Option<u64>,
	/// Anchor for every relative date range
	pub today: NaiveDate,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
			users_count: USERS_COUNT,
			employee_roles_count: EMPLOYEE_ROLES_COUNT,
			employees_count: EMPLOYEES_COUNT,
			stores_count: STORES_COUNT,
			store_shifts_count: STORE_SHIFTS_COUNT,
			min_role_level: MIN_ROLE_LEVEL,
			max_role_level: MAX_ROLE_LEVEL,
			termination_probability: TERMINATION_PROBABILITY,
			close_probability: CLOSE_PROBABILITY,
			page_preference: PAGE_PREFERENCE,
			access_level: AccessLevel::Regular,
			password_hash: hash_password(DEFAULT_PASSWORD),
			progress_interval: PROGRESS_INTERVAL,
			max_draw_attempts: MAX_DRAW_ATTEMPTS,
			seed: None,
			today: Utc::now().date_naive(),
		}
	}
}

impl GenerationConfig {
	pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
		self.output_dir = output_dir.into();
		self
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	/// Size of the (store_id, employee_id) key space
	pub fn store_shift_key_space(&self) -> u64 {
		self.stores_count.saturating_mul(self.employees_count)
	}

	pub fn validate(&self) -> Result<()> {
		let ranges = [
			("users_count", self.users_count),
			("employee_roles_count", self.employee_roles_count),
			("employees_count", self.employees_count),
			("stores_count", self.stores_count),
		];
		for (name, count) in ranges {
			if count == 0 {
				return Err(
					GenerationError::Config(
						format!("{} must be at least 1, other datasets reference its id range", name)
					)
				);
			}
		}

		if self.min_role_level > self.max_role_level {
			return Err(
				GenerationError::Config(
					format!(
						"min_role_level {} exceeds max_role_level {}",
						self.min_role_level,
						self.max_role_level
					)
				)
			);
		}

		for (name, p) in [
			("termination_probability", self.termination_probability),
			("close_probability", self.close_probability),
		] {
			if !(0.0..=1.0).contains(&p) {
				return Err(GenerationError::Config(format!("{} must be within [0, 1], got {}", name, p)));
			}
		}

		if self.progress_interval == 0 {
			return Err(GenerationError::Config("progress_interval must be positive".to_string()));
		}
		if self.max_draw_attempts == 0 {
			return Err(GenerationError::Config("max_draw_attempts must be positive".to_string()));
		}

		Ok(())
	}
}

pub fn hash_password(password: &str) -> String {
	hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_matches_production_constants() {
		let config = GenerationConfig::default();
		assert_eq!(config.users_count, 10_000);
		assert_eq!(config.store_shifts_count, 10_000_000);
		assert_eq!(config.access_level, AccessLevel::Regular);
		assert_eq!(config.progress_interval, 1_000_000);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn password_hash_is_hex_sha256() {
		let hash = hash_password("a");
		assert_eq!(hash.len(), 64);
		assert!(hash.starts_with("ca978112ca1bbdca"));
	}

	#[test]
	fn rejects_empty_referenced_range() {
		let config = GenerationConfig { employees_count: 0, ..GenerationConfig::default() };
		assert!(matches!(config.validate(), Err(GenerationError::Config(_))));
	}

	#[test]
	fn rejects_inverted_role_levels() {
		let config = GenerationConfig {
			min_role_level: 10,
			max_role_level: 5,
			..GenerationConfig::default()
		};
		assert!(config.validate().is_err());
	}

	#[test]
	fn rejects_out_of_range_probability() {
		let config = GenerationConfig { close_probability: 1.5, ..GenerationConfig::default() };
		assert!(config.validate().is_err());
	}

	#[test]
	fn key_space_does_not_overflow() {
		let config = GenerationConfig {
			stores_count: u64::MAX,
			employees_count: 2,
			..GenerationConfig::default()
		};
		assert_eq!(config.store_shift_key_space(), u64::MAX);
	}
}
