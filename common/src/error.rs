use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
	#[error("I/O error on {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	#[error("Output directory does not exist: {}", .0.display())]
	MissingDirectory(PathBuf),

	#[error("No unique {key} found after {attempts} draws ({accepted} keys accepted so far)")]
	UniquenessExhausted {
		key: &'static str,
		attempts: u64,
		accepted: usize,
	},

	#[error("Only {available} unused {key} values left, {requested} requested")]
	KeySpaceExhausted {
		key: &'static str,
		requested: usize,
		available: usize,
	},

	#[error("Configuration error: {0}")]
	Config(String),
}

impl GenerationError {
	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		GenerationError::Io { path: path.into(), source }
	}
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, GenerationError>;
