use std::fs::{ self, File };
use std::io::{ BufWriter, ErrorKind };
use std::path::{ Path, PathBuf };

use csv::{ Writer, WriterBuilder };
use serde::Serialize;

use crate::error::{ GenerationError, Result };

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Header-less CSV output for one dataset.
pub struct RowSink {
	path: PathBuf,
	writer: Writer<BufWriter<File>>,
	rows: u64,
}

impl RowSink {
	/// Replace whatever is at `path` with an empty file.
	///
	/// The parent directory has to exist already; creating it is the driver's job.
	pub fn create(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();

		let parent = match path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent,
			_ => Path::new("."),
		};
		if !parent.is_dir() {
			return Err(GenerationError::MissingDirectory(parent.to_path_buf()));
		}

		match fs::remove_file(path) {
			Ok(()) => {}
			Err(e) if e.kind() == ErrorKind::NotFound => {}
			Err(e) => {
				return Err(GenerationError::io(path, e));
			}
		}

		let file = File::create(path).map_err(|e| GenerationError::io(path, e))?;
		let writer = WriterBuilder::new()
			.has_headers(false)
			.from_writer(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file));

		Ok(Self {
			path: path.to_path_buf(),
			writer,
			rows: 0,
		})
	}

	pub fn write<T: Serialize>(&mut self, row: &T) -> Result<()> {
		self.writer.serialize(row)?;
		self.rows += 1;
		Ok(())
	}

	pub fn rows_written(&self) -> u64 {
		self.rows
	}

	/// Flush buffered rows to disk and return how many were written.
	pub fn finish(mut self) -> Result<u64> {
		self.writer.flush().map_err(|e| GenerationError::io(&self.path, e))?;
		Ok(self.rows)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;
	use serde::Serialize;

	#[derive(Serialize)]
	struct Row {
		id: u64,
		note: String,
		closed: Option<NaiveDate>,
	}

	#[test]
	fn writes_headerless_rows_with_empty_optional() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("rows.csv");

		let mut sink = RowSink::create(&path).unwrap();
		sink.write(&Row { id: 1, note: "plain".to_string(), closed: None }).unwrap();
		sink.write(
			&(Row {
				id: 2,
				note: "two\nlines".to_string(),
				closed: NaiveDate::from_ymd_opt(2020, 1, 2),
			})
		).unwrap();
		assert_eq!(sink.finish().unwrap(), 2);

		let contents = fs::read_to_string(&path).unwrap();
		assert_eq!(contents, "1,plain,\n2,\"two\nlines\",2020-01-02\n");
	}

	#[test]
	fn replaces_existing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("rows.csv");
		fs::write(&path, "stale\nstale\nstale\n").unwrap();

		let mut sink = RowSink::create(&path).unwrap();
		sink.write(&Row { id: 7, note: "fresh".to_string(), closed: None }).unwrap();
		sink.finish().unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "7,fresh,\n");
	}

	#[test]
	fn missing_parent_directory_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("absent").join("rows.csv");

		match RowSink::create(&path) {
			Err(GenerationError::MissingDirectory(missing)) => {
				assert_eq!(missing, dir.path().join("absent"));
			}
			Err(other) => panic!("unexpected error: {other}"),
			Ok(_) => panic!("sink created without a parent directory"),
		}
	}
}
