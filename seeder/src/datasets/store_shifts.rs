use common::config::GenerationConfig;
use common::error::Result;
use common::generator::{ Dataset, DatasetGenerator, GenerationStats };
use common::models::StoreShift;
use common::sink::RowSink;
use common::source::{ years_ago, RandomSource };
use common::unique::UniqueKeys;
use tracing::{ info, warn };

const SHIFT_HISTORY_YEARS: u32 = 5;

// Past this share of taken pairs, random draws mostly collide
const DENSE_FILL_RATIO: f64 = 0.99;

/// Shifts with a globally unique (store_id, employee_id) pair.
///
/// Pairs are sampled up front into an in-memory set, then the set is walked
/// once to write the rows. Peak memory grows with the number of shifts.
/// Requests that fill nearly all of the key space finish by picking from the
/// pairs still unused instead of drawing blindly.
pub struct StoreShiftsGenerator;

impl StoreShiftsGenerator {
	/// Number of distinct pairs that can actually be produced
	pub fn target_rows(config: &GenerationConfig) -> u64 {
		config.store_shifts_count.min(config.store_shift_key_space())
	}
}

impl DatasetGenerator for StoreShiftsGenerator {
	fn dataset(&self) -> Dataset {
		Dataset::StoreShifts
	}

	fn write_rows(
		&self,
		config: &GenerationConfig,
		source: &mut RandomSource,
		sink: &mut RowSink
	) -> Result<GenerationStats> {
		let target = Self::target_rows(config);
		if target < config.store_shifts_count {
			warn!(
				"Requested {} store shifts but only {} distinct (store, employee) pairs exist",
				config.store_shifts_count,
				target
			);
		}

		let space = config.store_shift_key_space();
		let mut pairs = UniqueKeys::with_capacity(
			"(store_id, employee_id) pair",
			target as usize,
			config.max_draw_attempts
		);
		while (pairs.len() as u64) < target && pairs.fill_ratio(space) < DENSE_FILL_RATIO {
			pairs.draw(|| {
				let store_id = source.int_in(1..=config.stores_count);
				let employee_id = source.int_in(1..=config.employees_count);
				(store_id, employee_id)
			})?;

			let accepted = pairs.len() as u64;
			if accepted % config.progress_interval == 0 {
				info!(
					"Sampled {} unique shifts (acceptance {:.4})",
					accepted,
					pairs.acceptance_rate()
				);
			}
		}

		let remaining = target - (pairs.len() as u64);
		if remaining > 0 {
			info!(
				"Key space {:.2}% taken, picking the last {} shifts from the unused pairs",
				pairs.fill_ratio(space) * 100.0,
				remaining
			);
			let stores = config.stores_count;
			let employees = config.employees_count;
			let universe = (1..=stores).flat_map(move |store_id| {
				(1..=employees).map(move |employee_id| (store_id, employee_id))
			});
			pairs.fill_from(universe, remaining as usize, source.rng())?;
		}

		let draws = pairs.draws();
		info!("Generated {} unique shifts. Writing...", pairs.len());

		let today = config.today;
		let earliest_start = years_ago(today, SHIFT_HISTORY_YEARS);
		for (store_id, employee_id) in pairs.into_keys() {
			let start_date = source.date_between(earliest_start, today);
			let end_date = source.date_between(start_date, today);
			let user_id = source.int_in(1..=config.users_count);

			sink.write(&(StoreShift { store_id, employee_id, start_date, end_date, user_id }))?;

			let written = sink.rows_written();
			if written % config.progress_interval == 0 {
				info!("Processed {} shifts", written);
			}
		}

		Ok(GenerationStats { rows: sink.rows_written(), draws })
	}
}
