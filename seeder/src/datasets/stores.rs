use common::config::GenerationConfig;
use common::domains::{ StoreCategory, ValueDomain };
use common::error::Result;
use common::generator::{ Dataset, DatasetGenerator, GenerationStats };
use common::models::Store;
use common::sink::RowSink;
use common::source::{ years_ago, RandomSource };

const STORE_DESC_PARAGRAPHS: usize = 3;
const STORE_HISTORY_YEARS: u32 = 20;

pub struct StoresGenerator;

impl DatasetGenerator for StoresGenerator {
	fn dataset(&self) -> Dataset {
		Dataset::Stores
	}

	fn write_rows(
		&self,
		config: &GenerationConfig,
		source: &mut RandomSource,
		sink: &mut RowSink
	) -> Result<GenerationStats> {
		let today = config.today;
		let earliest_opening = years_ago(today, STORE_HISTORY_YEARS);

		for id in 1..=config.stores_count {
			let name = format!("{} Store", source.company_name());
			let description = source.paragraphs(STORE_DESC_PARAGRAPHS);
			let category = StoreCategory::choose(source.rng()).code();
			let address = source.street_address();
			let city = source.city();
			let state = source.state_abbr();
			let zip_code = source.zip_code();
			let country = source.country();
			let open_date = source.date_between(earliest_opening, today);
			let close_date = if source.chance(config.close_probability) {
				Some(source.date_between(open_date, today))
			} else {
				None
			};
			let user_id = source.int_in(1..=config.users_count);

			sink.write(
				&(Store {
					id,
					name,
					description,
					category,
					address,
					city,
					state,
					zip_code,
					country,
					open_date,
					close_date,
					user_id,
				})
			)?;
		}

		Ok(GenerationStats::plain(sink.rows_written()))
	}
}
