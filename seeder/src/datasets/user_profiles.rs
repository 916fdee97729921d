use common::config::GenerationConfig;
use common::domains::{ Gender, MaritalStatus, ValueDomain };
use common::error::Result;
use common::generator::{ Dataset, DatasetGenerator, GenerationStats };
use common::models::UserProfile;
use common::sink::RowSink;
use common::source::{ years_ago, RandomSource };

const BIO_PARAGRAPHS: usize = 3;
const OLDEST_AGE_YEARS: u32 = 60;
const YOUNGEST_AGE_YEARS: u32 = 18;

/// One profile per user, keyed by the user's id.
pub struct UserProfilesGenerator;

impl DatasetGenerator for UserProfilesGenerator {
	fn dataset(&self) -> Dataset {
		Dataset::UserProfiles
	}

	fn write_rows(
		&self,
		config: &GenerationConfig,
		source: &mut RandomSource,
		sink: &mut RowSink
	) -> Result<GenerationStats> {
		let earliest_birthday = years_ago(config.today, OLDEST_AGE_YEARS);
		let latest_birthday = years_ago(config.today, YOUNGEST_AGE_YEARS);

		for user_id in 1..=config.users_count {
			let bio = source.paragraphs(BIO_PARAGRAPHS);
			let location = source.city();
			let birthday = source.date_between(earliest_birthday, latest_birthday);
			let gender = Gender::choose(source.rng()).code();
			let marital_status = MaritalStatus::choose(source.rng()).code();

			sink.write(
				&(UserProfile {
					user_id,
					bio,
					location,
					birthday,
					gender,
					marital_status,
					page_preference: config.page_preference,
				})
			)?;
		}

		Ok(GenerationStats::plain(sink.rows_written()))
	}
}
