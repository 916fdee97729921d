use common::config::GenerationConfig;
use common::domains::ValueDomain;
use common::error::Result;
use common::generator::{ Dataset, DatasetGenerator, GenerationStats };
use common::models::User;
use common::sink::RowSink;
use common::source::RandomSource;
use common::unique::UniqueKeys;

/// Users with globally unique usernames.
pub struct UsersGenerator;

impl DatasetGenerator for UsersGenerator {
	fn dataset(&self) -> Dataset {
		Dataset::Users
	}

	fn write_rows(
		&self,
		config: &GenerationConfig,
		source: &mut RandomSource,
		sink: &mut RowSink
	) -> Result<GenerationStats> {
		let mut usernames = UniqueKeys::with_capacity(
			"username",
			config.users_count as usize,
			config.max_draw_attempts
		);

		for id in 1..=config.users_count {
			let username = usernames.draw(|| source.username())?;
			sink.write(
				&(User {
					id,
					username,
					password: config.password_hash.clone(),
					access_level: config.access_level.code(),
				})
			)?;
		}

		Ok(GenerationStats { rows: sink.rows_written(), draws: usernames.draws() })
	}
}
