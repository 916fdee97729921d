use common::config::GenerationConfig;
use common::error::Result;
use common::generator::{ Dataset, DatasetGenerator, GenerationStats };
use common::models::EmployeeRole;
use common::sink::RowSink;
use common::source::RandomSource;

const ROLE_DESC_PARAGRAPHS: usize = 3;

pub struct EmployeeRolesGenerator;

impl DatasetGenerator for EmployeeRolesGenerator {
	fn dataset(&self) -> Dataset {
		Dataset::EmployeeRoles
	}

	fn write_rows(
		&self,
		config: &GenerationConfig,
		source: &mut RandomSource,
		sink: &mut RowSink
	) -> Result<GenerationStats> {
		let levels = u64::from(config.min_role_level)..=u64::from(config.max_role_level);

		for id in 1..=config.employee_roles_count {
			let role_name = source.job_title();
			let role_desc = source.paragraphs(ROLE_DESC_PARAGRAPHS);
			// Bounded by max_role_level, which is a u32
			let role_level = source.int_in(levels.clone()) as u32;
			let user_id = source.int_in(1..=config.users_count);

			sink.write(&(EmployeeRole { id, role_name, role_desc, role_level, user_id }))?;
		}

		Ok(GenerationStats::plain(sink.rows_written()))
	}
}
