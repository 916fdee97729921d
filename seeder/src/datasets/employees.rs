use common::config::GenerationConfig;
use common::domains::{ Gender, ValueDomain };
use common::error::Result;
use common::generator::{ Dataset, DatasetGenerator, GenerationStats };
use common::models::Employee;
use common::sink::RowSink;
use common::source::{ years_ago, RandomSource };

const EMPLOYMENT_HISTORY_YEARS: u32 = 10;
const MIN_SALARY: f64 = 30_000.0;
const MAX_SALARY: f64 = 120_000.0;

pub struct EmployeesGenerator;

impl DatasetGenerator for EmployeesGenerator {
	fn dataset(&self) -> Dataset {
		Dataset::Employees
	}

	fn write_rows(
		&self,
		config: &GenerationConfig,
		source: &mut RandomSource,
		sink: &mut RowSink
	) -> Result<GenerationStats> {
		let today = config.today;
		let earliest_hire = years_ago(today, EMPLOYMENT_HISTORY_YEARS);

		for id in 1..=config.employees_count {
			let first_name = source.first_name();
			let last_name = source.last_name();
			let gender = Gender::choose(source.rng()).code();
			let employment_date = source.date_between(earliest_hire, today);
			let termination_date = if source.chance(config.termination_probability) {
				Some(source.date_between(employment_date, today))
			} else {
				None
			};
			let salary = source.amount(MIN_SALARY, MAX_SALARY);
			let role_id = source.int_in(1..=config.employee_roles_count);
			let user_id = source.int_in(1..=config.users_count);

			sink.write(
				&(Employee {
					id,
					first_name,
					last_name,
					gender,
					employment_date,
					termination_date,
					salary,
					role_id,
					user_id,
				})
			)?;
		}

		Ok(GenerationStats::plain(sink.rows_written()))
	}
}
