mod employee_roles;
mod employees;
mod store_shifts;
mod stores;
mod user_profiles;
mod users;

pub use employee_roles::EmployeeRolesGenerator;
pub use employees::EmployeesGenerator;
pub use store_shifts::StoreShiftsGenerator;
pub use stores::StoresGenerator;
pub use user_profiles::UserProfilesGenerator;
pub use users::UsersGenerator;

use common::generator::{ Dataset, DatasetGenerator };

pub fn generator_for(dataset: Dataset) -> Box<dyn DatasetGenerator> {
	match dataset {
		Dataset::Users => Box::new(UsersGenerator),
		Dataset::UserProfiles => Box::new(UserProfilesGenerator),
		Dataset::EmployeeRoles => Box::new(EmployeeRolesGenerator),
		Dataset::Employees => Box::new(EmployeesGenerator),
		Dataset::Stores => Box::new(StoresGenerator),
		Dataset::StoreShifts => Box::new(StoreShiftsGenerator),
	}
}

/// One generator per dataset, in the order the driver launches them
pub fn all() -> Vec<Box<dyn DatasetGenerator>> {
	Dataset::ALL.into_iter().map(generator_for).collect()
}
