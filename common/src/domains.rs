use rand::Rng;
use serde::{ Deserialize, Serialize };

/// A closed, ordered set of categorical values stored by integer code.
pub trait ValueDomain: Copy + Sized + 'static {
	/// Every member, in code order
	const ALL: &'static [Self];

	fn code(self) -> u8;

	fn name(self) -> &'static str;

	/// Pick a member uniformly at random
	fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Self::ALL[rng.gen_range(0..Self::ALL.len())]
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessLevel {
	Unconfirmed = 0,
	Regular = 1,
	Moderator = 2,
	Admin = 3,
}

impl ValueDomain for AccessLevel {
	const ALL: &'static [Self] = &[
		AccessLevel::Unconfirmed,
		AccessLevel::Regular,
		AccessLevel::Moderator,
		AccessLevel::Admin,
	];

	fn code(self) -> u8 {
		self as u8
	}

	fn name(self) -> &'static str {
		match self {
			AccessLevel::Unconfirmed => "Unconfirmed",
			AccessLevel::Regular => "Regular",
			AccessLevel::Moderator => "Moderator",
			AccessLevel::Admin => "Admin",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
	Single = 0,
	Married = 1,
	Widowed = 2,
	Separated = 3,
	Divorced = 4,
}

impl ValueDomain for MaritalStatus {
	const ALL: &'static [Self] = &[
		MaritalStatus::Single,
		MaritalStatus::Married,
		MaritalStatus::Widowed,
		MaritalStatus::Separated,
		MaritalStatus::Divorced,
	];

	fn code(self) -> u8 {
		self as u8
	}

	fn name(self) -> &'static str {
		match self {
			MaritalStatus::Single => "Single",
			MaritalStatus::Married => "Married",
			MaritalStatus::Widowed => "Widowed",
			MaritalStatus::Separated => "Separated",
			MaritalStatus::Divorced => "Divorced",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
	Female = 0,
	Male = 1,
	Other = 2,
}

impl ValueDomain for Gender {
	const ALL: &'static [Self] = &[Gender::Female, Gender::Male, Gender::Other];

	fn code(self) -> u8 {
		self as u8
	}

	fn name(self) -> &'static str {
		match self {
			Gender::Female => "Female",
			Gender::Male => "Male",
			Gender::Other => "Other",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreCategory {
	General = 0,
	Food = 1,
	Clothing = 2,
	Electronics = 3,
	Furniture = 4,
}

impl ValueDomain for StoreCategory {
	const ALL: &'static [Self] = &[
		StoreCategory::General,
		StoreCategory::Food,
		StoreCategory::Clothing,
		StoreCategory::Electronics,
		StoreCategory::Furniture,
	];

	fn code(self) -> u8 {
		self as u8
	}

	fn name(self) -> &'static str {
		match self {
			StoreCategory::General => "General",
			StoreCategory::Food => "Food",
			StoreCategory::Clothing => "Clothing",
			StoreCategory::Electronics => "Electronics",
			StoreCategory::Furniture => "Furniture",
		}
	}
}
