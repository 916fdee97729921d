use std::ops::RangeInclusive;

use chrono::{ Duration, Months, NaiveDate };
use fake::Fake;
use fake::faker::address::en::{
	BuildingNumber,
	CityName,
	CountryName,
	StateAbbr,
	StreetName,
	ZipCode,
};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::Username;
use fake::faker::job::en::Title;
use fake::faker::lorem::en::Paragraphs;
use fake::faker::name::en::{ FirstName, LastName };
use rand::rngs::StdRng;
use rand::{ Rng, SeedableRng };

// Spreads per-dataset streams apart when deriving seeds from a shared base
const STREAM_STRIDE: u64 = 0x9e37_79b9_7f4a_7c15;

/// Private source of realistic fake values for a single worker.
///
/// Every worker builds its own instance, so random streams are never shared.
pub struct RandomSource {
	rng: StdRng,
}

impl RandomSource {
	pub fn from_entropy() -> Self {
		Self { rng: StdRng::from_entropy() }
	}

	/// Deterministic source for `stream` derived from a base seed.
	pub fn seeded(seed: u64, stream: u64) -> Self {
		let seed = seed.wrapping_add(stream.wrapping_mul(STREAM_STRIDE));
		Self { rng: StdRng::seed_from_u64(seed) }
	}

	pub fn new(seed: Option<u64>, stream: u64) -> Self {
		match seed {
			Some(seed) => Self::seeded(seed, stream),
			None => Self::from_entropy(),
		}
	}

	pub fn rng(&mut self) -> &mut StdRng {
		&mut self.rng
	}

	pub fn username(&mut self) -> String {
		Username().fake_with_rng(&mut self.rng)
	}

	pub fn first_name(&mut self) -> String {
		FirstName().fake_with_rng(&mut self.rng)
	}

	pub fn last_name(&mut self) -> String {
		LastName().fake_with_rng(&mut self.rng)
	}

	pub fn job_title(&mut self) -> String {
		Title().fake_with_rng(&mut self.rng)
	}

	pub fn company_name(&mut self) -> String {
		CompanyName().fake_with_rng(&mut self.rng)
	}

	pub fn street_address(&mut self) -> String {
		let number: String = BuildingNumber().fake_with_rng(&mut self.rng);
		let street: String = StreetName().fake_with_rng(&mut self.rng);
		format!("{} {}", number, street)
	}

	pub fn city(&mut self) -> String {
		CityName().fake_with_rng(&mut self.rng)
	}

	pub fn state_abbr(&mut self) -> String {
		StateAbbr().fake_with_rng(&mut self.rng)
	}

	pub fn zip_code(&mut self) -> String {
		ZipCode().fake_with_rng(&mut self.rng)
	}

	pub fn country(&mut self) -> String {
		CountryName().fake_with_rng(&mut self.rng)
	}

	/// `count` lorem paragraphs joined by newlines
	pub fn paragraphs(&mut self, count: usize) -> String {
		let paragraphs: Vec<String> = Paragraphs(count..count + 1).fake_with_rng(&mut self.rng);
		paragraphs.join("\n")
	}

	/// Uniform date in `[start, end]`. An inverted range collapses to `start`.
	pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
		let span = (end - start).num_days();
		if span <= 0 {
			return start;
		}
		start + Duration::days(self.rng.gen_range(0..=span))
	}

	pub fn int_in(&mut self, range: RangeInclusive<u64>) -> u64 {
		self.rng.gen_range(range)
	}

	pub fn chance(&mut self, probability: f64) -> bool {
		self.rng.gen_bool(probability)
	}

	/// Uniform amount in `[low, high]` rounded to cents
	pub fn amount(&mut self, low: f64, high: f64) -> f64 {
		let raw: f64 = self.rng.gen_range(low..=high);
		(raw * 100.0).round() / 100.0
	}
}

/// The date `years` years before `today`, clamped to the earliest representable date.
pub fn years_ago(today: NaiveDate, years: u32) -> NaiveDate {
	today.checked_sub_months(Months::new(years * 12)).unwrap_or(NaiveDate::MIN)
}
