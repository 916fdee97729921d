use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{ GenerationError, Result };

/// Rejection sampler that only accepts keys it has not seen before.
///
/// Every candidate draw is counted, so callers can report how efficient the
/// sampling was. A single key gives up after `max_attempts` consecutive
/// collisions instead of spinning forever on a nearly exhausted key space.
pub struct UniqueKeys<K> {
	label: &'static str,
	seen: HashSet<K>,
	draws: u64,
	max_attempts: u64,
}

impl<K: Eq + Hash + Clone> UniqueKeys<K> {
	pub fn new(label: &'static str, max_attempts: u64) -> Self {
		Self::with_capacity(label, 0, max_attempts)
	}

	pub fn with_capacity(label: &'static str, capacity: usize, max_attempts: u64) -> Self {
		Self {
			label,
			seen: HashSet::with_capacity(capacity),
			draws: 0,
			max_attempts,
		}
	}

	/// Draw candidates until one is new, record it and return it.
	pub fn draw<F>(&mut self, mut candidate: F) -> Result<K> where F: FnMut() -> K {
		for _ in 0..self.max_attempts {
			self.draws += 1;
			let key = candidate();
			if !self.seen.contains(&key) {
				self.seen.insert(key.clone());
				return Ok(key);
			}
		}

		Err(GenerationError::UniquenessExhausted {
			key: self.label,
			attempts: self.max_attempts,
			accepted: self.seen.len(),
		})
	}

	/// Accept `count` more keys picked uniformly from the unused part of `universe`.
	///
	/// Walks the whole universe once, so only worth it when most of it is
	/// already taken and rejection sampling would mostly collide.
	pub fn fill_from<I, R>(&mut self, universe: I, count: usize, rng: &mut R) -> Result<()>
		where I: IntoIterator<Item = K>, R: Rng + ?Sized
	{
		let mut free: Vec<K> = universe
			.into_iter()
			.filter(|key| !self.seen.contains(key))
			.collect();
		if free.len() < count {
			return Err(GenerationError::KeySpaceExhausted {
				key: self.label,
				requested: count,
				available: free.len(),
			});
		}

		let (picked, _) = free.partial_shuffle(rng, count);
		self.draws += count as u64;
		self.seen.extend(picked.iter().cloned());
		Ok(())
	}

	/// Share of a `space`-sized key space already accepted
	pub fn fill_ratio(&self, space: u64) -> f64 {
		if space == 0 {
			1.0
		} else {
			(self.seen.len() as f64) / (space as f64)
		}
	}

	pub fn len(&self) -> usize {
		self.seen.len()
	}

	pub fn is_empty(&self) -> bool {
		self.seen.is_empty()
	}

	pub fn draws(&self) -> u64 {
		self.draws
	}

	/// Accepted keys per candidate drawn; 1.0 before anything was drawn
	pub fn acceptance_rate(&self) -> f64 {
		if self.draws == 0 {
			1.0
		} else {
			(self.seen.len() as f64) / (self.draws as f64)
		}
	}

	pub fn into_keys(self) -> HashSet<K> {
		self.seen
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	#[test]
	fn accepts_only_novel_keys() {
		let mut keys = UniqueKeys::new("pair", 1_000);
		let mut rng = StdRng::seed_from_u64(11);

		for _ in 0..9 {
			keys.draw(|| (rng.gen_range(1..=3u64), rng.gen_range(1..=3u64))).unwrap();
		}

		assert_eq!(keys.len(), 9);
		assert!(keys.draws() >= 9);
		assert!(keys.acceptance_rate() <= 1.0);
		let all = keys.into_keys();
		for store in 1..=3 {
			for employee in 1..=3 {
				assert!(all.contains(&(store, employee)));
			}
		}
	}

	#[test]
	fn exhausted_space_is_reported() {
		let mut keys = UniqueKeys::new("constant", 50);
		keys.draw(|| 1u8).unwrap();

		match keys.draw(|| 1u8) {
			Err(GenerationError::UniquenessExhausted { key, attempts, accepted }) => {
				assert_eq!(key, "constant");
				assert_eq!(attempts, 50);
				assert_eq!(accepted, 1);
			}
			other => panic!("expected exhaustion, got {other:?}"),
		}
		assert_eq!(keys.draws(), 51);
	}

	#[test]
	fn fill_from_takes_only_unused_keys() {
		let mut keys = UniqueKeys::new("number", 10);
		let mut rng = StdRng::seed_from_u64(3);
		for taken in [2u32, 4, 6] {
			keys.draw(|| taken).unwrap();
		}

		keys.fill_from(1..=10u32, 7, &mut rng).unwrap();

		assert_eq!(keys.len(), 10);
		assert_eq!(keys.draws(), 10);
		assert!((keys.fill_ratio(10) - 1.0).abs() < f64::EPSILON);
		let all = keys.into_keys();
		assert!((1..=10u32).all(|n| all.contains(&n)));
	}

	#[test]
	fn fill_from_picks_a_subset_of_the_free_keys() {
		let mut keys = UniqueKeys::new("number", 10);
		let mut rng = StdRng::seed_from_u64(8);
		keys.draw(|| 1u32).unwrap();

		keys.fill_from(1..=100u32, 5, &mut rng).unwrap();

		assert_eq!(keys.len(), 6);
		let all = keys.into_keys();
		assert!(all.iter().all(|n| (1..=100).contains(n)));
	}

	#[test]
	fn fill_from_reports_a_truly_exhausted_space() {
		let mut keys = UniqueKeys::new("number", 10);
		let mut rng = StdRng::seed_from_u64(1);
		keys.draw(|| 1u32).unwrap();

		match keys.fill_from(1..=3u32, 3, &mut rng) {
			Err(GenerationError::KeySpaceExhausted { key, requested, available }) => {
				assert_eq!(key, "number");
				assert_eq!(requested, 3);
				assert_eq!(available, 2);
			}
			other => panic!("expected exhaustion, got {other:?}"),
		}
		assert_eq!(keys.len(), 1);
	}

	#[test]
	fn acceptance_rate_without_draws() {
		let keys: UniqueKeys<u32> = UniqueKeys::new("empty", 10);
		assert!(keys.is_empty());
		assert_eq!(keys.acceptance_rate(), 1.0);
	}
}
