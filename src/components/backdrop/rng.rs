//! Deterministic random source for entity generation.
//!
//! Splitmix64 over a caller-supplied seed: the same seed always produces
//! the same scatter, which the generator tests rely on. Components seed
//! from the wall clock at mount.

/// Small uniform `f64` generator.
#[derive(Clone, Debug)]
pub struct Rng {
	state: u64,
}

impl Rng {
	/// Create a generator from an explicit seed.
	pub fn new(seed: u64) -> Self {
		Self { state: seed }
	}

	/// Seed from the host clock.
	pub fn from_clock() -> Self {
		Self::new(js_sys::Date::now().to_bits())
	}

	fn next_u64(&mut self) -> u64 {
		self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
		let mut z = self.state;
		z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
		z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
		z ^ (z >> 31)
	}

	/// Next sample in `[0, 1)`.
	pub fn next_unit(&mut self) -> f64 {
		(self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
	}

	/// Uniform sample in `[lo, hi)`.
	pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
		lo + self.next_unit() * (hi - lo)
	}
}

#[cfg(test)]
mod tests {
	use super::Rng;

	#[test]
	fn same_seed_same_sequence() {
		let mut a = Rng::new(7);
		let mut b = Rng::new(7);
		for _ in 0..64 {
			assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
		}
	}

	#[test]
	fn units_stay_in_range() {
		let mut rng = Rng::new(99);
		for _ in 0..1024 {
			let v = rng.next_unit();
			assert!((0.0..1.0).contains(&v));
		}
	}

	#[test]
	fn range_respects_bounds() {
		let mut rng = Rng::new(3);
		for _ in 0..1024 {
			let v = rng.range(-0.18, 0.18);
			assert!((-0.18..0.18).contains(&v));
		}
	}

	#[test]
	fn different_seeds_diverge() {
		let mut a = Rng::new(1);
		let mut b = Rng::new(2);
		let same = (0..32).filter(|_| a.next_unit() == b.next_unit()).count();
		assert!(same < 32);
	}
}
