//! Deterministic random number generation.
//!
//! RULE: Nothing in the generation engine may call any platform RNG.
//! All randomness flows through GeneratorRng instances derived
//! from the single master seed for the run.
//!
//! Each generator gets its own RNG stream, seeded deterministically
//! from (master_seed XOR slot hash). This means:
//!   - Adding a new generator never changes existing generators' streams.
//!   - Each generator's stream is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single generator.
pub struct GeneratorRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl GeneratorRng {
    /// Create a generator RNG from the master seed and a stable
    /// slot index. The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll a u64 in [lo, hi], both ends inclusive.
    pub fn range_u64(&mut self, lo: u64, hi: u64) -> u64 {
        assert!(lo <= hi, "lo must be <= hi");
        lo + self.next_u64_below(hi - lo + 1)
    }

    /// Roll a float uniformly in [lo, hi).
    pub fn uniform_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Pick one element of a non-empty slice uniformly.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.next_u64_below(items.len() as u64) as usize;
        &items[index]
    }
}

/// All generator RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_generator(&self, slot: GeneratorSlot) -> GeneratorRng {
        GeneratorRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable generator slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every generator's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum GeneratorSlot {
    Journey = 0,
    SpendLedger = 1,
    IdSalt = 2,
    // Add new generators here — append only.
}

impl GeneratorSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Journey => "journey",
            Self::SpendLedger => "spend_ledger",
            Self::IdSalt => "id_salt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = RngBank::new(42).for_generator(GeneratorSlot::Journey);
        let mut b = RngBank::new(42).for_generator(GeneratorSlot::Journey);
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn slots_yield_distinct_streams() {
        let bank = RngBank::new(42);
        let mut journey = bank.for_generator(GeneratorSlot::Journey);
        let mut spend = bank.for_generator(GeneratorSlot::SpendLedger);
        // Not a proof of independence, just a sanity check that the
        // derived seeds differ.
        assert_ne!(journey.next_u64(), spend.next_u64());
    }

    #[test]
    fn range_u64_is_inclusive_and_bounded() {
        let mut rng = RngBank::new(7).for_generator(GeneratorSlot::Journey);
        let mut saw_lo = false;
        let mut saw_hi = false;
        for _ in 0..10_000 {
            let v = rng.range_u64(1, 6);
            assert!((1..=6).contains(&v));
            saw_lo |= v == 1;
            saw_hi |= v == 6;
        }
        assert!(saw_lo && saw_hi);
    }

    #[test]
    fn chance_respects_probability_roughly() {
        let mut rng = RngBank::new(42).for_generator(GeneratorSlot::Journey);
        let hits = (0..10_000).filter(|_| rng.chance(0.18)).count();
        assert!((1500..=2100).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn uniform_f64_stays_in_range() {
        let mut rng = RngBank::new(42).for_generator(GeneratorSlot::SpendLedger);
        for _ in 0..1000 {
            let v = rng.uniform_f64(29.99, 499.99);
            assert!((29.99..499.99).contains(&v));
        }
    }
}
