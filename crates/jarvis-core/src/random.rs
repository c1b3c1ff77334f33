//! Uniform random source used for reply pools and the thinking delay.
//!
//! Production uses an unseeded thread RNG (`ThreadRandom` in jarvis-infra).
//! Tests substitute a scripted source to assert exact output.

/// Abstraction over a uniform pseudo-random number generator.
pub trait RandomSource: Send + Sync {
    /// A uniformly distributed integer in `[0, bound)`. Returns 0 when
    /// `bound` is 0.
    fn below(&self, bound: u64) -> u64;
}

/// Pick one element of a non-empty slice uniformly at random.
pub fn choose<'a, T>(random: &impl RandomSource, items: &'a [T]) -> &'a T {
    let index = random.below(items.len() as u64) as usize;
    // Clamp so a misbehaving source cannot index out of bounds.
    &items[index.min(items.len() - 1)]
}
