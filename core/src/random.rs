use rand::prelude::*;

/// Randomness consumed by the engines: shuffles, food placement and adversary
/// decisions. Swappable so hosts can replay a seed and tests can script picks.
pub trait RandomSource {
    /// Uniform pick in `0..bound`, `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Returns `true` with probability `p`, `p` is within `[0, 1]`.
    fn chance(&mut self, p: f64) -> bool;
}

impl RandomSource for SmallRng {
    fn below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.random_bool(p)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }

    fn chance(&mut self, p: f64) -> bool {
        (**self).chance(p)
    }
}

pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// In-place Fisher-Yates, every permutation equally likely given a uniform source.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}
