//! Randomness seam for question shuffling. Tests inject a seeded source.

/// Shuffles a question list in place.
pub trait RandomSource {
    fn shuffle(&mut self, items: &mut [String]);
}

impl RandomSource for fastrand::Rng {
    fn shuffle(&mut self, items: &mut [String]) {
        fastrand::Rng::shuffle(self, items);
    }
}

/// Leaves the order untouched. Useful when ordering must be fully predictable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShuffle;

impl RandomSource for NoShuffle {
    fn shuffle(&mut self, _items: &mut [String]) {}
}

/// Seeded generator when a seed is given, system-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    }
}
