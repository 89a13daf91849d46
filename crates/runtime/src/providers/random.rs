//! OS-seeded randomness for live battles.
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use game_core::RandomSource;

/// [`RandomSource`] drawing from a `StdRng` seeded by the operating system.
#[derive(Debug)]
pub struct ThreadRandom {
    rng: StdRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn below(&mut self, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    fn roll_d6(&mut self) -> u32 {
        self.rng.gen_range(1..=6)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_stay_on_the_die() {
        let mut rng = ThreadRandom::new();
        for _ in 0..200 {
            assert!((1..=6).contains(&rng.roll_d6()));
            assert!(rng.below(3) < 3);
        }
    }
}
