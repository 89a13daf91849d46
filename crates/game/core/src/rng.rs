//! Randomness sources consumed by the duel rules.
//!
//! The rules only ever need two kinds of draw: a d6 roll for damage and a
//! fair coin flip for turn order. Both are expressed on [`RandomSource`] so
//! the runtime can plug in an OS-seeded generator while tests replay a fixed
//! script.

/// Source of uniform random draws.
///
/// Only [`RandomSource::next_u32`] is required; the remaining methods derive
/// their draws from it and may be overridden by sources with better
/// primitives.
pub trait RandomSource: Send + Sync {
    /// Generate a uniformly distributed u32 value.
    fn next_u32(&mut self) -> u32;

    /// Generate a value in `0..bound`. Returns 0 when `bound <= 1`.
    fn below(&mut self, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }
        self.next_u32() % bound
    }

    /// Roll a six-sided die (1-6 inclusive).
    fn roll_d6(&mut self) -> u32 {
        self.below(6) + 1
    }

    /// Flip a fair coin.
    fn coin_flip(&mut self) -> bool {
        self.below(2) == 1
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }

    fn roll_d6(&mut self) -> u32 {
        (**self).roll_d6()
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit output through an xorshift and a
/// random rotation. Same seed, same sequence, which makes whole battles
/// replayable from a single number.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// XSH-RR output permutation.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }
}

/// Replays scripted draws, cycling through each script independently.
///
/// Empty scripts fall back to the minimum draw: a roll of 1, a coin flip of
/// `true` and a pick of 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    rolls: Vec<u32>,
    flips: Vec<bool>,
    picks: Vec<u32>,
    roll_cursor: usize,
    flip_cursor: usize,
    pick_cursor: usize,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// d6 faces returned by [`RandomSource::roll_d6`], in order.
    #[must_use]
    pub fn rolls(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.rolls = rolls.into_iter().collect();
        self
    }

    /// Results returned by [`RandomSource::coin_flip`], in order.
    #[must_use]
    pub fn flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips = flips.into_iter().collect();
        self
    }

    /// Raw values reduced modulo the bound by [`RandomSource::below`].
    #[must_use]
    pub fn picks(mut self, picks: impl IntoIterator<Item = u32>) -> Self {
        self.picks = picks.into_iter().collect();
        self
    }

    fn cycle<T: Copy>(script: &[T], cursor: &mut usize) -> Option<T> {
        let value = script.get(*cursor % script.len().max(1)).copied()?;
        *cursor += 1;
        Some(value)
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        Self::cycle(&self.picks, &mut self.pick_cursor).unwrap_or(0)
    }

    fn roll_d6(&mut self) -> u32 {
        Self::cycle(&self.rolls, &mut self.roll_cursor).unwrap_or(1)
    }

    fn coin_flip(&mut self) -> bool {
        Self::cycle(&self.flips, &mut self.flip_cursor).unwrap_or(true)
    }
}
