use strum::{EnumCount, IntoEnumIterator};

use crate::rng::RandomSource;

/// Identity of the enemy faced in a battle.
///
/// Chosen once when the battle is created and never re-rolled, not even by a
/// reset.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    Ork,
    Goblin,
    Troll,
}

impl Archetype {
    /// Pick one archetype uniformly at random.
    pub fn random(rng: &mut (impl RandomSource + ?Sized)) -> Self {
        let index = rng.below(Self::COUNT as u32) as usize;
        Self::iter().nth(index).unwrap_or(Self::Ork)
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
