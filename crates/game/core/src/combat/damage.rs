//! Damage calculation and application.

/// Calculate damage dealt by one attack.
///
/// # Formula
///
/// ```text
/// damage = floor((roll - 0.5) * strength)
/// ```
///
/// Evaluated in integers as `(2 * roll - 1) * strength / 2`, which is exact
/// for every roll and strength. Even the minimum roll deals half the strength
/// (rounded down), so a strength of 2 or more always hurts.
///
/// # Arguments
///
/// * `roll` - Die face, expected in `1..=6`
/// * `strength` - Attacker strength
///
/// # Returns
///
/// Final damage value
pub fn compute_damage(roll: u32, strength: u32) -> u32 {
    let doubled = roll.saturating_mul(2).saturating_sub(1);
    doubled.saturating_mul(strength) / 2
}

/// Apply damage to a stamina pool.
///
/// # Returns
///
/// New stamina value (clamped to 0)
pub fn apply_damage(current: u32, damage: u32) -> u32 {
    current.saturating_sub(damage)
}
