//! Damage calculation and application.

/// Every landed attack deals at least this much damage.
pub const MINIMUM_DAMAGE: u32 = 1;

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// final_damage = max(attack - armor, 1)
/// ```
///
/// The subtraction saturates, so an arbitrarily large armor score still
/// lets one point through.
///
/// # Arguments
///
/// * `attack` - Attacker's current damage score
/// * `armor` - Defender's current armor score (including active effects)
pub fn resolve_damage(attack: u32, armor: u32) -> u32 {
    attack.saturating_sub(armor).max(MINIMUM_DAMAGE)
}

/// Apply damage to current HP.
///
/// Unlike a meter, hit points are allowed to drop below zero: the first
/// combatant at or below zero loses.
pub fn apply_damage(hit_points: i32, damage: u32) -> i32 {
    hit_points.saturating_sub_unsigned(damage)
}
