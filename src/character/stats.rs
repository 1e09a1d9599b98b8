//! Derived character statistics.
//!
//! Maximum HP/MP and the combat modifiers are recomputed from the race base
//! stats, level, and invested attribute points every time they are shown or
//! checked; only `current_hp`/`current_mp` are stored. Every formula rounds
//! up. These numbers gate game balance, so the shapes below must not drift.

use crate::constants::{ATTRIBUTE_POINTS_PER_LEVEL, ATTRIBUTE_RATE_DIVISOR, BASE_ATTRIBUTE_RATE};
use crate::database::models::{Character, Race};

/// Scaling rate for an attribute: a small flat rate when nothing has been
/// invested, otherwise `points / 40`.
fn attribute_rate(points: i32) -> f64 {
    if points == 0 {
        BASE_ATTRIBUTE_RATE
    } else {
        points as f64 / ATTRIBUTE_RATE_DIVISOR
    }
}

fn scaled(base: f64, per_level: f64, level: i32, points: i32) -> i32 {
    (base + per_level * level as f64 * (1.0 + attribute_rate(points) * points as f64)).ceil()
        as i32
}

/// Maximum hit points for a character of the given race, level, and vitality.
pub fn max_hp(race: &Race, level: i32, vitality: i32) -> i32 {
    scaled(race.base_hp, race.hp_per_level, level, vitality)
}

/// Maximum mana points, scaled by invested mana.
pub fn max_mp(race: &Race, level: i32, mana: i32) -> i32 {
    scaled(race.base_mp, race.mp_per_level, level, mana)
}

/// Attack modifier, scaled by invested strength.
pub fn attack_power(race: &Race, level: i32, strength: i32) -> i32 {
    scaled(race.base_strength, race.strength_per_level, level, strength)
}

/// Movement/initiative modifier, scaled by invested dexterity.
pub fn speed(race: &Race, level: i32, dexterity: i32) -> i32 {
    scaled(race.base_speed, race.speed_per_level, level, dexterity)
}

/// Defense modifier. Resistance has no per-level growth; only the invested
/// points scale the race baseline.
pub fn defense(race: &Race, resistance: i32) -> i32 {
    (race.base_resistance * (1.0 + attribute_rate(resistance) * resistance as f64)).ceil() as i32
}

/// Attribute points the character has earned but not yet spent, floored at
/// zero so legacy over-allocated characters display 0 rather than a negative
/// number.
pub fn remaining_attribute_points(character: &Character) -> i32 {
    let earned = character.level * ATTRIBUTE_POINTS_PER_LEVEL;
    let spent = character.vitality
        + character.dexterity
        + character.intelligence
        + character.strength
        + character.resistance
        + character.mana;
    (earned - spent).max(0)
}
