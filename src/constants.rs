// Central constants for game balance.

/// Highest valid arcana skill id. The skill catalog is a fixed set of 54
/// entries, one bit each in a character's `arcana_skills` column.
pub const MAX_SKILL_ID: i32 = 53;

/// Attribute scaling rate used when a character has invested zero points in
/// the relevant attribute.
pub const BASE_ATTRIBUTE_RATE: f64 = 0.08;

/// Divisor turning invested attribute points into a scaling rate
/// (`points / 40`). Tuned by the game masters; do not change without a
/// balance pass.
pub const ATTRIBUTE_RATE_DIVISOR: f64 = 40.0;

/// Attribute points a character earns per level.
pub const ATTRIBUTE_POINTS_PER_LEVEL: i32 = 5;
