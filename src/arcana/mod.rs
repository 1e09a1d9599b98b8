//! The arcana skill system: the per-character skill bitfield, the immutable
//! catalog snapshot, and the gacha draw that unlocks new skills.

pub mod bitfield;
pub mod catalog;
pub mod gacha;
