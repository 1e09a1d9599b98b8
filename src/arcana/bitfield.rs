//! Pure bit-manipulation over a character's unlocked-skill set.
//!
//! A character's skills are persisted as a single BIGINT column where bit `i`
//! is set iff skill id `i` is unlocked. Skill ids come from the catalog and
//! range over `[0, MAX_SKILL_ID]`; supplying an id outside that range is a
//! caller contract violation, checked only in debug builds. Bits above
//! `MAX_SKILL_ID` stay zero under every operation here.

use crate::constants::MAX_SKILL_ID;

#[inline]
fn mask(skill_id: i32) -> i64 {
    debug_assert!(
        (0..=MAX_SKILL_ID).contains(&skill_id),
        "skill id {skill_id} outside the catalog range"
    );
    1_i64 << skill_id
}

/// Returns true iff the character has unlocked the given skill.
pub fn has_skill(bitfield: i64, skill_id: i32) -> bool {
    bitfield & mask(skill_id) != 0
}

/// Unlocks a skill. Adding an already-unlocked skill is a no-op.
pub fn add_skill(bitfield: i64, skill_id: i32) -> i64 {
    bitfield | mask(skill_id)
}

/// Removes a skill. Removing a skill that isn't set is a no-op.
pub fn remove_skill(bitfield: i64, skill_id: i32) -> i64 {
    bitfield & !mask(skill_id)
}

/// Every unlocked skill id, in ascending order. Recomputed fresh on each
/// call; an empty bitfield yields an empty vec.
pub fn skill_ids(bitfield: i64) -> Vec<i32> {
    (0..=MAX_SKILL_ID)
        .filter(|&id| bitfield & (1_i64 << id) != 0)
        .collect()
}
