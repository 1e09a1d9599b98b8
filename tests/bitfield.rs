use garden_game_manager::arcana::bitfield::{add_skill, has_skill, remove_skill, skill_ids};
use garden_game_manager::constants::MAX_SKILL_ID;

#[test]
fn add_then_has() {
    for id in 0..=MAX_SKILL_ID {
        assert!(has_skill(add_skill(0, id), id));
        assert!(has_skill(add_skill(i64::from(u32::MAX), id), id));
    }
}

#[test]
fn remove_then_not_has() {
    let all = (0..=MAX_SKILL_ID).fold(0_i64, add_skill);
    for id in 0..=MAX_SKILL_ID {
        assert!(!has_skill(remove_skill(all, id), id));
    }
}

#[test]
fn add_is_idempotent() {
    let b = add_skill(add_skill(0, 7), 12);
    assert_eq!(add_skill(b, 7), b);
    assert_eq!(add_skill(b, 12), b);
}

#[test]
fn remove_is_idempotent() {
    let b = add_skill(0, 7);
    let removed = remove_skill(b, 12); // 12 was never set
    assert_eq!(removed, b);
    assert_eq!(remove_skill(remove_skill(b, 7), 7), 0);
}

#[test]
fn empty_bitfield_lists_nothing() {
    assert!(skill_ids(0).is_empty());
}

#[test]
fn skill_ids_are_sorted_and_exact() {
    let b = add_skill(add_skill(add_skill(0, 53), 1), 30);
    assert_eq!(skill_ids(b), vec![1, 30, 53]);
}

#[test]
fn skill_ids_round_trip() {
    let b = add_skill(add_skill(add_skill(0, 0), 9), 41);
    let rebuilt = skill_ids(b).into_iter().fold(0_i64, add_skill);
    assert_eq!(rebuilt, b);
}

#[test]
fn no_bits_above_the_catalog_range() {
    let all = (0..=MAX_SKILL_ID).fold(0_i64, add_skill);
    assert_eq!(all, (1_i64 << (MAX_SKILL_ID + 1)) - 1);
    assert_eq!(all & !((1_i64 << (MAX_SKILL_ID + 1)) - 1), 0);
}
