use chrono::Utc;
use garden_game_manager::character::stats::{
    attack_power, defense, max_hp, max_mp, remaining_attribute_points, speed,
};
use garden_game_manager::database::models::{Character, Race};

fn race() -> Race {
    Race {
        id: 1,
        name: "Humano".to_string(),
        base_hp: 50.0,
        hp_per_level: 10.0,
        base_mp: 30.0,
        mp_per_level: 5.0,
        base_resistance: 8.0,
        base_strength: 10.0,
        strength_per_level: 2.0,
        base_speed: 12.0,
        speed_per_level: 1.5,
        description: String::new(),
    }
}

fn character(level: i32) -> Character {
    Character {
        id: 1,
        name: "Teste".to_string(),
        age: 20,
        title: None,
        level,
        xp_points: 0,
        story: None,
        description: None,
        image_url: None,
        coins: 0,
        arcana_skills: 0,
        vitality: 0,
        dexterity: 0,
        intelligence: 0,
        strength: 0,
        resistance: 0,
        mana: 0,
        user_id: 1,
        region_id: None,
        race_id: Some(1),
        mana_nature_id: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        current_hp: 0,
        current_mp: 0,
    }
}

#[test]
fn max_hp_with_no_vitality_uses_the_base_rate() {
    // 50 + 10 * 3 * (1 + 0.08 * 0) = 80
    assert_eq!(max_hp(&race(), 3, 0), 80);
}

#[test]
fn max_hp_scales_quadratically_with_vitality() {
    // rate(4) = 4/40 = 0.1 -> 50 + 30 * (1 + 0.1 * 4) = 92
    assert_eq!(max_hp(&race(), 3, 4), 92);
}

#[test]
fn max_hp_rounds_up() {
    let mut r = race();
    r.hp_per_level = 10.1;
    // 50 + 10.1 * 1 * 1.0 = 60.1 -> 61
    assert_eq!(max_hp(&r, 1, 0), 61);
}

#[test]
fn max_mp_with_no_mana_uses_the_base_rate() {
    // 30 + 5 * 2 * (1 + 0.08 * 0) = 40
    assert_eq!(max_mp(&race(), 2, 0), 40);
}

#[test]
fn max_mp_scales_with_invested_mana() {
    // rate(2) = 0.05 -> 30 + 5 * 2 * (1 + 0.05 * 2) = 41
    assert_eq!(max_mp(&race(), 2, 2), 41);
}

#[test]
fn attack_power_follows_the_same_shape() {
    // 10 + 2 * 5 * (1 + 0.08 * 0) = 20
    assert_eq!(attack_power(&race(), 5, 0), 20);
    // rate(10) = 0.25 -> 10 + 2 * 5 * (1 + 0.25 * 10) = 45
    assert_eq!(attack_power(&race(), 5, 10), 45);
}

#[test]
fn speed_scales_with_dexterity() {
    // 12 + 1.5 * 2 * (1 + 0.08 * 0) = 15
    assert_eq!(speed(&race(), 2, 0), 15);
}

#[test]
fn defense_has_no_per_level_term() {
    // 8 * (1 + 0.08 * 0) = 8
    assert_eq!(defense(&race(), 0), 8);
    // rate(10) = 0.25 -> 8 * (1 + 2.5) = 28
    assert_eq!(defense(&race(), 10), 28);
}

#[test]
fn remaining_points_track_the_level_budget() {
    let mut c = character(3);
    assert_eq!(remaining_attribute_points(&c), 15);
    c.vitality = 4;
    c.strength = 6;
    assert_eq!(remaining_attribute_points(&c), 5);
}

#[test]
fn remaining_points_never_go_negative() {
    let mut c = character(1);
    c.vitality = 10; // over-allocated legacy character
    assert_eq!(remaining_attribute_points(&c), 0);
}
