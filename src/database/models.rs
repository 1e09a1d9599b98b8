//! Contains all the data structures that map to database tables or query results.

use sqlx::types::chrono::{DateTime, Utc};

/// A Discord account known to the bot. One user can own several characters
/// but plays at most one at a time.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: i32,
    pub discord_id: i64,
    pub player_name: String,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub gacha_count: i32,
    pub active_character_id: Option<i32>,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub title: Option<String>,
    pub level: i32,
    pub xp_points: i32,
    pub story: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub coins: i64,
    /// Unlocked arcana skills, one bit per skill id. See `arcana::bitfield`.
    pub arcana_skills: i64,
    pub vitality: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub strength: i32,
    pub resistance: i32,
    pub mana: i32,
    pub user_id: i32,
    pub region_id: Option<i32>,
    pub race_id: Option<i32>,
    pub mana_nature_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub current_hp: i32,
    pub current_mp: i32,
}

/// Race base stats. Max HP/MP and combat modifiers are derived from these,
/// never stored; see `character::stats`.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Race {
    pub id: i32,
    pub name: String,
    pub base_hp: f64,
    pub hp_per_level: f64,
    pub base_mp: f64,
    pub mp_per_level: f64,
    pub base_resistance: f64,
    pub base_strength: f64,
    pub strength_per_level: f64,
    pub base_speed: f64,
    pub speed_per_level: f64,
    pub description: String,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Region {
    pub id: i32,
    pub name: String,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ManaNature {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Hex color used by the presentation layer for embeds.
    pub color: String,
}

// --- Arcana catalog ---

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Arcana {
    pub id: i32,
    pub name: String,
    pub icon_url: String,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ArcanaTier {
    pub id: i32,
    pub tier_name: String,
    /// Sort key for the draw walk; lower levels are checked first.
    pub tier_level: i32,
    /// This tier's share of the draw distribution, a fraction in (0, 1].
    pub probability: f64,
    pub color: String,
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ArcanaSkill {
    /// Doubles as the skill's bit position in a character's bitfield,
    /// assigned by the seeder in `[0, MAX_SKILL_ID]`.
    pub id: i32,
    pub name: String,
    pub description: String,
    pub arcana_id: i32,
    pub tier_id: i32,
}
