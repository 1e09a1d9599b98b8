//! Contains all database functions related to characters.

use super::init::DbPool;
use super::models::{Character, Race};

/// Fetches the character belonging to a user (internal user id, not the
/// Discord snowflake). Players have at most one character per user row.
pub async fn get_character_by_user_id(
    pool: &DbPool,
    user_id: i32,
) -> Result<Option<Character>, sqlx::Error> {
    sqlx::query_as::<_, Character>("SELECT * FROM characters WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Fetches a character's race row for derived stat computation.
pub async fn get_race(pool: &DbPool, race_id: i32) -> Result<Race, sqlx::Error> {
    sqlx::query_as::<_, Race>("SELECT * FROM races WHERE id = $1")
        .bind(race_id)
        .fetch_one(pool)
        .await
}

/// Persists a character's unlocked-skill bitfield after a draw.
pub async fn update_arcana_skills(
    pool: &DbPool,
    character_id: i32,
    bitfield: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE characters SET arcana_skills = $2, updated_at = NOW() WHERE id = $1",
    )
    .bind(character_id)
    .bind(bitfield)
    .execute(pool)
    .await
    .and_then(|res| {
        if res.rows_affected() == 1 {
            Ok(())
        } else {
            Err(sqlx::Error::RowNotFound)
        }
    })
}

/// Persists a character's current HP/MP after damage, healing, or casting.
pub async fn update_current_points(
    pool: &DbPool,
    character_id: i32,
    current_hp: i32,
    current_mp: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE characters SET current_hp = $2, current_mp = $3, updated_at = NOW() WHERE id = $1",
    )
    .bind(character_id)
    .bind(current_hp)
    .bind(current_mp)
    .execute(pool)
    .await
    .and_then(|res| {
        if res.rows_affected() == 1 {
            Ok(())
        } else {
            Err(sqlx::Error::RowNotFound)
        }
    })
}
