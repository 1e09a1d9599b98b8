//! Contains all database functions related to users (Discord accounts).

use super::init::DbPool;
use super::models::User;

/// Fetches a user by Discord id, registering them on first contact.
/// Also refreshes `player_name` and `last_active`, since display names drift.
pub async fn get_or_create_user(
    pool: &DbPool,
    discord_id: i64,
    player_name: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (discord_id, player_name) VALUES ($1, $2)
         ON CONFLICT (discord_id) DO UPDATE SET player_name = EXCLUDED.player_name, last_active = NOW()",
    )
    .bind(discord_id)
    .bind(player_name)
    .execute(pool)
    .await?;

    sqlx::query_as::<_, User>(
        "SELECT id, discord_id, player_name, created_at, last_active, gacha_count, active_character_id
         FROM users WHERE discord_id = $1",
    )
    .bind(discord_id)
    .fetch_one(pool)
    .await
}

/// Bumps the lifetime gacha roll counter for a user.
pub async fn increment_gacha_count(pool: &DbPool, discord_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET gacha_count = gacha_count + 1 WHERE discord_id = $1")
        .bind(discord_id)
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
