//! Contains all database functions related to the arcana catalog.
//! These run once per reload to assemble the immutable snapshot; draws never
//! touch the database for catalog data.

use crate::arcana::catalog::ArcanaCatalog;

use super::init::DbPool;
use super::models::{Arcana, ArcanaSkill, ArcanaTier};

pub async fn get_arcanas(pool: &DbPool) -> Result<Vec<Arcana>, sqlx::Error> {
    sqlx::query_as::<_, Arcana>("SELECT id, name, icon_url FROM arcanas ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn get_arcana_tiers(pool: &DbPool) -> Result<Vec<ArcanaTier>, sqlx::Error> {
    sqlx::query_as::<_, ArcanaTier>(
        "SELECT id, tier_name, tier_level, probability, color FROM arcana_tiers ORDER BY tier_level",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_arcana_skills(pool: &DbPool) -> Result<Vec<ArcanaSkill>, sqlx::Error> {
    sqlx::query_as::<_, ArcanaSkill>(
        "SELECT id, name, description, arcana_id, tier_id FROM arcana_skills ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Loads the full catalog and builds the lookup snapshot.
pub async fn load_catalog(pool: &DbPool) -> Result<ArcanaCatalog, sqlx::Error> {
    let arcanas = get_arcanas(pool).await?;
    let tiers = get_arcana_tiers(pool).await?;
    let skills = get_arcana_skills(pool).await?;
    Ok(ArcanaCatalog::new(arcanas, tiers, skills))
}
