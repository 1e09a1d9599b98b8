//! The shared core logic for the `/gacha` command: roll a skill, and when the
//! player has a character, unlock it on their bitfield and persist the result.

use tracing::info;

use crate::arcana::bitfield;
use crate::arcana::gacha::{GachaDrawResult, GachaPicker};
use crate::database;
use crate::model::AppState;

/// What a single `/gacha` invocation produced. A miss is a normal outcome
/// the presentation layer turns into a "nothing found" message.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    Drawn {
        result: GachaDrawResult,
        arcana_name: String,
        /// The character's bitfield after the unlock, or `None` when the
        /// user has no character yet (the roll still counts).
        new_bitfield: Option<i64>,
    },
    Nothing {
        arcana_name: Option<String>,
    },
}

/// Performs one draw for a user. `arcana` is the player-typed pool name;
/// when absent an arcana is chosen uniformly at random.
pub async fn perform_draw(
    state: &AppState,
    discord_id: i64,
    player_name: &str,
    arcana: Option<&str>,
) -> Result<DrawOutcome, sqlx::Error> {
    let user = database::users::get_or_create_user(&state.db, discord_id, player_name).await?;
    let catalog = state.catalog().await;
    let picker = GachaPicker::new(catalog);

    // ThreadRng is not Send; keep the roll in its own scope, before any await.
    let drawn = {
        let mut rng = rand::rng();
        match arcana {
            Some(name) => picker
                .pick(name, &mut rng)
                .map(|result| (name.to_string(), result)),
            None => picker.pick_any(&mut rng),
        }
    };

    let Some((arcana_name, result)) = drawn else {
        info!(discord_id, ?arcana, "gacha draw found nothing");
        return Ok(DrawOutcome::Nothing {
            arcana_name: arcana.map(str::to_string),
        });
    };

    database::users::increment_gacha_count(&state.db, discord_id).await?;

    let new_bitfield = match database::characters::get_character_by_user_id(&state.db, user.id)
        .await?
    {
        Some(character) => {
            let updated = bitfield::add_skill(character.arcana_skills, result.skill_id);
            if updated != character.arcana_skills {
                database::characters::update_arcana_skills(&state.db, character.id, updated)
                    .await?;
            }
            Some(updated)
        }
        None => None,
    };

    info!(
        discord_id,
        arcana = %arcana_name,
        skill = %result.skill_name,
        "gacha draw succeeded"
    );

    Ok(DrawOutcome::Drawn {
        result,
        arcana_name,
        new_bitfield,
    })
}
