//! The weighted skill draw.
//!
//! Each tier carries a draw probability; tiers are walked in ascending level
//! order accumulating probability mass, and the first tier whose cumulative
//! share covers the rolled sample claims the roll. When that tier has no
//! skills for the requested arcana the draw simply misses: the band is not
//! redistributed to later tiers. That miss is a normal outcome the caller
//! reports to the player, not an error.

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use super::catalog::ArcanaCatalog;

/// The outcome of one successful draw. Built fresh per draw; only the
/// resulting bitfield mutation is ever persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GachaDrawResult {
    pub skill_id: i32,
    pub skill_name: String,
    pub tier_name: String,
    pub tier_level: i32,
    pub probability: f64,
}

pub struct GachaPicker {
    catalog: Arc<ArcanaCatalog>,
}

impl GachaPicker {
    pub fn new(catalog: Arc<ArcanaCatalog>) -> Self {
        Self { catalog }
    }

    /// Draws one skill from the named arcana. Returns `None` when the arcana
    /// name is unknown or the roll lands in an unpopulated tier's band.
    pub fn pick<R: Rng + ?Sized>(&self, arcana_name: &str, rng: &mut R) -> Option<GachaDrawResult> {
        let roll = rng.random::<f64>();
        self.pick_with_roll(arcana_name, roll, rng)
    }

    /// Draw with an externally supplied sample in `[0, 1)`. `rng` is still
    /// used for the uniform choice among a tier's skills.
    pub fn pick_with_roll<R: Rng + ?Sized>(
        &self,
        arcana_name: &str,
        roll: f64,
        rng: &mut R,
    ) -> Option<GachaDrawResult> {
        let arcana = self.catalog.arcana_by_name(arcana_name)?;

        let mut cumulative = 0.0;
        for tier in self.catalog.tiers() {
            cumulative += tier.probability;

            // Inclusive of the band's upper edge: the roll is in [0, 1).
            if roll > cumulative {
                continue;
            }

            // The roll lands in this tier's band. The band belongs to this
            // tier even when the arcana has nothing registered there: an
            // unpopulated band pays out nothing rather than handing the roll
            // to a later tier.
            let skills = match self.catalog.skills_in(arcana.id, tier.tier_level) {
                Some(skills) if !skills.is_empty() => skills,
                _ => {
                    debug!(
                        arcana = %arcana.name,
                        tier = tier.tier_level,
                        roll,
                        "roll landed in an unpopulated tier"
                    );
                    return None;
                }
            };

            let chosen = &skills[rng.random_range(0..skills.len())];
            debug!(
                arcana = %arcana.name,
                skill = %chosen.name,
                tier = tier.tier_level,
                "gacha draw"
            );
            return Some(GachaDrawResult {
                skill_id: chosen.id,
                skill_name: chosen.name.clone(),
                tier_name: tier.tier_name.clone(),
                tier_level: tier.tier_level,
                probability: tier.probability,
            });
        }

        debug!(arcana = %arcana.name, roll, "roll fell past the last tier's band");
        None
    }

    /// Draws from an arcana chosen uniformly at random, for the bare `/gacha`
    /// invocation. Returns the arcana's display name alongside the result.
    pub fn pick_any<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(String, GachaDrawResult)> {
        let arcanas = self.catalog.arcanas();
        if arcanas.is_empty() {
            return None;
        }
        let arcana = &arcanas[rng.random_range(0..arcanas.len())];
        let result = self.pick(&arcana.name, rng)?;
        Some((arcana.name.clone(), result))
    }
}
