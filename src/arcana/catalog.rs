//! The immutable arcana catalog snapshot.
//!
//! Built once from the raw database rows (arcanas, tiers, skills) and then
//! only read. Reloading game data replaces the whole snapshot rather than
//! mutating it in place, so draws running concurrently always see a fully
//! built catalog.

use ahash::AHashMap;
use tracing::{debug, warn};

use crate::database::models::{Arcana, ArcanaSkill, ArcanaTier};

pub struct ArcanaCatalog {
    /// Lowercased display name -> arcana, for case-insensitive command input.
    arcanas_by_name: AHashMap<String, Arcana>,
    /// arcana id -> tier level -> skills of that arcana in that tier.
    skills_by_tier: AHashMap<i32, AHashMap<i32, Vec<ArcanaSkill>>>,
    /// All tiers, sorted ascending by `tier_level`. Draw traversal order.
    tiers: Vec<ArcanaTier>,
    /// All arcanas in load order, for random-arcana selection and listings.
    arcanas: Vec<Arcana>,
}

impl ArcanaCatalog {
    /// Assembles the lookup structures from raw catalog rows.
    ///
    /// A skill whose `tier_id` matches no known tier cannot participate in a
    /// draw; it is logged and skipped, matching how the loader treats other
    /// malformed seed data.
    pub fn new(arcanas: Vec<Arcana>, mut tiers: Vec<ArcanaTier>, skills: Vec<ArcanaSkill>) -> Self {
        tiers.sort_by_key(|t| t.tier_level);

        let tier_levels: AHashMap<i32, i32> =
            tiers.iter().map(|t| (t.id, t.tier_level)).collect();

        let mut skills_by_tier: AHashMap<i32, AHashMap<i32, Vec<ArcanaSkill>>> = AHashMap::new();
        for skill in skills {
            let Some(&tier_level) = tier_levels.get(&skill.tier_id) else {
                warn!(
                    skill = %skill.name,
                    tier_id = skill.tier_id,
                    "skill references an unknown tier; skipping"
                );
                continue;
            };
            skills_by_tier
                .entry(skill.arcana_id)
                .or_default()
                .entry(tier_level)
                .or_default()
                .push(skill);
        }

        let arcanas_by_name: AHashMap<String, Arcana> = arcanas
            .iter()
            .map(|a| (a.name.to_lowercase(), a.clone()))
            .collect();

        debug!(
            arcanas = arcanas.len(),
            tiers = tiers.len(),
            "arcana catalog built"
        );

        Self {
            arcanas_by_name,
            skills_by_tier,
            tiers,
            arcanas,
        }
    }

    /// Resolves an arcana by display name, ignoring case.
    pub fn arcana_by_name(&self, name: &str) -> Option<&Arcana> {
        self.arcanas_by_name.get(&name.to_lowercase())
    }

    /// All tiers in ascending `tier_level` order.
    pub fn tiers(&self) -> &[ArcanaTier] {
        &self.tiers
    }

    pub fn arcanas(&self) -> &[Arcana] {
        &self.arcanas
    }

    /// The skills of one arcana in one tier, if any were registered there.
    pub fn skills_in(&self, arcana_id: i32, tier_level: i32) -> Option<&[ArcanaSkill]> {
        self.skills_by_tier
            .get(&arcana_id)
            .and_then(|by_tier| by_tier.get(&tier_level))
            .map(Vec::as_slice)
    }
}
