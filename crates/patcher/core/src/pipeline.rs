//! End-to-end patch run over a [`RecordStore`].

use tracing::{info, info_span};

use crate::config::RuleConfig;
use crate::error::{PatchError, Result};
use crate::known;
use crate::perks::{PerkTable, TraitCatalogEntry};
use crate::stages::{self, Stage};
use crate::store::RecordStore;

/// Number of overlays each stage committed.
///
/// A record touched by several stages counts once per stage, so `total()` can
/// exceed the number of records in the final patch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatchSummary {
    pub cleanup: usize,
    pub intensity: usize,
    pub silver_perk: usize,
    pub caco: usize,
    pub traits: usize,
}

impl PatchSummary {
    pub fn get(&self, stage: Stage) -> usize {
        match stage {
            Stage::Cleanup => self.cleanup,
            Stage::Intensity => self.intensity,
            Stage::SilverPerk => self.silver_perk,
            Stage::Caco => self.caco,
            Stage::Traits => self.traits,
        }
    }

    pub fn total(&self) -> usize {
        Stage::ORDER.iter().map(|stage| self.get(*stage)).sum()
    }

    fn slot_mut(&mut self, stage: Stage) -> &mut usize {
        match stage {
            Stage::Cleanup => &mut self.cleanup,
            Stage::Intensity => &mut self.intensity,
            Stage::SilverPerk => &mut self.silver_perk,
            Stage::Caco => &mut self.caco,
            Stage::Traits => &mut self.traits,
        }
    }
}

/// Runs every stage in [`Stage::ORDER`] against `store`.
///
/// The perk table is resolved up front, so a broken catalog aborts before any
/// overlay is committed. A trait error during the last stage leaves the
/// overlays of earlier stages in the store; callers discard the store on error.
///
/// # Errors
///
/// - `PatchError::InvalidSettings` if `config` fails validation
/// - `PatchError::MissingMaster` if know_your_enemy.esp is not loaded
/// - any error from [`PerkTable::build`] or [`stages::run_trait_assignment`]
pub fn run_pipeline<S>(
    store: &mut S,
    config: &RuleConfig,
    catalog: &[TraitCatalogEntry],
) -> Result<PatchSummary>
where
    S: RecordStore + ?Sized,
{
    config.validate()?;
    if !store.has_plugin(&known::KNOW_YOUR_ENEMY) {
        return Err(PatchError::MissingMaster {
            plugin: known::KNOW_YOUR_ENEMY,
        });
    }

    info!(
        effect_intensity = config.effect_intensity,
        patch_silver_perk = config.patch_silver_perk,
        creature_rules = config.creature_rules.len(),
        "patch settings"
    );

    let perks = PerkTable::build(catalog, &*store)?;
    info!(count = perks.len(), "resolved trait perks");

    let mut summary = PatchSummary::default();
    for stage in Stage::ORDER {
        let _span = info_span!("stage", %stage).entered();
        let committed = match stage {
            Stage::Cleanup => stages::run_cleanup(store, config),
            Stage::Intensity => stages::run_intensity(store, config),
            Stage::SilverPerk => stages::run_silver_perk_patch(store, config),
            Stage::Caco => stages::run_caco_patch(store),
            Stage::Traits => stages::run_trait_assignment(store, config, &perks)?,
        };
        *summary.slot_mut(stage) = committed;
        info!(committed, "stage complete");
    }

    info!(total = summary.total(), "patch run complete");
    Ok(summary)
}
