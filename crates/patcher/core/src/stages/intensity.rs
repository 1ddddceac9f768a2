//! Rescales this patch's own damage modifiers and resistances.

use tracing::debug;

use crate::config::RuleConfig;
use crate::record::{Modification, Perk, PerkEffect, RecordKind, Spell};
use crate::scaling::{adjust_damage_mod, adjust_magic_resist};
use crate::store::{RecordStore, StoreExt};

/// Runs both scalers unless `effect_intensity` is (nearly) `1.0`.
pub fn run_intensity<S>(store: &mut S, config: &RuleConfig) -> usize
where
    S: RecordStore + ?Sized,
{
    if !config.scales_intensity() {
        debug!("effect intensity is 1.0, nothing to scale");
        return 0;
    }
    scale_kye_perks(store, config) + scale_kye_abilities(store, config)
}

/// Scales incoming/attack damage multipliers on the perks in `kye_perk_names`.
///
/// Scaled values are written with [`Modification::Set`].
pub fn scale_kye_perks<S>(store: &mut S, config: &RuleConfig) -> usize
where
    S: RecordStore + ?Sized,
{
    let scale = config.effect_intensity;
    let mut committed = 0;

    for key in store.winning_keys(RecordKind::Perk) {
        let listed = store
            .lookup::<Perk>(&key)
            .filter(|perk| !perk.effects.is_empty())
            .and_then(|perk| perk.editor_id.as_deref())
            .is_some_and(|edid| config.kye_perk_names.contains(edid));
        if !listed {
            continue;
        }
        let Some(mut perk) = store.overlay::<Perk>(&key) else {
            continue;
        };

        let mut matched = false;
        for effect in perk.effects.iter_mut() {
            if let PerkEffect::ModifyValue {
                entry_point,
                value,
                modification,
            } = effect
            {
                if !entry_point.is_damage_mod() {
                    continue;
                }
                *value = adjust_damage_mod(*value, scale);
                *modification = Modification::Set;
                matched = true;
            }
        }

        if matched {
            debug!(perk = %key, scale, "scaled damage modifiers");
            store.commit_overlay(perk);
            committed += 1;
        }
    }

    committed
}

/// Scales resistance/weakness magnitudes on the spells in `kye_ability_names`.
pub fn scale_kye_abilities<S>(store: &mut S, config: &RuleConfig) -> usize
where
    S: RecordStore + ?Sized,
{
    let scale = config.effect_intensity;
    let mut committed = 0;

    for key in store.winning_keys(RecordKind::Spell) {
        let listed = store
            .lookup::<Spell>(&key)
            .and_then(|spell| spell.editor_id.as_deref())
            .is_some_and(|edid| config.kye_ability_names.contains(edid));
        if !listed {
            continue;
        }
        let Some(mut spell) = store.overlay::<Spell>(&key) else {
            continue;
        };

        let mut changed = false;
        for effect in spell.effects.iter_mut() {
            let is_resistance = store
                .resolve_editor_id(&effect.base_effect)
                .is_some_and(|edid| config.is_resistance_or_weakness(edid));
            let Some(data) = effect.data.as_mut().filter(|_| is_resistance) else {
                continue;
            };
            let scaled = adjust_magic_resist(data.magnitude, scale);
            if scaled != data.magnitude {
                data.magnitude = scaled;
                changed = true;
            }
        }

        if changed {
            debug!(spell = %key, scale, "scaled resistances");
            store.commit_overlay(spell);
            committed += 1;
        }
    }

    committed
}
