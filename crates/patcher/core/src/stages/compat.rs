//! Patches applied only when companion plugins are detected.
//!
//! Nothing here can fail the run: unresolved targets are logged and skipped.

use tracing::{debug, info, warn};

use crate::config::RuleConfig;
use crate::known;
use crate::record::{FormKey, Perk, Spell};
use crate::store::{RecordStore, StoreExt};

/// Replaces the vanilla silver perk's effects with this patch's dummy perk.
pub fn run_silver_perk_patch<S>(store: &mut S, config: &RuleConfig) -> usize
where
    S: RecordStore + ?Sized,
{
    if !config.patch_silver_perk {
        return 0;
    }
    if store.has_plugin(&known::IMMERSIVE_CREATURES) {
        warn!(
            "silver perk is being patched, but {} is in the load order; silver weapon effects will not apply to the races it adds",
            known::IMMERSIVE_CREATURES
        );
    }

    let Some(effects) = store
        .lookup::<Perk>(&known::DUMMY_SILVER_PERK)
        .map(|dummy| dummy.effects.clone())
    else {
        info!(perk = %known::DUMMY_SILVER_PERK, "dummy silver perk not found, skipping silver perk patch");
        return 0;
    };
    let Some(mut silver) = store.overlay::<Perk>(&known::SILVER_PERK) else {
        info!(perk = %known::SILVER_PERK, "silver perk not found, skipping silver perk patch");
        return 0;
    };

    silver.effects = effects;
    store.commit_overlay(silver);
    info!("silver perk patched");
    1
}

/// Zeroes poison resistance on the ghostly and undead abilities when CACO is
/// installed, since CACO handles poison immunity itself.
pub fn run_caco_patch<S>(store: &mut S) -> usize
where
    S: RecordStore + ?Sized,
{
    if !store.has_plugin(&known::CACO) {
        return 0;
    }
    info!("CACO detected, adjusting kye_ab_ghostly and kye_ab_undead");

    let mut committed = 0;
    for (name, key) in [
        ("kye_ab_ghostly", known::KYE_AB_GHOSTLY),
        ("kye_ab_undead", known::KYE_AB_UNDEAD),
    ] {
        if zero_poison_resistance(store, name, &key) {
            committed += 1;
        }
    }
    committed
}

fn zero_poison_resistance<S>(store: &mut S, name: &str, key: &FormKey) -> bool
where
    S: RecordStore + ?Sized,
{
    let Some(mut spell) = store.overlay::<Spell>(key) else {
        warn!(
            "CACO detected but failed to patch {name}; is {} active in the load order?",
            known::KNOW_YOUR_ENEMY
        );
        return false;
    };

    let mut changed = false;
    for effect in spell.effects.iter_mut() {
        let is_poison_resist =
            store.resolve_editor_id(&effect.base_effect) == Some(known::RESIST_POISON_EFFECT);
        if let Some(data) = effect.data.as_mut().filter(|_| is_poison_resist) {
            data.magnitude = 0.0;
            changed = true;
        }
    }

    if changed {
        debug!(spell = name, "zeroed poison resistance");
        store.commit_overlay(spell);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{EntryPoint, MagicEffect, Modification, PerkEffect, Record, SpellEffect};
    use crate::store::test_support::TestStore;

    fn perk(key: FormKey, effects: Vec<PerkEffect>) -> Perk {
        Perk {
            key,
            editor_id: None,
            name: None,
            effects,
        }
    }

    fn silver_store(plugins: &[&str]) -> TestStore {
        let mut store = TestStore::with_plugins(plugins);
        store
            .insert(perk(
                known::SILVER_PERK,
                vec![PerkEffect::modify_value(
                    EntryPoint::ModAttackDamage,
                    1.2,
                    Modification::Multiply,
                )],
            ))
            .insert(perk(
                known::DUMMY_SILVER_PERK,
                vec![
                    PerkEffect::modify_value(EntryPoint::ModAttackDamage, 1.5, Modification::Multiply),
                    PerkEffect::Ability {
                        spell: FormKey::new("know_your_enemy.esp", 0x42),
                    },
                ],
            ));
        store
    }

    fn silver_config(enabled: bool) -> RuleConfig {
        RuleConfig {
            patch_silver_perk: enabled,
            ..RuleConfig::default()
        }
    }

    #[test]
    fn silver_perk_takes_dummy_effects_verbatim() {
        let mut store = silver_store(&["Skyrim.esm", "know_your_enemy.esp"]);
        assert_eq!(run_silver_perk_patch(&mut store, &silver_config(true)), 1);

        let Some(Record::Perk(silver)) = store.overlay_of(&known::SILVER_PERK) else {
            panic!("silver perk should be overlaid");
        };
        let dummy = store
            .lookup::<Perk>(&known::DUMMY_SILVER_PERK)
            .expect("dummy perk");
        assert_eq!(silver.effects, dummy.effects);
    }

    #[test]
    fn silver_patch_is_gated_and_skips_missing_records() {
        let mut store = silver_store(&["Skyrim.esm"]);
        assert_eq!(run_silver_perk_patch(&mut store, &silver_config(false)), 0);

        let mut store = TestStore::with_plugins(&["Skyrim.esm"]);
        assert_eq!(run_silver_perk_patch(&mut store, &silver_config(true)), 0);
        assert_eq!(store.overlay_count(), 0);
    }

    fn caco_store(plugins: &[&str]) -> TestStore {
        let poison = FormKey::new("Skyrim.esm", 0x1);
        let frost = FormKey::new("Skyrim.esm", 0x2);
        let mut store = TestStore::with_plugins(plugins);
        store
            .insert(MagicEffect {
                key: poison.clone(),
                editor_id: Some("AbResistPoison".into()),
            })
            .insert(MagicEffect {
                key: frost.clone(),
                editor_id: Some("AbResistFrost".into()),
            })
            .insert(Spell {
                key: known::KYE_AB_GHOSTLY,
                editor_id: Some("kye_ab_ghostly".into()),
                name: None,
                effects: vec![
                    SpellEffect::new(poison.clone(), 100.0),
                    SpellEffect::new(frost, 50.0),
                ],
            });
        store
    }

    #[test]
    fn caco_zeroes_poison_resistance_only() {
        let mut store = caco_store(&[
            "Skyrim.esm",
            "know_your_enemy.esp",
            "Complete Alchemy & Cooking Overhaul.esp",
        ]);
        // kye_ab_undead is missing: warned about, not fatal.
        assert_eq!(run_caco_patch(&mut store), 1);

        let Some(Record::Spell(spell)) = store.overlay_of(&known::KYE_AB_GHOSTLY) else {
            panic!("ghostly ability should be overlaid");
        };
        assert_eq!(spell.effects[0].magnitude(), Some(0.0));
        assert_eq!(spell.effects[1].magnitude(), Some(50.0));
    }

    #[test]
    fn caco_patch_needs_caco() {
        let mut store = caco_store(&["Skyrim.esm", "know_your_enemy.esp"]);
        assert_eq!(run_caco_patch(&mut store), 0);
        assert_eq!(store.overlay_count(), 0);
    }

    #[test]
    fn silver_patch_still_applies_with_immersive_creatures() {
        let mut store = silver_store(&[
            "Skyrim.esm",
            "know_your_enemy.esp",
            "Skyrim Immersive Creatures.esp",
        ]);
        assert!(store.has_plugin(&known::IMMERSIVE_CREATURES));
        assert_eq!(run_silver_perk_patch(&mut store, &silver_config(true)), 1);
        assert!(store.overlay_of(&known::SILVER_PERK).is_some());
    }

    #[test]
    fn caco_skips_poison_resistance_without_data() {
        let poison = FormKey::new("Skyrim.esm", 0x1);
        let mut store = TestStore::with_plugins(&[
            "Skyrim.esm",
            "know_your_enemy.esp",
            "Complete Alchemy & Cooking Overhaul.esp",
        ]);
        store
            .insert(MagicEffect {
                key: poison.clone(),
                editor_id: Some("AbResistPoison".into()),
            })
            .insert(Spell {
                key: known::KYE_AB_GHOSTLY,
                editor_id: Some("kye_ab_ghostly".into()),
                name: None,
                effects: vec![SpellEffect {
                    base_effect: poison,
                    data: None,
                }],
            });

        assert_eq!(run_caco_patch(&mut store), 0);
        assert_eq!(store.overlay_count(), 0);
    }
}
