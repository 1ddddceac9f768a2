//! Neutralizes competing resistance systems so only this patch's effects apply.

use tracing::{debug, warn};

use crate::config::RuleConfig;
use crate::record::{EntryPoint, Modification, Perk, PerkEffect, RecordKind, Spell};
use crate::store::{RecordStore, StoreExt};

pub fn run_cleanup<S>(store: &mut S, config: &RuleConfig) -> usize
where
    S: RecordStore + ?Sized,
{
    clean_abilities(store, config) + clean_perks(store, config)
}

/// Zeroes resistance/weakness magnitudes on the spells in `abilities_to_clean`.
///
/// A spell is only overlaid if at least one magnitude actually changed.
pub fn clean_abilities<S>(store: &mut S, config: &RuleConfig) -> usize
where
    S: RecordStore + ?Sized,
{
    let mut committed = 0;

    for key in store.winning_keys(RecordKind::Spell) {
        let listed = store
            .lookup::<Spell>(&key)
            .and_then(|spell| spell.editor_id.as_deref())
            .is_some_and(|edid| config.abilities_to_clean.contains(edid));
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
            if !is_resistance {
                continue;
            }
            match effect.data.as_mut() {
                Some(data) if data.magnitude != 0.0 => {
                    data.magnitude = 0.0;
                    changed = true;
                }
                Some(_) => {}
                None => warn!(
                    spell = %key,
                    effect = %effect.base_effect,
                    "effect data missing, magnitude left unchanged"
                ),
            }
        }

        if changed {
            debug!(spell = %key, "cleaned resistances");
            store.commit_overlay(spell);
            committed += 1;
        }
    }

    committed
}

/// Forces incoming-damage modifiers on the perks in `perks_to_clean` to an
/// absolute `1.0`.
pub fn clean_perks<S>(store: &mut S, config: &RuleConfig) -> usize
where
    S: RecordStore + ?Sized,
{
    let mut committed = 0;

    for key in store.winning_keys(RecordKind::Perk) {
        let listed = store
            .lookup::<Perk>(&key)
            .and_then(|perk| perk.editor_id.as_deref())
            .is_some_and(|edid| config.perks_to_clean.contains(edid));
        if !listed {
            continue;
        }
        let Some(mut perk) = store.overlay::<Perk>(&key) else {
            continue;
        };

        let mut matched = false;
        for effect in perk.effects.iter_mut() {
            if let PerkEffect::ModifyValue {
                entry_point: EntryPoint::ModIncomingDamage,
                value,
                modification,
            } = effect
            {
                *value = 1.0;
                *modification = Modification::Set;
                matched = true;
            }
        }

        if matched {
            debug!(perk = %key, "neutralized incoming damage modifiers");
            store.commit_overlay(perk);
            committed += 1;
        }
    }

    committed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FormKey, MagicEffect, Record, SpellEffect};
    use crate::store::test_support::TestStore;

    const OTHER: &str = "OtherMod.esp";

    fn effect_type(id: u32, edid: &str) -> MagicEffect {
        MagicEffect {
            key: FormKey::new(OTHER, id),
            editor_id: Some(edid.to_string()),
        }
    }

    fn spell(id: u32, edid: &str, effects: Vec<SpellEffect>) -> Spell {
        Spell {
            key: FormKey::new(OTHER, id),
            editor_id: Some(edid.to_string()),
            name: None,
            effects,
        }
    }

    fn config() -> RuleConfig {
        let mut config = RuleConfig::default();
        config.resistances_and_weaknesses.insert("AbResistFire".into());
        config.abilities_to_clean.insert("OtherAbFireResist".into());
        config.abilities_to_clean.insert("OtherAbAlreadyClean".into());
        config.perks_to_clean.insert("OtherArmorPerk".into());
        config
    }

    fn store() -> TestStore {
        let mut store = TestStore::with_plugins(&[OTHER]);
        store
            .insert(effect_type(0x1, "AbResistFire"))
            .insert(effect_type(0x2, "AbFortifyHealth"))
            .insert(spell(
                0x10,
                "OtherAbFireResist",
                vec![
                    SpellEffect::new(FormKey::new(OTHER, 0x1), 50.0),
                    SpellEffect::new(FormKey::new(OTHER, 0x2), 25.0),
                ],
            ))
            .insert(spell(
                0x11,
                "OtherAbAlreadyClean",
                vec![SpellEffect::new(FormKey::new(OTHER, 0x1), 0.0)],
            ))
            .insert(spell(
                0x12,
                "UnlistedAbility",
                vec![SpellEffect::new(FormKey::new(OTHER, 0x1), 40.0)],
            ));
        store
    }

    #[test]
    fn zeroes_only_listed_resistances() {
        let mut store = store();
        let committed = clean_abilities(&mut store, &config());

        assert_eq!(committed, 1);
        let Some(Record::Spell(spell)) = store.overlay_of(&FormKey::new(OTHER, 0x10)) else {
            panic!("cleaned spell should be overlaid");
        };
        assert_eq!(spell.effects[0].magnitude(), Some(0.0));
        assert_eq!(spell.effects[1].magnitude(), Some(25.0));
    }

    #[test]
    fn unchanged_spells_are_not_overlaid() {
        let mut store = store();
        clean_abilities(&mut store, &config());

        assert!(store.overlay_of(&FormKey::new(OTHER, 0x11)).is_none());
        assert!(store.overlay_of(&FormKey::new(OTHER, 0x12)).is_none());
    }

    #[test]
    fn incoming_damage_perks_are_set_to_neutral() {
        let mut store = store();
        store.insert(Perk {
            key: FormKey::new(OTHER, 0x20),
            editor_id: Some("OtherArmorPerk".into()),
            name: None,
            effects: vec![
                PerkEffect::modify_value(EntryPoint::ModIncomingDamage, 0.75, Modification::Multiply),
                PerkEffect::modify_value(EntryPoint::ModAttackDamage, 1.5, Modification::Multiply),
            ],
        });

        assert_eq!(clean_perks(&mut store, &config()), 1);
        let Some(Record::Perk(perk)) = store.overlay_of(&FormKey::new(OTHER, 0x20)) else {
            panic!("cleaned perk should be overlaid");
        };
        assert_eq!(
            perk.effects[0],
            PerkEffect::modify_value(EntryPoint::ModIncomingDamage, 1.0, Modification::Set)
        );
        assert_eq!(
            perk.effects[1],
            PerkEffect::modify_value(EntryPoint::ModAttackDamage, 1.5, Modification::Multiply)
        );
    }

    #[test]
    fn effects_without_data_are_skipped() {
        let mut store = TestStore::with_plugins(&[OTHER]);
        store.insert(effect_type(0x1, "AbResistFire")).insert(spell(
            0x10,
            "OtherAbFireResist",
            vec![SpellEffect {
                base_effect: FormKey::new(OTHER, 0x1),
                data: None,
            }],
        ));

        assert_eq!(clean_abilities(&mut store, &config()), 0);
        assert_eq!(store.overlay_count(), 0);
    }

    #[test]
    fn perks_without_incoming_damage_are_not_overlaid() {
        let mut store = store();
        store.insert(Perk {
            key: FormKey::new(OTHER, 0x21),
            editor_id: Some("OtherArmorPerk".into()),
            name: None,
            effects: vec![PerkEffect::modify_value(
                EntryPoint::ModAttackDamage,
                1.5,
                Modification::Multiply,
            )],
        });

        assert_eq!(clean_perks(&mut store, &config()), 0);
        assert!(store.overlay_of(&FormKey::new(OTHER, 0x21)).is_none());
    }
}
