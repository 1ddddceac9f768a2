//! Assigns trait perks to creatures.
//!
//! Traits come from four sources merged in precedence order: the ghost
//! keyword, the race's editor id, the display name, and the NPC's own editor
//! id, followed by the Ice Wraith special case. The three rule lookups share
//! one key space and are independent of each other.

use tracing::{debug, info};

use crate::config::RuleConfig;
use crate::error::Result;
use crate::known;
use crate::perks::PerkTable;
use crate::record::{Npc, PerkPlacement, Race, RecordKind};
use crate::store::{RecordStore, StoreExt};

/// Appends each trait in `additions` not already in `traits`.
///
/// The first occurrence keeps its position; merging the same list twice is a
/// no-op.
pub fn merge_traits<I, T>(traits: &mut Vec<String>, additions: I)
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    for addition in additions {
        let addition = addition.as_ref();
        if !traits.iter().any(|existing| existing == addition) {
            traits.push(addition.to_string());
        }
    }
}

/// Collects the ordered, deduplicated trait list for `npc`.
pub fn collect_traits<S>(store: &S, npc: &Npc, config: &RuleConfig) -> Vec<String>
where
    S: RecordStore + ?Sized,
{
    let mut traits = Vec::new();

    if npc.has_keyword(&known::ACTOR_TYPE_GHOST) {
        merge_traits(&mut traits, [known::GHOSTLY_TRAIT]);
    }

    let race_rules = npc
        .race
        .as_ref()
        .and_then(|race| store.lookup::<Race>(race))
        .and_then(|race| race.editor_id.as_deref())
        .and_then(|edid| config.rules_for(edid));
    if let Some(rules) = race_rules {
        merge_traits(&mut traits, rules);
    }

    if let Some(rules) = npc.name.as_deref().and_then(|name| config.rules_for(name)) {
        merge_traits(&mut traits, rules);
    }

    if let Some(rules) = npc.editor_id.as_deref().and_then(|edid| config.rules_for(edid)) {
        merge_traits(&mut traits, rules);
    }

    if npc.name.as_deref() == Some(known::ICE_WRAITH) {
        merge_traits(&mut traits, [known::GHOSTLY_TRAIT]);
    }

    traits
}

/// Attaches trait perks at rank 1 to every eligible creature.
///
/// Creatures that inherit their spell list from a template, or that match no
/// trait source, are left without an overlay.
///
/// # Errors
///
/// Fails on the first trait with no perk in `perks`; see [`PerkTable::require`].
pub fn run_trait_assignment<S>(
    store: &mut S,
    config: &RuleConfig,
    perks: &PerkTable,
) -> Result<usize>
where
    S: RecordStore + ?Sized,
{
    let mut committed = 0;

    for key in store.winning_keys(RecordKind::Npc) {
        let Some(npc) = store.lookup::<Npc>(&key) else {
            continue;
        };
        if npc.inherits_spell_list() {
            continue;
        }

        let traits = collect_traits(&*store, npc, config);
        if traits.is_empty() {
            continue;
        }

        let label = npc.label();
        let placements = traits
            .iter()
            .map(|name| {
                perks.require(name, &label).map(|perk| PerkPlacement {
                    perk: perk.clone(),
                    rank: 1,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let Some(mut overlay) = store.overlay::<Npc>(&key) else {
            continue;
        };
        overlay.perks.extend(placements);
        store.commit_overlay(overlay);
        committed += 1;

        info!(npc = %label, count = traits.len(), "npc receives traits");
        debug!(npc = %label, traits = ?traits);
    }

    Ok(committed)
}
