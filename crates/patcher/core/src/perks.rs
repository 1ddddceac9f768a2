//! Trait name → perk resolution.
//!
//! The catalog is a static table of `(plugin, local id, trait)` triples. At the
//! start of a run it is resolved against the store into a [`PerkTable`], which
//! the trait assignment stage consults for every creature.

use std::collections::HashMap;

use crate::error::{PatchError, Result};
use crate::record::{FormKey, ModKey, Perk};
use crate::store::{RecordStore, StoreExt};

/// One catalog row: the perk implementing `trait_name` lives at
/// `numeric_id` in `source_plugin`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraitCatalogEntry {
    pub source_plugin: ModKey,
    pub numeric_id: u32,
    pub trait_name: &'static str,
}

impl TraitCatalogEntry {
    pub const fn new(source_plugin: &'static str, numeric_id: u32, trait_name: &'static str) -> Self {
        Self {
            source_plugin: ModKey::from_static(source_plugin),
            numeric_id,
            trait_name,
        }
    }

    pub fn form_key(&self) -> FormKey {
        FormKey::new(self.source_plugin.clone(), self.numeric_id)
    }
}

/// Resolved trait perks for this run's load order.
///
/// Trait names compare case-insensitively. When two present catalog rows
/// share a name, the later row wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerkTable {
    perks: HashMap<String, FormKey>,
    /// Catalogued traits whose source plugin is not installed.
    unavailable: HashMap<String, ModKey>,
}

impl PerkTable {
    /// Resolves every catalog row whose plugin is in the load order.
    ///
    /// Rows for absent plugins are skipped without comment.
    ///
    /// # Errors
    ///
    /// Returns `PatchError::CatalogPerkMissing` if a row for a present plugin
    /// does not resolve to a perk.
    pub fn build<S>(catalog: &[TraitCatalogEntry], store: &S) -> Result<Self>
    where
        S: RecordStore + ?Sized,
    {
        let mut table = Self::default();

        for entry in catalog {
            let name = fold(entry.trait_name);
            if !store.has_plugin(&entry.source_plugin) {
                table
                    .unavailable
                    .insert(name, entry.source_plugin.clone());
                continue;
            }

            let form_key = entry.form_key();
            let perk = store.lookup::<Perk>(&form_key).ok_or_else(|| {
                PatchError::CatalogPerkMissing {
                    trait_name: entry.trait_name.to_string(),
                    form_key: form_key.clone(),
                }
            })?;
            table.perks.insert(name, perk.key.clone());
        }

        Ok(table)
    }

    /// Returns the perk implementing `trait_name`.
    pub fn get(&self, trait_name: &str) -> Option<&FormKey> {
        self.perks.get(&fold(trait_name))
    }

    /// Returns the perk for `trait_name` or the fatal error explaining why
    /// `npc` cannot receive it.
    ///
    /// # Errors
    ///
    /// - `PatchError::TraitRequiresPlugin` if the trait is catalogued for a
    ///   plugin that is not installed
    /// - `PatchError::TraitPerkMissing` if the trait is not catalogued at all
    pub fn require(&self, trait_name: &str, npc: &str) -> Result<&FormKey> {
        let name = fold(trait_name);
        if let Some(perk) = self.perks.get(&name) {
            return Ok(perk);
        }
        match self.unavailable.get(&name) {
            Some(plugin) => Err(PatchError::TraitRequiresPlugin {
                trait_name: trait_name.to_string(),
                plugin: plugin.clone(),
                npc: npc.to_string(),
            }),
            None => Err(PatchError::TraitPerkMissing {
                trait_name: trait_name.to_string(),
                npc: npc.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.perks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perks.is_empty()
    }

    /// Iterates `(lowercased trait name, perk)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormKey)> {
        self.perks.iter().map(|(name, key)| (name.as_str(), key))
    }
}

fn fold(trait_name: &str) -> String {
    trait_name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::TestStore;

    const KYE: &str = "know_your_enemy.esp";
    const KYEL: &str = "Know Your Elements.esp";

    fn perk(plugin: &str, id: u32, edid: &str) -> Perk {
        Perk {
            key: FormKey::new(plugin, id),
            editor_id: Some(edid.to_string()),
            name: None,
            effects: Vec::new(),
        }
    }

    fn store() -> TestStore {
        let mut store = TestStore::with_plugins(&[KYE]);
        store
            .insert(perk(KYE, 0x10, "kye_perk_fat"))
            .insert(perk(KYE, 0x11, "kye_perk_furred"))
            .insert(perk(KYE, 0x12, "kye_perk_furred_alt"));
        store
    }

    #[test]
    fn resolves_present_plugins_and_skips_absent_ones() {
        let catalog = [
            TraitCatalogEntry::new(KYE, 0x10, "fat"),
            TraitCatalogEntry::new(KYEL, 0x5900, "earth elemental"),
        ];
        let table = PerkTable::build(&catalog, &store()).expect("catalog resolves");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("FAT"), Some(&FormKey::new(KYE, 0x10)));
        assert!(table.get("earth elemental").is_none());
    }

    #[test]
    fn unresolvable_perk_for_present_plugin_is_fatal() {
        let catalog = [TraitCatalogEntry::new(KYE, 0x99, "rocky")];
        let err = PerkTable::build(&catalog, &store()).unwrap_err();
        assert_eq!(
            err,
            PatchError::CatalogPerkMissing {
                trait_name: "rocky".into(),
                form_key: FormKey::new(KYE, 0x99),
            }
        );
    }

    #[test]
    fn duplicate_trait_names_keep_the_last_row() {
        let catalog = [
            TraitCatalogEntry::new(KYE, 0x11, "furred"),
            TraitCatalogEntry::new(KYE, 0x12, "Furred"),
        ];
        let table = PerkTable::build(&catalog, &store()).expect("catalog resolves");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("furred"), Some(&FormKey::new(KYE, 0x12)));
    }

    #[test]
    fn build_is_deterministic() {
        let catalog = [
            TraitCatalogEntry::new(KYE, 0x10, "fat"),
            TraitCatalogEntry::new(KYE, 0x11, "furred"),
        ];
        let store = store();
        let first = PerkTable::build(&catalog, &store).expect("first build");
        let second = PerkTable::build(&catalog, &store).expect("second build");
        assert_eq!(first, second);
    }

    #[test]
    fn require_explains_missing_traits() {
        let catalog = [
            TraitCatalogEntry::new(KYE, 0x10, "fat"),
            TraitCatalogEntry::new(KYEL, 0x5900, "earth elemental"),
        ];
        let table = PerkTable::build(&catalog, &store()).expect("catalog resolves");

        assert!(table.require("Fat", "Bear").is_ok());
        assert!(matches!(
            table.require("earth elemental", "Golem"),
            Err(PatchError::TraitRequiresPlugin { plugin, .. }) if plugin == ModKey::new(KYEL)
        ));
        assert!(matches!(
            table.require("sparkly", "Golem"),
            Err(PatchError::TraitPerkMissing { .. })
        ));
    }
}
