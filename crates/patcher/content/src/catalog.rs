//! Static trait catalog: which perk record implements each creature trait.

use std::path::PathBuf;

use kye_core::TraitCatalogEntry;

const KYE: &str = "know_your_enemy.esp";
const ELEMENTS: &str = "Know Your Elements.esp";
const LIGHT_AND_SHADOW: &str = "KYE Light and Shadow.esp";

/// Every trait perk shipped by Know Your Enemy and its add-ons.
///
/// Rows for add-on plugins are only resolved when the add-on is installed.
pub const TRAIT_CATALOG: &[TraitCatalogEntry] = &[
    TraitCatalogEntry::new(KYE, 0x00AA5E, "fat"),
    TraitCatalogEntry::new(KYE, 0x00AA60, "big"),
    TraitCatalogEntry::new(KYE, 0x00AA61, "small"),
    TraitCatalogEntry::new(KYE, 0x00AA62, "armored"),
    // Unverified: undead through dwarven machine, ghostly and furred through
    // aquatic use assumed ids. Check them against know_your_enemy.esp; a wrong
    // id aborts the run with a missing catalog perk.
    TraitCatalogEntry::new(KYE, 0x00AA63, "undead"),
    TraitCatalogEntry::new(KYE, 0x00AA64, "plant"),
    TraitCatalogEntry::new(KYE, 0x00AA65, "skeletal"),
    TraitCatalogEntry::new(KYE, 0x00AA66, "brittle"),
    TraitCatalogEntry::new(KYE, 0x00AA67, "dwarven machine"),
    TraitCatalogEntry::new(KYE, 0x02E171, "ghostly"),
    TraitCatalogEntry::new(KYE, 0x047680, "furred"),
    TraitCatalogEntry::new(KYE, 0x047681, "supernatural"),
    TraitCatalogEntry::new(KYE, 0x047682, "venomous"),
    TraitCatalogEntry::new(KYE, 0x047683, "ice elemental"),
    TraitCatalogEntry::new(KYE, 0x047684, "fire elemental"),
    TraitCatalogEntry::new(KYE, 0x047685, "shock elemental"),
    TraitCatalogEntry::new(KYE, 0x047686, "vile"),
    TraitCatalogEntry::new(KYE, 0x047687, "troll kin"),
    TraitCatalogEntry::new(KYE, 0x047688, "weak willed"),
    TraitCatalogEntry::new(KYE, 0x047689, "strong willed"),
    TraitCatalogEntry::new(KYE, 0x04768A, "cave dwelling"),
    TraitCatalogEntry::new(KYE, 0x04768B, "vascular"),
    TraitCatalogEntry::new(KYE, 0x04768C, "aquatic"),
    TraitCatalogEntry::new(KYE, 0x04C78E, "rocky"),
    // Know Your Elements (unverified ids)
    TraitCatalogEntry::new(ELEMENTS, 0x005904, "water elemental"),
    TraitCatalogEntry::new(ELEMENTS, 0x005905, "earth elemental"),
    TraitCatalogEntry::new(ELEMENTS, 0x005906, "wind elemental"),
    // Light and Shadow (unverified id)
    TraitCatalogEntry::new(LIGHT_AND_SHADOW, 0x000D62, "dark elemental"),
];

/// Rule data shipped with this crate.
pub fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
