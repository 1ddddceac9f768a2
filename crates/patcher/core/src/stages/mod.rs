//! The five patch stages, run strictly in [`Stage::ORDER`].
//!
//! Each stage reads winning records, edits overlay copies, and commits only
//! the overlays it actually changed. It returns the number of commits so the
//! pipeline can report per-stage output.
mod cleanup;
mod compat;
mod intensity;
mod traits;

pub use cleanup::{clean_abilities, clean_perks, run_cleanup};
pub use compat::{run_caco_patch, run_silver_perk_patch};
pub use intensity::{run_intensity, scale_kye_abilities, scale_kye_perks};
pub use traits::{collect_traits, merge_traits, run_trait_assignment};

/// Pipeline stage identifiers, used in logs and the run summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    Cleanup,
    Intensity,
    SilverPerk,
    Caco,
    Traits,
}

impl Stage {
    pub const ORDER: [Stage; 5] = [
        Stage::Cleanup,
        Stage::Intensity,
        Stage::SilverPerk,
        Stage::Caco,
        Stage::Traits,
    ];
}
