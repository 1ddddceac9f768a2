//! Common error infrastructure for kye-core.
//!
//! Every failure the pipeline can raise is a data or configuration integrity
//! problem, never a transient one, so there are no retries anywhere. Recoverable
//! compatibility issues are logged by the stages and never surface here.

use crate::record::{FormKey, ModKey};

/// Severity level of an error, used for categorization and exit handling.
///
/// - **Validation**: invalid user input, rejected before any stage runs
/// - **Fatal**: missing or inconsistent load-order data; the run must abort
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all patch errors.
///
/// Provides a uniform classification so callers can choose an exit code and
/// log priority without matching on concrete variants.
pub trait PatchFailure: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors that abort a patch run.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PatchError {
    /// The plugin this patch extends is not in the load order.
    #[error("{plugin} not detected in load order; install it before running the patcher")]
    MissingMaster { plugin: ModKey },

    /// A catalogued trait perk did not resolve although its plugin is present.
    #[error("failed to find perk for trait '{trait_name}' with id {form_key}")]
    CatalogPerkMissing {
        trait_name: String,
        form_key: FormKey,
    },

    /// A creature rule names a trait that has no catalog entry at all.
    #[error("trait '{trait_name}' assigned to {npc} has no perk in the trait catalog")]
    TraitPerkMissing { trait_name: String, npc: String },

    /// A creature rule names a trait provided by a plugin that is not installed.
    #[error(
        "trait '{trait_name}' assigned to {npc} requires {plugin}; install it or remove the trait from creature_rules.json"
    )]
    TraitRequiresPlugin {
        trait_name: String,
        plugin: ModKey,
        npc: String,
    },

    /// A scalar setting is outside its accepted range.
    #[error("invalid settings: {reason}")]
    InvalidSettings { reason: String },
}

impl PatchFailure for PatchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            PatchError::InvalidSettings { .. } => ErrorSeverity::Validation,
            PatchError::MissingMaster { .. }
            | PatchError::CatalogPerkMissing { .. }
            | PatchError::TraitPerkMissing { .. }
            | PatchError::TraitRequiresPlugin { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            PatchError::MissingMaster { .. } => "PATCH_MISSING_MASTER",
            PatchError::CatalogPerkMissing { .. } => "PATCH_CATALOG_PERK_MISSING",
            PatchError::TraitPerkMissing { .. } => "PATCH_TRAIT_PERK_MISSING",
            PatchError::TraitRequiresPlugin { .. } => "PATCH_TRAIT_REQUIRES_PLUGIN",
            PatchError::InvalidSettings { .. } => "PATCH_INVALID_SETTINGS",
        }
    }
}

pub type Result<T> = core::result::Result<T, PatchError>;
