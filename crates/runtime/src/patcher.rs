//! High-level patch orchestrator.
//!
//! A [`Patcher`] loads the rule config and the load-order snapshot, runs the
//! pipeline against an [`InMemoryStore`], and writes the resulting patch.

use kye_content::{ContentFactory, TRAIT_CATALOG};
use kye_core::{RuleConfig, TraitCatalogEntry, run_pipeline};
use tracing::info;

use crate::config::PatcherConfig;
use crate::error::Result;
use crate::store::{InMemoryStore, LoadOrderSnapshot, PatchOutput};

/// Runs one patch from configured inputs to the output file.
pub struct Patcher {
    config: PatcherConfig,
    catalog: Vec<TraitCatalogEntry>,
    rules: Option<RuleConfig>,
}

impl Patcher {
    /// Create a new patcher builder
    pub fn builder(config: PatcherConfig) -> PatcherBuilder {
        PatcherBuilder::new(config)
    }

    pub fn config(&self) -> &PatcherConfig {
        &self.config
    }

    /// Rule config from the builder, or loaded from the data directory.
    pub fn load_rules(&self) -> Result<RuleConfig> {
        if let Some(rules) = &self.rules {
            return Ok(rules.clone());
        }
        Ok(ContentFactory::new(&self.config.data_dir).load_rule_config()?)
    }

    /// Builds the record store from the configured load-order snapshot.
    pub fn load_store(&self) -> Result<InMemoryStore> {
        let snapshot = LoadOrderSnapshot::read(&self.config.load_order)?;
        Ok(InMemoryStore::from_snapshot(
            self.config.patch_name.clone(),
            snapshot,
        ))
    }

    /// Runs the pipeline over `store` and returns the patch without writing it.
    pub fn apply(&self, mut store: InMemoryStore, rules: &RuleConfig) -> Result<PatchOutput> {
        let summary = run_pipeline(&mut store, rules, &self.catalog)?;
        Ok(store.into_patch(summary))
    }

    /// Loads all inputs, patches, and writes the output file.
    pub fn run(&self) -> Result<PatchOutput> {
        info!(
            load_order = %self.config.load_order.display(),
            data_dir = %self.config.data_dir.display(),
            patch = %self.config.patch_name,
            "starting patch run"
        );

        let rules = self.load_rules()?;
        let store = self.load_store()?;
        let output = self.apply(store, &rules)?;
        output.write(&self.config.output)?;

        info!(
            records = output.records.len(),
            output = %self.config.output.display(),
            "patch written"
        );
        Ok(output)
    }
}

/// Builder for [`Patcher`].
pub struct PatcherBuilder {
    config: PatcherConfig,
    catalog: Vec<TraitCatalogEntry>,
    rules: Option<RuleConfig>,
}

impl PatcherBuilder {
    fn new(config: PatcherConfig) -> Self {
        Self {
            config,
            catalog: TRAIT_CATALOG.to_vec(),
            rules: None,
        }
    }

    /// Replace the bundled trait catalog
    pub fn catalog(mut self, catalog: impl Into<Vec<TraitCatalogEntry>>) -> Self {
        self.catalog = catalog.into();
        self
    }

    /// Use `rules` instead of loading them from the data directory
    pub fn rules(mut self, rules: RuleConfig) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn build(self) -> Patcher {
        Patcher {
            config: self.config,
            catalog: self.catalog,
            rules: self.rules,
        }
    }
}
