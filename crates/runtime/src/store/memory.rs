use std::collections::{HashMap, HashSet};

use kye_core::{FormKey, ModKey, PatchSummary, Record, RecordKind, RecordStore};
use tracing::debug;

use super::{LoadOrderSnapshot, PatchOutput, Plugin};

/// In-memory implementation of [`RecordStore`].
///
/// Holds the winning version of every record in the load order plus the
/// overlays committed during the run, which together form the patch plugin.
#[derive(Debug)]
pub struct InMemoryStore {
    patch: ModKey,
    /// Load order, lowest priority first.
    plugins: Vec<ModKey>,
    active: HashSet<ModKey>,
    winners: HashMap<FormKey, Record>,
    /// Plugin that supplied each winning record.
    sources: HashMap<FormKey, ModKey>,
    /// Winning identities, highest priority first.
    order: Vec<FormKey>,
    overlays: Vec<Record>,
    overlay_index: HashMap<FormKey, usize>,
}

impl InMemoryStore {
    /// Builds the store from plugins in load order, lowest priority first.
    ///
    /// A later plugin's record overrides an earlier one with the same key. A
    /// plugin named like the patch itself is left out, so output from a
    /// previous run does not feed into this one.
    pub fn new(patch: impl Into<ModKey>, plugins: Vec<Plugin>) -> Self {
        let patch = patch.into();
        let mut store = Self {
            patch,
            plugins: Vec::with_capacity(plugins.len()),
            active: HashSet::with_capacity(plugins.len()),
            winners: HashMap::new(),
            sources: HashMap::new(),
            order: Vec::new(),
            overlays: Vec::new(),
            overlay_index: HashMap::new(),
        };

        let mut layers = Vec::with_capacity(plugins.len());
        for plugin in plugins {
            if plugin.key == store.patch {
                debug!(plugin = %plugin.key, "skipping previous patch output");
                continue;
            }
            store.plugins.push(plugin.key.clone());
            store.active.insert(plugin.key.clone());
            layers.push((plugin.key, plugin.records));
        }

        for (source, records) in layers.into_iter().rev() {
            for record in records {
                if store.winners.contains_key(record.key()) {
                    continue;
                }
                store.order.push(record.key().clone());
                store.sources.insert(record.key().clone(), source.clone());
                store.winners.insert(record.key().clone(), record);
            }
        }

        debug!(
            plugins = store.plugins.len(),
            records = store.winners.len(),
            "built record store"
        );
        store
    }

    pub fn from_snapshot(patch: impl Into<ModKey>, snapshot: LoadOrderSnapshot) -> Self {
        Self::new(patch, snapshot.plugins)
    }

    pub fn patch_name(&self) -> &ModKey {
        &self.patch
    }

    /// Overlays committed so far, in commit order of first commit.
    pub fn overlays(&self) -> &[Record] {
        &self.overlays
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Consumes the store into the patch plugin.
    ///
    /// Masters are the plugins that define any form the overlays link to, plus
    /// the plugins whose winning records the overlays replace, in load order.
    pub fn into_patch(self, summary: PatchSummary) -> PatchOutput {
        let mut referenced: HashSet<&ModKey> = HashSet::new();
        for record in &self.overlays {
            referenced.extend(record.form_links().into_iter().map(|key| &key.plugin));
            referenced.extend(self.sources.get(record.key()));
        }
        let masters = self
            .plugins
            .iter()
            .filter(|plugin| referenced.contains(plugin))
            .cloned()
            .collect();

        PatchOutput {
            plugin: self.patch,
            masters,
            records: self.overlays,
            summary,
        }
    }
}

impl RecordStore for InMemoryStore {
    fn has_plugin(&self, plugin: &ModKey) -> bool {
        self.active.contains(plugin)
    }

    fn resolve(&self, key: &FormKey) -> Option<&Record> {
        match self.overlay_index.get(key) {
            Some(&index) => self.overlays.get(index),
            None => self.winners.get(key),
        }
    }

    fn winning_keys(&self, kind: RecordKind) -> Vec<FormKey> {
        self.order
            .iter()
            .filter(|key| self.resolve(key).is_some_and(|record| record.kind() == kind))
            .cloned()
            .collect()
    }

    fn commit(&mut self, record: Record) {
        let key = record.key().clone();
        match self.overlay_index.get(&key) {
            Some(&index) => self.overlays[index] = record,
            None => {
                if !self.winners.contains_key(&key) {
                    self.order.push(key.clone());
                }
                self.overlay_index.insert(key, self.overlays.len());
                self.overlays.push(record);
            }
        }
    }
}
