//! Record store contract.
//!
//! The store owns every record of the load order and the overlays this run
//! produces. Stages read winning records through it and write back only via
//! [`Overlay`] copies passed to [`RecordStore::commit`].

use std::ops::{Deref, DerefMut};

use crate::record::{FormKey, ModKey, Record, RecordKind, RecordType};

/// Layered record source with copy-on-write overlays.
pub trait RecordStore {
    /// Returns true if `plugin` is active in the load order.
    fn has_plugin(&self, plugin: &ModKey) -> bool;

    /// Resolves a link to the winning version of the record.
    ///
    /// Overlays committed earlier in this run take precedence over every
    /// plugin in the load order.
    fn resolve(&self, key: &FormKey) -> Option<&Record>;

    /// Identities of all winning records of `kind`, each once, highest
    /// priority first. Calling it again restarts the sequence and observes
    /// overlays committed in between.
    fn winning_keys(&self, kind: RecordKind) -> Vec<FormKey>;

    /// Records `record` as this run's override of its identity.
    ///
    /// Committing the same identity again replaces the earlier overlay.
    fn commit(&mut self, record: Record);
}

/// Mutable copy of a winning record, detached from the store until committed.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay<T> {
    record: T,
}

impl<T: RecordType> Overlay<T> {
    pub fn of(record: &T) -> Self {
        Self {
            record: record.clone(),
        }
    }

    pub fn into_inner(self) -> T {
        self.record
    }
}

impl<T> Deref for Overlay<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.record
    }
}

impl<T> DerefMut for Overlay<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.record
    }
}

/// Typed helpers available on every [`RecordStore`].
pub trait StoreExt: RecordStore {
    /// Resolves `key` and returns it only if it is a `T`.
    fn lookup<T: RecordType>(&self, key: &FormKey) -> Option<&T> {
        self.resolve(key).and_then(T::from_record)
    }

    /// Winning records of type `T`, highest priority first.
    fn winning<T: RecordType>(&self) -> Vec<&T> {
        self.winning_keys(T::KIND)
            .iter()
            .filter_map(|key| self.lookup::<T>(key))
            .collect()
    }

    /// Editor id of the record `key` links to, if it resolves and has one.
    fn resolve_editor_id(&self, key: &FormKey) -> Option<&str> {
        self.resolve(key).and_then(Record::editor_id)
    }

    /// Starts a copy-on-write edit of the winning `T` at `key`.
    fn overlay<T: RecordType>(&self, key: &FormKey) -> Option<Overlay<T>> {
        self.lookup::<T>(key).map(Overlay::of)
    }

    fn commit_overlay<T: RecordType>(&mut self, overlay: Overlay<T>) {
        self.commit(overlay.into_inner().into());
    }
}

impl<S: RecordStore + ?Sized> StoreExt for S {}
