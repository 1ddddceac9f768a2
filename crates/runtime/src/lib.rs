//! Runtime orchestration for a patch run.
//!
//! This crate wires the rule loaders of `kye-content`, an in-memory record
//! store built from a load-order snapshot, and the `kye-core` pipeline into a
//! single [`Patcher`] that clients configure and run.
//!
//! Modules are organized by responsibility:
//! - [`patcher`] hosts the orchestrator and builder
//! - [`config`] reads process configuration from the environment
//! - [`store`] provides the record store and the snapshot/output file formats
//! - [`error`] unifies failures surfaced to clients
pub mod config;
pub mod error;
pub mod patcher;
pub mod store;

pub use config::PatcherConfig;
pub use error::{Result, RuntimeError};
pub use patcher::{Patcher, PatcherBuilder};
pub use store::{InMemoryStore, LoadOrderSnapshot, PatchOutput, Plugin};
