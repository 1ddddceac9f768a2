//! Record store backing a patch run, and the files it is read from and
//! written to.
mod memory;
mod snapshot;

pub use memory::InMemoryStore;
pub use snapshot::{LoadOrderSnapshot, PatchOutput, Plugin};
