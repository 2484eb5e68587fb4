//! Key-value ports for page state
//!
//! The page keeps its state in two shared stores: the query component of the
//! page address and the persisted preference file. Both sit behind
//! [`KeyValueStore`] so tests can swap in [`MemoryStore`] or [`DisabledStore`].

pub mod address;
#[cfg(test)]
pub mod memory;
pub mod preference;

pub use address::AddressBar;
#[cfg(test)]
pub use memory::{DisabledStore, MemoryStore};
pub use preference::PreferenceFile;

use crate::utils::Result;

/// A string-to-string store that may be unavailable
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}
