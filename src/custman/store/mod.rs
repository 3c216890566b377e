//! # Storage Layer
//!
//! The [`DataStore`] trait owns the ordered customer collection. Commands only
//! talk to the trait, so the manager logic never depends on how records are held.
//!
//! ## Ordering
//!
//! Stores keep records in insertion order. [`DataStore::remove`] closes the gap
//! it leaves, so the relative order of the remaining records never changes. The
//! only operation that reorders records is an explicit sort through
//! [`DataStore::customers_mut`].
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: `Vec`-backed, volatile. Used by the CLI and tests.
//!
//! Capacity is not a storage concern: the API enforces the configured limit
//! before anything reaches the store.

use crate::error::Result;
use crate::model::Customer;

pub mod memory;

/// Abstract interface for customer storage.
pub trait DataStore {
    /// All records in storage order.
    fn customers(&self) -> &[Customer];

    /// Mutable view over the records, for in-place edits and sorting.
    fn customers_mut(&mut self) -> &mut [Customer];

    /// Appends a record at the end.
    fn push(&mut self, customer: Customer) -> Result<()>;

    /// Removes the record at `index`, shifting later records one slot earlier.
    fn remove(&mut self, index: usize) -> Result<Customer>;

    fn len(&self) -> usize {
        self.customers().len()
    }

    fn is_empty(&self) -> bool {
        self.customers().is_empty()
    }
}
