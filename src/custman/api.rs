//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every manager operation, whatever the front end.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns** the store and the capacity fixed at construction
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business rules, performs no I/O and formats nothing.
//!
//! ## Generic Over DataStore
//!
//! `CustomerApi<S: DataStore>` works with any storage backend; the CLI and the
//! tests both use `InMemoryStore`.
//!
//! ## Testing Strategy
//!
//! API tests check dispatch and argument passing. Rule enforcement is tested in
//! the command modules.

use crate::commands;
use crate::config::ManagerConfig;
use crate::error::Result;
use crate::model::{Customer, NewCustomer};
use crate::store::DataStore;

/// The main API facade for customer operations.
pub struct CustomerApi<S: DataStore> {
    store: S,
    capacity: usize,
}

impl<S: DataStore> CustomerApi<S> {
    pub fn new(store: S, capacity: usize) -> Self {
        Self { store, capacity }
    }

    pub fn with_config(store: S, config: &ManagerConfig) -> Self {
        Self::new(store, config.capacity)
    }

    pub fn add_customer(&mut self, draft: NewCustomer) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, self.capacity, draft)
    }

    pub fn view_customers(&self) -> Result<commands::CmdResult> {
        commands::view::run(&self.store)
    }

    pub fn search_customers(&self, criterion: &SearchCriterion) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, criterion)
    }

    pub fn update_customer(
        &mut self,
        id: i64,
        update: &commands::CustomerUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_customer(&mut self, id: i64, confirmed: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id, confirmed)
    }

    pub fn sort_customers(&mut self, key: SortKey) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.store, key)
    }

    pub fn find_by_id(&self, id: i64) -> Option<usize> {
        commands::helpers::find_by_id(&self.store, id)
    }

    pub fn find_by_code(&self, code: &str) -> Option<usize> {
        commands::helpers::find_by_code(&self.store, code)
    }

    /// Customer at a storage position, as returned by the `find_*` methods.
    pub fn get(&self, index: usize) -> Option<&Customer> {
        self.store.customers().get(index)
    }

    /// Lazily walks the customers in storage order.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.store.customers().iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

pub use commands::search::SearchCriterion;
pub use commands::sort::SortKey;
pub use commands::{CmdMessage, CmdResult, CustomerUpdate, MessageLevel};
