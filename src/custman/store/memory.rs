use super::DataStore;
use crate::error::{CustomerError, Result};
use crate::model::Customer;

/// Volatile storage. Everything is lost when the process ends.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    customers: Vec<Customer>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn customers(&self) -> &[Customer] {
        &self.customers
    }

    fn customers_mut(&mut self) -> &mut [Customer] {
        &mut self.customers
    }

    fn push(&mut self, customer: Customer) -> Result<()> {
        self.customers.push(customer);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Customer> {
        if index >= self.customers.len() {
            return Err(CustomerError::NotFound(format!("record slot {}", index)));
        }
        Ok(self.customers.remove(index))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewCustomer;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` regular customers with ids 1..=count and codes C1..Cn.
        pub fn with_customers(mut self, count: usize) -> Self {
            for i in 1..=count {
                let draft = NewCustomer::new(
                    i as i64,
                    format!("Customer {}", i),
                    format!("Street {}", i),
                    format!("C{}", i),
                    "Laptop",
                    "Electronics",
                );
                self.store.push(Customer::new(draft).unwrap()).unwrap();
            }
            self
        }

        pub fn with_customer(mut self, draft: NewCustomer) -> Self {
            self.store.push(Customer::new(draft).unwrap()).unwrap();
            self
        }

        pub fn ids(&self) -> Vec<i64> {
            self.store.customers().iter().map(|c| c.id).collect()
        }
    }
}
