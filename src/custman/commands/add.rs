use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CustomerError, Result};
use crate::model::{Customer, NewCustomer};
use crate::store::DataStore;
use tracing::{debug, info};

use super::helpers::{find_by_code, find_by_id};

pub const INVALID_FIELDS_MESSAGE: &str = "Invalid Name or Address. Customer not added.";

/// Validates `draft` and appends it, unless its id or code is taken or the
/// store already holds `capacity` records.
pub fn run<S: DataStore>(store: &mut S, capacity: usize, draft: NewCustomer) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let customer = match Customer::new(draft) {
        Ok(customer) => customer,
        Err(err) => {
            info!(error = %err, "rejected customer with invalid fields");
            result.add_message(CmdMessage::from(&err));
            result.add_message(CmdMessage::error(INVALID_FIELDS_MESSAGE));
            return Ok(result);
        }
    };

    if let Err(err) = check_admission(store, capacity, &customer) {
        info!(id = customer.id, code = %customer.code, error = %err, "customer not added");
        result.add_message(CmdMessage::from(&err));
        return Ok(result);
    }

    store.push(customer.clone())?;
    debug!(id = customer.id, count = store.len(), "customer added");
    result.add_message(CmdMessage::success(format!(
        "Added! ({}): {}",
        customer.id,
        customer.name()
    )));
    Ok(result.with_affected_customers(vec![customer]))
}

fn check_admission<S: DataStore>(
    store: &S,
    capacity: usize,
    customer: &Customer,
) -> std::result::Result<(), CustomerError> {
    if find_by_id(store, customer.id).is_some() {
        return Err(CustomerError::DuplicateId(customer.id));
    }
    if find_by_code(store, &customer.code).is_some() {
        return Err(CustomerError::DuplicateCode(customer.code.clone()));
    }
    if store.len() >= capacity {
        return Err(CustomerError::CapacityExceeded(capacity));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    const CAPACITY: usize = 500;

    fn rajesh() -> NewCustomer {
        NewCustomer::new(
            101,
            "Rajesh Kumar",
            "Bengaluru",
            "C001",
            "Laptop",
            "Electronics",
        )
    }

    #[test]
    fn adds_valid_customer() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, CAPACITY, rajesh()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(result.affected_customers.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(find_by_id(&store, 101), Some(0));
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut store = InMemoryStore::new();
        run(&mut store, CAPACITY, rajesh()).unwrap();

        let mut again = rajesh();
        again.code = "C999".into();
        again.name = "Someone Else".into();
        let result = run(&mut store, CAPACITY, again).unwrap();

        assert!(result.has_errors());
        assert!(result.messages[0].content.contains("ID exists"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.customers()[0].name().as_str(), "Rajesh Kumar");
    }

    #[test]
    fn rejects_code_differing_only_in_case() {
        let mut store = InMemoryStore::new();
        run(&mut store, CAPACITY, rajesh()).unwrap();

        let mut other = rajesh();
        other.id = 102;
        other.code = "c001".into();
        let result = run(&mut store, CAPACITY, other).unwrap();

        assert!(result.messages[0].content.contains("Code exists"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejects_overlong_name() {
        let mut store = InMemoryStore::new();
        let mut draft = rajesh();
        draft.name = "n".repeat(51);
        let result = run(&mut store, CAPACITY, draft).unwrap();

        assert!(store.is_empty());
        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[1].content, INVALID_FIELDS_MESSAGE);
    }

    #[test]
    fn rejects_empty_address() {
        let mut store = InMemoryStore::new();
        let mut draft = rajesh();
        draft.address = String::new();
        let result = run(&mut store, CAPACITY, draft).unwrap();

        assert!(store.is_empty());
        assert!(result.messages[0].content.contains("Address"));
    }

    #[test]
    fn rejects_when_full() {
        let mut fixture = StoreFixture::new().with_customers(3);
        let result = run(&mut fixture.store, 3, rajesh()).unwrap();

        assert!(result.messages[0].content.contains("full"));
        assert_eq!(fixture.store.len(), 3);
    }

    #[test]
    fn appends_at_end() {
        let mut fixture = StoreFixture::new().with_customers(2);
        run(&mut fixture.store, CAPACITY, rajesh()).unwrap();
        assert_eq!(fixture.ids(), vec![1, 2, 101]);
    }
}
