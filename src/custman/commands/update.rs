use crate::commands::{CmdMessage, CmdResult, CustomerUpdate};
use crate::error::{CustomerError, Result};
use crate::store::DataStore;
use tracing::{debug, info};

use super::helpers::find_by_id;

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Applies every non-empty field of `update` to the customer with `id`.
///
/// Fields are independent: a rejected name or address is reported and kept
/// as it was, while the other supplied fields still change.
pub fn run<S: DataStore>(store: &mut S, id: i64, update: &CustomerUpdate) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(idx) = find_by_id(store, id) else {
        let err = CustomerError::NotFound(format!("customer {}", id));
        result.add_message(CmdMessage::from(&err));
        return Ok(result);
    };

    let customer = &mut store.customers_mut()[idx];

    if let Some(name) = supplied(&update.name) {
        if let Err(err) = customer.set_name(name) {
            info!(id, error = %err, "name left unchanged");
            result.add_message(CmdMessage::from(&err));
        }
    }
    if let Some(address) = supplied(&update.address) {
        if let Err(err) = customer.set_address(address) {
            info!(id, error = %err, "address left unchanged");
            result.add_message(CmdMessage::from(&err));
        }
    }
    if let Some(product) = supplied(&update.product) {
        customer.product = product.to_string();
    }
    if let Some(category) = supplied(&update.category) {
        customer.category = category.to_string();
    }

    debug!(id, "customer updated");
    result.add_message(CmdMessage::success(format!(
        "Updated! ({}): {}",
        customer.id,
        customer.name()
    )));
    let updated = customer.clone();
    Ok(result.with_affected_customers(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_only_supplied_fields() {
        let mut f = StoreFixture::new().with_customers(2);
        let update = CustomerUpdate::new().name("New Name").category("Books");
        run(&mut f.store, 2, &update).unwrap();

        let c = &f.store.customers()[1];
        assert_eq!(c.name().as_str(), "New Name");
        assert_eq!(c.category, "Books");
        assert_eq!(c.address().as_str(), "Street 2");
        assert_eq!(c.product, "Laptop");
    }

    #[test]
    fn empty_values_leave_fields_unchanged() {
        let mut f = StoreFixture::new().with_customers(1);
        let update = CustomerUpdate::new().name("").address("").product("");
        run(&mut f.store, 1, &update).unwrap();

        let c = &f.store.customers()[0];
        assert_eq!(c.name().as_str(), "Customer 1");
        assert_eq!(c.address().as_str(), "Street 1");
        assert_eq!(c.product, "Laptop");
    }

    #[test]
    fn invalid_name_is_reported_and_other_fields_apply() {
        let mut f = StoreFixture::new().with_customers(1);
        let update = CustomerUpdate::new().name("x".repeat(60)).product("Phone");
        let result = run(&mut f.store, 1, &update).unwrap();

        let c = &f.store.customers()[0];
        assert_eq!(c.name().as_str(), "Customer 1");
        assert_eq!(c.product, "Phone");
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("Name"));
    }

    #[test]
    fn reports_missing_id() {
        let mut f = StoreFixture::new().with_customers(1);
        let result = run(&mut f.store, 42, &CustomerUpdate::new().product("x")).unwrap();

        assert!(result.has_errors());
        assert!(result.affected_customers.is_empty());
        assert_eq!(f.store.customers()[0].product, "Laptop");
    }
}
