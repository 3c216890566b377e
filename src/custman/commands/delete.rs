use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CustomerError, Result};
use crate::store::DataStore;
use tracing::debug;

use super::helpers::find_by_id;

pub const CANCELLED_MESSAGE: &str = "Cancelled!";

/// Removes the customer with `id` when `confirmed`; later records move up
/// one slot. Without confirmation nothing changes.
pub fn run<S: DataStore>(store: &mut S, id: i64, confirmed: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(idx) = find_by_id(store, id) else {
        let err = CustomerError::NotFound(format!("customer {}", id));
        result.add_message(CmdMessage::from(&err));
        return Ok(result);
    };

    if !confirmed {
        result.add_message(CmdMessage::info(CANCELLED_MESSAGE));
        return Ok(result);
    }

    let removed = store.remove(idx)?;
    debug!(id, count = store.len(), "customer removed");
    result.add_message(CmdMessage::success(format!(
        "Removed! ({}): {}",
        removed.id,
        removed.name()
    )));
    Ok(result.with_affected_customers(vec![removed]))
}
