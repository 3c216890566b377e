use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub const EMPTY_MESSAGE: &str = "No customers!";

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    if store.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(EMPTY_MESSAGE));
        return Ok(result);
    }
    Ok(CmdResult::default().with_listed_customers(store.customers().to_vec()))
}
