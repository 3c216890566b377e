//! # Command Layer
//!
//! One module per manager operation. Every command takes a [`DataStore`] plus
//! plain Rust values and returns a [`CmdResult`]: the records it touched or
//! listed, and leveled messages describing what happened.
//!
//! Rule violations (duplicate keys, a full collection, missing records, bad
//! field values) are not errors here. They become an error-level
//! [`CmdMessage`] and the command leaves the store untouched. `Err` is only
//! returned when the store itself fails.
//!
//! [`DataStore`]: crate::store::DataStore

use crate::error::CustomerError;
use crate::model::Customer;

pub mod add;
pub mod delete;
pub mod helpers;
pub mod search;
pub mod sort;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

impl From<&CustomerError> for CmdMessage {
    fn from(err: &CustomerError) -> Self {
        CmdMessage::error(err.to_string())
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_customers: Vec<Customer>,
    pub listed_customers: Vec<Customer>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_customers(mut self, customers: Vec<Customer>) -> Self {
        self.affected_customers = customers;
        self
    }

    pub fn with_listed_customers(mut self, customers: Vec<Customer>) -> Self {
        self.listed_customers = customers;
        self
    }

    /// True when any message was reported at error level.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

/// Replacement values for an update. `None` or empty strings leave the
/// corresponding field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub product: Option<String>,
    pub category: Option<String>,
}

impl CustomerUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
