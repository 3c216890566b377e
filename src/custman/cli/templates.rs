//! Terminal output templates.
//!
//! Templates are minijinja files kept next to this module and embedded with
//! `include_str!`. minijinja drops a single trailing newline from each
//! template, so every line a template emits carries its own line break inside
//! the loop body.
pub const CUSTOMERS_TEMPLATE: &str = include_str!("templates/customers.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const MENU_TEMPLATE: &str = include_str!("templates/menu.tmp");
