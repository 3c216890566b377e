//! # Rendering Module
//!
//! Turns customers, messages and the menu into terminal text through the
//! minijinja templates in `templates/`, rendered with `outstanding`, which
//! supplies the `style` filter over [`CUSTMAN_THEME`]. Date formatting and
//! field flattening happen here in Rust; templates only decide layout and pick
//! style names.

use super::styles::{names, CUSTMAN_THEME};
use super::templates::{CUSTOMERS_TEMPLATE, MENU_TEMPLATE, MESSAGES_TEMPLATE};
use chrono::format::{Item, StrftimeItems};
use custman::api::{CmdMessage, MessageLevel};
use custman::error::{CustomerError, Result};
use custman::model::{Customer, RULE_WIDTH};
use outstanding::{render_with_color, ThemeChoice};
use serde::Serialize;
use std::fmt;

pub const MENU_TITLE: &str = "=== Customer Management ===";
pub const MENU: &[(&str, &str)] = &[
    ("1", "Add Regular"),
    ("2", "Add Premium"),
    ("3", "View"),
    ("4", "Search"),
    ("5", "Update"),
    ("6", "Delete"),
    ("7", "Sort"),
    ("8", "Exit"),
];

#[derive(Serialize)]
struct CustomerEntry {
    id: i64,
    name: String,
    code: String,
    address: String,
    product: String,
    category: String,
    order_date: String,
    received_date: String,
    premium: bool,
    reward_points: Option<i64>,
}

#[derive(Serialize)]
struct CustomersData {
    customers: Vec<CustomerEntry>,
    rule: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct MenuItem {
    key: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct MenuData {
    title: &'static str,
    items: Vec<MenuItem>,
}

pub struct Renderer {
    use_color: bool,
    date_format: String,
}

impl Renderer {
    /// Builds a renderer; fails if `date_format` is not a valid chrono format.
    pub fn new(use_color: bool, date_format: &str) -> Result<Self> {
        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
            return Err(CustomerError::Config(format!(
                "invalid date format '{}'",
                date_format
            )));
        }

        Ok(Self {
            use_color,
            date_format: date_format.to_string(),
        })
    }

    pub fn render_customers(&self, customers: &[Customer]) -> Result<String> {
        let entries = customers
            .iter()
            .map(|c| CustomerEntry {
                id: c.id,
                name: c.name().to_string(),
                code: c.code.clone(),
                address: c.address().to_string(),
                product: c.product.clone(),
                category: c.category.clone(),
                order_date: c.order_date.format(&self.date_format).to_string(),
                received_date: c.received_date.format(&self.date_format).to_string(),
                premium: c.is_premium(),
                reward_points: c.tier.reward_points(),
            })
            .collect();

        let data = CustomersData {
            customers: entries,
            rule: "-".repeat(RULE_WIDTH),
        };
        self.render(CUSTOMERS_TEMPLATE, &data)
    }

    pub fn render_messages(&self, messages: &[CmdMessage]) -> Result<String> {
        if messages.is_empty() {
            return Ok(String::new());
        }

        let messages = messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect();
        self.render(MESSAGES_TEMPLATE, &MessagesData { messages })
    }

    pub fn render_menu(&self) -> Result<String> {
        let data = MenuData {
            title: MENU_TITLE,
            items: MENU
                .iter()
                .map(|&(key, label)| MenuItem { key, label })
                .collect(),
        };
        self.render(MENU_TEMPLATE, &data)
    }

    fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        render_with_color(
            template,
            data,
            ThemeChoice::from(&*CUSTMAN_THEME),
            self.use_color,
        )
        .map_err(render_error)
    }
}

fn render_error(err: impl fmt::Display) -> CustomerError {
    CustomerError::Render(err.to_string())
}
