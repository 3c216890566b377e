use crate::error::{CustomerError, Result};
use chrono::{DateTime, Duration, Utc};
use std::fmt;

pub const NAME_MAX_CHARS: usize = 50;
pub const ADDRESS_MAX_CHARS: usize = 200;

/// Days between an order being placed and the expected delivery.
pub const DELIVERY_DAYS: i64 = 4;

const SHORT_DATE: &str = "%Y-%m-%d";
/// Width of the dashed rule framing each customer block.
pub const RULE_WIDTH: usize = 91;

fn validate_text(field: &'static str, value: &str, max: usize) -> Result<String> {
    if value.is_empty() || value.chars().count() > max {
        return Err(CustomerError::Validation { field, max });
    }
    Ok(value.to_string())
}

/// A customer name: non-empty, at most [`NAME_MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(value: &str) -> Result<Self> {
        validate_text("Name", value, NAME_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A postal address: non-empty, at most [`ADDRESS_MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn parse(value: &str) -> Result<Self> {
        validate_text("Address", value, ADDRESS_MAX_CHARS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Regular,
    Premium { reward_points: i64 },
}

impl Tier {
    pub fn is_premium(&self) -> bool {
        matches!(self, Tier::Premium { .. })
    }

    pub fn reward_points(&self) -> Option<i64> {
        match self {
            Tier::Premium { reward_points } => Some(*reward_points),
            Tier::Regular => None,
        }
    }
}

/// Unvalidated customer fields as collected by a front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomer {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub code: String,
    pub product: String,
    pub category: String,
    pub reward_points: Option<i64>,
}

impl NewCustomer {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        address: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            code: code.into(),
            product: product.into(),
            category: category.into(),
            reward_points: None,
        }
    }

    /// Turns the draft into a premium customer carrying `reward_points`.
    pub fn premium(mut self, reward_points: i64) -> Self {
        self.reward_points = Some(reward_points);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    name: Name,
    address: Address,
    pub code: String,
    pub product: String,
    pub category: String,
    pub order_date: DateTime<Utc>,
    pub received_date: DateTime<Utc>,
    pub tier: Tier,
}

impl Customer {
    pub fn new(draft: NewCustomer) -> Result<Self> {
        Self::new_at(draft, Utc::now())
    }

    /// Builds a customer whose order was placed at `now`.
    pub fn new_at(draft: NewCustomer, now: DateTime<Utc>) -> Result<Self> {
        let name = Name::parse(&draft.name)?;
        let address = Address::parse(&draft.address)?;
        let tier = match draft.reward_points {
            Some(reward_points) => Tier::Premium { reward_points },
            None => Tier::Regular,
        };

        Ok(Self {
            id: draft.id,
            name,
            address,
            code: draft.code,
            product: draft.product,
            category: draft.category,
            order_date: now,
            received_date: now + Duration::days(DELIVERY_DAYS),
            tier,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Replaces the name. On error the current name is kept.
    pub fn set_name(&mut self, value: &str) -> Result<()> {
        self.name = Name::parse(value)?;
        Ok(())
    }

    /// Replaces the address. On error the current address is kept.
    pub fn set_address(&mut self, value: &str) -> Result<()> {
        self.address = Address::parse(value)?;
        Ok(())
    }

    pub fn is_premium(&self) -> bool {
        self.tier.is_premium()
    }

    pub fn code_matches(&self, code: &str) -> bool {
        self.code.to_lowercase() == code.to_lowercase()
    }

    pub fn name_contains(&self, term: &str) -> bool {
        self.name
            .as_str()
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:-<1$}", "", RULE_WIDTH)?;
        writeln!(
            f,
            "ID:{} | Name:{} | Code:{} | Address:{}",
            self.id, self.name, self.code, self.address
        )?;
        write!(
            f,
            "Product:{} | Category:{} | Order Placed:{} | Received:{}",
            self.product,
            self.category,
            self.order_date.format(SHORT_DATE),
            self.received_date.format(SHORT_DATE)
        )?;
        if self.is_premium() {
            f.write_str(" | Premium Customer")?;
        }
        write!(f, "\n{:-<1$}", "", RULE_WIDTH)?;

        match self.tier {
            Tier::Premium { reward_points } => write!(f, "\nReward Points: {}", reward_points),
            Tier::Regular => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> NewCustomer {
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
    fn name_limits() {
        assert!(Name::parse("").is_err());
        assert!(Name::parse(&"a".repeat(50)).is_ok());
        assert!(Name::parse(&"a".repeat(51)).is_err());
    }

    #[test]
    fn name_limit_counts_characters_not_bytes() {
        assert!(Name::parse(&"é".repeat(50)).is_ok());
    }

    #[test]
    fn address_limits() {
        assert!(Address::parse("").is_err());
        assert!(Address::parse(&"a".repeat(200)).is_ok());
        let err = Address::parse(&"a".repeat(201)).unwrap_err();
        assert!(matches!(
            err,
            CustomerError::Validation {
                field: "Address",
                max: 200
            }
        ));
    }

    #[test]
    fn new_sets_dates_and_regular_tier() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let customer = Customer::new_at(draft(), now).unwrap();

        assert_eq!(customer.order_date, now);
        assert_eq!(customer.received_date, now + Duration::days(4));
        assert_eq!(customer.tier, Tier::Regular);
        assert!(!customer.is_premium());
    }

    #[test]
    fn premium_draft_builds_premium_tier() {
        let customer = Customer::new(draft().premium(120)).unwrap();
        assert!(customer.is_premium());
        assert_eq!(customer.tier.reward_points(), Some(120));
    }

    #[test]
    fn invalid_name_rejects_construction() {
        let mut d = draft();
        d.name = "x".repeat(51);
        assert!(matches!(
            Customer::new(d),
            Err(CustomerError::Validation { field: "Name", .. })
        ));
    }

    #[test]
    fn failed_setter_keeps_previous_value() {
        let mut customer = Customer::new(draft()).unwrap();
        assert!(customer.set_name("").is_err());
        assert_eq!(customer.name().as_str(), "Rajesh Kumar");

        customer.set_address("Mysuru").unwrap();
        assert_eq!(customer.address().as_str(), "Mysuru");
    }

    #[test]
    fn code_and_name_matching_ignore_case() {
        let customer = Customer::new(draft()).unwrap();
        assert!(customer.code_matches("c001"));
        assert!(!customer.code_matches("C0011"));
        assert!(customer.name_contains("KUMAR"));
        assert!(!customer.name_contains("sharma"));
    }

    #[test]
    fn display_regular() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let out = Customer::new_at(draft(), now).unwrap().to_string();

        assert!(out.contains("ID:101 | Name:Rajesh Kumar | Code:C001 | Address:Bengaluru"));
        assert!(out.contains("Order Placed:2024-03-01 | Received:2024-03-05"));
        assert!(!out.contains("Premium Customer"));
        assert!(!out.contains("Reward Points"));
    }

    #[test]
    fn display_premium_appends_reward_line() {
        let out = Customer::new(draft().premium(90)).unwrap().to_string();
        assert!(out.contains(" | Premium Customer"));
        assert!(out.ends_with("Reward Points: 90"));
    }
}
