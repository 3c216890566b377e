use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Customer;
use crate::store::DataStore;

use super::helpers::{find_by_code, find_by_id};

pub const NOT_FOUND_MESSAGE: &str = "Not found!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriterion {
    /// Exact id match.
    Id(i64),
    /// Case-insensitive substring of the name.
    Name(String),
    /// Exact code match, ignoring case.
    Code(String),
}

pub fn run<S: DataStore>(store: &S, criterion: &SearchCriterion) -> Result<CmdResult> {
    let customers = store.customers();
    let matches: Vec<Customer> = match criterion {
        SearchCriterion::Id(id) => find_by_id(store, *id)
            .map(|idx| customers[idx].clone())
            .into_iter()
            .collect(),
        SearchCriterion::Code(code) => find_by_code(store, code)
            .map(|idx| customers[idx].clone())
            .into_iter()
            .collect(),
        SearchCriterion::Name(term) => customers
            .iter()
            .filter(|c| c.name_contains(term))
            .cloned()
            .collect(),
    };

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::warning(NOT_FOUND_MESSAGE));
    }
    Ok(result.with_listed_customers(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewCustomer;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_customer(NewCustomer::new(
                101,
                "Rajesh Kumar",
                "Bengaluru",
                "C001",
                "Laptop",
                "Electronics",
            ))
            .with_customer(NewCustomer::new(
                102,
                "Anita Sharma",
                "Delhi",
                "C002",
                "Washing Machine",
                "Home Appliance",
            ))
            .with_customer(NewCustomer::new(
                103,
                "Ravi Patel",
                "Ahmedabad",
                "C003",
                "Mobile",
                "Electronics",
            ))
    }

    fn ids(result: &CmdResult) -> Vec<i64> {
        result.listed_customers.iter().map(|c| c.id).collect()
    }

    #[test]
    fn by_id() {
        let f = fixture();
        let result = run(&f.store, &SearchCriterion::Id(102)).unwrap();
        assert_eq!(ids(&result), vec![102]);
    }

    #[test]
    fn by_name_substring_any_case() {
        let f = fixture();
        let result = run(&f.store, &SearchCriterion::Name("RA".into())).unwrap();
        assert_eq!(ids(&result), vec![101, 102, 103]);

        let result = run(&f.store, &SearchCriterion::Name("pat".into())).unwrap();
        assert_eq!(ids(&result), vec![103]);
    }

    #[test]
    fn by_code_ignores_case() {
        let f = fixture();
        let result = run(&f.store, &SearchCriterion::Code("c003".into())).unwrap();
        assert_eq!(ids(&result), vec![103]);
    }

    #[test]
    fn reports_not_found() {
        let f = fixture();
        for criterion in [
            SearchCriterion::Id(999),
            SearchCriterion::Name("zzz".into()),
            SearchCriterion::Code("C0".into()),
        ] {
            let result = run(&f.store, &criterion).unwrap();
            assert!(result.listed_customers.is_empty());
            assert_eq!(result.messages[0].content, NOT_FOUND_MESSAGE);
        }
    }
}
