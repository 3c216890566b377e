use crate::commands::{view, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Byte-wise ordering of names.
    Name,
    /// Ascending numeric id.
    Id,
}

/// Sorts the collection in place and lists the result.
pub fn run<S: DataStore>(store: &mut S, key: SortKey) -> Result<CmdResult> {
    let customers = store.customers_mut();
    match key {
        SortKey::Name => customers.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str())),
        SortKey::Id => customers.sort_by_key(|c| c.id),
    }
    debug!(?key, count = customers.len(), "customers sorted");
    view::run(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewCustomer;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn fixture() -> StoreFixture {
        [
            (203, "meera Iyer"),
            (101, "Rajesh Kumar"),
            (202, "Arjun Mehta"),
            (102, "Anita Sharma"),
        ]
        .into_iter()
        .fold(StoreFixture::new(), |f, (id, name)| {
            f.with_customer(NewCustomer::new(
                id,
                name,
                "Somewhere",
                format!("K{}", id),
                "Item",
                "Misc",
            ))
        })
    }

    #[test]
    fn sorts_by_id() {
        let mut f = fixture();
        let result = run(&mut f.store, SortKey::Id).unwrap();

        assert_eq!(f.ids(), vec![101, 102, 202, 203]);
        let listed: Vec<i64> = result.listed_customers.iter().map(|c| c.id).collect();
        assert_eq!(listed, f.ids());
    }

    #[test]
    fn sorts_by_name_ordinally() {
        let mut f = fixture();
        run(&mut f.store, SortKey::Name).unwrap();

        let names: Vec<&str> = f
            .store
            .customers()
            .iter()
            .map(|c| c.name().as_str())
            .collect();
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(
            names,
            vec!["Anita Sharma", "Arjun Mehta", "Rajesh Kumar", "meera Iyer"]
        );
    }

    #[test]
    fn keeps_the_same_records() {
        let mut f = fixture();
        let mut before = f.ids();
        run(&mut f.store, SortKey::Name).unwrap();
        let mut after = f.ids();

        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn empty_collection_reports_no_customers() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, SortKey::Id).unwrap();
        assert_eq!(result.messages[0].content, view::EMPTY_MESSAGE);
    }
}
