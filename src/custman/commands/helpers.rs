use crate::store::DataStore;

/// Position of the first record with `id`.
pub fn find_by_id<S: DataStore>(store: &S, id: i64) -> Option<usize> {
    store.customers().iter().position(|c| c.id == id)
}

/// Position of the first record whose code equals `code`, ignoring case.
pub fn find_by_code<S: DataStore>(store: &S, code: &str) -> Option<usize> {
    store.customers().iter().position(|c| c.code_matches(code))
}
