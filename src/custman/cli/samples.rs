use custman::api::CustomerApi;
use custman::error::Result;
use custman::model::NewCustomer;
use custman::store::DataStore;
use tracing::debug;

/// The customers a fresh session starts with.
pub fn sample_customers() -> Vec<NewCustomer> {
    let regular = [
        (101, "Rajesh Kumar", "Bengaluru", "C001", "Laptop", "Electronics"),
        (102, "Anita Sharma", "Delhi", "C002", "Washing Machine", "Home Appliance"),
        (103, "Ravi Patel", "Ahmedabad", "C003", "Mobile", "Electronics"),
        (104, "Priya Reddy", "Hyderabad", "C004", "Shoes", "Clothing"),
        (105, "Amit Verma", "Lucknow", "C005", "Refrigerator", "Home Appliance"),
        (106, "Sneha Nair", "Kochi", "C006", "Headphones", "Electronics"),
    ];
    let premium = [
        (201, "Neha Singh", "Mumbai", "P101", "Smartphone", "Electronics", 120),
        (202, "Arjun Mehta", "Jaipur", "P102", "Smartwatch", "Electronics", 90),
        (203, "Meera Iyer", "Chennai", "P103", "Designer Saree", "Clothing", 150),
        (204, "Vikram Das", "Kolkata", "P104", "LED TV", "Electronics", 200),
    ];

    regular
        .into_iter()
        .map(|(id, name, address, code, product, category)| {
            NewCustomer::new(id, name, address, code, product, category)
        })
        .chain(premium.into_iter().map(
            |(id, name, address, code, product, category, points)| {
                NewCustomer::new(id, name, address, code, product, category).premium(points)
            },
        ))
        .collect()
}

/// Adds the samples through the regular add path, so capacity still applies.
pub fn seed<S: DataStore>(api: &mut CustomerApi<S>) -> Result<usize> {
    let mut added = 0;
    for draft in sample_customers() {
        if !api.add_customer(draft)?.has_errors() {
            added += 1;
        }
    }
    debug!(added, "seeded sample customers");
    Ok(added)
}
