use crate::domain::{DomainError, ItemRepository};
use crate::models::Item;

/// The fixed catalog the service starts with
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::new(1, "Laptop", Some("A powerful computing device")),
        Item::new(2, "Smartphone", Some("A portable communication device")),
        Item::new(3, "Headphones", Some("Audio listening equipment")),
    ]
}

/// Insert the demo catalog; ids already present are left untouched.
/// Returns how many items were inserted.
pub async fn seed_demo_data(repo: &dyn ItemRepository) -> Result<usize, DomainError> {
    let mut inserted = 0;

    for item in demo_items() {
        match repo.create(item).await {
            Ok(item) => {
                tracing::debug!(id = item.id, name = %item.name, "Seeded item");
                inserted += 1;
            }
            Err(DomainError::DuplicateId(id)) => {
                tracing::debug!(id, "Seed item already present, skipping");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(inserted)
}
