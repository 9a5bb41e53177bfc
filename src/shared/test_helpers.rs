#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::features::mosques::models::{DonationPriority, MosqueSize, NewDonation, NewMosque};
#[cfg(test)]
use crate::modules::store::{MosqueStore, SequentialIdGenerator};

/// Empty store issuing `id-1`, `id-2`, ... for deterministic assertions
#[cfg(test)]
pub fn sequential_store() -> Arc<MosqueStore> {
    Arc::new(MosqueStore::with_id_generator(Arc::new(
        SequentialIdGenerator::new("id"),
    )))
}

#[cfg(test)]
pub fn new_mosque(name: &str, city: &str, size: MosqueSize) -> NewMosque {
    NewMosque {
        name: name.to_string(),
        city: city.to_string(),
        area: Some("وسط البلد".to_string()),
        address: format!("وسط البلد، {}، سوريا", city),
        latitude: 33.5138,
        longitude: 36.2765,
        size,
        description: format!("مسجد مميز في {}", city),
        main_image: None,
        cover_image: "https://example.com/cover.jpg".to_string(),
        gallery: vec![],
        capacity: Some(150),
        established_year: Some(1980),
        phone: None,
        email: None,
    }
}

#[cfg(test)]
pub fn new_donation(mosque_id: &str, title: &str, target_amount: u64) -> NewDonation {
    NewDonation {
        mosque_id: mosque_id.to_string(),
        title: title.to_string(),
        description: format!("مشروع {}", title),
        target_amount,
        priority: DonationPriority::New,
        is_active: true,
        images: vec![],
        is_verified: false,
    }
}

/// Al-Amin in Damascus with two campaigns: 2000/10000 raised and 5000/5000 raised.
///
/// Returns the store and the mosque id.
#[cfg(test)]
pub fn al_amin_fixture() -> (Arc<MosqueStore>, String) {
    let store = sequential_store();
    let mosque = store
        .create_mosque(NewMosque {
            name: "Al-Amin".to_string(),
            description: "Neighbourhood mosque in the old city".to_string(),
            ..new_mosque("Al-Amin", "Damascus", MosqueSize::Medium)
        })
        .unwrap();

    let first = store
        .create_donation(new_donation(&mosque.id, "Water pipes", 10000))
        .unwrap();
    store.record_contribution(&first.id, 2000).unwrap();

    let second = store
        .create_donation(new_donation(&mosque.id, "Carpets", 5000))
        .unwrap();
    store.record_contribution(&second.id, 5000).unwrap();

    (store, mosque.id)
}
