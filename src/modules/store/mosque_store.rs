use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::features::mosques::models::{Donation, Mosque, NewDonation, NewMosque};
use crate::modules::store::{IdGenerator, StoreError, UuidIdGenerator};

/// Insertion-ordered records plus id -> position indexes
#[derive(Debug, Default)]
struct Records {
    mosques: Vec<Mosque>,
    mosque_index: HashMap<String, usize>,
    donations: Vec<Donation>,
    donation_index: HashMap<String, usize>,
}

/// In-memory store for mosques and donations.
///
/// Listing operations return records in insertion order. Reads share a
/// read lock; creates serialize on the write lock.
pub struct MosqueStore {
    ids: Arc<dyn IdGenerator>,
    records: RwLock<Records>,
}

impl MosqueStore {
    /// Empty store issuing UUID v4 ids
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            ids,
            records: RwLock::new(Records::default()),
        }
    }

    /// Store a new mosque under a freshly generated id
    pub fn create_mosque(&self, new: NewMosque) -> Result<Mosque, StoreError> {
        let id = self.ids.generate();
        let mut records = self.records.write();

        if records.mosque_index.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }

        let mosque = new.into_mosque(id.clone());
        let position = records.mosques.len();
        records.mosques.push(mosque.clone());
        records.mosque_index.insert(id, position);

        Ok(mosque)
    }

    /// Store a new donation campaign with its current amount at 0.
    ///
    /// Rejects campaigns whose `mosque_id` does not reference a stored mosque.
    pub fn create_donation(&self, new: NewDonation) -> Result<Donation, StoreError> {
        let id = self.ids.generate();
        let mut records = self.records.write();

        if !records.mosque_index.contains_key(&new.mosque_id) {
            return Err(StoreError::UnknownMosque(new.mosque_id));
        }
        if records.donation_index.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }

        let donation = new.into_donation(id.clone());
        let position = records.donations.len();
        records.donations.push(donation.clone());
        records.donation_index.insert(id, position);

        Ok(donation)
    }

    /// Add `amount` to a campaign's raised total, saturating at `u64::MAX`
    pub fn record_contribution(
        &self,
        donation_id: &str,
        amount: u64,
    ) -> Result<Donation, StoreError> {
        let mut records = self.records.write();

        let position = *records
            .donation_index
            .get(donation_id)
            .ok_or_else(|| StoreError::UnknownDonation(donation_id.to_string()))?;

        let donation = &mut records.donations[position];
        donation.current_amount = donation.current_amount.saturating_add(amount);

        Ok(donation.clone())
    }

    pub fn get_mosque(&self, id: &str) -> Option<Mosque> {
        let records = self.records.read();
        records
            .mosque_index
            .get(id)
            .map(|&position| records.mosques[position].clone())
    }

    pub fn contains_mosque(&self, id: &str) -> bool {
        self.records.read().mosque_index.contains_key(id)
    }

    /// All donations owned by `mosque_id`, in insertion order
    pub fn donations_for_mosque(&self, mosque_id: &str) -> Vec<Donation> {
        self.records
            .read()
            .donations
            .iter()
            .filter(|d| d.mosque_id == mosque_id)
            .cloned()
            .collect()
    }

    /// All mosques in insertion order
    pub fn list_mosques(&self) -> Vec<Mosque> {
        self.records.read().mosques.clone()
    }

    pub fn mosque_count(&self) -> usize {
        self.records.read().mosques.len()
    }

    pub fn donation_count(&self) -> usize {
        self.records.read().donations.len()
    }
}

impl Default for MosqueStore {
    fn default() -> Self {
        Self::new()
    }
}
