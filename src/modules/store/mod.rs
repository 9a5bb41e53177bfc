//! In-memory data store for mosques and their donation campaigns.
//!
//! The store is the only owner of records and the only place they are
//! mutated. It is built once at startup and handed to services as an
//! `Arc<MosqueStore>`; tests build their own isolated instances.

pub mod id_generator;
pub mod mosque_store;

#[cfg(test)]
pub use id_generator::SequentialIdGenerator;
pub use id_generator::{IdGenerator, UuidIdGenerator};
pub use mosque_store::MosqueStore;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Mosque '{0}' does not exist")]
    UnknownMosque(String),

    #[error("Donation '{0}' does not exist")]
    UnknownDonation(String),

    #[error("Generated id '{0}' is already in use")]
    DuplicateId(String),
}
