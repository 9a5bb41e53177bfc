//! Mosque catalog feature: browsing, searching and donation campaigns.
//!
//! Mosques and their donations live in the in-memory store, seeded at
//! startup. Every read returns a mosque together with its campaigns and a
//! campaign count.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/mosques?search=&city=&size=` | No | List or search mosques |
//! | GET | `/api/mosques/{id}` | No | Get mosque with donations |
//! | GET | `/api/mosques/{id}/donations` | No | List donations of a mosque |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

pub use services::MosqueService;
