//! Modules layer - Infrastructure components backing the features
//!
//! Contains the in-memory record store and its id generation.

pub mod store;
