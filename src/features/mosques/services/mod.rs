pub mod mosque_filter;
pub mod mosque_service;

pub use mosque_filter::{MosqueFilter, SizeFilter};
pub use mosque_service::MosqueService;
