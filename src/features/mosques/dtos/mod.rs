pub mod donation_dto;
pub mod mosque_dto;

pub use donation_dto::*;
pub use mosque_dto::*;
