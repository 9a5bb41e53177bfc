pub mod mosque_handler;

pub use mosque_handler::*;
