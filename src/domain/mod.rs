// src/domain/mod.rs
pub mod error;
pub mod request;

pub use error::InputError;
pub use request::{MapRequest, RequestDefaults};
