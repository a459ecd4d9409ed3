// src/domain/error.rs
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("{field}: empty value not permitted")]
    EmptyValue { field: &'static str },
    #[error("{field}: '{value}' is not a valid number")]
    InvalidFloat {
        field: &'static str,
        value: String,
        source: ParseFloatError,
    },
    #[error("{field}: '{value}' is not a valid integer")]
    InvalidInteger {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("{field}: '{value}' is not a finite number")]
    NotFinite { field: &'static str, value: String },
    #[error("{field}: unexpected end of input")]
    EndOfInput { field: &'static str },
    #[error("Failed to read console input")]
    Io(#[from] std::io::Error),
}
