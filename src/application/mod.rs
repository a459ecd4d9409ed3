// src/application/mod.rs
pub mod map_generator;

pub use map_generator::{
    BrowserLauncher, BrowserOutcome, GeneratedPage, MapGenerator, PageWriter, Stage,
};
