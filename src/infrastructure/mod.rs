// src/infrastructure/mod.rs
pub mod browser;
pub mod page_writer;

pub use browser::SystemBrowser;
pub use page_writer::{write_page, FilePageWriter};
