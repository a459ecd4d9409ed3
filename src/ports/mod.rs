// src/ports/mod.rs
pub mod html;
pub mod prompt;

pub use html::MapPresenter;
pub use prompt::Prompter;
