pub mod clipboard;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod util;

// Decoupled game loop architecture
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use error::{Error, Result};
