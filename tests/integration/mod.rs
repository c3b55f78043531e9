//! Integration test suite for the content studio.
//!
//! These tests drive the full TEA loop (key events -> update -> commands ->
//! effects -> completion messages) against in-memory clipboards, and render
//! the resulting snapshots through ratatui's `TestBackend`.
//!
//! # Test Categories
//!
//! - `form_properties`: Tab, selector and prompt behaviour
//! - `copy_flow`: Clipboard success, failure and overlapping copies
//! - `rendering`: Screen contents for representative states

mod fixtures;

mod copy_flow;
mod form_properties;
mod rendering;
