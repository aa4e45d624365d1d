//! Rendering listing entries into the page.

pub mod extract;
pub mod images;
pub mod loader;
pub mod render;
pub mod spinner;
