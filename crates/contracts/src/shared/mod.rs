pub mod config;
pub mod errors;
pub mod escape;
pub mod filter;
pub mod load_phase;
pub mod location;
pub mod templates;
pub mod visibility;
