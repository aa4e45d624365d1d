//! Shared types and pure logic for the listings site: the data-file model,
//! HTML templates, facet derivation, filter selection and site configuration.
//!
//! Nothing in this crate touches the DOM, so all of it is tested on the host.

pub mod domain;
pub mod enums;
pub mod shared;
