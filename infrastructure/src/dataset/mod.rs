//! Input file loading
//!
//! Turns district records on disk (or the built-in mock chamber) into a
//! [`Dataset`](congress_domain::Dataset), optionally split into synthetic
//! sub-districts, and reads bills from JSON.

mod bill;
mod loader;

pub use bill::BillLoader;
pub use loader::{DatasetError, DatasetLoader, MOCK_SOURCE};
