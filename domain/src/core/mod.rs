//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`string::truncate`] - display helper for long speech text

pub mod error;
pub mod string;
