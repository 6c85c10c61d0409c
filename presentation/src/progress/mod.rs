//! Progress reporters for the simulation progress port

pub mod reporter;
