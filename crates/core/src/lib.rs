//! Domain types shared by the bestiary database and API crates.

pub mod error;
pub mod types;
pub mod validation;
