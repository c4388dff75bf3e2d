//! Display helpers shared by the production dashboard crates.
//!
//! - `numbers`: magnitude tiers (thousand/million/billion) and series scaling
//! - `dates`: API date strings and axis period labels

pub mod dates;
pub mod numbers;
