//! PlanPass Core - Domain types
//!
//! This crate contains the fundamental types used across PlanPass:
//! - `Value`: Closed algebraic type for passport entries
//! - `Passport` / `Patch`: The snapshot-in, patch-out data contract
//! - `key`: Dot-hierarchy ancestry helpers shared by all components

pub mod key;
pub mod passport;
pub mod value;

pub use passport::{Passport, Patch};
pub use value::Value;
