//! Ergonomic constructors for token trees.

pub mod conditions;
pub mod select;

pub use conditions::{all_of, any_of, group};
pub use select::{Join, Select};
