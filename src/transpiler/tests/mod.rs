//! Transpiler test modules.
//!
//! Tests are organized by category:
//! - `core`: plain SQL rendering of each clause
//! - `dialects`: the JPQL grammar and join folding
//! - `walker`: clause classification, dispatch order and malformed trees
//! - `properties`: determinism, parameter numbering, null handling

mod core;
