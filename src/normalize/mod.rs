// src/normalize/mod.rs
//! Stateless field clean-up applied by the site specs to specific columns.
//!
//! Nothing in here fails: a date that matches no known format comes back
//! unchanged, and text helpers only ever reshape whitespace.
pub mod date;
pub mod text;

pub use date::{normalize_date, DateNormalizer, EmptyDate};
pub use text::{collapse_ws, normalize_multiline, strip_invisible, ADDRESS_SEP, LINK_SEP};
