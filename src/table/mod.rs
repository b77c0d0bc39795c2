// src/table/mod.rs
//! Table flattening: [`Table`] in, fixed-width [`Record`]s out.
//!
//! Input rows are cells exactly as they appear in the markup. Output records
//! are always `width` long, with `rowspan` cells repeated downward (from their
//! starting column) and `colspan` cells repeated rightward. Rows with no
//! `<td>` at all and rows that come out entirely blank are dropped.
pub mod flatten;
pub mod model;

pub use flatten::{expand_row, flatten, Flatten, SpanTracker};
pub use model::{parse_span, Cell, Record, Row, Table};
