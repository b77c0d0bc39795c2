// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod profile;

pub use options::{ExportFormat, ExportOptions, SiteKind};
pub use profile::{MultilineColumn, Provenance, SiteProfile};
