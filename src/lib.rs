// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod error;
pub mod table;
pub mod normalize;
pub mod core;
pub mod config;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;
pub mod progress;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
