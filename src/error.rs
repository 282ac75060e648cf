// src/error.rs

//! Error type for the few fallible operations in this crate.
//!
//! Scaling and rounding are total; only process-wide setup and config
//! validation can fail.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// The process-wide adapter was already created, either by an earlier
    /// `install` or by a first `normalize` call that fell back to the config.
    #[error("a display host is already installed for the process-wide geometry adapter")]
    AlreadyInstalled,

    /// A display metric is NaN, infinite, or not strictly positive.
    #[error("invalid display metric `{field}`: {value}")]
    InvalidDisplayMetric { field: &'static str, value: f64 },
}
