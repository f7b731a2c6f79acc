//! Error taxonomy for the stability core
//!
//! Two failure classes, both caller bugs surfaced immediately:
//! - [`SimError::InvalidSelection`] – a categorical label does not name
//!   one of the enumerated variants
//! - [`SimError::OutOfRange`] – a numeric input is outside its documented
//!   domain
//!
//! The core never recovers or retries; either a full report is produced
//! or nothing is

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("unknown {kind} `{label}`")]
    InvalidSelection { label: String, kind: &'static str },

    #[error("{name} = {value} outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub type Result<T> = std::result::Result<T, SimError>;
