//! Error types for plexfield.

use std::fmt;

/// Errors that can occur when starting the field.
///
/// Starting is the only fallible operation; everything after a successful
/// start is infallible by construction (all sampling is from bounded ranges).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    /// The host reported no usable drawable surface (zero or negative area).
    /// Non-fatal: the caller may retry `start` once a surface exists.
    NoSurface,
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartError::NoSurface => {
                write!(f, "No usable drawable surface; field was not started")
            }
        }
    }
}

impl std::error::Error for StartError {}
