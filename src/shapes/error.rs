//! Errors raised while building shapes

use thiserror::Error;

/// Errors that can occur when shape parameters are validated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}
