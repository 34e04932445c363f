//! Error handling for field and curve arithmetic

use std::borrow::Cow;
use thiserror::Error;

/// The error type for field and curve arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Domain parameters are unusable: singular curve, degenerate field,
    /// or no generator of adequate prime order
    #[error("Domain parameter failure in {context}: {reason}")]
    Domain {
        /// Stage of domain construction that failed
        context: &'static str,
        /// Why the domain was rejected
        reason: Cow<'static, str>,
    },

    /// An operation is undefined at its input, e.g. inverting a value that
    /// shares a factor with the modulus
    #[error("Arithmetic error in {operation}: {details}")]
    Arithmetic {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: Cow<'static, str>,
    },

    /// Fallback for other errors
    #[error("{0}")]
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Domain error
    pub fn domain<R: Into<Cow<'static, str>>>(context: &'static str, reason: R) -> Self {
        Error::Domain {
            context,
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Arithmetic error
    pub fn arithmetic<D: Into<Cow<'static, str>>>(operation: &'static str, details: D) -> Self {
        Error::Arithmetic {
            operation,
            details: details.into(),
        }
    }
}

/// Result type for field and curve operations
pub type Result<T> = core::result::Result<T, Error>;

// Include the validation submodule
pub mod validate;
