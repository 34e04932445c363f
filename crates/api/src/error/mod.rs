//! Error handling for the public API
//!
//! Lower layers report [`ecgroup_algorithms::Error`]; it converts into the
//! API error so that callers match on a single type.

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, Result};

use ecgroup_algorithms::Error as AlgorithmError;

impl From<AlgorithmError> for Error {
    fn from(err: AlgorithmError) -> Self {
        let message = err.to_string();
        match err {
            AlgorithmError::Parameter { .. } => Error::InvalidParameter {
                context: "parameter validation",
                message,
            },
            AlgorithmError::Domain { context, .. } => Error::Domain { context, message },
            AlgorithmError::Arithmetic { operation, .. } => Error::Arithmetic {
                context: operation,
                message,
            },
            AlgorithmError::Other(context) => Error::Other { context, message },
        }
    }
}

/// Key agreement results
pub type KeyResult<T> = Result<T>;
/// Signature results
pub type SignatureResult<T> = Result<T>;
