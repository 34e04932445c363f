//! Error type definitions for key agreement and signatures

use thiserror::Error;

/// Primary error type for the public API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied value is out of range or malformed
    #[error("{context}: invalid parameter: {message}")]
    InvalidParameter {
        /// Operation that rejected the value
        context: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// A key is not usable under the given domain parameters
    #[error("{context}: invalid key: {message}")]
    InvalidKey {
        /// Operation that rejected the key
        context: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// A signature is malformed or does not match
    #[error("{context}: invalid signature: {message}")]
    InvalidSignature {
        /// Operation that rejected the signature
        context: &'static str,
        /// Why it was rejected
        message: String,
    },

    /// Domain parameters could not be built or validated
    #[error("{context}: domain parameters rejected: {message}")]
    Domain {
        /// Stage that failed
        context: &'static str,
        /// Why the domain was rejected
        message: String,
    },

    /// An arithmetic operation was undefined at its input
    #[error("{context}: arithmetic failure: {message}")]
    Arithmetic {
        /// Operation that failed
        context: &'static str,
        /// Details of the failure
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        /// Operation that failed
        context: &'static str,
        /// Description
        message: String,
    },
}

/// Result type for the public API
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::Domain { message, .. } => Self::Domain { context, message },
            Self::Arithmetic { message, .. } => Self::Arithmetic { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::Domain { context, .. } => Self::Domain { context, message },
            Self::Arithmetic { context, .. } => Self::Arithmetic { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// Context string of any variant
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidParameter { context, .. }
            | Self::InvalidKey { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::Domain { context, .. }
            | Self::Arithmetic { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}
