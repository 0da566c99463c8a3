//! Error types for the lock proxy contract
//!
//! Operation failures never cross the public boundary as errors: the
//! dispatcher turns each of these into a `false` outcome plus a failure
//! notification. Entry points only return them for host-level faults.

use common::CodecError;
use cosmwasm_std::{StdError, Uint256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ProxyError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("This asset has already been registered")]
    AlreadyRegistered,

    #[error("The controlled balance {actual} does not match the declared supply {declared}")]
    BalanceMismatch { declared: Uint256, actual: Uint256 },

    #[error("{what} not found")]
    NotFound { what: String },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the cross-chain manager can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the operator can perform this action")]
    UnauthorizedOperator,

    #[error("Unauthorized: caller is not the sender")]
    UnauthorizedSender,

    // ========================================================================
    // External Call Errors
    // ========================================================================

    #[error("External call failed: {call}")]
    ExternalCallFailed { call: String },
}

impl ProxyError {
    pub fn validation(reason: impl Into<String>) -> Self {
        ProxyError::ValidationFailed {
            reason: reason.into(),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        ProxyError::NotFound { what: what.into() }
    }

    pub fn external(call: impl Into<String>) -> Self {
        ProxyError::ExternalCallFailed { call: call.into() }
    }
}
