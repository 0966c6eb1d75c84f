//! Error types for proxy construction and proxy calls.
//!
//! Construction-time failures ([`ProxyError`]) and call-time failures
//! ([`CallError`]) are separate types and never conflated: a factory can
//! only fail one way, a live proxy the other.
//!
//! The propagation contract for call-time failures: the core never
//! swallows a collaborator's failure and never substitutes its own. Its
//! only unwrapping responsibility is removing the call-boundary wrapper
//! ([`CallError::Target`]) a dispatch table puts around a failure raised
//! inside a dispatched method, so the caller observes the original
//! failure, not the wrapper.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported synchronously at proxy-construction time.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProxyError {
    /// Empty or malformed capability set, or a missing collaborator.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the request.
        message: String,
    },

    /// The backend cannot satisfy one of the requested capabilities.
    #[error("capability '{capability}' cannot be proxied: {reason}")]
    UnsupportedCapabilitySet {
        /// Name of the offending capability descriptor.
        capability: String,
        /// Why the backend rejects it.
        reason: String,
    },
}

/// Errors surfacing from a call on a live proxy.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum CallError {
    /// The method is not declared by the dispatch target.
    #[error("unknown method: {method}")]
    UnknownMethod {
        /// Requested method name.
        method: String,
    },

    /// The arguments do not match the declared signature.
    #[error("invalid arguments for {method}: {message}")]
    InvalidArguments {
        /// Method whose signature was violated.
        method: String,
        /// What was wrong with the arguments.
        message: String,
    },

    /// Failure raised by caller-supplied code: a target method, a
    /// provider, an interceptor, or an invoker. The kind is free-form
    /// and owned by whoever raised it.
    #[error("{kind}: {message}")]
    Raised {
        /// Failure kind, chosen by the raising code.
        kind: String,
        /// Failure payload.
        message: String,
    },

    /// Call-boundary wrapper around a failure raised inside a dispatched
    /// method. Dispatch tables produce it; delegator dispatch and
    /// `Invocation::proceed` remove it before the failure reaches the
    /// caller.
    #[error("invocation target failed: {0}")]
    Target(Box<CallError>),
}

impl CallError {
    /// Builds a [`CallError::Raised`] failure value.
    pub fn raised(kind: impl Into<String>, message: impl Into<String>) -> Self {
        CallError::Raised {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Removes one call-boundary wrapper layer, if present.
    ///
    /// On any other variant this is the identity, so callers can apply it
    /// unconditionally after crossing a dispatch boundary.
    pub fn unwrap_target(self) -> Self {
        match self {
            CallError::Target(cause) => *cause,
            other => other,
        }
    }
}
