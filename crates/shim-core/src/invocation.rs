//! Per-call invocation context handed to interceptors.

use std::sync::Arc;

use crate::dispatch::Dispatch;
use crate::error::CallError;
use crate::types::{MethodSignature, ProxyRef, Value};

/// One intercepted call: the operation descriptor, the captured
/// arguments, the logical proxy reference, and a continuation to the
/// fixed target.
///
/// Built fresh by the interceptor strategy for every call and dropped
/// when the strategy execution returns. Nothing is cached: every
/// [`Invocation::proceed`] re-executes the target dispatch with the
/// arguments currently captured, so calling it zero, one, or several
/// times is entirely the interceptor's choice.
pub struct Invocation {
    method: MethodSignature,
    arguments: Vec<Value>,
    proxy: ProxyRef,
    target: Arc<dyn Dispatch>,
}

impl Invocation {
    /// Captures a call against `target`. Absent arguments are normalized
    /// to an empty list, so interceptors never see a missing argument
    /// vector.
    pub fn new(
        method: MethodSignature,
        arguments: Option<Vec<Value>>,
        proxy: ProxyRef,
        target: Arc<dyn Dispatch>,
    ) -> Self {
        Invocation {
            method,
            arguments: arguments.unwrap_or_default(),
            proxy,
            target,
        }
    }

    /// The operation descriptor of the intercepted call.
    pub fn method(&self) -> &MethodSignature {
        &self.method
    }

    /// The captured arguments.
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Mutable access to the captured arguments, for interceptors that
    /// rewrite them before proceeding.
    pub fn arguments_mut(&mut self) -> &mut Vec<Value> {
        &mut self.arguments
    }

    /// The logical reference of the proxy the call arrived on.
    pub fn proxy(&self) -> &ProxyRef {
        &self.proxy
    }

    /// Executes the intercepted operation against the fixed target with
    /// the currently captured arguments.
    ///
    /// # Errors
    ///
    /// Surfaces exactly the failure the target raised; the call-boundary
    /// wrapper is removed here.
    pub fn proceed(&self) -> Result<Value, CallError> {
        self.target
            .dispatch(&self.method, &self.arguments)
            .map_err(CallError::unwrap_target)
    }
}
