//! Interceptor strategy: pass each call through an interceptor on its
//! way to a fixed target.

use std::sync::Arc;

use crate::dispatch::Dispatch;
use crate::error::CallError;
use crate::handler::CallStrategy;
use crate::interceptor::Interceptor;
use crate::invocation::Invocation;
use crate::types::{MethodSignature, ProxyRef, Value};

/// Builds a fresh [`Invocation`] per call and hands it to the
/// interceptor. Whatever the interceptor returns is the call's result.
pub struct InterceptorHandler {
    target: Arc<dyn Dispatch>,
    interceptor: Arc<dyn Interceptor>,
}

impl InterceptorHandler {
    /// Binds the handler to its fixed target and interceptor.
    pub fn new(target: Arc<dyn Dispatch>, interceptor: Arc<dyn Interceptor>) -> Self {
        InterceptorHandler {
            target,
            interceptor,
        }
    }
}

impl CallStrategy for InterceptorHandler {
    fn invoke(
        &self,
        proxy: &ProxyRef,
        method: &MethodSignature,
        args: &[Value],
    ) -> Result<Value, CallError> {
        let invocation = Invocation::new(
            method.clone(),
            Some(args.to_vec()),
            proxy.clone(),
            Arc::clone(&self.target),
        );
        self.interceptor.intercept(invocation)
    }
}
