//! Interceptors: the cross-cutting extension point.

use crate::error::CallError;
use crate::invocation::Invocation;
use crate::types::Value;

/// Sits between a proxy and its fixed target.
///
/// The interceptor owns the invocation for the duration of the call and
/// has full authority over it: inspect the descriptor and arguments,
/// rewrite the arguments, call [`Invocation::proceed`] zero or more
/// times, and return or replace the result or the failure. The core
/// imposes no constraint on the continuation call count.
pub trait Interceptor: Send + Sync {
    /// Handles one intercepted call.
    ///
    /// # Errors
    ///
    /// Whatever this returns, result or failure, reaches the proxy's
    /// caller unchanged.
    fn intercept(&self, invocation: Invocation) -> Result<Value, CallError>;
}

/// Pass-through interceptor that logs each call around `proceed()`.
pub struct LoggingInterceptor;

impl Interceptor for LoggingInterceptor {
    fn intercept(&self, invocation: Invocation) -> Result<Value, CallError> {
        tracing::debug!(
            method = %invocation.method(),
            args = invocation.arguments().len(),
            "intercepted call"
        );
        let result = invocation.proceed();
        match &result {
            Ok(_) => tracing::debug!(method = %invocation.method(), "call returned"),
            Err(error) => {
                tracing::debug!(method = %invocation.method(), %error, "call failed")
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DispatchTable;
    use crate::types::{MethodSignature, ProxyRef};
    use std::sync::Arc;

    #[test]
    fn test_logging_interceptor_passes_through() {
        let target = Arc::new(
            DispatchTable::new().with_method("greet", |_| Ok(Value::from("hello"))),
        );
        let invocation = Invocation::new(
            MethodSignature::new("greet"),
            None,
            ProxyRef::new(1),
            target,
        );
        assert_eq!(
            LoggingInterceptor.intercept(invocation),
            Ok(Value::from("hello"))
        );
    }

    #[test]
    fn test_logging_interceptor_passes_failures_through() {
        let target = Arc::new(
            DispatchTable::new().with_method("greet", |_| Err(CallError::raised("db", "down"))),
        );
        let invocation = Invocation::new(
            MethodSignature::new("greet"),
            None,
            ProxyRef::new(1),
            target,
        );
        assert_eq!(
            LoggingInterceptor.intercept(invocation),
            Err(CallError::raised("db", "down"))
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn trait_is_send_sync() {
        assert_send_sync::<Box<dyn Interceptor>>();
    }
}
