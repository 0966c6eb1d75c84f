//! Strategy handlers: one per proxy, immutable after construction.
//!
//! A [`StrategyHandler`] composes the shared identity pre-dispatch step
//! with one of the three call strategies. Backends bind a handler to a
//! produced object and route every call to [`StrategyHandler::handle`].

pub mod identity;

mod delegator;
mod interceptor;
mod invoker;

use std::sync::Arc;

pub use delegator::DelegatorHandler;
pub use interceptor::InterceptorHandler;
pub use invoker::InvokerHandler;

use crate::dispatch::Dispatch;
use crate::error::CallError;
use crate::interceptor::Interceptor;
use crate::invoker::Invoker;
use crate::provider::ObjectProvider;
use crate::types::{MethodSignature, ProxyRef, Value};

/// Strategy-specific call routing, run after identity interception.
pub trait CallStrategy: Send + Sync {
    /// Executes the strategy for one non-identity call.
    fn invoke(
        &self,
        proxy: &ProxyRef,
        method: &MethodSignature,
        args: &[Value],
    ) -> Result<Value, CallError>;
}

/// The per-proxy handler every call funnels through.
///
/// Holds exactly the strategy-specific state and no mutable state of its
/// own, so concurrent calls are safe whenever the held collaborators are.
pub struct StrategyHandler {
    strategy: Box<dyn CallStrategy>,
}

impl StrategyHandler {
    /// Delegator strategy: forward to the provider's current delegate.
    pub fn delegator(provider: Arc<dyn ObjectProvider>) -> Self {
        StrategyHandler {
            strategy: Box::new(DelegatorHandler::new(provider)),
        }
    }

    /// Interceptor strategy: pass calls through `interceptor` on the way
    /// to the fixed `target`.
    pub fn interceptor(target: Arc<dyn Dispatch>, interceptor: Arc<dyn Interceptor>) -> Self {
        StrategyHandler {
            strategy: Box::new(InterceptorHandler::new(target, interceptor)),
        }
    }

    /// Invoker strategy: hand every call to `invoker`.
    pub fn invoker(invoker: Arc<dyn Invoker>) -> Self {
        StrategyHandler {
            strategy: Box::new(InvokerHandler::new(invoker)),
        }
    }

    /// The single dispatch entry point backends route calls into.
    ///
    /// Identity methods are answered from the proxy reference before the
    /// strategy runs; everything else falls through to the strategy.
    pub fn handle(
        &self,
        proxy: &ProxyRef,
        method: &MethodSignature,
        args: &[Value],
    ) -> Result<Value, CallError> {
        if let Some(identity) = identity::pre_dispatch(proxy, method, args) {
            return Ok(identity);
        }
        tracing::trace!(proxy = proxy.id(), method = %method, "dispatching call");
        self.strategy.invoke(proxy, method, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DispatchTable;
    use crate::invoker::NullInvoker;
    use crate::provider::ConstantProvider;

    fn handlers() -> Vec<StrategyHandler> {
        let target: Arc<dyn Dispatch> = Arc::new(DispatchTable::new());
        struct PassThrough;
        impl crate::interceptor::Interceptor for PassThrough {
            fn intercept(
                &self,
                invocation: crate::invocation::Invocation,
            ) -> Result<Value, CallError> {
                invocation.proceed()
            }
        }
        vec![
            StrategyHandler::delegator(Arc::new(ConstantProvider::new(Arc::clone(&target)))),
            StrategyHandler::interceptor(target, Arc::new(PassThrough)),
            StrategyHandler::invoker(Arc::new(NullInvoker)),
        ]
    }

    #[test]
    fn test_identity_intercepted_for_every_strategy() {
        let proxy = ProxyRef::new(11);
        for handler in handlers() {
            let hash = handler
                .handle(&proxy, &identity::hash_code_signature(), &[])
                .expect("hash_code should be answered");
            assert_eq!(hash, Value::from(proxy.identity_hash()));

            let equal = handler
                .handle(&proxy, &identity::equals_signature(), &[proxy.to_value()])
                .expect("equals should be answered");
            assert_eq!(equal, Value::Bool(true));
        }
    }

    #[test]
    fn test_non_identity_calls_reach_strategy() {
        let handler = StrategyHandler::invoker(Arc::new(NullInvoker));
        let result = handler.handle(&ProxyRef::new(1), &MethodSignature::new("anything"), &[]);
        assert_eq!(result, Ok(Value::Null));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn handler_is_send_sync() {
        assert_send_sync::<StrategyHandler>();
    }
}
