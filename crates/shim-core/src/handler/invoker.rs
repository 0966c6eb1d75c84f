//! Invoker strategy: hand every call to a custom invoker.

use std::sync::Arc;

use crate::error::CallError;
use crate::handler::CallStrategy;
use crate::invoker::Invoker;
use crate::types::{MethodSignature, ProxyRef, Value};

/// Routes each call straight to the invoker. No target, no continuation;
/// the invoker's result or failure passes through unmodified.
pub struct InvokerHandler {
    invoker: Arc<dyn Invoker>,
}

impl InvokerHandler {
    /// Binds the handler to its invoker.
    pub fn new(invoker: Arc<dyn Invoker>) -> Self {
        InvokerHandler { invoker }
    }
}

impl CallStrategy for InvokerHandler {
    fn invoke(
        &self,
        proxy: &ProxyRef,
        method: &MethodSignature,
        args: &[Value],
    ) -> Result<Value, CallError> {
        self.invoker.invoke(proxy, method, args)
    }
}
