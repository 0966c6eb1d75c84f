//! Delegator strategy: forward every call to a freshly provided delegate.

use std::sync::Arc;

use crate::dispatch::Dispatch;
use crate::error::CallError;
use crate::handler::CallStrategy;
use crate::provider::ObjectProvider;
use crate::types::{MethodSignature, ProxyRef, Value};

/// Routes each call to whatever delegate the provider currently supplies.
///
/// No caching: the provider is queried on every call, so a provider that
/// rotates delegates produces genuinely dynamic forwarding.
pub struct DelegatorHandler {
    provider: Arc<dyn ObjectProvider>,
}

impl DelegatorHandler {
    /// Binds the handler to its provider.
    pub fn new(provider: Arc<dyn ObjectProvider>) -> Self {
        DelegatorHandler { provider }
    }
}

impl CallStrategy for DelegatorHandler {
    fn invoke(
        &self,
        _proxy: &ProxyRef,
        method: &MethodSignature,
        args: &[Value],
    ) -> Result<Value, CallError> {
        let delegate = self.provider.object()?;
        delegate
            .dispatch(method, args)
            .map_err(CallError::unwrap_target)
    }
}
