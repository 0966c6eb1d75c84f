//! Object providers: where the delegator strategy gets its delegate.

use std::sync::{Arc, OnceLock};

use crate::dispatch::Dispatch;
use crate::error::CallError;

/// Supplies the current delegate for a delegator proxy.
///
/// Queried fresh on every proxied call; the core never caches the
/// returned delegate, so a provider may hand out a different object over
/// time (round-robin, pooled resource, lazy singleton).
pub trait ObjectProvider: Send + Sync {
    /// Returns the delegate calls should currently be forwarded to.
    ///
    /// # Errors
    ///
    /// A provider failure propagates unchanged to the proxy's caller.
    fn object(&self) -> Result<Arc<dyn Dispatch>, CallError>;
}

/// Provider that always returns the same delegate.
pub struct ConstantProvider {
    object: Arc<dyn Dispatch>,
}

impl ConstantProvider {
    /// Wraps an existing delegate.
    pub fn new(object: Arc<dyn Dispatch>) -> Self {
        ConstantProvider { object }
    }
}

impl ObjectProvider for ConstantProvider {
    fn object(&self) -> Result<Arc<dyn Dispatch>, CallError> {
        Ok(Arc::clone(&self.object))
    }
}

/// Provider that builds its delegate once, on first request.
///
/// The caching here is this provider's policy; the delegator strategy
/// still queries the provider on every call.
pub struct SingletonProvider {
    builder: Box<dyn Fn() -> Arc<dyn Dispatch> + Send + Sync>,
    instance: OnceLock<Arc<dyn Dispatch>>,
}

impl SingletonProvider {
    /// Defers delegate construction to the first proxied call.
    pub fn new<F>(builder: F) -> Self
    where
        F: Fn() -> Arc<dyn Dispatch> + Send + Sync + 'static,
    {
        SingletonProvider {
            builder: Box::new(builder),
            instance: OnceLock::new(),
        }
    }
}

impl ObjectProvider for SingletonProvider {
    fn object(&self) -> Result<Arc<dyn Dispatch>, CallError> {
        Ok(Arc::clone(self.instance.get_or_init(|| (self.builder)())))
    }
}
