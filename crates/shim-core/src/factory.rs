//! The proxy-creation contract every backend implements.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use crate::dispatch::Dispatch;
use crate::error::ProxyError;
use crate::interceptor::Interceptor;
use crate::invoker::Invoker;
use crate::provider::ObjectProvider;
use crate::types::{CapabilitySet, ProxyId, ProxyRef};

/// Construction context for a factory: the source of stable proxy
/// identities.
///
/// Every proxy is allocated one id from the context it is created in, and
/// that id stays bound to the proxy for its lifetime. This is the backend
/// precondition behind the identity-method policy: even a backend whose
/// produced objects are plain values gets a stable reference identity
/// from here.
#[derive(Debug, Default)]
pub struct FactoryContext {
    next_id: AtomicU64,
}

impl FactoryContext {
    /// Creates an isolated context with its own id sequence.
    pub fn new() -> Self {
        FactoryContext {
            next_id: AtomicU64::new(0),
        }
    }

    /// The process-wide default context used by the ambient creation
    /// variants.
    pub fn ambient() -> &'static FactoryContext {
        static AMBIENT: OnceLock<FactoryContext> = OnceLock::new();
        AMBIENT.get_or_init(FactoryContext::new)
    }

    /// Allocates the next proxy id.
    pub fn next_id(&self) -> ProxyId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Allocates a full proxy reference.
    pub fn next_ref(&self) -> ProxyRef {
        ProxyRef::new(self.next_id())
    }
}

/// Creates capability-satisfying proxies from strategy collaborators.
///
/// Each creation operation exists in a variant taking an explicit
/// [`FactoryContext`] and an ambient-context convenience variant. All of
/// them validate the capability set first, then backend proxyability,
/// then construct.
pub trait ProxyFactory {
    /// The object type this backend produces.
    type Proxy;

    /// Creates a proxy delegating every call to the provider's current
    /// delegate, in an explicit context.
    ///
    /// # Errors
    ///
    /// [`ProxyError::InvalidArgument`] for a malformed capability set;
    /// [`ProxyError::UnsupportedCapabilitySet`] when a descriptor is not
    /// proxyable by this backend.
    fn create_delegator_proxy_in(
        &self,
        context: &FactoryContext,
        provider: Arc<dyn ObjectProvider>,
        capabilities: CapabilitySet,
    ) -> Result<Self::Proxy, ProxyError>;

    /// Creates a proxy passing every call through `interceptor` before
    /// reaching `target`, in an explicit context.
    ///
    /// # Errors
    ///
    /// Same contract as [`ProxyFactory::create_delegator_proxy_in`].
    fn create_interceptor_proxy_in(
        &self,
        context: &FactoryContext,
        target: Arc<dyn Dispatch>,
        interceptor: Arc<dyn Interceptor>,
        capabilities: CapabilitySet,
    ) -> Result<Self::Proxy, ProxyError>;

    /// Creates a proxy handing every call to `invoker`, in an explicit
    /// context.
    ///
    /// # Errors
    ///
    /// Same contract as [`ProxyFactory::create_delegator_proxy_in`].
    fn create_invoker_proxy_in(
        &self,
        context: &FactoryContext,
        invoker: Arc<dyn Invoker>,
        capabilities: CapabilitySet,
    ) -> Result<Self::Proxy, ProxyError>;

    /// Whether every descriptor in the set is proxyable by this backend.
    /// Never attempts construction.
    fn can_proxy(&self, capabilities: &CapabilitySet) -> bool;

    /// [`ProxyFactory::create_delegator_proxy_in`] against the ambient
    /// context.
    ///
    /// # Errors
    ///
    /// Same contract as the explicit-context variant.
    fn create_delegator_proxy(
        &self,
        provider: Arc<dyn ObjectProvider>,
        capabilities: CapabilitySet,
    ) -> Result<Self::Proxy, ProxyError> {
        self.create_delegator_proxy_in(FactoryContext::ambient(), provider, capabilities)
    }

    /// [`ProxyFactory::create_interceptor_proxy_in`] against the ambient
    /// context.
    ///
    /// # Errors
    ///
    /// Same contract as the explicit-context variant.
    fn create_interceptor_proxy(
        &self,
        target: Arc<dyn Dispatch>,
        interceptor: Arc<dyn Interceptor>,
        capabilities: CapabilitySet,
    ) -> Result<Self::Proxy, ProxyError> {
        self.create_interceptor_proxy_in(
            FactoryContext::ambient(),
            target,
            interceptor,
            capabilities,
        )
    }

    /// [`ProxyFactory::create_invoker_proxy_in`] against the ambient
    /// context.
    ///
    /// # Errors
    ///
    /// Same contract as the explicit-context variant.
    fn create_invoker_proxy(
        &self,
        invoker: Arc<dyn Invoker>,
        capabilities: CapabilitySet,
    ) -> Result<Self::Proxy, ProxyError> {
        self.create_invoker_proxy_in(FactoryContext::ambient(), invoker, capabilities)
    }
}
