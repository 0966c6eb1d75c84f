//! Shim core - dispatch types, strategy handlers, and the factory
//! contract for dynamic proxies.
//!
//! A proxy outwardly satisfies a set of capability descriptors while its
//! behavior comes from one of three strategies: delegating to a provided
//! object, passing through an interceptor to a fixed target, or handing
//! every call to a custom invoker. This crate defines the strategies, the
//! per-call [`Invocation`] continuation, the identity-method policy, and
//! the backend-agnostic [`ProxyFactory`] contract; backends such as
//! `shim-table` bind the handlers to concrete produced objects.

pub mod dispatch;
pub mod error;
pub mod factory;
pub mod handler;
pub mod interceptor;
pub mod invocation;
pub mod invoker;
pub mod provider;
pub mod types;

pub use dispatch::{Dispatch, DispatchTable};
pub use error::{CallError, ProxyError};
pub use factory::{FactoryContext, ProxyFactory};
pub use handler::StrategyHandler;
pub use interceptor::Interceptor;
pub use invocation::Invocation;
pub use invoker::Invoker;
pub use provider::ObjectProvider;
pub use types::{
    CapabilityDescriptor, CapabilityKind, CapabilitySet, MethodSignature, Number, ProxyId,
    ProxyRef, TypeTag, Value,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports() {
        let val = Value::from(true);
        assert!(matches!(val, Value::Bool(true)));

        let sig = MethodSignature::new("ping");
        assert_eq!(sig.to_string(), "ping/0");

        let set = CapabilitySet::from(CapabilityDescriptor::interface("Pinger"));
        assert!(set.validate().is_ok());
    }
}
