//! The dispatch-table proxy factory.

use std::sync::Arc;

use shim_core::{
    CapabilitySet, Dispatch, FactoryContext, Interceptor, Invoker, ObjectProvider, ProxyError,
    ProxyFactory, StrategyHandler,
};

use crate::proxy::ProxyObject;

/// Backend that satisfies capability sets with [`ProxyObject`]s routing
/// every declared method through a strategy handler.
///
/// Proxyability rule: every descriptor must be a pure interface. A
/// concrete descriptor is rejected by [`ProxyFactory::can_proxy`] and, at
/// construction, with [`ProxyError::UnsupportedCapabilitySet`].
#[derive(Debug, Default)]
pub struct TableProxyFactory;

impl TableProxyFactory {
    /// Creates the factory.
    pub fn new() -> Self {
        TableProxyFactory
    }

    fn check(&self, capabilities: &CapabilitySet) -> Result<(), ProxyError> {
        capabilities.validate()?;
        for descriptor in capabilities.descriptors() {
            if !descriptor.is_interface() {
                return Err(ProxyError::UnsupportedCapabilitySet {
                    capability: descriptor.name.clone(),
                    reason: "not a pure interface descriptor".to_string(),
                });
            }
        }
        Ok(())
    }

    fn produce(
        &self,
        context: &FactoryContext,
        capabilities: CapabilitySet,
        handler: StrategyHandler,
        strategy: &str,
    ) -> ProxyObject {
        let reference = context.next_ref();
        tracing::debug!(
            proxy = reference.id(),
            strategy,
            capabilities = ?capabilities.names(),
            "created proxy"
        );
        ProxyObject::new(reference, capabilities, handler)
    }
}

impl ProxyFactory for TableProxyFactory {
    type Proxy = ProxyObject;

    fn create_delegator_proxy_in(
        &self,
        context: &FactoryContext,
        provider: Arc<dyn ObjectProvider>,
        capabilities: CapabilitySet,
    ) -> Result<ProxyObject, ProxyError> {
        self.check(&capabilities)?;
        let handler = StrategyHandler::delegator(provider);
        Ok(self.produce(context, capabilities, handler, "delegator"))
    }

    fn create_interceptor_proxy_in(
        &self,
        context: &FactoryContext,
        target: Arc<dyn Dispatch>,
        interceptor: Arc<dyn Interceptor>,
        capabilities: CapabilitySet,
    ) -> Result<ProxyObject, ProxyError> {
        self.check(&capabilities)?;
        let handler = StrategyHandler::interceptor(target, interceptor);
        Ok(self.produce(context, capabilities, handler, "interceptor"))
    }

    fn create_invoker_proxy_in(
        &self,
        context: &FactoryContext,
        invoker: Arc<dyn Invoker>,
        capabilities: CapabilitySet,
    ) -> Result<ProxyObject, ProxyError> {
        self.check(&capabilities)?;
        let handler = StrategyHandler::invoker(invoker);
        Ok(self.produce(context, capabilities, handler, "invoker"))
    }

    fn can_proxy(&self, capabilities: &CapabilitySet) -> bool {
        capabilities.validate().is_ok()
            && capabilities.descriptors().iter().all(|d| d.is_interface())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shim_core::handler::identity;
    use shim_core::invoker::NullInvoker;
    use shim_core::provider::ConstantProvider;
    use shim_core::{
        CallError, CapabilityDescriptor, DispatchTable, Invocation, MethodSignature, TypeTag,
        Value,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn greeter_set() -> CapabilitySet {
        CapabilitySet::from(
            CapabilityDescriptor::interface("Greeter").with_method(
                MethodSignature::new("greet")
                    .with_params(vec![TypeTag::String])
                    .with_returns(TypeTag::String),
            ),
        )
    }

    fn greeter_table(reply: &str) -> Arc<dyn Dispatch> {
        let reply = reply.to_string();
        Arc::new(DispatchTable::new().with_method("greet", move |args| {
            let name = args[0].as_str().unwrap_or("world");
            Ok(Value::from(format!("{reply}, {name}")))
        }))
    }

    fn delegator_over(table: Arc<dyn Dispatch>) -> ProxyObject {
        TableProxyFactory::new()
            .create_delegator_proxy(Arc::new(ConstantProvider::new(table)), greeter_set())
            .expect("delegator proxy should build")
    }

    #[test]
    fn test_delegator_forwards_declared_methods() {
        let proxy = delegator_over(greeter_table("hello"));
        assert_eq!(
            proxy.call("greet", Some(vec![Value::from("ada")])),
            Ok(Value::from("hello, ada"))
        );
    }

    #[test]
    fn test_identity_hash_stable_and_distinct() {
        let table = greeter_table("hi");
        let first = delegator_over(Arc::clone(&table));
        let second = delegator_over(table);

        assert_eq!(
            first.call("hash_code", None),
            first.call("hash_code", None)
        );
        // Same delegate, distinct proxy instances: hashes must not be
        // forced to collide.
        assert_ne!(first.identity_hash(), second.identity_hash());
    }

    #[test]
    fn test_equals_is_proxy_identity_not_target_identity() {
        let table = greeter_table("hi");
        let first = delegator_over(Arc::clone(&table));
        let second = delegator_over(table);

        assert_eq!(
            first.call("equals", Some(vec![first.reference().to_value()])),
            Ok(Value::Bool(true))
        );
        assert_eq!(
            first.call("equals", Some(vec![second.reference().to_value()])),
            Ok(Value::Bool(false))
        );
        assert!(first.identity_eq(&first));
        assert!(!first.identity_eq(&second));
    }

    #[test]
    fn test_empty_capability_set_rejected() {
        let result = TableProxyFactory::new()
            .create_invoker_proxy(Arc::new(NullInvoker), CapabilitySet::new(vec![]));
        assert!(matches!(result, Err(ProxyError::InvalidArgument { .. })));
    }

    #[test]
    fn test_concrete_descriptor_rejected() {
        let set = CapabilitySet::new(vec![
            CapabilityDescriptor::interface("Fine"),
            CapabilityDescriptor::concrete("Widget"),
        ]);
        let factory = TableProxyFactory::new();

        assert!(!factory.can_proxy(&set));
        let result = factory.create_invoker_proxy(Arc::new(NullInvoker), set);
        assert!(matches!(
            result,
            Err(ProxyError::UnsupportedCapabilitySet { capability, .. }) if capability == "Widget"
        ));
    }

    #[test]
    fn test_can_proxy_accepts_interfaces() {
        assert!(TableProxyFactory::new().can_proxy(&greeter_set()));
    }

    #[test]
    fn test_undeclared_method_rejected() {
        let proxy = delegator_over(greeter_table("hi"));
        assert_eq!(
            proxy.call("vanish", None),
            Err(CallError::UnknownMethod {
                method: "vanish".to_string()
            })
        );
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let proxy = delegator_over(greeter_table("hi"));
        assert!(matches!(
            proxy.call("greet", None),
            Err(CallError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn test_absent_arguments_normalized() {
        let set = CapabilitySet::from(
            CapabilityDescriptor::interface("Pinger")
                .with_method(MethodSignature::new("ping").with_returns(TypeTag::String)),
        );
        let table = Arc::new(DispatchTable::new().with_method("ping", |_| Ok(Value::from("pong"))));
        let proxy = TableProxyFactory::new()
            .create_delegator_proxy(Arc::new(ConstantProvider::new(table)), set)
            .expect("proxy should build");
        assert_eq!(proxy.call("ping", None), Ok(Value::from("pong")));
    }

    #[test]
    fn test_delegator_failure_transparency() {
        let table: Arc<dyn Dispatch> = Arc::new(
            DispatchTable::new()
                .with_method("greet", |_| Err(CallError::raised("io", "connection reset"))),
        );
        let proxy = delegator_over(table);
        assert_eq!(
            proxy.call("greet", Some(vec![Value::from("ada")])),
            Err(CallError::raised("io", "connection reset"))
        );
    }

    #[test]
    fn test_interceptor_proxy_end_to_end() {
        struct Retry;
        impl Interceptor for Retry {
            fn intercept(&self, invocation: Invocation) -> Result<Value, CallError> {
                invocation.proceed().or_else(|_| invocation.proceed())
            }
        }
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let target: Arc<dyn Dispatch> =
            Arc::new(DispatchTable::new().with_method("greet", move |args| {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(CallError::raised("net", "transient"))
                } else {
                    Ok(args[0].clone())
                }
            }));
        let proxy = TableProxyFactory::new()
            .create_interceptor_proxy(target, Arc::new(Retry), greeter_set())
            .expect("interceptor proxy should build");
        assert_eq!(
            proxy.call("greet", Some(vec![Value::from("back")])),
            Ok(Value::from("back"))
        );
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_invoker_proxy_constant_result() {
        struct Constant;
        impl Invoker for Constant {
            fn invoke(
                &self,
                _proxy: &shim_core::ProxyRef,
                _method: &MethodSignature,
                _args: &[Value],
            ) -> Result<Value, CallError> {
                Ok(Value::from("always"))
            }
        }
        let proxy = TableProxyFactory::new()
            .create_invoker_proxy(Arc::new(Constant), greeter_set())
            .expect("invoker proxy should build");
        assert_eq!(
            proxy.call("greet", Some(vec![Value::from("x")])),
            Ok(Value::from("always"))
        );
        assert_eq!(
            proxy.call("greet", Some(vec![Value::from("y")])),
            Ok(Value::from("always"))
        );
    }

    #[test]
    fn test_explicit_context_controls_id_sequence() {
        let context = FactoryContext::new();
        let factory = TableProxyFactory::new();
        let first = factory
            .create_invoker_proxy_in(&context, Arc::new(NullInvoker), greeter_set())
            .expect("proxy should build");
        let second = factory
            .create_invoker_proxy_in(&context, Arc::new(NullInvoker), greeter_set())
            .expect("proxy should build");
        assert_eq!(first.reference().id(), 0);
        assert_eq!(second.reference().id(), 1);
    }

    #[test]
    fn test_identity_methods_resolvable_without_declaration() {
        let proxy = delegator_over(greeter_table("hi"));
        assert!(proxy.call(identity::HASH_CODE, None).is_ok());
        assert_eq!(
            proxy.call(identity::EQUALS, Some(vec![Value::Null])),
            Ok(Value::Bool(false))
        );
    }

    #[test]
    fn test_proxy_chains_as_target_of_another_proxy() {
        // Cross-cutting layers compose by wrapping one proxy with another.
        let inner = delegator_over(greeter_table("hello"));
        let outer = TableProxyFactory::new()
            .create_interceptor_proxy(
                Arc::new(inner),
                Arc::new(shim_core::interceptor::LoggingInterceptor),
                greeter_set(),
            )
            .expect("outer proxy should build");
        assert_eq!(
            outer.call("greet", Some(vec![Value::from("ada")])),
            Ok(Value::from("hello, ada"))
        );
    }
}
