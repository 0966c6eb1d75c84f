//! The produced proxy object of the dispatch-table backend.

use shim_core::handler::identity;
use shim_core::{
    CallError, CapabilitySet, Dispatch, MethodSignature, ProxyRef, StrategyHandler, Value,
};

/// A capability-satisfying object produced by the table backend.
///
/// Holds its stable [`ProxyRef`], the capability set as method-lookup
/// metadata, and the strategy handler every call is routed into. The
/// object itself is immutable; concurrent calls are safe whenever the
/// bound collaborators are.
pub struct ProxyObject {
    reference: ProxyRef,
    capabilities: CapabilitySet,
    handler: StrategyHandler,
}

impl ProxyObject {
    pub(crate) fn new(
        reference: ProxyRef,
        capabilities: CapabilitySet,
        handler: StrategyHandler,
    ) -> Self {
        ProxyObject {
            reference,
            capabilities,
            handler,
        }
    }

    /// The logical reference of this proxy.
    pub fn reference(&self) -> &ProxyRef {
        &self.reference
    }

    /// The capability set this proxy satisfies.
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// Calls a method by name.
    ///
    /// Absent arguments are normalized to an empty list. The method must
    /// be declared by one of the proxy's capabilities; the identity
    /// methods `hash_code` and `equals` are always resolvable, declared
    /// or not. Arguments are checked against the declared signature
    /// before the call reaches the strategy handler.
    ///
    /// # Errors
    ///
    /// [`CallError::UnknownMethod`] for an undeclared method,
    /// [`CallError::InvalidArguments`] on an arity or type mismatch, and
    /// otherwise whatever failure the strategy surfaces.
    pub fn call(&self, method: &str, args: Option<Vec<Value>>) -> Result<Value, CallError> {
        let args = args.unwrap_or_default();
        let signature = self.resolve(method)?;
        check_arguments(&signature, &args)?;
        self.handler.handle(&self.reference, &signature, &args)
    }

    /// Identity-based hash of this proxy instance.
    pub fn identity_hash(&self) -> i64 {
        self.reference.identity_hash()
    }

    /// Reference equality: true only for the same proxy instance.
    pub fn identity_eq(&self, other: &ProxyObject) -> bool {
        self.reference == other.reference
    }

    fn resolve(&self, method: &str) -> Result<MethodSignature, CallError> {
        if method == identity::HASH_CODE {
            return Ok(identity::hash_code_signature());
        }
        if method == identity::EQUALS {
            return Ok(identity::equals_signature());
        }
        self.capabilities
            .find_method(method)
            .cloned()
            .ok_or_else(|| CallError::UnknownMethod {
                method: method.to_string(),
            })
    }
}

impl Dispatch for ProxyObject {
    /// Routes a declared operation into the strategy handler, so a proxy
    /// can itself stand as a delegate or target behind another proxy.
    fn dispatch(&self, method: &MethodSignature, args: &[Value]) -> Result<Value, CallError> {
        self.call(&method.name, Some(args.to_vec()))
    }
}

fn check_arguments(signature: &MethodSignature, args: &[Value]) -> Result<(), CallError> {
    if args.len() != signature.arity() {
        return Err(CallError::InvalidArguments {
            method: signature.name.clone(),
            message: format!("expected {} arguments, got {}", signature.arity(), args.len()),
        });
    }
    for (index, (declared, arg)) in signature.params.iter().zip(args).enumerate() {
        if !declared.accepts(arg.type_tag()) {
            return Err(CallError::InvalidArguments {
                method: signature.name.clone(),
                message: format!(
                    "argument {index} has type {:?}, expected {declared:?}",
                    arg.type_tag()
                ),
            });
        }
    }
    Ok(())
}
