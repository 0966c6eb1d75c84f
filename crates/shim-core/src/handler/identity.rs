//! Shared identity-method interception.
//!
//! Every strategy answers `hash_code` and `equals` itself, from the
//! proxy reference, before any strategy logic runs. Forwarding these to a
//! delegate or interceptor would let the proxy's identity drift with the
//! wrapped object's, breaking reflexivity and hash-container use.

use crate::types::{MethodSignature, ProxyRef, TypeTag, Value};

/// Name of the identity-hash method.
pub const HASH_CODE: &str = "hash_code";
/// Name of the reference-equality method.
pub const EQUALS: &str = "equals";

/// Signature of the identity-hash method, answerable on every proxy
/// whether or not a capability declares it.
pub fn hash_code_signature() -> MethodSignature {
    MethodSignature::new(HASH_CODE).with_returns(TypeTag::Number)
}

/// Signature of the reference-equality method.
pub fn equals_signature() -> MethodSignature {
    MethodSignature::new(EQUALS)
        .with_params(vec![TypeTag::Any])
        .with_returns(TypeTag::Bool)
}

fn is_hash_code(method: &MethodSignature) -> bool {
    method.name == HASH_CODE && method.arity() == 0
}

fn is_equals(method: &MethodSignature) -> bool {
    method.name == EQUALS && method.arity() == 1
}

/// Pre-dispatch step run before every strategy.
///
/// Returns `Some` with the identity result when the call targets an
/// identity method; `None` lets the call fall through to the strategy.
pub fn pre_dispatch(proxy: &ProxyRef, method: &MethodSignature, args: &[Value]) -> Option<Value> {
    if is_hash_code(method) {
        Some(Value::from(proxy.identity_hash()))
    } else if is_equals(method) {
        let other = args.first().unwrap_or(&Value::Null);
        Some(Value::Bool(proxy.is_same_proxy(other)))
    } else {
        None
    }
}
