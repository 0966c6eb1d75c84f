//! Invokers: fully custom call handling with no target behind them.

use crate::error::CallError;
use crate::types::{MethodSignature, ProxyRef, Value};

/// Produces the result of every call on an invoker proxy.
///
/// There is no continuation and no target to fall back to; the invoker's
/// result or failure is authoritative. This is the strategy for "real"
/// implementations that do not exist as in-process objects, such as calls
/// bridged over a remote channel or synthesized programmatically.
pub trait Invoker: Send + Sync {
    /// Handles one call on the proxy identified by `proxy`.
    ///
    /// # Errors
    ///
    /// The failure reaches the proxy's caller unchanged.
    fn invoke(
        &self,
        proxy: &ProxyRef,
        method: &MethodSignature,
        args: &[Value],
    ) -> Result<Value, CallError>;
}

/// Invoker that ignores every call and returns null.
pub struct NullInvoker;

impl Invoker for NullInvoker {
    fn invoke(
        &self,
        _proxy: &ProxyRef,
        _method: &MethodSignature,
        _args: &[Value],
    ) -> Result<Value, CallError> {
        Ok(Value::Null)
    }
}
