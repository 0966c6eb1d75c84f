//! The dispatch contract and the table-of-closures implementation.
//!
//! `Dispatch` is the single entry point every call funnels through:
//! delegates, interceptor targets, and the proxies a backend produces all
//! present it. Strategies route calls between `Dispatch` surfaces without
//! knowing what stands behind them.

use std::collections::HashMap;

use crate::error::CallError;
use crate::types::{MethodSignature, Value};

/// Something calls can be executed against.
pub trait Dispatch: Send + Sync {
    /// Executes the operation described by `method` with `args` and
    /// returns its result.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the underlying operation raises. A
    /// failure raised *inside* the operation body crosses the boundary
    /// wrapped in [`CallError::Target`]; the calling strategy removes the
    /// wrapper before the failure reaches the proxy's caller.
    fn dispatch(&self, method: &MethodSignature, args: &[Value]) -> Result<Value, CallError>;
}

/// Boxed method implementation stored in a [`DispatchTable`].
pub type MethodFn = Box<dyn Fn(&[Value]) -> Result<Value, CallError> + Send + Sync>;

/// A dispatch table mapping method names to closures.
///
/// The in-process way to stand up a delegate or an interceptor target:
/// register a closure per method, then hand the table to a factory. The
/// table is immutable once shared; registration happens before the table
/// crosses into a proxy.
#[derive(Default)]
pub struct DispatchTable {
    methods: HashMap<String, MethodFn>,
}

impl DispatchTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        DispatchTable {
            methods: HashMap::new(),
        }
    }

    /// Registers a method implementation, replacing any previous one
    /// under the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, method: F)
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Box::new(method));
    }

    /// Builder-style [`DispatchTable::register`].
    pub fn with_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        self.register(name, method);
        self
    }

    /// Whether a method is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }
}

impl Dispatch for DispatchTable {
    fn dispatch(&self, method: &MethodSignature, args: &[Value]) -> Result<Value, CallError> {
        let method_fn = self
            .methods
            .get(&method.name)
            .ok_or_else(|| CallError::UnknownMethod {
                method: method.name.clone(),
            })?;
        // A failure raised by the method body crosses the call boundary
        // wrapped, mirroring how a reflective invoke reports it.
        method_fn(args).map_err(|cause| CallError::Target(Box::new(cause)))
    }
}
