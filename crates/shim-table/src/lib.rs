//! Dispatch-table proxy backend.
//!
//! Implements the `shim-core` factory contract with plain in-process
//! objects: a produced [`ProxyObject`] routes every declared method, by
//! name, through its strategy handler. The role the original design gives
//! to runtime class synthesis is played here by method lookup over the
//! retained capability set.

mod factory;
mod proxy;

pub use factory::TableProxyFactory;
pub use proxy::ProxyObject;
