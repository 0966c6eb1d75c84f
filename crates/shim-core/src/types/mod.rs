//! Fundamental types shared by every strategy and backend.

mod capability;
mod method;
mod number;
mod proxy_ref;
mod value;

pub use capability::{CapabilityDescriptor, CapabilityKind, CapabilitySet};
pub use method::{MethodSignature, TypeTag};
pub use number::Number;
pub use proxy_ref::{ProxyId, ProxyRef};
pub use value::Value;
