//! Logical proxy references.
//!
//! Every proxy produced by a backend is bound to exactly one [`ProxyRef`]
//! for its whole lifetime. Identity semantics (the `hash_code` and
//! `equals` interception) are defined over this reference, never over the
//! wrapped delegate or target.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::types::Value;

/// Unique identifier of a proxy within its factory context.
pub type ProxyId = u64;

/// The logical reference to a proxy instance.
///
/// Backend precondition: ids are allocated once per produced proxy and
/// stay stable for the proxy's lifetime, so the reference behaves like a
/// stable object identity even for backends whose produced objects are
/// plain values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRef {
    id: ProxyId,
}

impl ProxyRef {
    /// Creates a reference for a freshly allocated proxy id.
    pub fn new(id: ProxyId) -> Self {
        ProxyRef { id }
    }

    /// The proxy id this reference points at.
    pub fn id(&self) -> ProxyId {
        self.id
    }

    /// Identity-based hash of the proxy reference itself.
    ///
    /// Stable across calls on the same proxy instance; derived from the
    /// proxy id, so two distinct proxies do not collide just because they
    /// wrap equal targets.
    pub fn identity_hash(&self) -> i64 {
        let mut hasher = DefaultHasher::new();
        self.id.hash(&mut hasher);
        hasher.finish() as i64
    }

    /// Reference equality against a call argument.
    ///
    /// True only when the argument is a proxy value carrying this proxy's
    /// own id. A proxy is never equal to its wrapped object.
    pub fn is_same_proxy(&self, argument: &Value) -> bool {
        argument.as_proxy_id() == Some(self.id)
    }

    /// The value form of this reference, as seen in argument lists.
    pub fn to_value(&self) -> Value {
        Value::Proxy(self.id)
    }
}
