//! Capability descriptors: the behavioral contracts a proxy satisfies.

use serde::{Deserialize, Serialize};

use crate::error::ProxyError;
use crate::types::MethodSignature;

/// What kind of contract a descriptor declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityKind {
    /// Pure behavioral contract, carries no concrete state. Proxyable.
    Interface,
    /// Descriptor bound to concrete state. Backends cannot satisfy it.
    Concrete,
}

/// A named set of method signatures a proxy must answer to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapabilityDescriptor {
    /// Capability name.
    pub name: String,
    /// Contract kind.
    pub kind: CapabilityKind,
    /// Declared methods.
    pub methods: Vec<MethodSignature>,
}

impl CapabilityDescriptor {
    /// Creates an interface descriptor with no methods.
    pub fn interface(name: impl Into<String>) -> Self {
        CapabilityDescriptor {
            name: name.into(),
            kind: CapabilityKind::Interface,
            methods: Vec::new(),
        }
    }

    /// Creates a concrete descriptor with no methods.
    pub fn concrete(name: impl Into<String>) -> Self {
        CapabilityDescriptor {
            name: name.into(),
            kind: CapabilityKind::Concrete,
            methods: Vec::new(),
        }
    }

    /// Adds a method to the descriptor.
    pub fn with_method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }

    /// Whether this descriptor is a pure behavioral contract.
    pub fn is_interface(&self) -> bool {
        self.kind == CapabilityKind::Interface
    }
}

/// Ordered, non-empty collection of capability descriptors.
///
/// Supplied per proxy-creation call; the produced proxy keeps it only as
/// method-lookup metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapabilitySet {
    descriptors: Vec<CapabilityDescriptor>,
}

impl CapabilitySet {
    /// Creates a capability set from descriptors. Emptiness is reported
    /// by [`CapabilitySet::validate`], not here, so factories own the
    /// construction-time error.
    pub fn new(descriptors: Vec<CapabilityDescriptor>) -> Self {
        CapabilitySet { descriptors }
    }

    /// The descriptors in declaration order.
    pub fn descriptors(&self) -> &[CapabilityDescriptor] {
        &self.descriptors
    }

    /// Checks the structural invariants every factory enforces before
    /// construction: the set is non-empty and every descriptor is named.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::InvalidArgument`] on violation.
    pub fn validate(&self) -> Result<(), ProxyError> {
        if self.descriptors.is_empty() {
            return Err(ProxyError::InvalidArgument {
                message: "capability set is empty".to_string(),
            });
        }
        for descriptor in &self.descriptors {
            if descriptor.name.is_empty() {
                return Err(ProxyError::InvalidArgument {
                    message: "capability set contains an unnamed descriptor".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Resolves a declared method signature by name, searching the
    /// descriptors in declaration order.
    pub fn find_method(&self, name: &str) -> Option<&MethodSignature> {
        self.descriptors
            .iter()
            .flat_map(|descriptor| descriptor.methods.iter())
            .find(|method| method.name == name)
    }

    /// The capability names, for diagnostics.
    pub fn names(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.name.as_str()).collect()
    }
}

impl From<CapabilityDescriptor> for CapabilitySet {
    /// Single-capability convenience, for the common one-interface proxy.
    fn from(descriptor: CapabilityDescriptor) -> Self {
        CapabilitySet::new(vec![descriptor])
    }
}
