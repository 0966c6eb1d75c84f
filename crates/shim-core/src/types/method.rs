//! Method signatures: the operation descriptors proxy calls dispatch on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Runtime type tag for parameters and return values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// Accepts any value.
    Any,
    /// No meaningful value (null).
    Unit,
    /// Boolean value.
    Bool,
    /// Numeric value.
    Number,
    /// String value.
    String,
    /// Array value.
    Array,
    /// Object value.
    Object,
    /// Proxy reference.
    Proxy,
}

impl TypeTag {
    /// Whether a value carrying `actual` may be passed where `self` is
    /// declared.
    ///
    /// `Any` accepts every tag; `Unit` (null) is accepted everywhere,
    /// playing the role of the absent reference.
    pub fn accepts(&self, actual: TypeTag) -> bool {
        matches!(self, TypeTag::Any) || actual == TypeTag::Unit || *self == actual
    }
}

/// Descriptor of a single operation: name, parameter types, return type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    /// Method name, unique within a capability.
    pub name: String,
    /// Declared parameter types, in call order.
    pub params: Vec<TypeTag>,
    /// Declared return type.
    pub returns: TypeTag,
}

impl MethodSignature {
    /// Creates a signature with the given name, no parameters, and an
    /// `Any` return type.
    pub fn new(name: impl Into<String>) -> Self {
        MethodSignature {
            name: name.into(),
            params: Vec::new(),
            returns: TypeTag::Any,
        }
    }

    /// Sets the parameter types.
    pub fn with_params(mut self, params: Vec<TypeTag>) -> Self {
        self.params = params;
        self
    }

    /// Sets the return type.
    pub fn with_returns(mut self, returns: TypeTag) -> Self {
        self.returns = returns;
        self
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.params.len())
    }
}
