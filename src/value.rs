use std::collections::{HashSet, VecDeque};

use strum_macros::{AsRefStr, Display, EnumDiscriminants};

/// The payload held under a key. A key holds exactly one variant at a time; only an explicit
/// overwrite (`SET`) or a delete can change it.
///
/// The `ValueType` discriminant enum is derived alongside and is what type checks and `TYPE`
/// replies are expressed in.
#[derive(Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(
    name(ValueType),
    derive(Display, AsRefStr),
    strum(serialize_all = "lowercase")
)]
pub enum Value {
    String(String),
    List(VecDeque<String>),
    Set(HashSet<String>),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        ValueType::from(self)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
