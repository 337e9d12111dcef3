use core::fmt;

/// A primitive-or-string extra value carried by an [`Intent`](super::Intent)
///
/// Platform bundles can hold richer types (parcelables, arrays); everything
/// the shell consumes is covered by these variants, and the Android backend
/// stringifies anything else at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Extra {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extra::Bool(v) => write!(f, "{v}"),
            Extra::Int(v) => write!(f, "{v}"),
            Extra::Long(v) => write!(f, "{v}"),
            Extra::Float(v) => write!(f, "{v}"),
            Extra::Double(v) => write!(f, "{v}"),
            Extra::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Extra {
    fn from(value: bool) -> Self {
        Extra::Bool(value)
    }
}
impl From<i32> for Extra {
    fn from(value: i32) -> Self {
        Extra::Int(value)
    }
}
impl From<i64> for Extra {
    fn from(value: i64) -> Self {
        Extra::Long(value)
    }
}
impl From<f32> for Extra {
    fn from(value: f32) -> Self {
        Extra::Float(value)
    }
}
impl From<f64> for Extra {
    fn from(value: f64) -> Self {
        Extra::Double(value)
    }
}
impl From<&str> for Extra {
    fn from(value: &str) -> Self {
        Extra::String(value.to_owned())
    }
}
impl From<String> for Extra {
    fn from(value: String) -> Self {
        Extra::String(value)
    }
}
