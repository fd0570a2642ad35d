//! Tagged scalar values stored in column slots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Discriminant of a [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit float.
    Double,
}

impl ScalarType {
    /// One-letter code used in encoded column specs (`"<name>/<code>"`).
    pub fn code(self) -> char {
        match self {
            ScalarType::Bool => 'B',
            ScalarType::Int => 'I',
            ScalarType::Double => 'D',
        }
    }

    /// Decode a one-letter type code. Returns `None` for anything but `B`, `I`, `D`.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'B' => Some(ScalarType::Bool),
            'I' => Some(ScalarType::Int),
            'D' => Some(ScalarType::Double),
            _ => None,
        }
    }

    /// Default value of this type.
    pub fn zero(self) -> Scalar {
        match self {
            ScalarType::Bool => Scalar::Bool(false),
            ScalarType::Int => Scalar::Int(0),
            ScalarType::Double => Scalar::Double(0.0),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarType::Bool => "bool",
            ScalarType::Int => "int",
            ScalarType::Double => "double",
        };
        f.write_str(name)
    }
}

/// A single column value: exactly one of bool, integer or double.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value. `null` reads back as `NaN`.
    Double(#[serde(deserialize_with = "crate::nan::f64_or_null")] f64),
}

impl Scalar {
    /// The active variant.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Scalar::Bool(_) => ScalarType::Bool,
            Scalar::Int(_) => ScalarType::Int,
            Scalar::Double(_) => ScalarType::Double,
        }
    }

    /// Read as bool; `TypeMismatch` for any other variant.
    pub fn as_bool(&self) -> Result<bool> {
        match *self {
            Scalar::Bool(v) => Ok(v),
            _ => Err(self.mismatch(ScalarType::Bool)),
        }
    }

    /// Read as integer; `TypeMismatch` for any other variant.
    pub fn as_int(&self) -> Result<i64> {
        match *self {
            Scalar::Int(v) => Ok(v),
            _ => Err(self.mismatch(ScalarType::Int)),
        }
    }

    /// Read as double; `TypeMismatch` for any other variant.
    pub fn as_double(&self) -> Result<f64> {
        match *self {
            Scalar::Double(v) => Ok(v),
            _ => Err(self.mismatch(ScalarType::Double)),
        }
    }

    fn mismatch(&self, expected: ScalarType) -> Error {
        Error::TypeMismatch { expected, found: self.scalar_type() }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(i64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Double(v)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Double(v) => write!(f, "{v}"),
        }
    }
}
