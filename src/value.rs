//! Argument values carried by scene nodes.
//!
//! This module provides the [`Value`] enum which represents any value that can
//! appear in a node's argument list: numbers, bare tokens and strings, angle
//! bracket vectors, and nested nodes.
//!
//! ## Core Types
//!
//! - [`Value`]: an enum over number, string, vector, and nested node
//! - [`Number`]: an integer or float with the textual form POV-Ray expects
//!
//! ## Creating Values
//!
//! Most callers never name these types directly; the [`args!`](crate::args)
//! macro and the `From` conversions build them:
//!
//! ```rust
//! use povgen::{args, Value};
//!
//! let arguments = args!["location", [0, 2, -3], "look_at", [0, 1, 2]];
//! assert_eq!(arguments.len(), 4);
//! assert!(arguments[1].is_vector());
//!
//! let radius = Value::from(2.5);
//! assert_eq!(radius.as_f64(), Some(2.5));
//! ```

use crate::Node;
use std::fmt;

/// Any value that can appear in a node's argument list.
///
/// Argument lists are heterogeneous and order-sensitive: POV-Ray's scene
/// description language is a stream of positional keywords and values, so a
/// camera is built as `"location", <vector>, "look_at", <vector>` with the
/// keyword tokens interleaved as plain strings.
///
/// # Examples
///
/// ```rust
/// use povgen::Value;
///
/// let token = Value::from("location");
/// let position = Value::Vector(vec![0.into(), 2.into(), (-3).into()]);
///
/// assert!(token.is_str());
/// assert!(position.is_vector());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A numeric literal.
    Number(Number),
    /// A bare token (`"location"`, `"phong"`, `"White"`) or quoted string.
    Str(String),
    /// An ordered sequence rendered as `<e1,e2,...,en>`.
    Vector(Vec<Value>),
    /// A nested node, rendered by its own serialization.
    Node(Node),
}

/// A numeric literal, kept as supplied so `2` serializes as `2` and not `2.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if the value is strictly negative.
    ///
    /// Negative numbers need parenthesization at the top level of an argument
    /// list because POV-Ray reads a leading minus sign as subtraction.
    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(i) => *i < 0,
            Number::Float(f) => *f < 0.0,
        }
    }

    /// Returns `true` if the value is a float that is NaN or infinite.
    ///
    /// POV-Ray has no literal for these, so they are rejected at
    /// serialization time.
    #[inline]
    #[must_use]
    pub fn is_non_finite(&self) -> bool {
        match self {
            Number::Integer(_) => false,
            Number::Float(f) => !f.is_finite(),
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Value {
    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string or bare token.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if the value is a vector.
    #[inline]
    #[must_use]
    pub const fn is_vector(&self) -> bool {
        matches!(self, Value::Vector(_))
    }

    /// Returns `true` if the value is a nested node.
    #[inline]
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    /// If the value is a string or token, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as an `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is a vector, returns its elements. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Value::Vector(elems) => Some(elems),
            _ => None,
        }
    }

    /// If the value is a nested node, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

macro_rules! value_from_numeric {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_numeric!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Node(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Vector(value)
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(value: [f64; N]) -> Self {
        Value::Vector(value.iter().map(|e| Value::from(*e)).collect())
    }
}

impl From<&[f64]> for Value {
    fn from(value: &[f64]) -> Self {
        Value::Vector(value.iter().map(|e| Value::from(*e)).collect())
    }
}
