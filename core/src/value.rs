//! The value tree being rendered.
//!
//! A `Value` is either a leaf scalar (integer or text), a fixed-arity
//! `Record` of scalars (e.g. an int/text pair), or an ordered `Seq` of
//! values. Sequences nest to arbitrary depth. The engine only ever borrows
//! a value tree; it never mutates one.

use std::fmt;

/// A node in the value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer leaf.
    Int(i64),
    /// UTF-8 text leaf. Embedded whitespace is preserved verbatim.
    Text(String),
    /// Fixed-arity leaf record (one formatted unit, e.g. a pair).
    Record(Vec<Value>),
    /// Ordered container of values. Order is always preserved.
    Seq(Vec<Value>),
}

impl Value {
    /// Returns true if this is an integer leaf.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a text leaf.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns true if this is a leaf record.
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns true if this is a sequence.
    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as text reference if this is a Text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the record fields if this is a Record value.
    pub fn as_record(&self) -> Option<&[Value]> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get the elements if this is a Seq value.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(elems) => Some(elems),
            _ => None,
        }
    }

    /// Returns the type name of this value, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Text(_) => "Text",
            Value::Record(_) => "Record",
            Value::Seq(_) => "Seq",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Text(s) => write!(f, "\"{}\"", s),
            Value::Record(fields) => {
                write!(f, "(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", field)?;
                }
                write!(f, ")")
            }
            Value::Seq(elems) => {
                write!(f, "[")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", elem)?;
                }
                write!(f, "]")
            }
        }
    }
}

// Convenient From implementations
impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(elems: Vec<Value>) -> Self {
        Value::Seq(elems)
    }
}

/// Helper macro to build a `Value::Seq` from element expressions.
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Value::Seq(Vec::new())
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Value::Seq(vec![$($crate::Value::from($elem)),+])
    };
}

/// Helper macro to build a `Value::Record` from field expressions.
#[macro_export]
macro_rules! record {
    () => {
        $crate::Value::Record(Vec::new())
    };
    ($($field:expr),+ $(,)?) => {
        $crate::Value::Record(vec![$($crate::Value::from($field)),+])
    };
}
