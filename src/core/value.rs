/*!
# Typed cell values

Type inference for a single raw CSV cell. Cells are coerced one at a time,
nothing is carried between cells.
*/

use serde_json::{Number, Value};
use std::fmt;

/// Inferred scalar type of a cell
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl TypedValue {
    /// Coerce a raw cell.
    ///
    /// Order: empty → bool → i64 → finite f64 → string. Only `true`/`TRUE`
    /// and `false`/`FALSE` are booleans; `True` stays a string. An integer
    /// that overflows `i64` is parsed again as a float.
    pub fn coerce(raw: &str) -> Self {
        if raw.is_empty() {
            return TypedValue::Null;
        }

        match raw {
            "true" | "TRUE" => return TypedValue::Bool(true),
            "false" | "FALSE" => return TypedValue::Bool(false),
            _ => {}
        }

        if let Ok(int) = raw.parse::<i64>() {
            return TypedValue::Int(int);
        }

        // `inf` and `NaN` parse, but JSON has no way to hold them
        match raw.parse::<f64>() {
            Ok(float) if float.is_finite() => TypedValue::Float(float),
            _ => TypedValue::String(raw.to_string()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::Null => "null",
            TypedValue::Bool(_) => "bool",
            TypedValue::Int(_) => "int",
            TypedValue::Float(_) => "float",
            TypedValue::String(_) => "string",
        }
    }
}

/// Canonical string form; coercing it yields the same value.
impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Null => Ok(()),
            TypedValue::Bool(b) => write!(f, "{}", b),
            TypedValue::Int(i) => write!(f, "{}", i),
            // Debug keeps the fraction (`1.0`), so the text does not re-parse as an int
            TypedValue::Float(x) => write!(f, "{:?}", x),
            TypedValue::String(s) => f.write_str(s),
        }
    }
}

impl From<TypedValue> for Value {
    fn from(value: TypedValue) -> Self {
        match value {
            TypedValue::Null => Value::Null,
            TypedValue::Bool(b) => Value::Bool(b),
            TypedValue::Int(i) => Value::Number(i.into()),
            TypedValue::Float(x) => Number::from_f64(x).map_or(Value::Null, Value::Number),
            TypedValue::String(s) => Value::String(s),
        }
    }
}
