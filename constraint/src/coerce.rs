//! Property value coercion.
//!
//! The checker asks a [`ValueCoercer`] to turn each property declaration into
//! a runtime [`Value`]. A failure becomes a report entry.

use cmv_core::{Property, PropertyContent, Value};
use thiserror::Error;

/// Errors produced while coercing a property.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoercionError {
    #[error("Property '{property}' carries an 'any' payload but declares no type")]
    MissingType { property: String },

    #[error("Property '{property}': cannot convert '{value}' to {type_name}: {reason}")]
    InvalidValue {
        property: String,
        type_name: String,
        value: String,
        reason: String,
    },
}

impl CoercionError {
    pub fn invalid_value(
        property: impl Into<String>,
        type_name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            property: property.into(),
            type_name: type_name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Converts property declarations into runtime values.
pub trait ValueCoercer: Send + Sync {
    fn coerce(&self, property: &Property) -> Result<Value, CoercionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scalar {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Char,
    String,
}

impl Scalar {
    /// Primitive names and their `java.lang` boxes, e.g. `int` or `java.lang.Integer`.
    fn from_type_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("java.lang.").unwrap_or(name);
        match name.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Some(Scalar::Bool),
            "byte" => Some(Scalar::Byte),
            "short" => Some(Scalar::Short),
            "int" | "integer" => Some(Scalar::Int),
            "long" => Some(Scalar::Long),
            "float" | "double" => Some(Scalar::Float),
            "char" | "character" => Some(Scalar::Char),
            "string" => Some(Scalar::String),
            _ => None,
        }
    }

    fn parse(self, text: &str) -> Result<Value, String> {
        let trimmed = text.trim();
        match self {
            Scalar::Bool => match trimmed.to_ascii_lowercase().as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err("expected 'true' or 'false'".to_string()),
            },
            Scalar::Byte => trimmed
                .parse::<i8>()
                .map(|v| Value::Int(v.into()))
                .map_err(|e| e.to_string()),
            Scalar::Short => trimmed
                .parse::<i16>()
                .map(|v| Value::Int(v.into()))
                .map_err(|e| e.to_string()),
            Scalar::Int => trimmed
                .parse::<i32>()
                .map(|v| Value::Int(v.into()))
                .map_err(|e| e.to_string()),
            Scalar::Long => trimmed
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| e.to_string()),
            Scalar::Float => trimmed
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| e.to_string()),
            Scalar::Char => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Value::Char(c)),
                    _ => Err("expected exactly one character".to_string()),
                }
            }
            Scalar::String => Ok(Value::String(text.to_string())),
        }
    }
}

/// Coerces scalar types by name and passes other typed content through.
///
/// Recognised type names (case-insensitive, with or without a `java.lang.`
/// prefix): `bool`/`boolean`, `byte`, `short`, `int`/`integer`, `long`,
/// `float`/`double`, `char`/`character` and `string`. An untyped literal is a
/// string. A literal or `any` payload of any other type becomes
/// [`Value::Opaque`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultValueCoercer;

impl DefaultValueCoercer {
    fn typed(property: &Property, type_name: &str, text: &str) -> Result<Value, CoercionError> {
        match Scalar::from_type_name(type_name) {
            Some(scalar) => scalar.parse(text).map_err(|reason| {
                CoercionError::invalid_value(&property.name, type_name, text, reason)
            }),
            None => Ok(Value::Opaque {
                type_name: type_name.to_string(),
                payload: text.to_string(),
            }),
        }
    }
}

impl ValueCoercer for DefaultValueCoercer {
    fn coerce(&self, property: &Property) -> Result<Value, CoercionError> {
        let type_name = property.type_name.as_deref();
        match &property.content {
            PropertyContent::Empty => Ok(Value::Null),
            PropertyContent::Literal(text) => match type_name {
                None => Ok(Value::String(text.clone())),
                Some(type_name) => Self::typed(property, type_name, text),
            },
            PropertyContent::Any(payload) => {
                let type_name = type_name.ok_or_else(|| CoercionError::MissingType {
                    property: property.name.clone(),
                })?;
                Self::typed(property, type_name, payload)
            }
        }
    }
}
