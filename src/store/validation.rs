//! Payload schemas for planet creation and update.
//!
//! Each schema is a static table of fields checked in declaration order.
//! The first failing check wins, so a given payload always produces the
//! same message. Keys not declared in the schema are rejected after every
//! declared field has passed.

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::models::{CreatePlanetInput, UpdatePlanetInput};

/// Largest integer a JSON client can round-trip through an IEEE double.
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Name used in messages when the payload as a whole is rejected.
const ROOT: &str = "value";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// The offending key, or `value` when the payload itself is malformed.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, reason: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("\"{}\" {}", field, reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    /// A JSON number, or a numeric string, holding a safe integer.
    Integer,
    /// A JSON string with at least one character.
    String,
}

struct Field {
    name: &'static str,
    kind: FieldKind,
}

pub struct Schema {
    fields: &'static [Field],
}

pub const CREATE_PLANET: Schema = Schema {
    fields: &[
        Field {
            name: "id",
            kind: FieldKind::Integer,
        },
        Field {
            name: "name",
            kind: FieldKind::String,
        },
    ],
};

pub const UPDATE_PLANET: Schema = Schema {
    fields: &[Field {
        name: "name",
        kind: FieldKind::String,
    }],
};

impl Schema {
    /// Check `candidate` and return its fields with conversions applied.
    pub fn validate(&self, candidate: &Value) -> Result<Map<String, Value>, ValidationError> {
        let object = candidate
            .as_object()
            .ok_or_else(|| ValidationError::new(ROOT, "must be of type object"))?;

        let mut validated = Map::new();
        for field in self.fields {
            let value = object
                .get(field.name)
                .ok_or_else(|| ValidationError::new(field.name, "is required"))?;
            let value = match field.kind {
                FieldKind::Integer => check_integer(field.name, value)?,
                FieldKind::String => check_string(field.name, value)?,
            };
            validated.insert(field.name.to_string(), value);
        }

        if let Some(unknown) = object
            .keys()
            .find(|key| !self.fields.iter().any(|f| f.name == key.as_str()))
        {
            return Err(ValidationError::new(unknown, "is not allowed"));
        }

        Ok(validated)
    }
}

fn check_integer(name: &str, value: &Value) -> Result<Value, ValidationError> {
    let number = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ValidationError::new(name, "must be a number"))?,
        Value::String(s) => parse_numeric_string(s)
            .ok_or_else(|| ValidationError::new(name, "must be a number"))?,
        _ => return Err(ValidationError::new(name, "must be a number")),
    };

    // Exact integers arrive as i64/u64 and must not go through f64.
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return safe_integer(name, i);
        }
        if n.as_u64().is_some() {
            return Err(ValidationError::new(name, "must be a safe number"));
        }
    }

    if !number.is_finite() || number.abs() > MAX_SAFE_INTEGER as f64 {
        return Err(ValidationError::new(name, "must be a safe number"));
    }
    if number.fract() != 0.0 {
        return Err(ValidationError::new(name, "must be an integer"));
    }
    safe_integer(name, number as i64)
}

fn safe_integer(name: &str, i: i64) -> Result<Value, ValidationError> {
    if i.unsigned_abs() > MAX_SAFE_INTEGER as u64 {
        return Err(ValidationError::new(name, "must be a safe number"));
    }
    Ok(Value::Number(Number::from(i)))
}

/// Accepts plain decimal notation with optional sign and exponent.
/// Rejects spellings such as `inf` or `NaN` that `f64::from_str` would take.
fn parse_numeric_string(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty()
        || !s.bytes().any(|b| b.is_ascii_digit())
        || !s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    s.parse().ok()
}

fn check_string(name: &str, value: &Value) -> Result<Value, ValidationError> {
    match value {
        Value::String(s) if s.is_empty() => {
            Err(ValidationError::new(name, "is not allowed to be empty"))
        }
        Value::String(_) => Ok(value.clone()),
        _ => Err(ValidationError::new(name, "must be a string")),
    }
}

pub fn validate_create(candidate: &Value) -> Result<CreatePlanetInput, ValidationError> {
    into_input(CREATE_PLANET.validate(candidate)?)
}

pub fn validate_update(candidate: &Value) -> Result<UpdatePlanetInput, ValidationError> {
    into_input(UPDATE_PLANET.validate(candidate)?)
}

/// Deserialize a map produced by [`Schema::validate`] into its typed input.
fn into_input<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T, ValidationError> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| ValidationError {
        field: ROOT.to_string(),
        message: e.to_string(),
    })
}
