//! Conversion between serde values and DynamoDB items.
//!
//! Encoding goes through [`serde_json::Value`], so any `Serialize` type that
//! renders as a JSON object can be stored. Decoding is the reverse path and
//! fails on attributes with no JSON counterpart (binary data) or when the
//! resulting value does not match the target type.

use aws_sdk_dynamodb::types::AttributeValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::store::Item;

/// Failures while converting between values and store items.
#[derive(Debug, Error)]
pub enum ItemError {
    /// Top-level value did not serialize to a JSON object.
    #[error("item must serialize to an object, got {found}")]
    NotAnObject { found: &'static str },

    /// Attribute type that has no JSON representation.
    #[error("attribute '{attribute}' has unsupported type {kind}")]
    UnsupportedAttribute { attribute: String, kind: &'static str },

    /// A number attribute held something that is not a number.
    #[error("attribute '{attribute}' is not a valid number: {value}")]
    InvalidNumber { attribute: String, value: String },

    /// Wrapper for serde conversion errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Encode a value into a store item.
pub fn to_item<T: Serialize + ?Sized>(value: &T) -> Result<Item, ItemError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(name, value)| (name, value_to_attribute(value)))
            .collect()),
        other => Err(ItemError::NotAnObject {
            found: json_type(&other),
        }),
    }
}

/// Decode a store item into a value.
pub fn from_item<T: DeserializeOwned>(item: &Item) -> Result<T, ItemError> {
    let object = attributes_to_object(item)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Decode a list of store items, failing on the first bad one.
pub fn from_items<T: DeserializeOwned>(items: &[Item]) -> Result<Vec<T>, ItemError> {
    items.iter().map(from_item).collect()
}

fn value_to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => {
            AttributeValue::L(values.into_iter().map(value_to_attribute).collect())
        }
        Value::Object(map) => AttributeValue::M(
            map.into_iter()
                .map(|(name, value)| (name, value_to_attribute(value)))
                .collect(),
        ),
    }
}

fn attributes_to_object(item: &Item) -> Result<Map<String, Value>, ItemError> {
    item.iter()
        .map(|(name, attr)| Ok((name.clone(), attribute_to_value(name, attr)?)))
        .collect()
}

fn attribute_to_value(name: &str, attr: &AttributeValue) -> Result<Value, ItemError> {
    let value = match attr {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => Value::Number(parse_number(name, n)?),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::Ss(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| parse_number(name, n).map(Value::Number))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(|v| attribute_to_value(name, v))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(map) => Value::Object(attributes_to_object(map)?),
        AttributeValue::B(_) => return Err(unsupported(name, "B")),
        AttributeValue::Bs(_) => return Err(unsupported(name, "BS")),
        _ => return Err(unsupported(name, "unknown")),
    };
    Ok(value)
}

fn parse_number(name: &str, raw: &str) -> Result<Number, ItemError> {
    serde_json::from_str::<Number>(raw).map_err(|_| ItemError::InvalidNumber {
        attribute: name.to_string(),
        value: raw.to_string(),
    })
}

fn unsupported(name: &str, kind: &'static str) -> ItemError {
    ItemError::UnsupportedAttribute {
        attribute: name.to_string(),
        kind,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
