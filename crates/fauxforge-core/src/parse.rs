//! Normalization of wire JSON into [`SchemaNode`] trees.
//!
//! The wire format is permissive: anything that is not a well-formed array
//! or image descriptor is walked as a nested object, and non-string leaves
//! become scalar nodes with an unknown tag. Only array bounds with
//! `min > max` are rejected here, since no length could satisfy them.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::schema::{
    ArraySpec, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, Field, ImageSpec, SchemaNode,
};

/// Hard ceiling on nesting while normalizing.
///
/// Text decoded by `serde_json` is already capped at 128 levels; this bounds
/// `Value`s assembled in code. Generation applies its own, usually lower,
/// configurable limit.
pub const PARSE_DEPTH_LIMIT: usize = 512;

const ROOT_PATH: &str = "schema";

/// Normalize a wire schema into a generation tree.
pub fn parse_schema(value: &Value) -> Result<SchemaNode> {
    parse_node(value, ROOT_PATH, 1)
}

fn parse_node(value: &Value, path: &str, depth: usize) -> Result<SchemaNode> {
    if depth > PARSE_DEPTH_LIMIT {
        return Err(Error::TooDeep {
            path: path.to_string(),
            limit: PARSE_DEPTH_LIMIT,
        });
    }

    match value {
        Value::String(tag) => Ok(SchemaNode::Scalar(tag.clone())),
        Value::Object(map) => match map.get("type").and_then(Value::as_str) {
            Some("array") => match array_parts(map) {
                Some((min, max, element)) => parse_array(min, max, element, path, depth),
                None => parse_object(map, path, depth),
            },
            Some("image") => Ok(SchemaNode::Image(parse_image(map))),
            _ => parse_object(map, path, depth),
        },
        // Numbers, booleans, null and JSON arrays carry no tag; their compact
        // text is used so the fallback generator handles them.
        other => Ok(SchemaNode::Scalar(other.to_string())),
    }
}

fn parse_object(map: &Map<String, Value>, path: &str, depth: usize) -> Result<SchemaNode> {
    let mut fields = Vec::with_capacity(map.len());
    for (name, value) in map {
        let child_path = format!("{path}.{name}");
        fields.push(Field {
            name: name.clone(),
            node: parse_node(value, &child_path, depth + 1)?,
        });
    }
    Ok(SchemaNode::Object(fields))
}

fn parse_array(
    min: u64,
    max: u64,
    element: &Value,
    path: &str,
    depth: usize,
) -> Result<SchemaNode> {
    if min > max {
        return Err(Error::InvalidSchema {
            path: path.to_string(),
            message: format!("array size [{min}, {max}] has min greater than max"),
        });
    }
    let (min_size, max_size) = match (usize::try_from(min), usize::try_from(max)) {
        (Ok(min), Ok(max)) => (min, max),
        _ => {
            return Err(Error::InvalidSchema {
                path: path.to_string(),
                message: format!("array size [{min}, {max}] does not fit this platform"),
            });
        }
    };

    let element_path = format!("{path}[]");
    let element = parse_node(element, &element_path, depth + 1)?;
    Ok(SchemaNode::Array(ArraySpec {
        min_size,
        max_size,
        element: Box::new(element),
    }))
}

/// Returns `(min, max, element)` when the map is a well-formed array node.
fn array_parts(map: &Map<String, Value>) -> Option<(u64, u64, &Value)> {
    let size = map.get("size").filter(|value| is_truthy(value))?;
    let element = map.get("schema").filter(|value| is_truthy(value))?;
    match size.as_array().map(Vec::as_slice) {
        Some([min, max]) => Some((whole_number(min)?, whole_number(max)?, element)),
        _ => None,
    }
}

/// Non-negative integral JSON number, including float spellings such as
/// `1e3` or `4.0`.
fn whole_number(value: &Value) -> Option<u64> {
    if let Some(number) = value.as_u64() {
        return Some(number);
    }
    let number = value.as_f64()?;
    // 2^64 is the first f64 above u64::MAX.
    (number >= 0.0 && number.fract() == 0.0 && number < 18_446_744_073_709_551_616.0)
        .then(|| number as u64)
}

fn parse_image(map: &Map<String, Value>) -> ImageSpec {
    ImageSpec {
        width: positive_u32(map.get("width")).unwrap_or(DEFAULT_IMAGE_WIDTH),
        height: positive_u32(map.get("height")).unwrap_or(DEFAULT_IMAGE_HEIGHT),
        category: map
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

fn positive_u32(value: Option<&Value>) -> Option<u32> {
    value
        .and_then(Value::as_u64)
        .filter(|value| *value > 0)
        .and_then(|value| u32::try_from(value).ok())
}

/// JSON truthiness as the wire format understands it.
///
/// `null`, `false`, zero and the empty string are falsy; every object and
/// array is truthy, even when empty.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
