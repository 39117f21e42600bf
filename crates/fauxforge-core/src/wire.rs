//! Request and response envelopes of the HTTP API.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::parse::{is_truthy, parse_schema};
use crate::record::Dataset;
use crate::schema::SchemaNode;

/// Message returned when `schema` or `count` is missing or falsy.
pub const MISSING_INPUT_MESSAGE: &str = "Please provide a valid schema and count";

/// Body of `POST /generate-data`.
///
/// Both members stay loosely typed so that missing and falsy values can be
/// told apart from malformed ones during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GenerateDataRequest {
    /// Declarative description of one record.
    #[serde(default)]
    pub schema: Option<Value>,
    /// Number of records to generate; a positive integer.
    #[serde(default)]
    pub count: Option<Value>,
}

/// A request that passed validation, with its schema normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub schema: SchemaNode,
    pub count: usize,
}

impl GenerateDataRequest {
    pub fn new(schema: Value, count: u64) -> Self {
        Self {
            schema: Some(schema),
            count: Some(Value::from(count)),
        }
    }

    /// Check presence and bounds, then normalize the schema.
    pub fn validate(&self, max_count: usize) -> Result<ValidatedRequest> {
        let schema = self.schema.as_ref().filter(|value| is_truthy(value));
        let count = self.count.as_ref().filter(|value| is_truthy(value));
        let (Some(schema), Some(count)) = (schema, count) else {
            return Err(Error::InvalidRequest(MISSING_INPUT_MESSAGE.to_string()));
        };

        let count = count
            .as_u64()
            .and_then(|count| usize::try_from(count).ok())
            .ok_or_else(|| Error::InvalidRequest("count must be a positive integer".to_string()))?;
        if count > max_count {
            return Err(Error::InvalidRequest(format!(
                "count must not exceed {max_count}"
            )));
        }

        Ok(ValidatedRequest {
            schema: parse_schema(schema)?,
            count,
        })
    }
}

/// Body returned by `POST /generate-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GenerateDataResponse {
    /// Key under which the dataset was stored.
    pub key: String,
    /// The generated records.
    pub data: Dataset,
}

/// Body returned by `GET /list-files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListFilesResponse {
    pub files: Vec<String>,
}

/// Body returned by successful deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// JSON Schemas of every envelope, keyed by type name.
pub fn api_json_schemas() -> BTreeMap<&'static str, RootSchema> {
    BTreeMap::from([
        ("GenerateDataRequest", schema_for!(GenerateDataRequest)),
        ("GenerateDataResponse", schema_for!(GenerateDataResponse)),
        ("ListFilesResponse", schema_for!(ListFilesResponse)),
        ("MessageResponse", schema_for!(MessageResponse)),
        ("ErrorResponse", schema_for!(ErrorResponse)),
    ])
}
