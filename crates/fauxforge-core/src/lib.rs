//! Core contracts for fauxforge.
//!
//! This crate defines the schema tree that drives generation, the
//! normalization from wire JSON into that tree, and the request/response
//! envelopes shared by the server and the CLI.

pub mod error;
pub mod parse;
pub mod record;
pub mod schema;
pub mod wire;

pub use error::{Error, Result};
pub use parse::{PARSE_DEPTH_LIMIT, parse_schema};
pub use record::{Dataset, Record};
pub use schema::{
    ArraySpec, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, Field, ImageSpec, SchemaNode,
};
pub use wire::{
    ErrorResponse, GenerateDataRequest, GenerateDataResponse, ListFilesResponse,
    MISSING_INPUT_MESSAGE, MessageResponse, ValidatedRequest, api_json_schemas,
};
