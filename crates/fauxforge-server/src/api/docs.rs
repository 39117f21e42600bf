use std::collections::BTreeMap;

use axum::Json;
use schemars::schema::RootSchema;

use fauxforge_core::api_json_schemas;

/// JSON Schemas of the request and response envelopes.
pub(super) async fn api_docs() -> Json<BTreeMap<&'static str, RootSchema>> {
    Json(api_json_schemas())
}

pub(super) async fn health() -> &'static str {
    "OK"
}
