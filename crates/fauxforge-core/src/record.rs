//! Generated output types.

/// One generated instance conforming to a schema.
///
/// Objects keep field insertion order (`serde_json` is built with
/// `preserve_order`), so records serialize in declaration order.
pub type Record = serde_json::Value;

/// The full sequence of generated records for one request.
pub type Dataset = Vec<Record>;
