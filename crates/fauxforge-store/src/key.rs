/// Fresh random dataset key.
pub fn new_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Whether `key` could name a stored dataset.
///
/// Keys are restricted to ASCII alphanumerics, `-` and `_`, so a key can
/// never escape the data directory.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
