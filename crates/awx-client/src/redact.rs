//! Credential redaction for debug output.
//!
//! These helpers only ever touch copies made for logging; wire data is
//! never rewritten.
//!
//! ```rust
//! use awx_api_client::redact;
//!
//! let shown = redact::json_bytes(br#"{"username":"admin","Password":"foo"}"#);
//! assert_eq!(shown, r#"{"username":"admin","Password":"REDACTED"}"#);
//! ```

use serde_json::Value;

/// Replacement for redacted values.
pub const REDACTED: &str = "REDACTED";

/// Object keys whose values are always redacted (compared case-insensitively).
const SENSITIVE_KEYS: &[&str] = &["password"];

/// Header names whose values are always redacted (compared case-insensitively).
const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "password",
    "proxy-authorization",
    "cookie",
    "set-cookie",
];

fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

/// Returns true if values under this header name must not be logged.
pub fn is_sensitive_header(name: &str) -> bool {
    SENSITIVE_HEADERS.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Redact every `password` value in a JSON tree, in place.
///
/// Recurses into nested objects and arrays; key order and array order are
/// preserved and everything else is left untouched.
pub fn json(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, item) in map.iter_mut() {
                if is_sensitive_key(key) {
                    *item = Value::String(REDACTED.to_string());
                } else {
                    json(item);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(json),
        _ => {}
    }
}

/// Redact a header value for display.
pub fn header<'a>(name: &str, value: &'a str) -> &'a str {
    if is_sensitive_header(name) {
        REDACTED
    } else {
        value
    }
}

/// Redact a raw JSON body, returning compact JSON.
///
/// Input that does not parse as JSON is returned as lossy UTF-8, unchanged.
pub fn json_bytes(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(mut value) => {
            json(&mut value);
            value.to_string()
        }
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

/// Redact and pretty-print a raw JSON body for debug output.
///
/// Falls back to the unindented text when the body is not JSON.
pub fn pretty_json_bytes(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(mut value) => {
            json(&mut value);
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        }
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}
