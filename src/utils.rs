//! Small helpers shared by the HTTP clients.

use serde::de::DeserializeOwned;
use std::error::Error;
use tracing::warn;

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes, backing off to the nearest
/// character boundary, with an ellipsis and byte count appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Decode a JSON response body, logging a preview of the body on failure.
///
/// `source` names the remote API in the log line.
pub fn decode_json<T: DeserializeOwned>(body: &str, source: &str) -> Result<T, Box<dyn Error>> {
    serde_json::from_str(body).map_err(|e| {
        warn!(
            source,
            error = %e,
            body_preview = %truncate_for_log(body, 300),
            "Response is not the expected JSON"
        );
        e.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        // Each of these characters is three bytes long.
        let s = "早安早安";
        assert_eq!(truncate_for_log(s, 4), "早…(+9 bytes)");
    }

    #[test]
    fn test_decode_json() {
        let value: serde_json::Value = decode_json(r#"{"ok": true}"#, "test").unwrap();
        assert_eq!(value["ok"], true);

        let result: Result<serde_json::Value, _> = decode_json("not json", "test");
        assert!(result.is_err());
    }
}
