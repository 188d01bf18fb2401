//! Connection-string formatting for service-key credentials.

use serde_json::Value;

/// Flatten a credentials object into the host's connection-string form:
/// compact JSON with the enclosing braces stripped and the `,` separators
/// replaced by `;`.
///
/// `{"uri":"x","user":"y"}` becomes `"uri":"x";"user":"y"`.
///
/// Keys follow serde_json's map order (lexicographic), so output is
/// deterministic for a given credentials object. The transformation is
/// lossy for values that themselves contain `,`, `;`, or `:` — a known
/// limitation of the connection-string contract, not corrected here.
pub fn format_connection_data(credentials: &Value) -> String {
    let compact = credentials.to_string();
    let inner = compact
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap_or(&compact);
    inner.replace(',', ";")
}
