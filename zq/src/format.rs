//! Response body formatting

use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::Result;

/// Re-parse a JSON body and pretty-print it with a 4-space indent.
///
/// Fails if the body is not valid JSON; callers that want the raw body
/// regardless of shape should print it directly instead.
pub fn pretty(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)?;
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut out, formatter);
    serde::Serialize::serialize(&value, &mut ser)?;
    Ok(String::from_utf8(out).expect("serde_json emits valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_four_space_indent() {
        assert_eq!(pretty("{\"a\":1}").unwrap(), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_pretty_nested_keeps_key_order() {
        let out = pretty(r#"{"hits":{"total":0,"hits":[]}}"#).unwrap();
        assert_eq!(
            out,
            "{\n    \"hits\": {\n        \"total\": 0,\n        \"hits\": []\n    }\n}"
        );
    }

    #[test]
    fn test_pretty_rejects_non_json() {
        assert!(pretty("not json").is_err());
    }

    #[test]
    fn test_pretty_multibyte_strings() {
        assert_eq!(
            pretty("{\"a\":\"é\"}").unwrap(),
            "{\n    \"a\": \"é\"\n}"
        );
    }
}
