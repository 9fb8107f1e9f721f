//! JSON decoding for description files

use cloud_api_models_common::{ApiError, JsonMap, Result};
use serde_json::Value;
use std::path::Path;

/// Parse the contents of a description file
///
/// `path` is only used to label the error. Only a syntax error is a
/// `MalformedDescription`; any well-formed document is returned as decoded.
pub fn parse_json(path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Result<Value> {
    serde_json::from_slice(content.as_ref()).map_err(|e| {
        ApiError::malformed(path.as_ref(), format!("Error parsing JSON: {}", e))
    })
}

/// Read a decoded document as a mapping
///
/// `null` is an empty mapping and an array maps its positions to the keys
/// `"0"`, `"1"`, ... so an empty array is an empty mapping as well. A bare
/// scalar has no mapping form and is an `UnexpectedDocument`.
pub(crate) fn into_mapping(path: &Path, value: Value) -> Result<JsonMap> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(JsonMap::new()),
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect()),
        Value::Bool(_) => Err(unexpected(path, "a boolean")),
        Value::Number(_) => Err(unexpected(path, "a number")),
        Value::String(_) => Err(unexpected(path, "a string")),
    }
}

fn unexpected(path: &Path, found: &'static str) -> ApiError {
    ApiError::UnexpectedDocument {
        path: path.to_path_buf(),
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(content: &str) -> Result<JsonMap> {
        let path = Path::new("doc.json");
        into_mapping(path, parse_json(path, content)?)
    }

    #[test]
    fn test_parse_object_keeps_key_order() {
        let map = mapping(r#"{"z": 1, "a": [true, null, "s"], "m": {"n": 1.5}}"#).unwrap();

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(map["a"], json!([true, null, "s"]));
        assert_eq!(map["m"]["n"], json!(1.5));
    }

    #[test]
    fn test_syntax_error_carries_diagnostic() {
        let err = parse_json("bad.json", r#"{"a":}"#).unwrap_err();

        match err {
            ApiError::MalformedDescription { path, message } => {
                assert_eq!(path, Path::new("bad.json"));
                assert!(message.starts_with("Error parsing JSON: "));
                assert!(message.len() > "Error parsing JSON: ".len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_well_formed_documents_of_any_shape_parse() {
        assert_eq!(parse_json("a.json", "[1, 2]").unwrap(), json!([1, 2]));
        assert_eq!(parse_json("n.json", "null").unwrap(), Value::Null);
        assert_eq!(parse_json("s.json", r#""text""#).unwrap(), json!("text"));
        assert_eq!(parse_json("f.json", "4.5").unwrap(), json!(4.5));
    }

    #[test]
    fn test_null_and_empty_array_are_empty_mappings() {
        assert!(mapping("null").unwrap().is_empty());
        assert!(mapping("[]").unwrap().is_empty());
    }

    #[test]
    fn test_array_maps_positions_to_keys() {
        let map = mapping(r#"["a", {"b": 1}]"#).unwrap();

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["0", "1"]);
        assert_eq!(map["0"], json!("a"));
        assert_eq!(map["1"]["b"], json!(1));
    }

    #[test]
    fn test_scalar_document_is_unexpected_not_malformed() {
        match mapping("42") {
            Err(ApiError::UnexpectedDocument { path, found }) => {
                assert_eq!(path, Path::new("doc.json"));
                assert_eq!(found, "a number");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            mapping(r#""s""#),
            Err(ApiError::UnexpectedDocument { found: "a string", .. })
        ));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        assert!(matches!(
            parse_json("empty.json", ""),
            Err(ApiError::MalformedDescription { .. })
        ));
    }
}
