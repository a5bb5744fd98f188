//! Effective request body extraction.

use mtopgen_sdk::prelude::*;
use serde_json::Value;

/// Methods whose body travels as a JSON payload rather than URL parameters.
const BODY_METHODS: &[&str] = &["PUT", "POST", "PATCH"];

/// Extract the effective body of a captured request.
///
/// Body-bearing methods use the captured `jsonBody`, defaulting to an empty
/// object. Any other method carries its payload inside the `data` URL
/// parameter as a JSON string (default `"{}"`); malformed JSON there is
/// fatal for the generation call.
pub fn extract_body(request: &RequestDescriptor) -> Result<Value, GenerateError> {
    if BODY_METHODS.contains(&request.method.as_str()) {
        return Ok(Value::Object(
            request.json_body.clone().unwrap_or_default(),
        ));
    }

    let raw = request
        .url_parameters
        .as_ref()
        .and_then(|params| params.get("data"))
        .and_then(Value::as_str)
        .unwrap_or("{}");

    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(method: &str) -> RequestDescriptor {
        RequestDescriptor {
            method: method.to_string(),
            url_base: "https://api.example.com/call".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn body_methods_pass_json_body_through() {
        for method in ["PUT", "POST", "PATCH"] {
            let mut req = request(method);
            req.json_body = json!({"a": 1}).as_object().cloned();

            assert_eq!(extract_body(&req).expect("body"), json!({"a": 1}));
        }
    }

    #[test]
    fn body_methods_default_to_empty_object() {
        let req = request("POST");
        assert_eq!(extract_body(&req).expect("body"), json!({}));
    }

    #[test]
    fn get_parses_embedded_data_parameter() {
        let mut req = request("GET");
        req.url_parameters = json!({"data": "{\"a\":1}"}).as_object().cloned();

        assert_eq!(extract_body(&req).expect("body"), json!({"a": 1}));
    }

    #[test]
    fn get_without_data_yields_empty_object() {
        let mut req = request("GET");
        assert_eq!(extract_body(&req).expect("body"), json!({}));

        req.url_parameters = json!({"foo": "bar"}).as_object().cloned();
        assert_eq!(extract_body(&req).expect("body"), json!({}));
    }

    #[test]
    fn malformed_embedded_data_is_fatal() {
        let mut req = request("GET");
        req.url_parameters = json!({"data": "{not json"}).as_object().cloned();

        assert!(matches!(extract_body(&req), Err(GenerateError::Json(_))));
    }
}
