//! After-success hook for private app updates
//!
//! Consumers decode the update response as a list. The service answers
//! with a single object, so the hook wraps it. Anything it cannot make
//! sense of is handed on untouched.

use serde_json::{Map, Value};

use crate::config::HookConfig;
use crate::error::{HookError, HookResult};
use crate::hooks::{AfterSuccessHook, HookContext};
use crate::http::{Body, InboundResponse};
use crate::steering::UPDATE_PRIVATE_APP_OPERATION;

/// Top-level shape of a JSON response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// Already a list
    Array(Vec<Value>),
    /// A single object
    Object(Map<String, Value>),
    /// Not JSON, or a JSON scalar
    Unparseable,
}

impl ResponseShape {
    /// Classify a body, trying an array first and then an object
    pub fn classify(body: &[u8]) -> Self {
        if let Ok(items) = serde_json::from_slice::<Vec<Value>>(body) {
            return ResponseShape::Array(items);
        }
        match serde_json::from_slice::<Map<String, Value>>(body) {
            Ok(object) => ResponseShape::Object(object),
            Err(_) => ResponseShape::Unparseable,
        }
    }
}

/// Wraps single-object `updateNPAPrivateApp` responses in an array
#[derive(Debug, Clone, Default)]
pub struct PrivateAppUpdateResponseHook {
    config: HookConfig,
}

impl PrivateAppUpdateResponseHook {
    pub fn new(config: HookConfig) -> Self {
        Self { config }
    }

    /// Normalize a response body so its top level is an array
    ///
    /// Arrays and unparseable bodies come back byte-for-byte. Objects come
    /// back as a one-element array; if that cannot be encoded the original
    /// bytes are returned.
    pub fn normalize(&self, body: Vec<u8>) -> Vec<u8> {
        let debug = self.config.debug;

        match ResponseShape::classify(&body) {
            ResponseShape::Array(_) => {
                if debug {
                    tracing::debug!("Response is already an array, no transformation needed");
                }
                body
            }
            ResponseShape::Unparseable => {
                tracing::warn!("Response is neither a JSON array nor an object, passing it through");
                body
            }
            ResponseShape::Object(object) => {
                if debug {
                    tracing::debug!("Response is a single object, wrapping in array");
                }
                match serde_json::to_vec(&[Value::Object(object)]) {
                    Ok(wrapped) => {
                        if debug {
                            tracing::debug!(
                                "Modified response body: {}",
                                String::from_utf8_lossy(&wrapped)
                            );
                        }
                        wrapped
                    }
                    Err(e) => {
                        tracing::warn!("Unable to encode wrapped response: {}", e);
                        body
                    }
                }
            }
        }
    }
}

impl AfterSuccessHook for PrivateAppUpdateResponseHook {
    fn name(&self) -> &str {
        "private_app_update_response"
    }

    fn after_success(
        &self,
        ctx: &HookContext,
        mut response: InboundResponse,
    ) -> HookResult<InboundResponse> {
        if !ctx.is_operation(UPDATE_PRIVATE_APP_OPERATION) {
            return Ok(response);
        }

        if self.config.debug {
            tracing::debug!(call_id = %ctx.call_id(), "Executing after-success hook for private app update");
        }

        let body = response.take_body().map_err(HookError::response_body)?;

        if self.config.debug {
            tracing::debug!("Original response body: {}", String::from_utf8_lossy(&body));
            tracing::debug!("Response status code: {}", response.status());
        }

        response.set_body(Body::from_bytes(self.normalize(body)));
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    fn hook() -> PrivateAppUpdateResponseHook {
        PrivateAppUpdateResponseHook::new(HookConfig::new().with_debug(true))
    }

    fn ctx() -> HookContext {
        HookContext::new(UPDATE_PRIVATE_APP_OPERATION)
    }

    fn run(body: &'static str) -> String {
        let response = InboundResponse::new(StatusCode::OK, body);
        hook().after_success(&ctx(), response).unwrap().text().unwrap()
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            ResponseShape::classify(b"[1]"),
            ResponseShape::Array(vec![json!(1)])
        );
        assert!(matches!(
            ResponseShape::classify(br#"{"a":1}"#),
            ResponseShape::Object(_)
        ));
        assert_eq!(ResponseShape::classify(b"\"text\""), ResponseShape::Unparseable);
        assert_eq!(ResponseShape::classify(b"42"), ResponseShape::Unparseable);
        assert_eq!(ResponseShape::classify(b""), ResponseShape::Unparseable);
        assert_eq!(ResponseShape::classify(b"{"), ResponseShape::Unparseable);
    }

    #[test]
    fn test_wraps_single_object() {
        assert_eq!(run(r#"{"status":"OK"}"#), r#"[{"status":"OK"}]"#);
    }

    #[test]
    fn test_wraps_whole_object_including_data() {
        let out = run(r#"{"status":"success","data":{"id":42,"app_name":"wiki"}}"#);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            json!([{"status": "success", "data": {"id": 42, "app_name": "wiki"}}])
        );
    }

    #[test]
    fn test_array_is_byte_identical() {
        let body = "[ {\"status\" : \"OK\"} ,\n {\"id\":1} ]";
        assert_eq!(run(body), body);
    }

    #[test]
    fn test_normalizing_twice_is_stable() {
        let once = run(r#"{"status":"OK"}"#);
        let response = InboundResponse::new(StatusCode::OK, once.clone());
        let twice = hook().after_success(&ctx(), response).unwrap().text().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_malformed_body_passes_through() {
        assert_eq!(run("not json"), "not json");
    }

    #[test]
    fn test_empty_body_passes_through() {
        assert_eq!(run(""), "");
    }

    #[test]
    fn test_other_operations_pass_through() {
        let other = HookContext::new("listNPAPrivateApps");
        let response = InboundResponse::new(StatusCode::OK, r#"{"status":"OK"}"#);
        let out = hook().after_success(&other, response).unwrap().text().unwrap();
        assert_eq!(out, r#"{"status":"OK"}"#);
    }

    #[test]
    fn test_unreadable_body_is_fatal() {
        let mut response = InboundResponse::new(StatusCode::OK, "{}");
        response.take_body().unwrap();

        let err = hook().after_success(&ctx(), response).unwrap_err();
        assert!(matches!(err, HookError::BodyRead { .. }));
    }
}
