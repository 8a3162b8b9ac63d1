//! Before-request hook for private app updates
//!
//! The service rejects partial updates: it wants `PUT` and the app id in
//! the body. This hook takes the id from the URL, injects it into the
//! caller's payload and switches the method.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Method;
use serde_json::{Map, Value};

use crate::config::HookConfig;
use crate::error::{HookError, HookResult};
use crate::hooks::{BeforeRequestHook, HookContext};
use crate::http::{Body, OutboundRequest};
use crate::steering::{PrivateAppUpdate, UPDATE_PRIVATE_APP_OPERATION};

static PRIVATE_APP_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/steering/apps/private/(\d+)").expect("private app id pattern is valid")
});

/// Capture the digits after `/steering/apps/private/` in a URL path
pub fn capture_private_app_id(path: &str) -> Option<&str> {
    PRIVATE_APP_ID
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Injects the path id into `updateNPAPrivateApp` bodies and sends them as `PUT`
#[derive(Debug, Clone, Default)]
pub struct PrivateAppUpdateRequestHook {
    config: HookConfig,
}

impl PrivateAppUpdateRequestHook {
    pub fn new(config: HookConfig) -> Self {
        Self { config }
    }
}

impl BeforeRequestHook for PrivateAppUpdateRequestHook {
    fn name(&self) -> &str {
        "private_app_update_request"
    }

    fn before_request(
        &self,
        ctx: &HookContext,
        mut request: OutboundRequest,
    ) -> HookResult<OutboundRequest> {
        if !ctx.is_operation(UPDATE_PRIVATE_APP_OPERATION) {
            return Ok(request);
        }

        let debug = self.config.debug;
        if debug {
            tracing::debug!(call_id = %ctx.call_id(), "Executing before-request hook for private app update");
        }

        // A missing or unusable id is not fatal: the call goes out untouched.
        let Some(digits) = capture_private_app_id(request.path()) else {
            tracing::warn!(
                "Unable to extract private_app_id from URL path: {}",
                request.path()
            );
            return Ok(request);
        };

        let private_app_id = match digits.parse::<i64>() {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Unable to convert private_app_id '{}' to an integer: {}", digits, e);
                return Ok(request);
            }
        };

        if debug {
            tracing::debug!("Extracted private_app_id: {}", private_app_id);
        }

        let body = request.take_body().map_err(HookError::request_body)?;

        if debug {
            tracing::debug!("Original request body: {}", String::from_utf8_lossy(&body));
        }

        // Arrays and scalars are not updates.
        let object: Map<String, Value> =
            serde_json::from_slice(&body).map_err(HookError::Decode)?;
        let mut update: PrivateAppUpdate =
            serde_json::from_value(Value::Object(object)).map_err(HookError::Decode)?;

        update.id = Some(private_app_id);

        let modified = serde_json::to_vec(&update).map_err(HookError::Encode)?;

        if debug {
            tracing::debug!("Modified request body: {}", String::from_utf8_lossy(&modified));
        }

        request.set_body(Body::from_bytes(modified));
        request.set_method(Method::PUT);

        if debug {
            tracing::debug!("Changed HTTP method to: {}", request.method());
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_LENGTH};
    use reqwest::Url;
    use serde_json::json;

    const BASE: &str = "https://tenant.example.com/api/v2";

    fn hook() -> PrivateAppUpdateRequestHook {
        PrivateAppUpdateRequestHook::new(HookConfig::new().with_debug(true))
    }

    fn ctx() -> HookContext {
        HookContext::new(UPDATE_PRIVATE_APP_OPERATION)
    }

    fn request(path: &str, body: &'static str) -> OutboundRequest {
        let url = Url::parse(&format!("{}{}", BASE, path)).unwrap();
        OutboundRequest::new(Method::PATCH, url).with_body(body)
    }

    fn body_json(request: &mut OutboundRequest) -> Value {
        serde_json::from_slice(&request.take_body().unwrap()).unwrap()
    }

    #[test]
    fn test_capture_private_app_id() {
        assert_eq!(capture_private_app_id("/api/v2/steering/apps/private/42"), Some("42"));
        assert_eq!(capture_private_app_id("/steering/apps/private/7/extra"), Some("7"));
        assert_eq!(capture_private_app_id("/steering/apps/private/"), None);
        assert_eq!(capture_private_app_id("/steering/apps/private/abc"), None);
        assert_eq!(capture_private_app_id("/steering/apps/public/42"), None);
    }

    #[test]
    fn test_injects_id_and_switches_to_put() {
        let mut req = hook()
            .before_request(&ctx(), request("/steering/apps/private/42", r#"{"host":"x.com"}"#))
            .unwrap();

        assert_eq!(req.method(), Method::PUT);
        assert_eq!(body_json(&mut req), json!({"id": 42, "host": "x.com"}));
    }

    #[test]
    fn test_content_length_matches_new_body() {
        let req = request("/steering/apps/private/42", r#"{"host":"x.com"}"#)
            .with_header(CONTENT_LENGTH, HeaderValue::from(16u64));
        let mut req = hook().before_request(&ctx(), req).unwrap();

        let len = req.content_length().unwrap();
        assert_eq!(req.headers()[CONTENT_LENGTH], len.to_string().as_str());
        assert_eq!(req.take_body().unwrap().len() as u64, len);
    }

    #[test]
    fn test_overwrites_existing_id() {
        let mut req = hook()
            .before_request(&ctx(), request("/steering/apps/private/9", r#"{"id":1,"tags":[]}"#))
            .unwrap();
        assert_eq!(body_json(&mut req), json!({"id": 9, "tags": []}));
    }

    #[test]
    fn test_method_rewrite_is_unconditional() {
        let url = Url::parse(&format!("{}/steering/apps/private/3", BASE)).unwrap();
        let req = OutboundRequest::new(Method::POST, url).with_body("{}");
        let req = hook().before_request(&ctx(), req).unwrap();
        assert_eq!(req.method(), Method::PUT);
    }

    #[test]
    fn test_other_operations_pass_through() {
        let other = HookContext::new("getNPAPrivateApp");
        let mut req = hook()
            .before_request(&other, request("/steering/apps/private/42", "not json"))
            .unwrap();

        assert_eq!(req.method(), Method::PATCH);
        assert_eq!(req.take_body().unwrap(), b"not json");
    }

    #[test]
    fn test_missing_id_passes_through() {
        let mut req = hook()
            .before_request(&ctx(), request("/steering/apps/private", r#"{"host":"x.com"}"#))
            .unwrap();

        assert_eq!(req.method(), Method::PATCH);
        assert_eq!(req.take_body().unwrap(), br#"{"host":"x.com"}"#);
    }

    #[test]
    fn test_overflowing_id_passes_through() {
        let mut req = hook()
            .before_request(
                &ctx(),
                request("/steering/apps/private/99999999999999999999999", "{}"),
            )
            .unwrap();

        assert_eq!(req.method(), Method::PATCH);
        assert_eq!(req.take_body().unwrap(), b"{}");
    }

    #[test]
    fn test_malformed_body_is_fatal() {
        let err = hook()
            .before_request(&ctx(), request("/steering/apps/private/42", "not json"))
            .unwrap_err();
        assert!(matches!(err, HookError::Decode(_)));
    }

    #[test]
    fn test_non_object_body_is_fatal() {
        for body in ["[]", "[1]", "42", "\"x\"", r#"[null,true,"cors-header"]"#, "null"] {
            let err = hook()
                .before_request(&ctx(), request("/steering/apps/private/42", body))
                .unwrap_err();
            assert!(matches!(err, HookError::Decode(_)), "body {} was accepted", body);
        }
    }

    #[test]
    fn test_empty_body_is_fatal() {
        let err = hook()
            .before_request(&ctx(), request("/steering/apps/private/42", ""))
            .unwrap_err();
        assert!(matches!(err, HookError::Decode(_)));
    }

    #[test]
    fn test_unreadable_body_is_fatal() {
        let mut req = request("/steering/apps/private/42", "{}");
        req.take_body().unwrap();

        let err = hook().before_request(&ctx(), req).unwrap_err();
        assert!(matches!(err, HookError::BodyRead { .. }));
    }
}
