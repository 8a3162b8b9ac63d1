//! Private app wire types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Deserialize a field so that an explicit `null` is kept apart from an
/// absent key: absent stays `None` (via `#[serde(default)]`), `null`
/// becomes `Some(None)`.
fn explicit<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Update payload for a private app
///
/// Every attribute is tri-state: `None` means the caller did not send the
/// key, `Some(None)` an explicit `null`, `Some(Some(v))` a value. Only keys
/// the caller sent are encoded again, so partial updates stay partial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivateAppUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub allow_unauthenticated_cors: Option<Option<bool>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub uribypass_header_value: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub app_option: Option<Option<Map<String, Value>>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub clientless_access: Option<Option<bool>>,
    #[serde(
        rename = "host",
        default,
        deserialize_with = "explicit",
        skip_serializing_if = "Option::is_none"
    )]
    pub private_app_hostname: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub is_user_portal_app: Option<Option<bool>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Option<Vec<Value>>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub publisher_tags: Option<Option<Vec<Value>>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub publishers: Option<Option<Vec<Value>>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub real_host: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Option<Vec<Value>>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub trust_self_signed_certs: Option<Option<bool>>,
    #[serde(default, deserialize_with = "explicit", skip_serializing_if = "Option::is_none")]
    pub use_publisher_dns: Option<Option<bool>>,
}

impl PrivateAppUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.private_app_hostname = Some(Some(host.into()));
        self
    }

    pub fn with_real_host(mut self, real_host: impl Into<String>) -> Self {
        self.real_host = Some(Some(real_host.into()));
        self
    }

    pub fn with_clientless_access(mut self, enabled: bool) -> Self {
        self.clientless_access = Some(Some(enabled));
        self
    }

    pub fn with_use_publisher_dns(mut self, enabled: bool) -> Self {
        self.use_publisher_dns = Some(Some(enabled));
        self
    }

    pub fn with_trust_self_signed_certs(mut self, enabled: bool) -> Self {
        self.trust_self_signed_certs = Some(Some(enabled));
        self
    }

    pub fn with_protocols(mut self, protocols: Vec<Value>) -> Self {
        self.protocols = Some(Some(protocols));
        self
    }

    pub fn with_publishers(mut self, publishers: Vec<Value>) -> Self {
        self.publishers = Some(Some(publishers));
        self
    }

    pub fn with_tags(mut self, tags: Vec<Value>) -> Self {
        self.tags = Some(Some(tags));
        self
    }
}

/// One element of the normalized update response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivateAppUpdateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
