//! Steering API client

use std::sync::Arc;

use reqwest::{Method, Url};

use super::transport::{ReqwestTransport, Transport};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::hooks::{HookContext, HookRegistry};
use crate::http::{InboundResponse, OutboundRequest};
use crate::steering::{
    private_app_path, PrivateAppUpdate, PrivateAppUpdateResponse, UPDATE_PRIVATE_APP_OPERATION,
};

/// API client that runs every call through the hook pipeline
///
/// Cheap to share across tasks: configuration and hooks are immutable
/// after construction.
pub struct ApiClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
    hooks: Arc<HookRegistry>,
}

impl ApiClient<ReqwestTransport> {
    /// Create a client using `reqwest` and the default hooks
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Create a client over a custom transport, with the default hooks
    pub fn with_transport(config: ClientConfig, transport: T) -> ClientResult<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let hooks = Arc::new(HookRegistry::with_defaults(&config.hooks));
        tracing::debug!("API client created for {} with {:?}", config.base_url, hooks);

        Ok(Self {
            config,
            transport,
            hooks,
        })
    }

    /// Replace the hook registry
    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Resolve a path against the base URL, keeping the base path prefix
    pub fn url(&self, path: &str) -> ClientResult<Url> {
        let joined = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", joined, e)))
    }

    /// Run one call through the hooks and the transport
    ///
    /// Before-request hooks run first. A 2xx response goes through the
    /// after-success hooks and is returned; anything else goes through the
    /// after-error hooks and comes back as [`ClientError::Status`].
    pub async fn execute(
        &self,
        operation_id: &str,
        request: OutboundRequest,
    ) -> ClientResult<InboundResponse> {
        let ctx = HookContext::new(operation_id);

        tracing::debug!(
            operation = operation_id,
            call_id = %ctx.call_id(),
            "{} {}",
            request.method(),
            request.path()
        );

        let request = self.hooks.run_before_request(&ctx, request)?;
        let response = self.transport.send(request).await?;
        let status = response.status();

        if status.is_success() {
            return Ok(self.hooks.run_after_success(&ctx, response)?);
        }

        let response = self.hooks.run_after_error(&ctx, response)?;
        let body = response.text()?;
        tracing::warn!(
            operation = operation_id,
            call_id = %ctx.call_id(),
            "API returned {}: {}",
            status,
            body
        );
        Err(ClientError::Status { status, body })
    }

    /// Update a private app
    ///
    /// Sent as a partial update; the hooks turn it into the full replace
    /// the service expects and normalize the answer into a list. Ids below 1
    /// are rejected without sending anything.
    pub async fn update_private_app(
        &self,
        private_app_id: i64,
        update: &PrivateAppUpdate,
    ) -> ClientResult<Vec<PrivateAppUpdateResponse>> {
        if private_app_id < 1 {
            return Err(ClientError::InvalidUrl(format!(
                "private app id must be positive, got {}",
                private_app_id
            )));
        }

        let url = self.url(&private_app_path(private_app_id))?;
        let body = serde_json::to_vec(update)?;
        let request = OutboundRequest::new(Method::PATCH, url).with_json_body(body);

        let response = self.execute(UPDATE_PRIVATE_APP_OPERATION, request).await?;
        response.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ClientResult<ApiClient> {
        ApiClient::new(ClientConfig::new(base_url))
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = client("https://tenant.example.com/api/v2/").unwrap();
        let url = client.url("/steering/apps/private/42").unwrap();
        assert_eq!(
            url.as_str(),
            "https://tenant.example.com/api/v2/steering/apps/private/42"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = client("not a url").err().unwrap();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_default_hooks_installed() {
        let client = client("http://localhost").unwrap();
        assert_eq!(client.hooks().len(), 2);

        let client = client.with_hooks(HookRegistry::new());
        assert!(client.hooks().is_empty());
    }
}
