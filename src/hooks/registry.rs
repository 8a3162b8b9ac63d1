//! Hook traits and the registry that dispatches them

use std::fmt;
use std::sync::Arc;

use super::private_app::{PrivateAppUpdateRequestHook, PrivateAppUpdateResponseHook};
use super::types::HookContext;
use crate::config::HookConfig;
use crate::error::HookResult;
use crate::http::{InboundResponse, OutboundRequest};

/// Runs before a request is handed to the transport
pub trait BeforeRequestHook: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Return the (possibly modified) request, or an error to abort the call
    fn before_request(&self, ctx: &HookContext, request: OutboundRequest)
        -> HookResult<OutboundRequest>;
}

/// Runs after the transport returned a 2xx response
pub trait AfterSuccessHook: Send + Sync {
    fn name(&self) -> &str;

    fn after_success(&self, ctx: &HookContext, response: InboundResponse)
        -> HookResult<InboundResponse>;
}

/// Runs after the transport returned a non-2xx response
pub trait AfterErrorHook: Send + Sync {
    fn name(&self) -> &str;

    fn after_error(&self, ctx: &HookContext, response: InboundResponse)
        -> HookResult<InboundResponse>;
}

/// Registered hooks per lifecycle stage
///
/// Hooks run in registration order. Each hook receives the message returned
/// by the previous one; the first error stops the chain and aborts the call.
/// The registry is meant to be built once and shared behind an `Arc`.
#[derive(Clone, Default)]
pub struct HookRegistry {
    before_request: Vec<Arc<dyn BeforeRequestHook>>,
    after_success: Vec<Arc<dyn AfterSuccessHook>>,
    after_error: Vec<Arc<dyn AfterErrorHook>>,
}

impl HookRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in private app hooks
    pub fn with_defaults(config: &HookConfig) -> Self {
        let mut registry = Self::new();
        registry
            .register_before_request(PrivateAppUpdateRequestHook::new(*config))
            .register_after_success(PrivateAppUpdateResponseHook::new(*config));
        registry
    }

    pub fn register_before_request<H: BeforeRequestHook + 'static>(&mut self, hook: H) -> &mut Self {
        tracing::debug!("Registering before-request hook: {}", hook.name());
        self.before_request.push(Arc::new(hook));
        self
    }

    pub fn register_after_success<H: AfterSuccessHook + 'static>(&mut self, hook: H) -> &mut Self {
        tracing::debug!("Registering after-success hook: {}", hook.name());
        self.after_success.push(Arc::new(hook));
        self
    }

    pub fn register_after_error<H: AfterErrorHook + 'static>(&mut self, hook: H) -> &mut Self {
        tracing::debug!("Registering after-error hook: {}", hook.name());
        self.after_error.push(Arc::new(hook));
        self
    }

    /// Total number of registered hooks across all stages
    pub fn len(&self) -> usize {
        self.before_request.len() + self.after_success.len() + self.after_error.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run all before-request hooks in order
    pub fn run_before_request(
        &self,
        ctx: &HookContext,
        mut request: OutboundRequest,
    ) -> HookResult<OutboundRequest> {
        for hook in &self.before_request {
            tracing::trace!(hook = hook.name(), call_id = %ctx.call_id(), "before_request");
            request = hook.before_request(ctx, request).map_err(|e| {
                tracing::warn!(
                    hook = hook.name(),
                    operation = ctx.operation_id(),
                    "Before-request hook failed: {}",
                    e
                );
                e
            })?;
        }
        Ok(request)
    }

    /// Run all after-success hooks in order
    pub fn run_after_success(
        &self,
        ctx: &HookContext,
        mut response: InboundResponse,
    ) -> HookResult<InboundResponse> {
        for hook in &self.after_success {
            tracing::trace!(hook = hook.name(), call_id = %ctx.call_id(), "after_success");
            response = hook.after_success(ctx, response).map_err(|e| {
                tracing::warn!(
                    hook = hook.name(),
                    operation = ctx.operation_id(),
                    "After-success hook failed: {}",
                    e
                );
                e
            })?;
        }
        Ok(response)
    }

    /// Run all after-error hooks in order
    pub fn run_after_error(
        &self,
        ctx: &HookContext,
        mut response: InboundResponse,
    ) -> HookResult<InboundResponse> {
        for hook in &self.after_error {
            tracing::trace!(hook = hook.name(), call_id = %ctx.call_id(), "after_error");
            response = hook.after_error(ctx, response).map_err(|e| {
                tracing::warn!(
                    hook = hook.name(),
                    operation = ctx.operation_id(),
                    "After-error hook failed: {}",
                    e
                );
                e
            })?;
        }
        Ok(response)
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field(
                "before_request",
                &self.before_request.iter().map(|h| h.name()).collect::<Vec<_>>(),
            )
            .field(
                "after_success",
                &self.after_success.iter().map(|h| h.name()).collect::<Vec<_>>(),
            )
            .field(
                "after_error",
                &self.after_error.iter().map(|h| h.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
