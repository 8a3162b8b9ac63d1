//! Hooks Module
//!
//! Intercept and rewrite HTTP messages around the transport, keyed by the
//! operation id of the call.
//!
//! # Overview
//!
//! Hooks let you:
//! - Rewrite a request (body, method, headers) before it is sent
//! - Normalize a successful response before it is decoded
//! - Inspect or rewrite an error response before it is reported
//!
//! Every registered hook for a stage runs, in registration order. Each hook
//! receives the message returned by the previous one. A hook that is not
//! interested in an operation returns the message untouched.
//!
//! # Example
//!
//! ```ignore
//! use npa_hooks::hooks::{BeforeRequestHook, HookContext, HookRegistry};
//! use npa_hooks::{HookConfig, HookResult, OutboundRequest};
//!
//! struct TenantHeader;
//!
//! impl BeforeRequestHook for TenantHeader {
//!     fn name(&self) -> &str {
//!         "tenant_header"
//!     }
//!
//!     fn before_request(&self, _ctx: &HookContext, mut req: OutboundRequest) -> HookResult<OutboundRequest> {
//!         req.headers_mut().insert("x-tenant", "acme".parse().unwrap());
//!         Ok(req)
//!     }
//! }
//!
//! let mut hooks = HookRegistry::with_defaults(&HookConfig::default());
//! hooks.register_before_request(TenantHeader);
//! ```
//!
//! # Hook Stages
//!
//! | Stage | When | Receives |
//! |-------|------|----------|
//! | `BeforeRequestHook` | Before the transport sends | `OutboundRequest` |
//! | `AfterSuccessHook` | After a 2xx response | `InboundResponse` |
//! | `AfterErrorHook` | After a non-2xx response | `InboundResponse` |
//!
//! # Bodies
//!
//! Bodies are single-use. A hook that reads one with `take_body()` must
//! install a fresh body with `set_body()` before returning `Ok`, even when
//! it did not change the content.
//!
//! # Errors
//!
//! Returning `Err(HookError)` stops the chain and aborts the call with
//! `ClientError::Hook`.

pub mod private_app;
mod registry;
mod types;

pub use private_app::{PrivateAppUpdateRequestHook, PrivateAppUpdateResponseHook, ResponseShape};
pub use registry::{AfterErrorHook, AfterSuccessHook, BeforeRequestHook, HookRegistry};
pub use types::HookContext;
