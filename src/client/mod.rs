//! HTTP client for the steering API
//!
//! [`ApiClient`] owns the configuration, the hook registry and a
//! [`Transport`]. Every call builds a fresh `HookContext` and threads the
//! request and response through the registered hooks.

mod api;
mod transport;

pub use api::ApiClient;
pub use transport::{ReqwestTransport, Transport};
