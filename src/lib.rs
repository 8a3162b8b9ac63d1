//! Hook pipeline for the Netskope Private Access steering API client
//!
//! Requests and responses pass through operation-keyed hooks around the
//! transport. The built-in hooks adapt the private app update call to what
//! the service actually accepts and returns:
//!
//! - the request goes out as `PUT` with the app id from the URL injected
//!   into the body
//! - a single-object response is wrapped in an array
//!
//! ```ignore
//! use npa_hooks::{ApiClient, ClientConfig, PrivateAppUpdate};
//!
//! let client = ApiClient::new(ClientConfig::from_env()?)?;
//! let results = client
//!     .update_private_app(42, &PrivateAppUpdate::new().with_host("wiki.internal"))
//!     .await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod hooks;
pub mod http;
pub mod logging;
pub mod steering;

pub use client::{ApiClient, ReqwestTransport, Transport};
pub use config::{ClientConfig, HookConfig};
pub use error::{ClientError, ClientResult, ConfigError, HookError, HookResult};
pub use hooks::{
    AfterErrorHook, AfterSuccessHook, BeforeRequestHook, HookContext, HookRegistry,
    PrivateAppUpdateRequestHook, PrivateAppUpdateResponseHook, ResponseShape,
};
pub use http::{Body, InboundResponse, OutboundRequest};
pub use logging::{init_logging, LoggingConfig};
pub use steering::{PrivateAppUpdate, PrivateAppUpdateResponse, UPDATE_PRIVATE_APP_OPERATION};
