//! Hooks for the `updateNPAPrivateApp` operation

mod request;
mod response;

pub use request::{capture_private_app_id, PrivateAppUpdateRequestHook};
pub use response::{PrivateAppUpdateResponseHook, ResponseShape};
