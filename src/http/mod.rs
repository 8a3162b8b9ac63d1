//! HTTP message types seen by hooks
//!
//! The client converts these to and from `reqwest` types at the transport
//! edge; tests build them directly.

mod body;
mod request;
mod response;

pub use body::Body;
pub use request::OutboundRequest;
pub use response::InboundResponse;
