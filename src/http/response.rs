//! Incoming response representation passed through after-success hooks

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
use reqwest::StatusCode;

use super::body::Body;

/// A response handed back by the transport
#[derive(Debug)]
pub struct InboundResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Body,
}

impl InboundResponse {
    pub fn new(status: StatusCode, body: impl Into<Body>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Replace the body
    ///
    /// A `Content-Length` header left over from the wire is kept in sync.
    pub fn set_body(&mut self, body: Body) {
        if self.headers.contains_key(CONTENT_LENGTH) {
            match body.len_hint() {
                Some(len) => {
                    self.headers.insert(CONTENT_LENGTH, HeaderValue::from(len));
                }
                None => {
                    self.headers.remove(CONTENT_LENGTH);
                }
            }
        }
        self.body = body;
    }

    /// Read the whole body, leaving it consumed
    pub fn take_body(&mut self) -> std::io::Result<Vec<u8>> {
        self.body.read_all()
    }

    /// Read the whole body as UTF-8 text (lossy)
    pub fn text(mut self) -> std::io::Result<String> {
        let bytes = self.take_body()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read the whole body and decode it as JSON
    pub fn json<T: serde::de::DeserializeOwned>(mut self) -> crate::error::ClientResult<T> {
        let bytes = self.take_body()?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
