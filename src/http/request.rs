//! Outgoing request representation passed through before-request hooks

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Method, Url};

use super::body::Body;

/// A request on its way to the transport
///
/// The body and its content length are kept in sync by [`set_body`](Self::set_body).
#[derive(Debug)]
pub struct OutboundRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Body,
    content_length: Option<u64>,
}

impl OutboundRequest {
    /// Create a request with an empty body
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: Body::empty(),
            content_length: Some(0),
        }
    }

    /// Attach a body, setting the content length
    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.set_body(body.into());
        self
    }

    /// Attach a JSON body and the matching content type
    pub fn with_json_body(mut self, bytes: Vec<u8>) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.set_body(Body::from_bytes(bytes));
        self
    }

    pub fn with_header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Path component of the URL
    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Declared content length, `None` for unsized streaming bodies
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Replace the body and update the content length to match
    ///
    /// An explicit `Content-Length` header, if present, is rewritten too.
    pub fn set_body(&mut self, body: Body) {
        self.content_length = body.len_hint();
        match self.content_length {
            Some(len) if self.headers.contains_key(CONTENT_LENGTH) => {
                self.headers.insert(CONTENT_LENGTH, HeaderValue::from(len));
            }
            None => {
                self.headers.remove(CONTENT_LENGTH);
            }
            Some(_) => {}
        }
        self.body = body;
    }

    /// Read the whole body, leaving it consumed
    pub fn take_body(&mut self) -> std::io::Result<Vec<u8>> {
        self.body.read_all()
    }

    /// Split into parts for the transport
    pub fn into_parts(self) -> (Method, Url, HeaderMap, Body) {
        (self.method, self.url, self.headers, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> OutboundRequest {
        let url = Url::parse("https://tenant.example.com/api/v2/steering/apps/private/7").unwrap();
        OutboundRequest::new(Method::PATCH, url)
    }

    #[test]
    fn test_path() {
        assert_eq!(request().path(), "/api/v2/steering/apps/private/7");
    }

    #[test]
    fn test_set_body_updates_length() {
        let mut req = request().with_body("{}");
        assert_eq!(req.content_length(), Some(2));

        req.set_body(Body::from(r#"{"id":7}"#));
        assert_eq!(req.content_length(), Some(8));
        assert_eq!(req.take_body().unwrap(), br#"{"id":7}"#);
    }

    #[test]
    fn test_set_body_rewrites_explicit_header() {
        let mut req = request()
            .with_header(CONTENT_LENGTH, HeaderValue::from(2u64))
            .with_body("{}");
        req.set_body(Body::from("[1,2,3]"));
        assert_eq!(req.headers()[CONTENT_LENGTH], "7");
    }

    #[test]
    fn test_streaming_body_has_no_length() {
        let mut req = request().with_header(CONTENT_LENGTH, HeaderValue::from(3u64));
        req.set_body(Body::from_reader(std::io::Cursor::new(b"abc".to_vec())));
        assert_eq!(req.content_length(), None);
        assert!(!req.headers().contains_key(CONTENT_LENGTH));
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let req = request().with_json_body(b"{}".to_vec());
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(req.content_length(), Some(2));
    }
}
