// Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use npa_hooks::{ClientResult, InboundResponse, OutboundRequest, Transport};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

/// What the transport actually received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub content_length: Option<u64>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("recorded body is JSON")
    }
}

type Responder = dyn Fn(&RecordedRequest) -> (StatusCode, Vec<u8>) + Send + Sync;

/// In-memory transport that records requests and answers from a closure
#[derive(Clone)]
pub struct MockTransport {
    responder: Arc<Responder>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (StatusCode, Vec<u8>) + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answer with the same status and body
    pub fn fixed(status: StatusCode, body: &'static str) -> Self {
        Self::new(move |_| (status, body.as_bytes().to_vec()))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: OutboundRequest) -> ClientResult<InboundResponse> {
        let content_length = request.content_length();
        let (method, url, headers, mut body) = request.into_parts();
        let recorded = RecordedRequest {
            method,
            path: url.path().to_string(),
            headers,
            content_length,
            body: body.read_all()?,
        };

        let (status, body) = (self.responder)(&recorded);
        self.requests.lock().unwrap().push(recorded);
        Ok(InboundResponse::new(status, body))
    }
}
