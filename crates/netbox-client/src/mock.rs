//! Mock transport for unit testing
//!
//! This module provides a scripted implementation of `HttpTransport` that can be
//! used in unit tests without requiring a running NetBox instance. Responses are
//! registered per path and every request is recorded so tests can assert on the
//! exact sequence of GETs.

use crate::error::NetBoxError;
use crate::netbox_trait::{HttpTransport, RawResponse};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A GET observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Path or cursor URL exactly as the pager passed it
    pub path: String,
    /// Query parameters sent alongside
    pub query: Vec<(String, String)>,
}

/// Scripted NetBox transport for testing
///
/// Unknown paths answer `404 {"detail": "Not found."}`, like NetBox does.
#[derive(Debug, Default)]
pub struct MockTransport {
    base_url: String,
    responses: Mutex<HashMap<String, RawResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Answer GETs on `path` with `status` and a JSON body
    pub fn respond(&self, path: &str, status: u16, body: &Value) {
        lock(&self.responses).insert(path.to_string(), RawResponse::new(status, body.to_string()));
    }

    /// Answer GETs on `path` with a raw, possibly non-JSON body
    pub fn respond_raw(&self, path: &str, status: u16, body: &str) {
        lock(&self.responses).insert(path.to_string(), RawResponse::new(status, body));
    }

    /// Answer GETs on `path` with a `200` device page
    pub fn respond_page(&self, path: &str, results: Vec<Value>, next: Option<&str>) {
        let body = json!({
            "count": results.len(),
            "next": next,
            "previous": null,
            "results": results,
        });
        self.respond(path, 200, &body);
    }

    /// All requests received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Paths requested so far, in order
    pub fn requested_paths(&self) -> Vec<String> {
        lock(&self.requests).iter().map(|r| r.path.clone()).collect()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<RawResponse, NetBoxError> {
        lock(&self.requests).push(RecordedRequest {
            path: path.to_string(),
            query: query.to_vec(),
        });

        let response = lock(&self.responses)
            .get(path)
            .cloned()
            .unwrap_or_else(|| RawResponse::new(404, json!({"detail": "Not found."}).to_string()));
        Ok(response)
    }
}
