//! Local stand-in for the Hacker News search API.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use lib_hnsearch::SearchOptions;
use serde_json::Value;

/// What the mock answers to every `search_by_date` request.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// 200 with this JSON body.
    Json(Value),
    /// This status with a short text body.
    Status(u16),
    /// Sleep this long before answering 200 `{}`.
    Stall(Duration),
    /// 200 with this body and a JSON content type.
    Raw(&'static str),
}

#[derive(Clone)]
struct MockState {
    behavior: Arc<Behavior>,
    received: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// A running mock server.
pub struct MockApi {
    pub addr: SocketAddr,
    received: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockApi {
    pub async fn start(behavior: Behavior) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            behavior: Arc::new(behavior),
            received: Arc::clone(&received),
        };
        let app = Router::new()
            .route("/api/v1/search_by_date", get(search_by_date))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, received }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1/", self.addr)
    }

    /// Client options pointed at this server.
    pub fn options(&self, timeout_ms: u64) -> SearchOptions {
        SearchOptions {
            base_url: self.base_url(),
            timeout_ms,
            ..SearchOptions::default()
        }
    }

    /// Query strings of every request received so far, decoded.
    pub fn received(&self) -> Vec<HashMap<String, String>> {
        self.received.lock().unwrap().clone()
    }
}

async fn search_by_date(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.received.lock().unwrap().push(params);

    match state.behavior.as_ref() {
        Behavior::Json(body) => Json(body.clone()).into_response(),
        Behavior::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap();
            (status, "upstream failure").into_response()
        }
        Behavior::Stall(delay) => {
            tokio::time::sleep(*delay).await;
            Json(serde_json::json!({})).into_response()
        }
        Behavior::Raw(text) => ([(header::CONTENT_TYPE, "application/json")], *text).into_response(),
    }
}

/// An address nothing is listening on.
pub async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/v1/")
}
