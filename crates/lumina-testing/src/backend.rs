//! In-process stub of the remote backend API.
//!
//! Serves canned `{success, data?, message?}` bodies keyed by
//! `"METHOD /path"` and records every request it sees, so tests can assert
//! both the client's envelope handling and which calls were (not) made.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::Value;

#[derive(Clone)]
struct StubState {
    responses: Arc<HashMap<String, (u16, Value)>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// A running stub server. Dropping it leaves the task to die with the
/// test runtime.
pub struct StubBackend {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubBackend {
    /// Start a stub serving `(route, status, body)` entries, where `route`
    /// is `"GET /courses"` style. Unrouted requests get a 404 failure
    /// envelope.
    pub async fn start(responses: Vec<(&str, u16, Value)>) -> Self {
        let responses: HashMap<String, (u16, Value)> = responses
            .into_iter()
            .map(|(route, status, body)| (route.to_owned(), (status, body)))
            .collect();
        let state = StubState {
            responses: Arc::new(responses),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = Arc::clone(&state.requests);

        let router = Router::new().fallback(respond).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub backend");
        let addr = listener.local_addr().expect("stub backend addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request seen so far, as `"METHOD /path"`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(State(state): State<StubState>, req: Request) -> Response {
    let key = format!("{} {}", req.method(), req.uri().path());
    state.requests.lock().unwrap().push(key.clone());
    match state.responses.get(&key) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).expect("valid stub status"),
            Json(body.clone()),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "success": false, "message": "not found" })),
        )
            .into_response(),
    }
}
