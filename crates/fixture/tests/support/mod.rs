//! Shared test support: a scriptable transport that records every call

// Not every test binary uses every helper here.
#![allow(dead_code)]

use async_trait::async_trait;
use mingle_graph::{ApiRequest, GraphError, Method, Transport};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mingle_fixture::{AccountManager, FixtureConfig};

pub const APP_ID: &str = "412345678901234";
pub const PLACE_ID: &str = "167724369950862";

type Router = Box<dyn Fn(&ApiRequest) -> Result<Value, GraphError> + Send + Sync>;

/// Transport stub that answers via a router closure and records every
/// request it sees, so tests can count remote calls per endpoint.
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    router: Router,
}

impl RecordingTransport {
    pub fn new(
        router: impl Fn(&ApiRequest) -> Result<Value, GraphError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            router: Box::new(router),
        })
    }

    pub fn total_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn count_method(&self, method: Method) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method)
            .count()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<Value, GraphError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.router)(request)
    }
}

/// Default feed used by the assertion tests: one post with an attached
/// place, one without.
pub fn place_feed() -> Value {
    json!({
        "data": [
            {"id": 1, "place": {"id": PLACE_ID}},
            {"id": 2}
        ]
    })
}

/// Happy-path router for the full account lifecycle. Creation hands out a
/// fresh account id per call so renew tests can observe the replacement.
pub fn happy_router() -> impl Fn(&ApiRequest) -> Result<Value, GraphError> + Send + Sync {
    let created = AtomicUsize::new(0);
    let creation_path = format!("{APP_ID}/accounts/test-users");

    move |request| match (request.method, request.path.as_str()) {
        (Method::Get, "app") => Ok(json!({"id": APP_ID})),
        (Method::Get, "debug_token") => Ok(json!({"data": {"is_valid": true}})),
        (Method::Post, path) if path == creation_path => {
            let n = created.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(json!({
                "id": format!("10000000000{n}"),
                "access_token": format!("token-{n}"),
                "login_url": format!("https://social.test/login/{n}"),
                "email": format!("tester-{n}@tfbnw.net"),
                "password": format!("pw-{n}")
            }))
        }
        (Method::Get, "me") => Ok(json!({"id": "100000000001", "first_name": "Rita"})),
        (Method::Get, "me/posts") => Ok(place_feed()),
        (Method::Delete, _) => Ok(json!({"success": true})),
        _ => Err(GraphError::Api {
            kind: "GraphMethodException".to_string(),
            code: Some(100),
            message: format!("unsupported endpoint {}", request.path),
        }),
    }
}

pub fn test_config() -> FixtureConfig {
    let mut config = FixtureConfig::new(APP_ID, "ccb79c1b0fdff54e");
    config.permissions = vec!["public_profile".to_string(), "email".to_string()];
    config
}

pub fn manager_with(
    router: impl Fn(&ApiRequest) -> Result<Value, GraphError> + Send + Sync + 'static,
) -> (AccountManager, Arc<RecordingTransport>) {
    let transport = RecordingTransport::new(router);
    let manager = AccountManager::new(test_config(), transport.clone())
        .expect("test config is valid");
    (manager, transport)
}
