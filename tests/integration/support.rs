//! Test support: an in-memory fake of the realtime database REST surface.
//!
//! The fake answers the four operations the store client uses:
//! `GET users.json` (whole-subtree snapshot, `null` when empty),
//! `PUT`/`PATCH`/`DELETE users/{id}.json`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Shared handle to the fake database contents, keyed by record id.
pub type SharedTree = Arc<Mutex<BTreeMap<String, Value>>>;

/// Minimal stateful stand-in for the realtime database.
struct FakeRtdb {
    tree: SharedTree,
}

impl Respond for FakeRtdb {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let path = request.url.path().to_string();
        let method = request.method.to_string();
        let mut tree = self.tree.lock().unwrap();

        if method == "GET" && path == "/users.json" {
            let body = if tree.is_empty() {
                Value::Null
            } else {
                Value::Object(tree.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            };
            return ResponseTemplate::new(200).set_body_json(body);
        }

        let Some(key) = key_from_path(&path) else {
            return ResponseTemplate::new(404);
        };

        match method.as_str() {
            "PUT" => {
                let Ok(value) = serde_json::from_slice::<Value>(&request.body) else {
                    return ResponseTemplate::new(400);
                };
                tree.insert(key.to_string(), value.clone());
                ResponseTemplate::new(200).set_body_json(value)
            }
            "PATCH" => {
                let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(&request.body)
                else {
                    return ResponseTemplate::new(400);
                };
                let entry = tree.entry(key.to_string()).or_insert_with(|| json!({}));
                if let Value::Object(existing) = entry {
                    for (field, value) in fields {
                        existing.insert(field, value);
                    }
                }
                ResponseTemplate::new(200).set_body_json(entry.clone())
            }
            "DELETE" => {
                tree.remove(key);
                ResponseTemplate::new(200).set_body_json(Value::Null)
            }
            _ => ResponseTemplate::new(405),
        }
    }
}

fn key_from_path(path: &str) -> Option<&str> {
    path.strip_prefix("/users/")?.strip_suffix(".json")
}

/// Start a mock server backed by a fake database tree.
///
/// Returns the server (keep it alive for the test) and the shared tree for
/// seeding and asserting on remote contents.
pub async fn start_fake_rtdb() -> (MockServer, SharedTree) {
    let tree: SharedTree = Arc::new(Mutex::new(BTreeMap::new()));
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(FakeRtdb {
            tree: Arc::clone(&tree),
        })
        .mount(&server)
        .await;

    (server, tree)
}
