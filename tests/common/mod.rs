//! Test double for the GCE metadata server
//!
//! Serves a fixed path -> value map over local HTTP, enforcing the
//! `Metadata-Flavor: Google` header the real server requires. A path may be
//! listed as unreachable, in which case the double redirects it into a dead
//! port so the caller sees a transport failure rather than a readable body.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Router;

/// Representative attribute values for a full, healthy metadata server.
pub const SOURCE_VALUES: [(&str, &str); 8] = [
    ("/instance/name", "web-server-1"),
    ("/instance/id", "1234567890"),
    ("/instance/zone", "projects/123/zones/us-central1-a"),
    ("/project/project-id", "demo-project"),
    ("/instance/machine-type", "projects/123/machineTypes/e2-medium"),
    ("/instance/network-interfaces/0/ip", "10.128.0.2"),
    (
        "/instance/network-interfaces/0/access-configs/0/external-ip",
        "34.68.12.7",
    ),
    ("/instance/hostname", "web-server-1.c.demo-project.internal"),
];

#[derive(Clone)]
struct DoubleState {
    values: HashMap<String, String>,
    unreachable: Vec<String>,
    dead_port: u16,
}

/// Handle to a running metadata double
pub struct MetadataDouble {
    pub base_url: String,
}

impl MetadataDouble {
    /// Spawn a double serving `values`. Lookups of `unreachable` paths fail
    /// at the transport level instead of returning a body.
    pub async fn spawn(values: &[(&str, &str)], unreachable: &[&str]) -> Self {
        let state = DoubleState {
            values: values
                .iter()
                .map(|(path, value)| (path.to_string(), value.to_string()))
                .collect(),
            unreachable: unreachable.iter().map(|path| path.to_string()).collect(),
            dead_port: dead_port().await,
        };

        let app = Router::new().fallback(serve_attribute).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
        }
    }
}

/// Base URL with nothing listening behind it; every request fails to connect.
pub async fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}", dead_port().await)
}

/// Bind and immediately release a port, leaving nothing listening on it.
async fn dead_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn serve_attribute(
    State(state): State<DoubleState>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    // The real server refuses requests without the flavor marker
    if headers.get("Metadata-Flavor").map(|v| v.as_bytes()) != Some(b"Google".as_slice()) {
        return (StatusCode::FORBIDDEN, "Missing Metadata-Flavor header").into_response();
    }

    let path = uri.path().to_string();
    if state.unreachable.contains(&path) {
        // Send the caller into a dead port; following the redirect fails at
        // the transport level, the same failure class as a timeout.
        return Redirect::temporary(&format!("http://127.0.0.1:{}/", state.dead_port))
            .into_response();
    }

    match state.values.get(&path) {
        Some(value) => (StatusCode::OK, value.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
