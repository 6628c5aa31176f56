// Stand-in companion process for screen tests

use std::sync::{Arc, Mutex};

use axum::Router;
use item_remote_common::ConnectionConfig;

/// Request bodies seen by the stand-in companion
#[derive(Debug, Clone, Default)]
pub struct Hits(Arc<Mutex<Vec<String>>>);

impl Hits {
    pub fn record(&self, body: String) {
        self.0.lock().unwrap().push(body);
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn bodies(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Serve `router` on an ephemeral local port
pub async fn serve(router: Router) -> ConnectionConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ConnectionConfig::new("127.0.0.1", addr.port(), "test-token")
}

/// Settings pointing at a port nothing listens on
pub fn closed_port_config() -> ConnectionConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    ConnectionConfig::new("127.0.0.1", port, "test-token")
}
