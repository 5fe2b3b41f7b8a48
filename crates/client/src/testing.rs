//! In-process stand-in for the PokéAPI used by tests.
//!
//! A minimal HTTP/1.1 server on tokio that answers `GET` requests from a
//! route table and records every requested path. Unknown paths get a 404.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Clone)]
struct Route {
    status: u16,
    body: String,
    delay: Duration,
}

#[derive(Default)]
struct Shared {
    routes: HashMap<String, Route>,
    requests: Vec<String>,
}

/// Mock API server bound to an ephemeral localhost port.
#[derive(Clone)]
pub struct MockApi {
    base_url: String,
    shared: Arc<Mutex<Shared>>,
}

impl MockApi {
    /// Bind and start serving in a background task.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let port = listener.local_addr().expect("mock server address").port();
        let shared = Arc::new(Mutex::new(Shared::default()));

        let serve_shared = Arc::clone(&shared);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(handle(stream, Arc::clone(&serve_shared)));
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            shared,
        }
    }

    /// Root URL of the server, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Answer `GET path` with `status` and a JSON body.
    pub fn route(&self, path: &str, status: u16, body: serde_json::Value) {
        self.route_delayed(path, Duration::ZERO, status, body);
    }

    /// Like [`MockApi::route`], but wait `delay` before responding.
    pub fn route_delayed(
        &self,
        path: &str,
        delay: Duration,
        status: u16,
        body: serde_json::Value,
    ) {
        let route = Route {
            status,
            body: body.to_string(),
            delay,
        };
        self.lock().routes.insert(path.to_string(), route);
    }

    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Shared> {
        self.shared.lock().expect("mock state poisoned")
    }
}

/// A URL on which nothing is listening.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind probe listener");
    let port = listener.local_addr().expect("probe address").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

async fn handle(mut stream: TcpStream, shared: Arc<Mutex<Shared>>) {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buf);
    let path = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let route = {
        let mut shared = shared.lock().expect("mock state poisoned");
        shared.requests.push(path.clone());
        shared.routes.get(&path).cloned()
    };
    let route = route.unwrap_or(Route {
        status: 404,
        body: r#"{"detail":"Not found."}"#.to_string(),
        delay: Duration::ZERO,
    });

    if !route.delay.is_zero() {
        tokio::time::sleep(route.delay).await;
    }

    let response = format!(
        "HTTP/1.1 {} MOCK\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {}",
        route.status,
        route.body.len(),
        route.body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
