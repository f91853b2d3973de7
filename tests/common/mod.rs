//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use motorbrew_server::config::ServiceConfig;
use motorbrew_server::http::HttpServer;
use motorbrew_server::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A server running on an ephemeral port. Shuts down and removes its angle
/// file on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    pub angles_path: PathBuf,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
        let _ = std::fs::remove_file(&self.angles_path);
    }
}

/// Config with a unique angles file under the temp dir.
pub fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.storage.angles_path = std::env::temp_dir()
        .join(format!("motorbrew-test-{}.txt", uuid::Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();
    config
}

/// Start the service with the given config.
pub async fn start_server(config: ServiceConfig) -> TestServer {
    let angles_path = PathBuf::from(&config.storage.angles_path);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.listener();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Give the accept loop a moment.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        angles_path,
        shutdown,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}
