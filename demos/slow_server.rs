//! Starts a delayed-response server for manual poking with curl.

use timeout_harness::{DelayedResponseServer, ServerConfig};

#[tokio::main]
async fn main() {
    timeout_harness::observability::init();

    let config = ServerConfig::delayed(5_000);
    let mut handle = DelayedResponseServer::start(config)
        .await
        .expect("failed to start server");

    if let Some(url) = handle.base_url() {
        println!("Slow server is listening on {url} (responses delayed 5s)");
    }
    println!("Press Ctrl+C to stop");

    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for Ctrl+C");
    handle.stop().await;
}
