//! Server lifecycle: bind, readiness, shutdown, port reuse.

use std::time::{Duration, Instant};

use timeout_harness::{DelayedResponseServer, ServerConfig, ServerError, ServerState};

mod common;

#[tokio::test]
async fn ephemeral_port_is_assigned() {
    common::init_tracing();

    let mut handle = common::start_server(ServerConfig::immediate()).await;
    assert_eq!(handle.state(), ServerState::Running);
    let addr = handle.local_addr().expect("running server has an address");
    assert!(addr.port() > 0);

    handle.stop().await;
    assert_eq!(handle.state(), ServerState::Stopped);
    assert!(handle.local_addr().is_none());
}

#[tokio::test]
async fn listener_is_ready_when_start_returns() {
    common::init_tracing();

    let mut handle = common::start_server(ServerConfig::immediate()).await;
    let addr = handle.local_addr().unwrap();

    // No sleep: the connect must land in the accept backlog.
    let stream = tokio::net::TcpStream::connect(addr).await;
    assert!(
        stream.is_ok(),
        "immediate connect after start was refused: {stream:?}"
    );

    handle.stop().await;
}

#[tokio::test]
async fn stop_is_idempotent_and_releases_the_port() {
    common::init_tracing();

    let mut handle = common::start_server(ServerConfig::immediate()).await;
    let addr = handle.local_addr().unwrap();

    handle.stop().await;
    handle.stop().await; // no-op

    let rebound = tokio::net::TcpListener::bind(addr).await;
    assert!(rebound.is_ok(), "port not released: {rebound:?}");
}

#[tokio::test]
async fn concurrent_servers_get_distinct_ports() {
    common::init_tracing();

    let mut first = common::start_server(ServerConfig::immediate()).await;
    let mut second = common::start_server(ServerConfig::immediate()).await;

    assert_ne!(first.port(), second.port());

    first.stop().await;
    second.stop().await;
}

#[tokio::test]
async fn sequential_cycles_are_isolated() {
    common::init_tracing();

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    for _ in 0..2 {
        let mut handle = common::start_server(ServerConfig::immediate()).await;
        let url = common::base_url(&handle);

        let response = client.get(url.as_str()).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 200);

        handle.stop().await;
    }
}

#[tokio::test]
async fn success_response_is_200_text_html() {
    common::init_tracing();

    let mut handle = common::start_server(ServerConfig::immediate()).await;
    let url = common::base_url(&handle);

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let response = client.get(url.as_str()).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(content_type, Some("text/html"));

    handle.stop().await;
}

#[tokio::test]
async fn every_path_is_served_by_the_same_endpoint() {
    common::init_tracing();

    let mut handle = common::start_server(ServerConfig::immediate()).await;
    let url = common::base_url(&handle).join("some/nested/path").unwrap();

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let response = client.get(url.as_str()).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    handle.stop().await;
}

#[tokio::test]
async fn delayed_requests_do_not_serialize() {
    common::init_tracing();

    let mut handle = common::start_server(ServerConfig::delayed(1_000)).await;
    let url = common::base_url(&handle);

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let started = Instant::now();
    let (a, b) = tokio::join!(
        client.get(url.as_str()).send(),
        client.get(url.as_str()).send(),
    );
    assert!(a.unwrap().status().is_success());
    assert!(b.unwrap().status().is_success());

    // Two concurrent requests each delayed 1s must overlap, not stack.
    assert!(
        started.elapsed() < Duration::from_millis(1_900),
        "delays serialized across connections: {:?}",
        started.elapsed()
    );

    handle.stop().await;
}

#[tokio::test]
async fn stop_returns_promptly_with_a_handler_mid_sleep() {
    common::init_tracing();

    let mut handle = common::start_server(ServerConfig::delayed(30_000)).await;
    let url = common::base_url(&handle);

    // Park a request inside the delay.
    let inflight = tokio::spawn(async move {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        client.get(url.as_str()).send().await
    });
    tokio::time::sleep(Duration::from_millis(200)).await;

    let started = Instant::now();
    handle.stop().await;
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "stop hung on a delayed handler: {:?}",
        started.elapsed()
    );

    // The abandoned client observes an abrupt close, not a response.
    let result = inflight.await.unwrap();
    assert!(result.is_err(), "client received a response after stop");
}

#[tokio::test]
async fn bind_failure_is_reported() {
    common::init_tracing();

    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = occupied.local_addr().unwrap().port();

    let config = ServerConfig {
        bind_host: "127.0.0.1".to_string(),
        bind_port: port,
        ..ServerConfig::default()
    };
    let result = DelayedResponseServer::start(config).await;
    assert!(matches!(result, Err(ServerError::Bind { .. })));
}

#[tokio::test]
async fn invalid_config_is_rejected_before_binding() {
    common::init_tracing();

    let config = ServerConfig {
        status_code: 99,
        ..ServerConfig::default()
    };
    let result = DelayedResponseServer::start(config).await;
    assert!(matches!(result, Err(ServerError::Invalid(_))));
}
