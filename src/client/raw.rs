//! GET adapter over a bare TCP stream.
//!
//! Writes a minimal HTTP/1.1 request by hand and applies the supplied
//! timeout only to reading the status line, which makes it a read
//! timeout in its purest form: the connect phase has its own fixed
//! bound and its failures are transport errors.

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time;
use url::Url;

use crate::client::adapter::{AttemptError, ClientAdapter, ClientKind};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Adapter that speaks HTTP/1.1 directly over a TCP stream.
#[derive(Debug, Default)]
pub struct RawSocketAdapter;

impl RawSocketAdapter {
    pub fn new() -> Self {
        Self
    }
}

/// Extract the status code from an HTTP/1.x status line.
fn parse_status_line(line: &str) -> Result<u16, AttemptError> {
    let mut parts = line.split_whitespace();
    let version = parts.next().unwrap_or("");
    if !version.starts_with("HTTP/1.") {
        return Err(AttemptError::Transport(format!(
            "not an HTTP/1.x status line: {line:?}"
        )));
    }
    parts
        .next()
        .and_then(|code| code.parse::<u16>().ok())
        .ok_or_else(|| AttemptError::Transport(format!("malformed status line: {line:?}")))
}

#[async_trait]
impl ClientAdapter for RawSocketAdapter {
    fn kind(&self) -> ClientKind {
        ClientKind::RawSocket
    }

    async fn get(&self, url: &Url, timeout: Duration) -> Result<u16, AttemptError> {
        let host = url
            .host_str()
            .ok_or_else(|| AttemptError::Transport("url has no host".to_string()))?;
        let port = url.port_or_known_default().unwrap_or(80);

        let mut stream = match time::timeout(CONNECT_TIMEOUT, TcpStream::connect((host, port))).await
        {
            Ok(Ok(stream)) => stream,
            Ok(Err(e)) => return Err(AttemptError::Transport(format!("connect failed: {e}"))),
            Err(_) => return Err(AttemptError::Transport("connect timed out".to_string())),
        };

        let request = format!(
            "GET {} HTTP/1.1\r\nHost: {host}:{port}\r\nConnection: close\r\n\r\n",
            url.path()
        );
        stream
            .write_all(request.as_bytes())
            .await
            .map_err(|e| AttemptError::Transport(format!("write failed: {e}")))?;

        // The read timeout proper: a bounded wait for the first
        // response bytes. The stream is dropped on every exit path.
        let mut buf = [0u8; 1024];
        let read = match time::timeout(timeout, stream.read(&mut buf)).await {
            Ok(Ok(0)) => {
                return Err(AttemptError::Transport(
                    "connection closed before status line".to_string(),
                ))
            }
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(AttemptError::Transport(format!("read failed: {e}"))),
            Err(_) => return Err(AttemptError::TimedOut),
        };

        let head = String::from_utf8_lossy(&buf[..read]);
        let line = head.lines().next().unwrap_or("");
        parse_status_line(line)
    }
}
