//! Shared utilities for scenario integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Ordered log of requests observed across mock services, recorded as
/// `"{tag} {method} {target}"`.
pub type RequestLog = Arc<Mutex<Vec<String>>>;

pub fn new_request_log() -> RequestLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Start a mock service that records each request line into the shared
/// log and answers with the status and body chosen by `respond`.
///
/// Binds an ephemeral port and returns the bound address.
pub async fn start_recording_backend<F>(log: RequestLog, tag: &'static str, respond: F) -> SocketAddr
where
    F: Fn(&str, &str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let respond = Arc::new(respond);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let log = log.clone();
                    let respond = respond.clone();
                    tokio::spawn(async move {
                        let mut reader = BufReader::new(socket);

                        let mut request_line = String::new();
                        if reader.read_line(&mut request_line).await.is_err() {
                            return;
                        }
                        // Drain headers (and the empty Content-Length: 0
                        // bodies the generator sends) up to the blank line.
                        loop {
                            let mut header = String::new();
                            match reader.read_line(&mut header).await {
                                Ok(0) => break,
                                Ok(_) if header == "\r\n" || header == "\n" => break,
                                Ok(_) => {}
                                Err(_) => return,
                            }
                        }

                        let mut parts = request_line.split_whitespace();
                        let method = parts.next().unwrap_or("").to_string();
                        let target = parts.next().unwrap_or("").to_string();
                        log.lock()
                            .unwrap()
                            .push(format!("{tag} {method} {target}"));

                        let (status, body) = respond(&method, &target);
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let mut socket = reader.into_inner();
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Responder that always succeeds.
pub fn always_ok(_method: &str, _target: &str) -> (u16, String) {
    (200, "ok".to_string())
}

/// Responder that honors injected-error query parameters the way the
/// real backends do: any `raise` parameter produces a server error.
pub fn raise_aware(_method: &str, target: &str) -> (u16, String) {
    if target.contains("raise=") {
        (500, "simulated error".to_string())
    } else {
        (200, "ok".to_string())
    }
}
