//! Runs the API on a real loopback listener and shuts it down via the token.

use std::sync::Arc;
use std::time::Duration;

use log_engine::{Log, Record};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

async fn raw_request(addr: std::net::SocketAddr, method: &str, body: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!(
        "{method} / HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(req.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_serve_handles_requests_and_stops_on_cancel() {
    // given
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log = Arc::new(Log::new());
    log.append(Record::new("hello")).unwrap();
    let token = CancellationToken::new();
    let server = tokio::spawn(log_api_server::serve(listener, log.clone(), token.clone()));

    // when
    let read = raw_request(addr, "GET", r#"{"offset":0}"#).await;
    let append = raw_request(addr, "POST", r#"{"record":{"value":"d29ybGQ="}}"#).await;

    // then
    assert!(read.starts_with("HTTP/1.1 200"));
    assert!(read.ends_with(r#"{"record":{"value":"aGVsbG8=","offset":0}}"#));
    assert!(append.starts_with("HTTP/1.1 200"));
    assert!(append.ends_with(r#"{"offset":1}"#));
    assert_eq!(log.read(1).unwrap().value, b"world");

    token.cancel();
    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_run_reports_bind_failure() {
    let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap().to_string();

    let result = log_api_server::run(&addr, Arc::new(Log::new()), CancellationToken::new()).await;

    let err = result.unwrap_err();
    assert!(err.starts_with("bind api"), "{err}");
}
