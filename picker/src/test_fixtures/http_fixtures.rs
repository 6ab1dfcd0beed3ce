// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::{io::{AsyncReadExt as _, AsyncWriteExt as _},
            net::TcpListener};

/// Starts a tiny HTTP server on a random local port that answers exactly one request
/// with the given status line and JSON body, then hangs up. Returns the URL to fetch.
pub async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        // Read until the end of the request headers. GET has no body.
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|it| it == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.ok();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}/employees.json")
}
