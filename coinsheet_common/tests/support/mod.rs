//! In-process stand-in for the asset endpoint.
//!
//! Serves `GET /v2/assets/{symbol}` from a fixed route table over a plain
//! `TcpListener`, one request per connection, and records every request target.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

pub struct StubApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    /// Starts a stub answering each `(symbol, status, body)`; other symbols get 404.
    pub fn start(routes: Vec<(&str, u16, String)>) -> Self {
        let routes: HashMap<String, (u16, String)> = routes
            .into_iter()
            .map(|(symbol, status, body)| (symbol.to_string(), (status, body)))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                if let Ok(stream) = stream {
                    serve(stream, &routes, &seen);
                }
            }
        });

        Self {
            base_url: format!("http://{}/v2/assets", addr),
            requests,
        }
    }

    /// Request targets (path and query) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn serve(
    mut stream: TcpStream,
    routes: &HashMap<String, (u16, String)>,
    seen: &Mutex<Vec<String>>,
) {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" => break,
            Ok(_) => {}
        }
    }

    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();
    seen.lock().unwrap().push(target.clone());

    let path = target.split('?').next().unwrap_or("");
    let symbol = path.rsplit('/').next().unwrap_or("");
    let (status, body) = routes
        .get(symbol)
        .cloned()
        .unwrap_or((404, r#"{"error":"not found"}"#.to_string()));
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        _ => "Error",
    };

    // The client may already have hung up; nothing to report back to it.
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    )
    .and_then(|_| stream.flush())
    .ok();
}

/// A complete asset body as returned by the endpoint.
pub fn asset_body(name: &str, symbol: &str, price: &str, change: &str) -> String {
    format!(
        r#"{{"data":{{"id":"{id}","rank":"1","symbol":"{symbol}","name":"{name}","priceUsd":"{price}","marketCapUsd":"1000000000.5","volumeUsd24Hr":"2500000.25","changePercent24Hr":"{change}"}},"timestamp":1714550000000}}"#,
        id = name.to_lowercase(),
        symbol = symbol,
        name = name,
        price = price,
        change = change
    )
}

/// Base URL that refuses connections.
pub fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v2/assets", addr)
}
