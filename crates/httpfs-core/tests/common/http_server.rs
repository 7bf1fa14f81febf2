//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of routes keyed by request target. Responds to HEAD
//! with the route's headers only and to GET with headers and body. Every
//! request's method, target and headers are recorded for assertions.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub reason: &'static str,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// If false, no `Content-Length` is sent and the body is delimited by connection close.
    pub content_length: bool,
    /// If true, the connection is held open after the body until the client closes it.
    pub stall: bool,
}

impl Route {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            reason: "OK",
            headers: Vec::new(),
            body: body.into(),
            content_length: true,
            stall: false,
        }
    }

    pub fn status(mut self, status: u16, reason: &'static str) -> Self {
        self.status = status;
        self.reason = reason;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn without_content_length(mut self) -> Self {
        self.content_length = false;
        self
    }

    pub fn stalled(mut self) -> Self {
        self.stall = true;
        self
    }

    pub fn redirect(location: &str) -> Self {
        Route::ok(Vec::new())
            .status(302, "Found")
            .header("Location", location)
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    /// Header names lowercased.
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ServerOptions {
    /// If false, HEAD returns 405 (simulates origins that block HEAD).
    pub head_allowed: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self { head_allowed: true }
    }
}

pub struct TestServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub base: String,
    pub port: u16,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    released: Arc<AtomicUsize>,
}

impl TestServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().last().cloned().expect("no request recorded")
    }

    /// Stalled connections the client has closed so far.
    pub fn released_connections(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

pub fn start(routes: Vec<(&str, Route)>) -> TestServer {
    start_with_options(routes, ServerOptions::default())
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start_with_options(routes: Vec<(&str, Route)>, opts: ServerOptions) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(target, route)| (target.to_string(), route))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let released = Arc::new(AtomicUsize::new(0));
    let recorded = Arc::clone(&requests);
    let released_by = Arc::clone(&released);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let recorded = Arc::clone(&recorded);
            let released = Arc::clone(&released_by);
            thread::spawn(move || handle(stream, &routes, &recorded, &released, opts));
        }
    });
    TestServer {
        base: format!("http://127.0.0.1:{}/", port),
        port,
        requests,
        released,
    }
}

/// Base URL of a server that accepts connections and never answers.
pub fn start_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || drain_until_closed(stream));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().unwrap().port()
}

fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, Route>,
    recorded: &Mutex<Vec<RecordedRequest>>,
    released: &AtomicUsize,
    opts: ServerOptions,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let request = match read_head(&mut stream) {
        Some(r) => r,
        None => return,
    };
    let Some(parsed) = parse_request(&request) else {
        return;
    };
    recorded.lock().unwrap().push(parsed.clone());

    let is_head = parsed.method.eq_ignore_ascii_case("HEAD");
    if is_head && !opts.head_allowed {
        let _ = stream.write_all(
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }
    if !is_head && !parsed.method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let not_found = Route::ok(b"not found".to_vec()).status(404, "Not Found");
    let route = routes.get(&parsed.target).unwrap_or(&not_found);

    let mut response = format!("HTTP/1.1 {} {}\r\n", route.status, route.reason);
    for (name, value) in &route.headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    if route.content_length {
        response.push_str(&format!("Content-Length: {}\r\n", route.body.len()));
    }
    response.push_str("Connection: close\r\n\r\n");

    let _ = stream.write_all(response.as_bytes());
    if !is_head {
        let _ = stream.write_all(&route.body);
    }
    let _ = stream.flush();

    if route.stall {
        let _ = stream.set_read_timeout(None);
        drain_until_closed(stream);
        released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Reads and discards until the peer closes the connection.
fn drain_until_closed(mut stream: TcpStream) {
    let mut buf = [0u8; 1024];
    while let Ok(n) = stream.read(&mut buf) {
        if n == 0 {
            break;
        }
    }
}

/// Reads until the end of the request head.
fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = stream.read(&mut buf).ok()?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
        if data.windows(4).any(|w| w == b"\r\n\r\n") || data.len() > 64 * 1024 {
            break;
        }
    }
    String::from_utf8(data).ok()
}

fn parse_request(request: &str) -> Option<RecordedRequest> {
    let mut lines = request.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();
    let mut headers = HashMap::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }
    Some(RecordedRequest {
        method,
        target,
        headers,
    })
}
