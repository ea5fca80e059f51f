//! One-shot HTTP stub server for adapter integration tests.

use std::io::{self, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// HTTP server that answers exactly one request with a canned response.
pub struct StubServer {
    /// Base URL ending in `/api/`.
    pub endpoint: String,
    handle: JoinHandle<io::Result<String>>,
}

impl StubServer {
    /// Serve `body` with `status_line` (for example `200 OK`) to the first caller.
    ///
    /// # Errors
    ///
    /// Returns any error raised while binding the listener.
    pub fn respond(status_line: &'static str, body: impl Into<Vec<u8>>) -> io::Result<Self> {
        let payload = body.into();
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept()?;
            let head = read_request_head(&mut stream)?;
            let headers = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                payload.len()
            );
            stream.write_all(headers.as_bytes())?;
            stream.write_all(&payload)?;
            stream.flush()?;
            Ok(head)
        });
        Ok(Self {
            endpoint: format!("http://{addr}/api/"),
            handle,
        })
    }

    /// Serve `response` byte-for-byte, then close the connection.
    ///
    /// # Errors
    ///
    /// Returns any error raised while binding the listener.
    pub fn respond_raw(response: impl Into<Vec<u8>>) -> io::Result<Self> {
        let payload = response.into();
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept()?;
            let head = read_request_head(&mut stream)?;
            stream.write_all(&payload)?;
            stream.flush()?;
            Ok(head)
        });
        Ok(Self {
            endpoint: format!("http://{addr}/api/"),
            handle,
        })
    }

    /// Accept one connection and hold it open without answering.
    ///
    /// # Errors
    ///
    /// Returns any error raised while binding the listener.
    pub fn stall(hold_for: Duration) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept()?;
            let head = read_request_head(&mut stream)?;
            thread::sleep(hold_for);
            Ok(head)
        });
        Ok(Self {
            endpoint: format!("http://{addr}/api/"),
            handle,
        })
    }

    /// Wait for the server thread and return the request head it received.
    ///
    /// # Errors
    ///
    /// Returns the server thread's I/O error, or an error if it panicked.
    pub fn request_head(self) -> io::Result<String> {
        self.handle
            .join()
            .map_err(|_| io::Error::other("stub server thread panicked"))?
    }
}

/// Return an endpoint on a local port that nothing listens on.
///
/// # Errors
///
/// Returns any error raised while reserving the port.
pub fn closed_endpoint() -> io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/api/"))
}

fn read_request_head(stream: &mut impl Read) -> io::Result<String> {
    let mut head = Vec::new();
    let mut chunk = [0_u8; 512];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        head.extend(chunk.iter().take(read));
    }
    Ok(String::from_utf8_lossy(&head).into_owned())
}
