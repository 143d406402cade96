//! One-shot blocking transport session
//!
//! The session exclusively owns one TCP connection for its lifetime. Each
//! [`Session::round_trip`] performs exactly one write of a fully encoded
//! envelope and exactly one blocking read for the reply: no retries, no
//! pipelining, no buffering of partial frames across calls.
//!
//! The protocol has no length prefix, so this relies on the device replying
//! promptly and completely within a single read. That is an accepted
//! constraint of the trusted point-to-point link; replies are far smaller
//! than the 4096-byte read buffer.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use rffe_protocol::{wire, Command, Response};

use crate::error::SessionError;

/// Default control port of the front-end server.
pub const DEFAULT_PORT: u16 = 5000;

/// Default connect and round-trip timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// One reply per read; matches the original client's receive buffer.
const READ_BUFFER_SIZE: usize = 4096;

/// Exclusive owner of one control connection.
///
/// The socket is closed on every exit path when the session drops.
#[derive(Debug)]
pub struct Session {
    stream: TcpStream,
    peer: SocketAddr,
    timeout: Duration,
}

impl Session {
    /// Connect to the device, bounding the connect and every subsequent
    /// read by `timeout`. Sets `TCP_NODELAY` so small command/response
    /// pairs are not coalesced.
    pub fn connect(host: &str, port: u16, timeout: Duration) -> Result<Self, SessionError> {
        let addr = (host, port)
            .to_socket_addrs()
            .map_err(|_| SessionError::BadAddress(format!("{host}:{port}")))?
            .next()
            .ok_or_else(|| SessionError::BadAddress(format!("{host}:{port}")))?;

        let stream = TcpStream::connect_timeout(&addr, timeout).map_err(|err| match err.kind() {
            io::ErrorKind::ConnectionRefused => SessionError::Refused { addr },
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
                SessionError::Timeout { timeout }
            }
            _ => SessionError::Io(err),
        })?;
        stream.set_nodelay(true)?;
        stream.set_read_timeout(Some(timeout))?;

        debug!(%addr, ?timeout, "session established");
        Ok(Self { stream, peer: addr, timeout })
    }

    /// Address of the connected device.
    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Send one command and block for its reply.
    ///
    /// A zero-byte read means the device closed the connection
    /// ([`SessionError::PeerClosed`]); a read that outlives the timeout is
    /// [`SessionError::Timeout`]. Both are distinct from a reply that fails
    /// to decode.
    pub fn round_trip(&mut self, command: &Command) -> Result<Response, SessionError> {
        let encoded = wire::encode_command(command);
        self.stream.write_all(&encoded)?;
        debug!(command = command.kind().name(), bytes = encoded.len(), "sent");

        let mut buf = [0u8; READ_BUFFER_SIZE];
        let received = match self.stream.read(&mut buf) {
            Ok(0) => return Err(SessionError::PeerClosed),
            Ok(n) => n,
            Err(err)
                if matches!(err.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) =>
            {
                return Err(SessionError::Timeout { timeout: self.timeout });
            }
            Err(err) => return Err(SessionError::Io(err)),
        };

        let response = wire::decode_response(&buf[..received])?;
        debug!(response = response.name(), bytes = received, "received");
        Ok(response)
    }
}
