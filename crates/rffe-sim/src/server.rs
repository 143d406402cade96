//! Single-connection TCP server wrapping a [`SimDevice`]
//!
//! Serves exactly one client connection on an OS-assigned localhost port:
//! read one envelope, apply it, write one reply, repeat until the client
//! disconnects. This mirrors the one-send/one-read contract of the real
//! device and is what the client integration tests run against.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use rffe_protocol::wire;

use crate::device::SimDevice;

/// A running simulator bound to a localhost port.
pub struct SimServer {
    addr: SocketAddr,
    handle: JoinHandle<io::Result<SimDevice>>,
}

/// Spawn a simulator serving one connection, returning once the port is
/// bound so clients can connect immediately.
pub fn serve_once(device: SimDevice) -> io::Result<SimServer> {
    let listener = TcpListener::bind(("127.0.0.1", 0))?;
    let addr = listener.local_addr()?;
    let handle = thread::spawn(move || serve_connection(&listener, device));
    Ok(SimServer { addr, handle })
}

impl SimServer {
    /// Address the simulator is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Wait for the client to disconnect and take the device back for
    /// state inspection.
    pub fn join(self) -> io::Result<SimDevice> {
        self.handle
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("simulator thread panicked")))
    }
}

fn serve_connection(listener: &TcpListener, mut device: SimDevice) -> io::Result<SimDevice> {
    let (stream, peer) = listener.accept()?;
    debug!(%peer, "client connected");
    handle_client(stream, &mut device)?;
    debug!(%peer, "client disconnected");
    Ok(device)
}

fn handle_client(mut stream: TcpStream, device: &mut SimDevice) -> io::Result<()> {
    stream.set_nodelay(true)?;
    let mut buf = [0u8; 4096];
    loop {
        let received = stream.read(&mut buf)?;
        if received == 0 {
            return Ok(());
        }
        match wire::decode_command(&buf[..received]) {
            Ok(command) => {
                let response = device.apply(&command);
                stream.write_all(&wire::encode_response(&response))?;
            }
            Err(err) => {
                // A real device drops the session on garbage; so do we
                warn!(%err, "undecodable packet, closing connection");
                return Ok(());
            }
        }
    }
}
