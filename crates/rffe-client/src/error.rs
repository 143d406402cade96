//! Error types for the control client
//!
//! The split between [`SessionError`] and [`DispatchError`] is the batch
//! loop's abort/skip policy made structural: a failed round-trip ends the
//! run, a command that never reached the wire is logged and skipped.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use rffe_protocol::DecodeError;

/// Transport-level failures. Any of these aborts the run: no command after
/// a failed round-trip is attempted.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The device refused the connection
    #[error("connection refused by {addr}: is the device server running?")]
    Refused { addr: SocketAddr },

    /// Host/port did not resolve to an address
    #[error("address `{0}` did not resolve")]
    BadAddress(String),

    /// No reply within the round-trip timeout
    #[error("timed out after {timeout:?} waiting for the device")]
    Timeout { timeout: Duration },

    /// The device closed the connection (zero-byte read)
    #[error("device closed the connection")]
    PeerClosed,

    /// The reply bytes did not decode as any known response
    #[error("malformed reply: {0}")]
    Decode(#[from] DecodeError),

    /// Any other socket error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Per-command failures raised before anything reaches the wire.
/// Recoverable in batch mode: the command is skipped and the run continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Command name outside the closed registry
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// Symbolic enum name outside the closed table
    #[error("unknown {field} name `{name}`")]
    InvalidEnumName { field: &'static str, name: String },

    /// Argument has the wrong shape for the command
    #[error("invalid argument for `{command}`: expected {expected}")]
    InvalidArgument {
        command: &'static str,
        expected: &'static str,
    },
}

/// Batch configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid JSON (or not the expected shape)
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither the config nor the CLI provided a device address
    #[error("no device address: set `server_ip` in the config or pass --ip")]
    MissingAddress,

    /// The config has an empty command map
    #[error("config contains no commands")]
    NoCommands,
}

/// Umbrella error for a single dispatched command.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
