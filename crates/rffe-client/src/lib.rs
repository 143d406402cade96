//! Blocking control client for the RF front-end
//!
//! Single-threaded, strictly sequential: one command in flight at a time,
//! each round-trip bounded by a timeout, the socket owned by the session
//! and released on every exit path.
//!
//! - [`session`]: one-shot write/read transport over TCP
//! - [`dispatch`]: closed command registry, JSON-argument conversion, the
//!   attenuation-last reordering policy and the batch loop
//! - [`config`]: the JSON batch document
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use rffe_client::Session;
//! use rffe_protocol::Command;
//!
//! # fn main() -> Result<(), rffe_client::SessionError> {
//! let mut session = Session::connect("192.168.0.90", 5000, Duration::from_secs(5))?;
//! let response = session.round_trip(&Command::GetStatus)?;
//! println!("{}", rffe_protocol::status::project(&response).unwrap());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod session;

pub use config::BatchConfig;
pub use dispatch::{run_batch, BatchOutcome};
pub use error::{ClientError, ConfigError, DispatchError, SessionError};
pub use session::{Session, DEFAULT_PORT, DEFAULT_TIMEOUT};
