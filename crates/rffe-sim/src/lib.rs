//! Simulation layer for the RF front-end control protocol
//!
//! Provides a protocol-accurate simulated device ([`SimDevice`]) and a
//! single-connection TCP server ([`serve_once`]) so the client stack can be
//! exercised end to end without hardware.

pub mod device;
pub mod server;

pub use device::SimDevice;
pub use server::{serve_once, SimServer};
