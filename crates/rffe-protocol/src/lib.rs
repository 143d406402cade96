//! RF Front-End Control Protocol
//!
//! This crate implements the control protocol spoken by the RF front-end
//! device: a single protobuf-encoded `Packet` envelope per direction, sent
//! over a raw TCP stream with no outer length prefix. Exactly one command is
//! populated per envelope (oneof semantics), and every round-trip is one
//! request message answered by one response message.
//!
//! # Envelope Format
//!
//! The envelope is a standard protobuf message whose field number doubles as
//! the oneof discriminant:
//!
//! ```text
//! field  message                           direction
//!  1     get_status_request                client -> device
//!  2     set_channels_enabled_request      client -> device
//!  3     set_cal_enabled_request           client -> device
//!  4     set_cal_attenuation_request       client -> device
//!  5     set_frontend_attenuation_request  client -> device
//!  6     set_rf_band_request               client -> device
//!  7     set_pll_frequency_request         client -> device
//!  8     set_switches_request              client -> device
//!  9     get_status_response               device -> client
//! 10     ack                               device -> client
//! ```
//!
//! # Architecture
//!
//! - [`envelope`] defines the [`Command`] and [`Response`] unions as explicit
//!   sum types with exhaustive matching at every consumption site
//! - [`options`] holds the closed name/code tables for the band and switch
//!   enumerations
//! - [`wire`] encodes and decodes the envelope bytes; enum fields stay as raw
//!   integer codes at this layer
//! - [`status`] projects a decoded status response into named fields,
//!   resolving codes to symbolic names (`UNKNOWN` for codes this client does
//!   not define)
//!
//! # Example
//!
//! ```rust
//! use rffe_protocol::{wire, Command, RfBand};
//!
//! let encoded = wire::encode_command(&Command::SetRfBand { band: RfBand::Band2To6Ghz });
//! let decoded = wire::decode_command(&encoded).unwrap();
//! assert_eq!(decoded, Command::SetRfBand { band: RfBand::Band2To6Ghz });
//! ```

pub mod envelope;
pub mod error;
pub mod options;
pub mod status;
pub mod wire;

pub use envelope::{Command, CommandKind, DeviceStatus, Response};
pub use error::{DecodeError, ProjectionError};
pub use options::{IfSwitchOption, MixerSwitchOption, RfBand, RfSwitchOption, UNKNOWN_LABEL};
pub use status::StatusView;
