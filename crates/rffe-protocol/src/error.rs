//! Error types for protocol decoding and status projection

use thiserror::Error;

/// Errors that can occur while decoding an envelope
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Message is empty (zero bytes are a closed connection, not a message)
    #[error("empty message")]
    Empty,

    /// Buffer ended inside a field
    #[error("truncated message: {needed} more bytes expected")]
    Truncated { needed: usize },

    /// Varint ran past the 10-byte limit
    #[error("malformed varint")]
    BadVarint,

    /// Wire type outside the protobuf set (0, 1, 2, 5)
    #[error("unsupported wire type {0}")]
    BadWireType(u32),

    /// Known field carried the wrong wire type
    #[error("field {field} has unexpected wire type {wire_type}")]
    UnexpectedWireType { field: u32, wire_type: u32 },

    /// Envelope discriminant matches no known message
    #[error("unknown message id {0}")]
    UnknownMessageId(u32),

    /// Envelope discriminant is known but invalid for this direction
    #[error("message `{0}` is not valid in this direction")]
    WrongDirection(&'static str),

    /// Enum field carried a code outside the closed table
    #[error("unknown code {code} for {field}")]
    UnknownEnumCode { field: &'static str, code: u32 },
}

/// Errors that can occur while projecting a response into a status view
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// The response was not a status snapshot
    #[error("expected `get_status_response`, got `{got}`")]
    UnexpectedResponseType { got: &'static str },
}
