//! Protocol module - wire format of the match server exchange
//!
//! The protocol is a little-endian byte stream. Each frame is one tag byte
//! followed by a type-specific payload built from:
//! - 4/8-byte signed little-endian integers
//! - doubles carried as their 64-bit IEEE-754 bit pattern
//! - single-byte booleans and fixed-ordinal enums (0xFF = no value)
//! - strings with a signed 4-byte length prefix (-1 = null) and UTF-8 bytes
//!
//! Optional composite records are preceded by a one-byte presence flag;
//! arrays by a signed count where -1 means the array itself is absent.

pub mod codec;
pub mod entities;
mod message;

pub use codec::{CodecError, CodecResult, WireEnum, WireReader, WireWriter};
pub use message::MessageType;

/// Protocol version sent during the handshake.
pub const PROTOCOL_VERSION: i32 = 1;

/// Default match server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default match server port.
pub const DEFAULT_PORT: u16 = 31001;

/// Placeholder token accepted by local servers that skip authentication.
pub const DEFAULT_TOKEN: &str = "0000000000000000";
