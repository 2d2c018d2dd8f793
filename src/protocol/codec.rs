//! Primitive wire codec
//!
//! Reads and writes the scalar building blocks of the protocol: fixed
//! little-endian integers, bit-exact doubles, single-byte booleans and
//! enums, and length-prefixed UTF-8 strings. Nothing here knows about
//! message shapes; that lives in the entity codec.

use bytes::{BufMut, BytesMut};
use std::io;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Byte that encodes "no value" for a nullable enum field.
pub const NONE_ORDINAL: u8 = 0xFF;

/// Codec errors
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Stream closed before {0} bytes could be read")]
    Truncated(usize),

    #[error("Invalid UTF-8 in string payload: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Unknown ordinal {value} for {enum_name}")]
    UnknownEnum { enum_name: &'static str, value: u8 },
}

pub type CodecResult<T> = Result<T, CodecError>;

/// An enumeration with a fixed position on the wire.
///
/// The byte on the wire is the index into `ORDER`. The same table serves
/// encode and decode, so the two directions cannot drift apart. Every
/// variant must appear in `ORDER` exactly once.
pub trait WireEnum: Copy + PartialEq + Sized + 'static {
    /// Canonical declared order of the enumeration.
    const ORDER: &'static [Self];

    /// Name used in decode errors.
    const NAME: &'static str;

    fn ordinal(self) -> u8 {
        Self::ORDER
            .iter()
            .position(|v| *v == self)
            .expect("enum value missing from ORDER") as u8
    }

    fn from_ordinal(byte: u8) -> Option<Self> {
        Self::ORDER.get(byte as usize).copied()
    }
}

/// Decodes primitives from a byte stream.
///
/// Every read blocks until its exact byte count has arrived; a peer close
/// partway through surfaces as [`CodecError::Truncated`].
pub struct WireReader<R> {
    inner: R,
}

impl<R: AsyncRead + Unpin> WireReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    async fn fill(&mut self, buf: &mut [u8]) -> CodecResult<()> {
        let wanted = buf.len();
        self.inner.read_exact(buf).await.map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                CodecError::Truncated(wanted)
            } else {
                CodecError::Io(e)
            }
        })?;
        Ok(())
    }

    pub async fn read_byte(&mut self) -> CodecResult<u8> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf).await?;
        Ok(buf[0])
    }

    pub async fn read_i32(&mut self) -> CodecResult<i32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf).await?;
        Ok(i32::from_le_bytes(buf))
    }

    pub async fn read_i64(&mut self) -> CodecResult<i64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf).await?;
        Ok(i64::from_le_bytes(buf))
    }

    /// Reinterprets the 8 bytes as an IEEE-754 double, with no rounding.
    pub async fn read_f64(&mut self) -> CodecResult<f64> {
        Ok(f64::from_bits(self.read_i64().await? as u64))
    }

    /// Any non-zero byte decodes to true.
    pub async fn read_bool(&mut self) -> CodecResult<bool> {
        Ok(self.read_byte().await? != 0)
    }

    /// Reads a required enum value; 0xFF or an out-of-range ordinal is fatal.
    pub async fn read_enum<E: WireEnum>(&mut self) -> CodecResult<E> {
        let byte = self.read_byte().await?;
        E::from_ordinal(byte).ok_or(CodecError::UnknownEnum {
            enum_name: E::NAME,
            value: byte,
        })
    }

    /// Reads a nullable enum value; 0xFF decodes to `None`.
    pub async fn read_opt_enum<E: WireEnum>(&mut self) -> CodecResult<Option<E>> {
        let byte = self.read_byte().await?;
        if byte == NONE_ORDINAL {
            return Ok(None);
        }
        E::from_ordinal(byte)
            .map(Some)
            .ok_or(CodecError::UnknownEnum {
                enum_name: E::NAME,
                value: byte,
            })
    }

    /// Reads a length-prefixed UTF-8 string; length -1 decodes to `None`.
    pub async fn read_string(&mut self) -> CodecResult<Option<String>> {
        let length = self.read_i32().await?;
        if length < 0 {
            return Ok(None);
        }
        let mut buf = vec![0u8; length as usize];
        self.fill(&mut buf).await?;
        Ok(Some(String::from_utf8(buf)?))
    }
}

/// Encodes primitives into an in-memory buffer.
///
/// Nothing is sent from here; the connection hands the finished buffer to
/// the kernel in a single write per frame.
pub struct WireWriter {
    buf: BytesMut,
}

impl WireWriter {
    pub fn new() -> Self {
        Self {
            buf: BytesMut::with_capacity(4096),
        }
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn put_i32(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    pub fn put_i64(&mut self, value: i64) {
        self.buf.put_i64_le(value);
    }

    /// Emits the 64-bit pattern of the value, preserving every bit.
    pub fn put_f64(&mut self, value: f64) {
        self.buf.put_i64_le(value.to_bits() as i64);
    }

    /// Always emits canonical 0 or 1.
    pub fn put_bool(&mut self, value: bool) {
        self.buf.put_u8(u8::from(value));
    }

    pub fn put_enum<E: WireEnum>(&mut self, value: E) {
        self.buf.put_u8(value.ordinal());
    }

    pub fn put_opt_enum<E: WireEnum>(&mut self, value: Option<E>) {
        match value {
            Some(v) => self.put_enum(v),
            None => self.buf.put_u8(NONE_ORDINAL),
        }
    }

    /// Emits a signed length prefix and the UTF-8 bytes; `None` becomes -1.
    pub fn put_string(&mut self, value: Option<&str>) {
        match value {
            Some(s) => {
                self.put_i32(s.len() as i32);
                self.buf.put_slice(s.as_bytes());
            }
            None => self.put_i32(-1),
        }
    }
}

impl Default for WireWriter {
    fn default() -> Self {
        Self::new()
    }
}
