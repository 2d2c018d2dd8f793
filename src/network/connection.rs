//! Connection handling
//!
//! Owns the TCP stream and enforces the frame discipline: every outbound
//! message is buffered in full and handed to the kernel in exactly one
//! write followed by a flush, and inbound reads block until their exact
//! byte count has arrived.

use std::io;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;

use crate::protocol::{CodecError, MessageType, WireReader, WireWriter};

/// Connection errors
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

pub type ConnectionResult<T> = Result<T, ConnectionError>;

/// A live connection to the match server.
pub struct Connection {
    remote_addr: SocketAddr,
    reader: WireReader<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
    out: WireWriter,
    closed: bool,
}

impl Connection {
    /// Connect to the match server. The server expects small frames at a
    /// per-tick cadence, so Nagle's algorithm stays off.
    pub async fn open(host: &str, port: u16) -> ConnectionResult<Self> {
        let remote_addr = super::resolve_host(host, port).await?;
        let stream = TcpStream::connect(remote_addr).await?;
        stream.set_nodelay(true)?;

        let (read_half, write_half) = stream.into_split();

        tracing::debug!("Connected to {}", remote_addr);

        Ok(Self {
            remote_addr,
            reader: WireReader::new(BufReader::new(read_half)),
            writer: write_half,
            out: WireWriter::new(),
            closed: false,
        })
    }

    /// Get the remote address
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    /// The inbound primitive reader.
    pub fn reader(&mut self) -> &mut WireReader<BufReader<OwnedReadHalf>> {
        &mut self.reader
    }

    /// Build and send one frame.
    ///
    /// The closure fills the payload behind the tag byte; the finished
    /// frame then reaches the kernel in a single write. Frames are never
    /// split across writes and never batched together.
    pub async fn send_frame<F>(&mut self, tag: MessageType, build: F) -> ConnectionResult<()>
    where
        F: FnOnce(&mut WireWriter),
    {
        self.out.clear();
        self.out.put_enum(tag);
        build(&mut self.out);

        self.writer.write_all(self.out.as_bytes()).await?;
        self.writer.flush().await?;

        tracing::trace!("Sent {:?} frame, {} bytes", tag, self.out.len());
        self.out.clear();
        Ok(())
    }

    /// Release the connection. Safe to call more than once; a failed
    /// shutdown is logged, not propagated, since the session is over
    /// either way and dropping the halves releases the descriptor.
    pub async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        if let Err(e) = self.writer.shutdown().await {
            tracing::debug!("Shutdown of {} failed: {}", self.remote_addr, e);
        }
    }
}
