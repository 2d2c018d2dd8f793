//! Match server client
//!
//! One method per protocol operation, in the order the protocol allows
//! them. The server dictates pacing: each read blocks until the peer
//! speaks, and the peer may end the match at any point between ticks.

use thiserror::Error;

use super::connection::{Connection, ConnectionError};
use crate::model::{Game, Move, PlayerContext};
use crate::protocol::{entities, CodecError, MessageType, PROTOCOL_VERSION};

/// Client errors
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Received wrong message: expected {expected:?}, actual {actual:?}")]
    UnexpectedMessage {
        expected: MessageType,
        actual: MessageType,
    },

    #[error("Server sent no game context; the match cannot start")]
    MissingGameContext,
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Session progress, in protocol order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Connected, token not yet sent.
    Authenticating,
    /// Token sent, waiting for the team size.
    Negotiating,
    /// Protocol version sent, waiting for the configuration.
    AwaitingConfiguration,
    /// Configuration received; ticks may begin.
    Ready,
    /// Inside the per-tick exchange loop.
    TickExchange,
    /// Match over or connection released; no further I/O.
    Terminated,
}

/// Client for the match server protocol.
pub struct GameClient {
    conn: Connection,
    state: SessionState,
}

impl GameClient {
    /// Connect to the match server.
    pub async fn connect(host: &str, port: u16) -> ClientResult<Self> {
        let conn = Connection::open(host, port).await?;
        Ok(Self {
            conn,
            state: SessionState::Authenticating,
        })
    }

    /// Get the current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Send the authentication token.
    pub async fn write_token(&mut self, token: &str) -> ClientResult<()> {
        self.conn
            .send_frame(MessageType::AuthenticationToken, |w| {
                w.put_string(Some(token))
            })
            .await?;
        self.set_state(SessionState::Negotiating);
        Ok(())
    }

    /// Receive the roster size this client will control.
    pub async fn read_team_size(&mut self) -> ClientResult<i32> {
        self.expect_tag(MessageType::TeamSize).await?;
        Ok(self.conn.reader().read_i32().await?)
    }

    /// Announce the protocol version this client speaks.
    pub async fn write_protocol_version(&mut self) -> ClientResult<()> {
        self.conn
            .send_frame(MessageType::ProtocolVersion, |w| w.put_i32(PROTOCOL_VERSION))
            .await?;
        self.set_state(SessionState::AwaitingConfiguration);
        Ok(())
    }

    /// Receive the match configuration. The server sending an absent
    /// configuration means no valid match can proceed.
    pub async fn read_game_context(&mut self) -> ClientResult<Game> {
        self.expect_tag(MessageType::GameContext).await?;

        if !self.conn.reader().read_bool().await? {
            return Err(ClientError::MissingGameContext);
        }

        let game = entities::read_game(self.conn.reader()).await?;
        self.set_state(SessionState::Ready);
        Ok(game)
    }

    /// Receive the next tick's context. Returns `None` when the match is
    /// over: either an explicit game-over frame, or a player context with
    /// no payload, which some servers send instead.
    pub async fn read_player_context(&mut self) -> ClientResult<Option<PlayerContext>> {
        let tag = self.conn.reader().read_enum::<MessageType>().await?;
        if tag == MessageType::GameOver {
            tracing::info!("Game over");
            self.set_state(SessionState::Terminated);
            return Ok(None);
        }

        Self::ensure_tag(MessageType::PlayerContext, tag)?;

        if !self.conn.reader().read_bool().await? {
            tracing::info!("Empty player context, treating as game over");
            self.set_state(SessionState::Terminated);
            return Ok(None);
        }

        let context = entities::read_player_context(self.conn.reader()).await?;
        self.set_state(SessionState::TickExchange);
        Ok(Some(context))
    }

    /// Send this tick's moves, one per controlled unit, in roster order.
    pub async fn write_moves(&mut self, moves: &[Move]) -> ClientResult<()> {
        self.conn
            .send_frame(MessageType::Moves, |w| {
                entities::write_moves(w, Some(moves))
            })
            .await?;
        Ok(())
    }

    /// Release the connection; no further I/O happens on this session.
    pub async fn close(&mut self) {
        self.conn.close().await;
        self.set_state(SessionState::Terminated);
    }

    async fn expect_tag(&mut self, expected: MessageType) -> ClientResult<()> {
        let actual = self.conn.reader().read_enum::<MessageType>().await?;
        Self::ensure_tag(expected, actual)
    }

    fn ensure_tag(expected: MessageType, actual: MessageType) -> ClientResult<()> {
        if actual != expected {
            return Err(ClientError::UnexpectedMessage { expected, actual });
        }
        Ok(())
    }

    fn set_state(&mut self, next: SessionState) {
        if self.state != next {
            tracing::debug!("Session state: {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}
