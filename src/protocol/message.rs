//! Frame tags
//!
//! Every frame on the wire starts with a single tag byte identifying the
//! message that follows.

use super::codec::WireEnum;

/// Frame tags in their declared wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Unknown,
    GameOver,
    AuthenticationToken,
    TeamSize,
    ProtocolVersion,
    GameContext,
    PlayerContext,
    Moves,
}

impl WireEnum for MessageType {
    const ORDER: &'static [Self] = &[
        MessageType::Unknown,
        MessageType::GameOver,
        MessageType::AuthenticationToken,
        MessageType::TeamSize,
        MessageType::ProtocolVersion,
        MessageType::GameContext,
        MessageType::PlayerContext,
        MessageType::Moves,
    ];
    const NAME: &'static str = "MessageType";
}
