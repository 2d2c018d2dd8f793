//! Per-tick player context

use super::hockeyist::Hockeyist;
use super::world::World;

/// Everything the server hands this client for one tick: its own roster
/// plus the world snapshot. Built fresh each tick and discarded after the
/// moves are sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerContext {
    pub hockeyists: Option<Vec<Option<Hockeyist>>>,
    pub world: Option<World>,
}
