//! Strategy layer
//!
//! The decision seam between the protocol engine and whatever plays the
//! match. The engine hands each controlled unit to a strategy once per
//! tick; the strategy's only output channel is the move it was given.

use crate::model::{ActionType, Game, Hockeyist, Move, World};

/// Per-unit decision maker.
///
/// Called once per controlled hockeyist per tick with that tick's
/// immutable snapshot. Implementations may edit the supplied move and
/// nothing else: no I/O, no shared state with other units.
pub trait Strategy: Send {
    fn act(&mut self, me: &Hockeyist, world: &World, game: &Game, mv: &mut Move);
}

/// Placeholder strategy: back up, spin around, and swing.
///
/// Useless at hockey, but it exercises every outbound field and makes a
/// fresh checkout playable against a local server out of the box.
pub struct BaselineStrategy;

impl Strategy for BaselineStrategy {
    fn act(&mut self, _me: &Hockeyist, _world: &World, _game: &Game, mv: &mut Move) {
        mv.speed_up = -1.0;
        mv.turn = std::f64::consts::PI;
        mv.action = ActionType::Strike;
    }
}
