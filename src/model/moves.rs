//! Move command
//!
//! One move per controlled hockeyist per tick. A strategy edits the fields
//! it cares about; everything else keeps its default.

use super::hockeyist::Hockeyist;

/// Actions a hockeyist can take, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    None,
    TakePuck,
    Swing,
    Strike,
    CancelStrike,
    Pass,
    Substitute,
}

/// Per-unit command for one tick.
///
/// `pass_power` and `pass_angle` only reach the wire when `action` is
/// [`ActionType::Pass`]; `teammate_index` only when it is
/// [`ActionType::Substitute`].
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    /// Relative acceleration, -1.0 to 1.0.
    pub speed_up: f64,
    /// Turn angle in radians relative to the current direction.
    pub turn: f64,
    pub action: ActionType,
    /// Relative pass strength, 0.0 to 1.0.
    pub pass_power: f64,
    /// Pass direction in radians relative to the current direction.
    pub pass_angle: f64,
    /// Zero-based index of the hockeyist to substitute in; -1 = unset.
    pub teammate_index: i32,
}

impl Default for Move {
    fn default() -> Self {
        Self {
            speed_up: 0.0,
            turn: 0.0,
            action: ActionType::None,
            pass_power: 1.0,
            pass_angle: 0.0,
            teammate_index: -1,
        }
    }
}

impl Move {
    /// Aims a pass at the given unit at full power.
    pub fn pass_to(&mut self, me: &Hockeyist, target: &Hockeyist) {
        self.action = ActionType::Pass;
        self.pass_power = 1.0;
        self.pass_angle = me.angle_to(target.x, target.y);
    }
}
