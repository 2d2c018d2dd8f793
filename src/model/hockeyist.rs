//! Hockeyist state
//!
//! Dynamic per-unit state, decoded fresh every tick for both rosters.

use super::moves::ActionType;

/// Role of a hockeyist, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HockeyistType {
    Goalie,
    Versatile,
    Forward,
    Defenceman,
    Random,
}

/// Behavioral state of a hockeyist, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HockeyistState {
    Active,
    Swinging,
    KnockedDown,
    Resting,
}

/// One unit on the ice.
#[derive(Debug, Clone, PartialEq)]
pub struct Hockeyist {
    pub id: i64,
    pub player_id: i64,
    /// Zero-based index within the owning player's roster.
    pub teammate_index: i32,
    pub mass: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub angle: f64,
    pub angular_speed: f64,
    pub teammate: bool,
    pub hockeyist_type: HockeyistType,
    pub strength: i32,
    pub endurance: i32,
    pub dexterity: i32,
    pub agility: i32,
    pub stamina: f64,
    pub state: HockeyistState,
    pub original_position_index: i32,
    pub remaining_knockdown_ticks: i32,
    pub remaining_cooldown_ticks: i32,
    pub swing_ticks: i32,
    pub last_action: Option<ActionType>,
    /// Tick of the last action; absent until the unit has acted.
    pub last_action_tick: Option<i32>,
}

impl Hockeyist {
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        ((self.x - x).powi(2) + (self.y - y).powi(2)).sqrt()
    }

    /// Angle from the unit's current direction to the given point,
    /// normalized to (-PI, PI].
    pub fn angle_to(&self, x: f64, y: f64) -> f64 {
        let absolute = (y - self.y).atan2(x - self.x);
        let mut relative = absolute - self.angle;
        while relative > std::f64::consts::PI {
            relative -= 2.0 * std::f64::consts::PI;
        }
        while relative <= -std::f64::consts::PI {
            relative += 2.0 * std::f64::consts::PI;
        }
        relative
    }
}
