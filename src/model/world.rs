//! World snapshot
//!
//! The full arena state for one tick. Each snapshot completely replaces
//! the previous one; nothing is diffed or carried over.

use super::hockeyist::Hockeyist;
use super::player::Player;
use super::puck::Puck;

/// Arena state for one tick.
///
/// The arrays distinguish "absent" (outer `None`, a -1 count on the wire)
/// from "present but empty", and individual slots may be absent too.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub tick: i32,
    pub tick_count: i32,
    pub width: f64,
    pub height: f64,
    pub players: Option<Vec<Option<Player>>>,
    pub hockeyists: Option<Vec<Option<Hockeyist>>>,
    pub puck: Option<Puck>,
}

impl World {
    /// The player this client controls, if present in the snapshot.
    pub fn my_player(&self) -> Option<&Player> {
        self.players
            .as_deref()?
            .iter()
            .flatten()
            .find(|player| player.me)
    }

    /// The opposing player, if present in the snapshot.
    pub fn opponent_player(&self) -> Option<&Player> {
        self.players
            .as_deref()?
            .iter()
            .flatten()
            .find(|player| !player.me)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: i64, me: bool) -> Player {
        Player {
            id,
            me,
            name: None,
            goal_count: 0,
            strategy_crashed: false,
            net_top: 0.0,
            net_left: 0.0,
            net_bottom: 0.0,
            net_right: 0.0,
            net_front: 0.0,
            net_back: 0.0,
            just_scored_goal: false,
            just_missed_goal: false,
        }
    }

    #[test]
    fn test_player_lookup_skips_absent_slots() {
        let world = World {
            tick: 0,
            tick_count: 18000,
            width: 1200.0,
            height: 800.0,
            players: Some(vec![None, Some(player(7, false)), Some(player(8, true))]),
            hockeyists: Some(Vec::new()),
            puck: None,
        };

        assert_eq!(world.my_player().map(|p| p.id), Some(8));
        assert_eq!(world.opponent_player().map(|p| p.id), Some(7));
    }

    #[test]
    fn test_player_lookup_with_absent_array() {
        let world = World {
            tick: 0,
            tick_count: 0,
            width: 0.0,
            height: 0.0,
            players: None,
            hockeyists: None,
            puck: None,
        };

        assert!(world.my_player().is_none());
    }
}
