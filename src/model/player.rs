//! Player descriptor

/// One of the two competing players (strategies), not an individual unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    /// True for the player this client controls.
    pub me: bool,
    pub name: Option<String>,
    pub goal_count: i32,
    pub strategy_crashed: bool,
    pub net_top: f64,
    pub net_left: f64,
    pub net_bottom: f64,
    pub net_right: f64,
    /// X coordinate of the goal mouth, on the defended side.
    pub net_front: f64,
    pub net_back: f64,
    pub just_scored_goal: bool,
    pub just_missed_goal: bool,
}
