//! Match configuration
//!
//! Received once right after the handshake and immutable for the rest of
//! the match. The field order below is the wire order; the entity codec
//! decodes these positionally.

/// Tuning parameters of the current match.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub random_seed: i64,
    pub tick_count: i32,

    pub world_width: f64,
    pub world_height: f64,
    pub goal_net_top: f64,
    pub goal_net_width: f64,
    pub goal_net_height: f64,
    pub rink_top: f64,
    pub rink_left: f64,
    pub rink_bottom: f64,
    pub rink_right: f64,

    pub after_goal_state_tick_count: i32,
    pub overtime_tick_count: i32,
    pub default_action_cooldown_ticks: i32,
    pub swing_action_cooldown_ticks: i32,
    pub cancel_strike_action_cooldown_ticks: i32,
    pub action_cooldown_ticks_after_losing_puck: i32,

    pub stick_length: f64,
    pub stick_sector: f64,
    pub pass_sector: f64,

    pub hockeyist_attribute_base_value: i32,

    pub min_action_chance: f64,
    pub max_action_chance: f64,
    pub strike_angle_deviation: f64,
    pub pass_angle_deviation: f64,
    pub pick_up_puck_base_chance: f64,
    pub take_puck_away_base_chance: f64,

    pub max_effective_swing_ticks: i32,

    pub strike_power_base_factor: f64,
    pub strike_power_growth_factor: f64,
    pub strike_puck_base_chance: f64,
    pub knockdown_chance_factor: f64,
    pub knockdown_ticks_factor: f64,
    pub max_speed_to_allow_substitute: f64,
    pub substitution_area_height: f64,
    pub pass_power_factor: f64,
    pub hockeyist_max_stamina: f64,
    pub active_hockeyist_stamina_growth_per_tick: f64,
    pub resting_hockeyist_stamina_growth_per_tick: f64,
    pub zero_stamina_hockeyist_effectiveness_factor: f64,
    pub speed_up_stamina_cost_factor: f64,
    pub turn_stamina_cost_factor: f64,
    pub take_puck_stamina_cost: f64,
    pub swing_stamina_cost: f64,
    pub strike_stamina_base_cost: f64,
    pub strike_stamina_cost_growth_factor: f64,
    pub cancel_strike_stamina_cost: f64,
    pub pass_stamina_cost: f64,
    pub goalie_max_speed: f64,
    pub hockeyist_max_speed: f64,
    pub struck_hockeyist_initial_speed_factor: f64,
    pub hockeyist_speed_up_factor: f64,
    pub hockeyist_speed_down_factor: f64,
    pub hockeyist_turn_angle_factor: f64,

    pub versatile_hockeyist_strength: i32,
    pub versatile_hockeyist_endurance: i32,
    pub versatile_hockeyist_dexterity: i32,
    pub versatile_hockeyist_agility: i32,
    pub forward_hockeyist_strength: i32,
    pub forward_hockeyist_endurance: i32,
    pub forward_hockeyist_dexterity: i32,
    pub forward_hockeyist_agility: i32,
    pub defenceman_hockeyist_strength: i32,
    pub defenceman_hockeyist_endurance: i32,
    pub defenceman_hockeyist_dexterity: i32,
    pub defenceman_hockeyist_agility: i32,
    pub min_random_hockeyist_parameter: i32,
    pub max_random_hockeyist_parameter: i32,

    pub struck_puck_initial_speed_factor: f64,
    pub puck_binding_range: f64,
}
