//! Entity codec
//!
//! Decodes the domain records from the stream and encodes move commands,
//! composing the primitives in each record's declared field order. That
//! order is the wire contract: it must match the server exactly, so every
//! function here reads or writes fields positionally and nothing else.

use tokio::io::AsyncRead;

use super::codec::{CodecResult, WireEnum, WireReader, WireWriter};
use crate::model::{
    ActionType, Game, Hockeyist, HockeyistState, HockeyistType, Move, Player, PlayerContext,
    Puck, World,
};

impl WireEnum for ActionType {
    const ORDER: &'static [Self] = &[
        ActionType::None,
        ActionType::TakePuck,
        ActionType::Swing,
        ActionType::Strike,
        ActionType::CancelStrike,
        ActionType::Pass,
        ActionType::Substitute,
    ];
    const NAME: &'static str = "ActionType";
}

impl WireEnum for HockeyistType {
    const ORDER: &'static [Self] = &[
        HockeyistType::Goalie,
        HockeyistType::Versatile,
        HockeyistType::Forward,
        HockeyistType::Defenceman,
        HockeyistType::Random,
    ];
    const NAME: &'static str = "HockeyistType";
}

impl WireEnum for HockeyistState {
    const ORDER: &'static [Self] = &[
        HockeyistState::Active,
        HockeyistState::Swinging,
        HockeyistState::KnockedDown,
        HockeyistState::Resting,
    ];
    const NAME: &'static str = "HockeyistState";
}

/// Decodes the match configuration. The caller has already consumed the
/// frame tag and the presence flag.
pub async fn read_game<R>(r: &mut WireReader<R>) -> CodecResult<Game>
where
    R: AsyncRead + Unpin,
{
    Ok(Game {
        random_seed: r.read_i64().await?,
        tick_count: r.read_i32().await?,

        world_width: r.read_f64().await?,
        world_height: r.read_f64().await?,
        goal_net_top: r.read_f64().await?,
        goal_net_width: r.read_f64().await?,
        goal_net_height: r.read_f64().await?,
        rink_top: r.read_f64().await?,
        rink_left: r.read_f64().await?,
        rink_bottom: r.read_f64().await?,
        rink_right: r.read_f64().await?,

        after_goal_state_tick_count: r.read_i32().await?,
        overtime_tick_count: r.read_i32().await?,
        default_action_cooldown_ticks: r.read_i32().await?,
        swing_action_cooldown_ticks: r.read_i32().await?,
        cancel_strike_action_cooldown_ticks: r.read_i32().await?,
        action_cooldown_ticks_after_losing_puck: r.read_i32().await?,

        stick_length: r.read_f64().await?,
        stick_sector: r.read_f64().await?,
        pass_sector: r.read_f64().await?,

        hockeyist_attribute_base_value: r.read_i32().await?,

        min_action_chance: r.read_f64().await?,
        max_action_chance: r.read_f64().await?,
        strike_angle_deviation: r.read_f64().await?,
        pass_angle_deviation: r.read_f64().await?,
        pick_up_puck_base_chance: r.read_f64().await?,
        take_puck_away_base_chance: r.read_f64().await?,

        max_effective_swing_ticks: r.read_i32().await?,

        strike_power_base_factor: r.read_f64().await?,
        strike_power_growth_factor: r.read_f64().await?,
        strike_puck_base_chance: r.read_f64().await?,
        knockdown_chance_factor: r.read_f64().await?,
        knockdown_ticks_factor: r.read_f64().await?,
        max_speed_to_allow_substitute: r.read_f64().await?,
        substitution_area_height: r.read_f64().await?,
        pass_power_factor: r.read_f64().await?,
        hockeyist_max_stamina: r.read_f64().await?,
        active_hockeyist_stamina_growth_per_tick: r.read_f64().await?,
        resting_hockeyist_stamina_growth_per_tick: r.read_f64().await?,
        zero_stamina_hockeyist_effectiveness_factor: r.read_f64().await?,
        speed_up_stamina_cost_factor: r.read_f64().await?,
        turn_stamina_cost_factor: r.read_f64().await?,
        take_puck_stamina_cost: r.read_f64().await?,
        swing_stamina_cost: r.read_f64().await?,
        strike_stamina_base_cost: r.read_f64().await?,
        strike_stamina_cost_growth_factor: r.read_f64().await?,
        cancel_strike_stamina_cost: r.read_f64().await?,
        pass_stamina_cost: r.read_f64().await?,
        goalie_max_speed: r.read_f64().await?,
        hockeyist_max_speed: r.read_f64().await?,
        struck_hockeyist_initial_speed_factor: r.read_f64().await?,
        hockeyist_speed_up_factor: r.read_f64().await?,
        hockeyist_speed_down_factor: r.read_f64().await?,
        hockeyist_turn_angle_factor: r.read_f64().await?,

        versatile_hockeyist_strength: r.read_i32().await?,
        versatile_hockeyist_endurance: r.read_i32().await?,
        versatile_hockeyist_dexterity: r.read_i32().await?,
        versatile_hockeyist_agility: r.read_i32().await?,
        forward_hockeyist_strength: r.read_i32().await?,
        forward_hockeyist_endurance: r.read_i32().await?,
        forward_hockeyist_dexterity: r.read_i32().await?,
        forward_hockeyist_agility: r.read_i32().await?,
        defenceman_hockeyist_strength: r.read_i32().await?,
        defenceman_hockeyist_endurance: r.read_i32().await?,
        defenceman_hockeyist_dexterity: r.read_i32().await?,
        defenceman_hockeyist_agility: r.read_i32().await?,
        min_random_hockeyist_parameter: r.read_i32().await?,
        max_random_hockeyist_parameter: r.read_i32().await?,

        struck_puck_initial_speed_factor: r.read_f64().await?,
        puck_binding_range: r.read_f64().await?,
    })
}

/// Decodes a player context payload: the caller's roster followed by the
/// world snapshot. Tag and presence flag already consumed.
pub async fn read_player_context<R>(r: &mut WireReader<R>) -> CodecResult<PlayerContext>
where
    R: AsyncRead + Unpin,
{
    Ok(PlayerContext {
        hockeyists: read_hockeyists(r).await?,
        world: read_world(r).await?,
    })
}

/// Decodes an optional world snapshot (presence flag included).
pub async fn read_world<R>(r: &mut WireReader<R>) -> CodecResult<Option<World>>
where
    R: AsyncRead + Unpin,
{
    if !r.read_bool().await? {
        return Ok(None);
    }

    Ok(Some(World {
        tick: r.read_i32().await?,
        tick_count: r.read_i32().await?,
        width: r.read_f64().await?,
        height: r.read_f64().await?,
        players: read_players(r).await?,
        hockeyists: read_hockeyists(r).await?,
        puck: read_puck(r).await?,
    }))
}

/// Decodes a player array. A -1 count means the array is absent; a present
/// array may still contain absent slots.
pub async fn read_players<R>(r: &mut WireReader<R>) -> CodecResult<Option<Vec<Option<Player>>>>
where
    R: AsyncRead + Unpin,
{
    let count = r.read_i32().await?;
    if count < 0 {
        return Ok(None);
    }

    let mut players = Vec::with_capacity(count as usize);
    for _ in 0..count {
        players.push(read_player(r).await?);
    }
    Ok(Some(players))
}

async fn read_player<R>(r: &mut WireReader<R>) -> CodecResult<Option<Player>>
where
    R: AsyncRead + Unpin,
{
    if !r.read_bool().await? {
        return Ok(None);
    }

    Ok(Some(Player {
        id: r.read_i64().await?,
        me: r.read_bool().await?,
        name: r.read_string().await?,
        goal_count: r.read_i32().await?,
        strategy_crashed: r.read_bool().await?,
        net_top: r.read_f64().await?,
        net_left: r.read_f64().await?,
        net_bottom: r.read_f64().await?,
        net_right: r.read_f64().await?,
        net_front: r.read_f64().await?,
        net_back: r.read_f64().await?,
        just_scored_goal: r.read_bool().await?,
        just_missed_goal: r.read_bool().await?,
    }))
}

/// Decodes a hockeyist array, with the same absent/empty/slot semantics as
/// [`read_players`].
pub async fn read_hockeyists<R>(
    r: &mut WireReader<R>,
) -> CodecResult<Option<Vec<Option<Hockeyist>>>>
where
    R: AsyncRead + Unpin,
{
    let count = r.read_i32().await?;
    if count < 0 {
        return Ok(None);
    }

    let mut hockeyists = Vec::with_capacity(count as usize);
    for _ in 0..count {
        hockeyists.push(read_hockeyist(r).await?);
    }
    Ok(Some(hockeyists))
}

async fn read_hockeyist<R>(r: &mut WireReader<R>) -> CodecResult<Option<Hockeyist>>
where
    R: AsyncRead + Unpin,
{
    if !r.read_bool().await? {
        return Ok(None);
    }

    Ok(Some(Hockeyist {
        id: r.read_i64().await?,
        player_id: r.read_i64().await?,
        teammate_index: r.read_i32().await?,
        mass: r.read_f64().await?,
        radius: r.read_f64().await?,
        x: r.read_f64().await?,
        y: r.read_f64().await?,
        speed_x: r.read_f64().await?,
        speed_y: r.read_f64().await?,
        angle: r.read_f64().await?,
        angular_speed: r.read_f64().await?,
        teammate: r.read_bool().await?,
        hockeyist_type: r.read_enum().await?,
        strength: r.read_i32().await?,
        endurance: r.read_i32().await?,
        dexterity: r.read_i32().await?,
        agility: r.read_i32().await?,
        stamina: r.read_f64().await?,
        state: r.read_enum().await?,
        original_position_index: r.read_i32().await?,
        remaining_knockdown_ticks: r.read_i32().await?,
        remaining_cooldown_ticks: r.read_i32().await?,
        swing_ticks: r.read_i32().await?,
        last_action: r.read_opt_enum().await?,
        last_action_tick: if r.read_bool().await? {
            Some(r.read_i32().await?)
        } else {
            None
        },
    }))
}

/// Decodes an optional puck (presence flag included).
pub async fn read_puck<R>(r: &mut WireReader<R>) -> CodecResult<Option<Puck>>
where
    R: AsyncRead + Unpin,
{
    if !r.read_bool().await? {
        return Ok(None);
    }

    Ok(Some(Puck {
        id: r.read_i64().await?,
        mass: r.read_f64().await?,
        radius: r.read_f64().await?,
        x: r.read_f64().await?,
        y: r.read_f64().await?,
        speed_x: r.read_f64().await?,
        speed_y: r.read_f64().await?,
        owner_hockeyist_id: r.read_i64().await?,
        owner_player_id: r.read_i64().await?,
    }))
}

/// Encodes a moves payload: a signed count (-1 for an absent array), then
/// each move behind its own presence flag.
pub fn write_moves(w: &mut WireWriter, moves: Option<&[Move]>) {
    let Some(moves) = moves else {
        w.put_i32(-1);
        return;
    };

    w.put_i32(moves.len() as i32);
    for mv in moves {
        write_move(w, mv);
    }
}

fn write_move(w: &mut WireWriter, mv: &Move) {
    w.put_bool(true);
    w.put_f64(mv.speed_up);
    w.put_f64(mv.turn);
    w.put_enum(mv.action);

    // Only the action's own payload follows; other fields never reach the wire.
    match mv.action {
        ActionType::Pass => {
            w.put_f64(mv.pass_power);
            w.put_f64(mv.pass_angle);
        }
        ActionType::Substitute => {
            w.put_i32(mv.teammate_index);
        }
        _ => {}
    }
}


#[cfg(test)]
mod tests {
    use super::testutil::*;
    use super::*;

    fn le64(v: f64) -> [u8; 8] {
        v.to_bits().to_le_bytes()
    }

    #[test]
    fn test_pass_move_layout() {
        let mv = Move {
            speed_up: 0.5,
            turn: -0.1,
            action: ActionType::Pass,
            pass_power: 0.7,
            pass_angle: -0.2,
            teammate_index: -1,
        };

        let mut w = WireWriter::new();
        write_moves(&mut w, Some(std::slice::from_ref(&mv)));

        let mut expected = Vec::new();
        expected.extend(1i32.to_le_bytes());
        expected.push(1);
        expected.extend(le64(0.5));
        expected.extend(le64(-0.1));
        expected.push(5);
        expected.extend(le64(0.7));
        expected.extend(le64(-0.2));
        assert_eq!(w.as_bytes(), &expected[..]);
    }

    #[test]
    fn test_substitute_move_layout() {
        let mv = Move {
            action: ActionType::Substitute,
            teammate_index: 2,
            ..Move::default()
        };

        let mut w = WireWriter::new();
        write_moves(&mut w, Some(std::slice::from_ref(&mv)));

        let mut expected = Vec::new();
        expected.extend(1i32.to_le_bytes());
        expected.push(1);
        expected.extend(le64(0.0));
        expected.extend(le64(0.0));
        expected.push(6);
        expected.extend(2i32.to_le_bytes());
        assert_eq!(w.as_bytes(), &expected[..]);
    }

    #[test]
    fn test_plain_move_has_no_trailing_payload() {
        let mv = Move {
            action: ActionType::Strike,
            // These must stay off the wire for a non-pass action.
            pass_power: 0.9,
            pass_angle: 0.3,
            ..Move::default()
        };

        let mut w = WireWriter::new();
        write_moves(&mut w, Some(std::slice::from_ref(&mv)));

        // count + presence + speed_up + turn + action byte
        assert_eq!(w.len(), 4 + 1 + 8 + 8 + 1);
        assert_eq!(w.as_bytes()[w.len() - 1], 3);
    }

    #[test]
    fn test_absent_and_empty_move_arrays_differ() {
        let mut absent = WireWriter::new();
        write_moves(&mut absent, None);
        assert_eq!(absent.as_bytes(), &(-1i32).to_le_bytes());

        let mut empty = WireWriter::new();
        write_moves(&mut empty, Some(&[]));
        assert_eq!(empty.as_bytes(), &0i32.to_le_bytes());
    }

    #[tokio::test]
    async fn test_absent_and_empty_player_arrays_differ() {
        let mut w = WireWriter::new();
        w.put_i32(-1);
        w.put_i32(0);

        let mut r = WireReader::new(w.as_bytes());
        assert_eq!(read_players(&mut r).await.unwrap(), None);
        assert_eq!(read_players(&mut r).await.unwrap(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_game_decodes_in_field_order() {
        let game = sample_game();

        let mut w = WireWriter::new();
        write_game(&mut w, &game);
        // 1 long, 23 ints, 46 doubles
        assert_eq!(w.len(), 8 + 23 * 4 + 46 * 8);

        let mut r = WireReader::new(w.as_bytes());
        let decoded = read_game(&mut r).await.unwrap();
        assert_eq!(decoded, game);
    }

    #[tokio::test]
    async fn test_hockeyist_roundtrip_with_nullable_fields() {
        let mut bare = sample_hockeyist(0);
        bare.last_action = None;
        bare.last_action_tick = None;

        let mut acted = sample_hockeyist(1);
        acted.last_action = Some(ActionType::Swing);
        acted.last_action_tick = Some(41);

        let mut w = WireWriter::new();
        w.put_i32(3);
        write_hockeyist(&mut w, &bare);
        w.put_bool(false); // absent slot
        write_hockeyist(&mut w, &acted);

        let mut r = WireReader::new(w.as_bytes());
        let decoded = read_hockeyists(&mut r).await.unwrap().unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0].as_ref(), Some(&bare));
        assert_eq!(decoded[1], None);
        assert_eq!(decoded[2].as_ref(), Some(&acted));
    }

    #[tokio::test]
    async fn test_world_without_puck() {
        let mut w = WireWriter::new();
        w.put_bool(true);
        w.put_i32(17);
        w.put_i32(18000);
        w.put_f64(1200.0);
        w.put_f64(800.0);
        w.put_i32(-1); // players absent
        w.put_i32(0); // hockeyists present, empty
        w.put_bool(false); // no puck

        let mut r = WireReader::new(w.as_bytes());
        let world = read_world(&mut r).await.unwrap().unwrap();
        assert_eq!(world.tick, 17);
        assert_eq!(world.players, None);
        assert_eq!(world.hockeyists, Some(Vec::new()));
        assert_eq!(world.puck, None);
    }

    #[tokio::test]
    async fn test_puck_roundtrip() {
        let puck = sample_puck();

        let mut w = WireWriter::new();
        write_puck(&mut w, &puck);
        w.put_bool(false);

        let mut r = WireReader::new(w.as_bytes());
        assert_eq!(read_puck(&mut r).await.unwrap().as_ref(), Some(&puck));
        assert_eq!(read_puck(&mut r).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_player_with_null_name() {
        let player = Player {
            id: 9,
            me: false,
            name: None,
            goal_count: 2,
            strategy_crashed: true,
            net_top: 312.0,
            net_left: 1100.0,
            net_bottom: 488.0,
            net_right: 1130.0,
            net_front: 1100.0,
            net_back: 1130.0,
            just_scored_goal: false,
            just_missed_goal: true,
        };

        let mut w = WireWriter::new();
        w.put_i32(1);
        write_player(&mut w, &player);

        let mut r = WireReader::new(w.as_bytes());
        let decoded = read_players(&mut r).await.unwrap().unwrap();
        assert_eq!(decoded[0].as_ref(), Some(&player));
    }
}
