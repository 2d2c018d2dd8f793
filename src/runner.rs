//! Match runner
//!
//! Drives a full session: handshake, then the per-tick exchange until the
//! server ends the match. The whole session is strictly sequential on one
//! task: decode, decide, encode, flush, and only then read the next tick.

use crate::model::Move;
use crate::network::{ClientResult, GameClient};
use crate::strategy::Strategy;

/// Runs one match session over an established client.
pub struct Runner {
    client: GameClient,
    token: String,
}

impl Runner {
    pub fn new(client: GameClient, token: String) -> Self {
        Self { client, token }
    }

    /// Runs the session to completion. `new_strategy` is called once per
    /// roster slot before the first tick; each strategy sticks with its
    /// slot for the whole match and may keep state across ticks.
    ///
    /// The connection is released on every exit path, fault or not,
    /// before the result is returned.
    pub async fn run<F>(mut self, new_strategy: F) -> ClientResult<()>
    where
        F: FnMut() -> Box<dyn Strategy>,
    {
        let result = self.exchange(new_strategy).await;
        self.client.close().await;
        result
    }

    async fn exchange<F>(&mut self, mut new_strategy: F) -> ClientResult<()>
    where
        F: FnMut() -> Box<dyn Strategy>,
    {
        self.client.write_token(&self.token).await?;

        let team_size = self.client.read_team_size().await?;
        tracing::info!("Team size: {}", team_size);

        self.client.write_protocol_version().await?;

        let game = self.client.read_game_context().await?;
        tracing::info!(
            "Match configured: {} ticks, seed {}",
            game.tick_count,
            game.random_seed
        );

        let mut strategies: Vec<Box<dyn Strategy>> =
            (0..team_size).map(|_| new_strategy()).collect();

        while let Some(context) = self.client.read_player_context().await? {
            let Some(roster) = context.hockeyists else {
                // Some servers withdraw the roster instead of sending an
                // explicit game-over frame; both end the match.
                tracing::info!("Roster withdrawn, match over");
                break;
            };

            if roster.len() != team_size as usize {
                tracing::info!(
                    "Roster size {} differs from negotiated {}, match over",
                    roster.len(),
                    team_size
                );
                break;
            }

            let Some(world) = context.world else {
                tracing::info!("World snapshot withdrawn, match over");
                break;
            };

            if world.tick % 1000 == 0 {
                tracing::debug!("Tick {}/{}", world.tick, world.tick_count);
            }

            let mut moves = Vec::with_capacity(roster.len());
            for slot in &roster {
                let mut mv = Move::default();
                if let Some(unit) = slot {
                    // Dispatch by the unit's own index: the roster array
                    // order is not guaranteed stable across ticks.
                    if let Some(strategy) =
                        strategies.get_mut(unit.teammate_index.max(0) as usize)
                    {
                        strategy.act(unit, &world, &game, &mut mv);
                    }
                }
                moves.push(mv);
            }

            self.client.write_moves(&moves).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ActionType;
    use crate::protocol::entities::testutil;
    use crate::protocol::{CodecError, MessageType, WireEnum, WireReader, WireWriter};
    use crate::strategy::BaselineStrategy;
    use tokio::io::AsyncWriteExt;
    use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
    use tokio::net::TcpListener;

    async fn send(write_half: &mut OwnedWriteHalf, w: &WireWriter) {
        write_half.write_all(w.as_bytes()).await.unwrap();
        write_half.flush().await.unwrap();
    }

    /// Plays the server's side of one three-unit match: handshake, one
    /// tick, game over. Panics on any deviation from the expected script.
    async fn scripted_peer(listener: TcpListener, team_size: i32) {
        let (socket, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = socket.into_split();
        let mut r: WireReader<OwnedReadHalf> = WireReader::new(read_half);

        // Exactly one authentication frame.
        assert_eq!(
            r.read_enum::<MessageType>().await.unwrap(),
            MessageType::AuthenticationToken
        );
        assert_eq!(
            r.read_string().await.unwrap().as_deref(),
            Some("0000000000000000")
        );

        let mut w = WireWriter::new();
        w.put_enum(MessageType::TeamSize);
        w.put_i32(team_size);
        send(&mut write_half, &w).await;

        // Exactly one protocol version frame.
        assert_eq!(
            r.read_enum::<MessageType>().await.unwrap(),
            MessageType::ProtocolVersion
        );
        assert_eq!(r.read_i32().await.unwrap(), 1);

        let game = testutil::sample_game();
        w.clear();
        w.put_enum(MessageType::GameContext);
        w.put_bool(true);
        testutil::write_game(&mut w, &game);
        send(&mut write_half, &w).await;

        // One tick: roster of team_size units plus the world snapshot.
        w.clear();
        w.put_enum(MessageType::PlayerContext);
        w.put_bool(true);
        w.put_i32(team_size);
        for index in 0..team_size {
            testutil::write_hockeyist(&mut w, &testutil::sample_hockeyist(index));
        }
        w.put_bool(true); // world
        w.put_i32(1);
        w.put_i32(game.tick_count);
        w.put_f64(game.world_width);
        w.put_f64(game.world_height);
        w.put_i32(-1); // players
        w.put_i32(team_size);
        for index in 0..team_size {
            testutil::write_hockeyist(&mut w, &testutil::sample_hockeyist(index));
        }
        testutil::write_puck(&mut w, &testutil::sample_puck());
        send(&mut write_half, &w).await;

        // Exactly one moves frame with one present move per unit.
        assert_eq!(
            r.read_enum::<MessageType>().await.unwrap(),
            MessageType::Moves
        );
        assert_eq!(r.read_i32().await.unwrap(), team_size);
        for _ in 0..team_size {
            assert!(r.read_bool().await.unwrap());
            assert_eq!(r.read_f64().await.unwrap(), -1.0);
            assert_eq!(r.read_f64().await.unwrap(), std::f64::consts::PI);
            assert_eq!(
                r.read_byte().await.unwrap(),
                ActionType::Strike.ordinal()
            );
        }

        w.clear();
        w.put_enum(MessageType::GameOver);
        send(&mut write_half, &w).await;

        // The client must release the connection without another write.
        match r.read_byte().await {
            Err(CodecError::Truncated(_)) => {}
            other => panic!("expected clean close, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_full_session_against_scripted_peer() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let peer = tokio::spawn(scripted_peer(listener, 3));

        let client = GameClient::connect("127.0.0.1", addr.port()).await.unwrap();
        let runner = Runner::new(client, "0000000000000000".to_string());
        runner.run(|| Box::new(BaselineStrategy)).await.unwrap();

        peer.await.unwrap();
    }

    #[tokio::test]
    async fn test_roster_size_mismatch_ends_match_cleanly() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let peer = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let (read_half, mut write_half) = socket.into_split();
            let mut r: WireReader<OwnedReadHalf> = WireReader::new(read_half);

            assert_eq!(
                r.read_enum::<MessageType>().await.unwrap(),
                MessageType::AuthenticationToken
            );
            r.read_string().await.unwrap();

            let mut w = WireWriter::new();
            w.put_enum(MessageType::TeamSize);
            w.put_i32(3);
            send(&mut write_half, &w).await;

            assert_eq!(
                r.read_enum::<MessageType>().await.unwrap(),
                MessageType::ProtocolVersion
            );
            r.read_i32().await.unwrap();

            w.clear();
            w.put_enum(MessageType::GameContext);
            w.put_bool(true);
            testutil::write_game(&mut w, &testutil::sample_game());
            send(&mut write_half, &w).await;

            // Two units where three were negotiated.
            w.clear();
            w.put_enum(MessageType::PlayerContext);
            w.put_bool(true);
            w.put_i32(2);
            for index in 0..2 {
                testutil::write_hockeyist(&mut w, &testutil::sample_hockeyist(index));
            }
            w.put_bool(false); // world
            send(&mut write_half, &w).await;

            // No moves frame follows; the client just hangs up.
            match r.read_byte().await {
                Err(CodecError::Truncated(_)) => {}
                other => panic!("expected clean close, got {:?}", other),
            }
        });

        let client = GameClient::connect("127.0.0.1", addr.port()).await.unwrap();
        let runner = Runner::new(client, "t".to_string());
        runner.run(|| Box::new(BaselineStrategy)).await.unwrap();

        peer.await.unwrap();
    }
}
