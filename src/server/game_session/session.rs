//! WebSocket session for one single-player game.
//!
//! Each connection gets its own actor owning the game state and the rng,
//! so every move runs its full pipeline (slide, merge, spawn, terminal
//! check) before the next command is looked at. The actor also enforces
//! the countdown: armed on the first move, expiry turns an unfinished run
//! into a loss. The engine itself never sees the clock.

use std::time::{Duration, Instant};

use actix::{Actor, ActorContext, AsyncContext, SpawnHandle, StreamHandler};
use actix_web::{Error, HttpRequest, HttpResponse, web};
use actix_web_actors::ws;
use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use uuid::Uuid;

use crate::config::game::{GRID_SIZE, INITIAL_TIME};
use crate::game::state::GameState;
use crate::game::types::{Direction, Phase};
use crate::server::game_session::messages::{ClientCommand, GameUpdate};
use crate::server::ws_error::ws_error_message;

pub struct GameSessionActor {
    pub session_id: Uuid,
    state: GameState,
    rng: Pcg32,
    countdown: Option<SpawnHandle>,
    started_at: Option<Instant>,
    time_taken: Option<u64>,
}

impl GameSessionActor {
    fn new(session_id: Uuid, state: GameState, rng: Pcg32) -> Self {
        GameSessionActor {
            session_id,
            state,
            rng,
            countdown: None,
            started_at: None,
            time_taken: None,
        }
    }

    fn time_left(&self) -> u64 {
        match self.started_at {
            Some(started) => INITIAL_TIME.saturating_sub(started.elapsed().as_secs()),
            None => INITIAL_TIME,
        }
    }

    fn push_update(&self, ctx: &mut ws::WebsocketContext<Self>) {
        let update = GameUpdate {
            state: self.state.clone(),
            time_left: self.time_left(),
            time_taken: self.time_taken,
        };
        match serde_json::to_string(&update) {
            Ok(text) => ctx.text(text),
            Err(_) => ctx.text(ws_error_message(
                "SERIALIZE_FAILED",
                "Failed to serialize game state",
                Some(&self.session_id.to_string()),
            )),
        }
    }

    /// Arm the countdown. Runs once, on the first move command.
    fn start_countdown(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        self.started_at = Some(Instant::now());
        let handle = ctx.run_later(Duration::from_secs(INITIAL_TIME), |act, ctx| {
            act.countdown = None;
            act.state.expire();
            info!(
                "[GameSession] {} timed out: score={}",
                act.session_id, act.state.score
            );
            act.push_update(ctx);
        });
        self.countdown = Some(handle);
    }

    fn handle_move(&mut self, direction: Direction, ctx: &mut ws::WebsocketContext<Self>) {
        if matches!(self.state.phase, Phase::Won | Phase::Lost) {
            ctx.text(ws_error_message(
                "GAME_FINISHED",
                "The game is over, restart to play again",
                Some(&self.session_id.to_string()),
            ));
            return;
        }

        // First input starts the clock, effective move or not.
        if self.started_at.is_none() {
            self.start_countdown(ctx);
        }

        let moved = self.state.apply_player_move(direction, &mut self.rng);
        debug!(
            "[GameSession] {} move {:?}: moved={} score={}",
            self.session_id, direction, moved, self.state.score
        );

        match self.state.phase {
            Phase::Won => {
                if let Some(handle) = self.countdown.take() {
                    ctx.cancel_future(handle);
                }
                let elapsed = self
                    .started_at
                    .map(|started| started.elapsed().as_secs())
                    .unwrap_or(0);
                self.time_taken = Some(elapsed.min(INITIAL_TIME));
                info!(
                    "[GameSession] {} won: score={} time_taken={}s",
                    self.session_id, self.state.score, elapsed
                );
            }
            Phase::Lost => {
                info!(
                    "[GameSession] {} locked out: score={}",
                    self.session_id, self.state.score
                );
            }
            _ => {}
        }

        self.push_update(ctx);
    }

    fn handle_restart(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        if let Some(handle) = self.countdown.take() {
            ctx.cancel_future(handle);
        }
        self.state = GameState::new(GRID_SIZE, &mut self.rng);
        self.started_at = None;
        self.time_taken = None;
        info!("[GameSession] {} restarted", self.session_id);
        self.push_update(ctx);
    }
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the connection opens: send the starting grid.
    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[GameSession] {} connected", self.session_id);
        self.push_update(ctx);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    /// Handles incoming WebSocket messages from the client.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                match serde_json::from_str::<ClientCommand>(&text) {
                    Ok(ClientCommand::Move(direction)) => self.handle_move(direction, ctx),
                    Ok(ClientCommand::Restart) => self.handle_restart(ctx),
                    Err(_) => {
                        ctx.text(ws_error_message(
                            "INVALID_COMMAND",
                            "Invalid client command",
                            Some(&self.session_id.to_string()),
                        ));
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(_)) => ctx.stop(),
            _ => (),
        }
    }
}

/// WebSocket endpoint for a game session.
///
/// An optional `seed` query parameter fixes the rng stream so a game can be
/// replayed move for move; otherwise the session seeds itself.
pub async fn ws_game(req: HttpRequest, stream: web::Payload) -> Result<HttpResponse, Error> {
    let seed = req
        .query_string()
        .split('&')
        .find(|kv| kv.starts_with("seed="))
        .and_then(|kv| kv.split('=').nth(1))
        .and_then(|raw| raw.parse::<u64>().ok());

    let mut rng = match seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };
    let state = GameState::new(GRID_SIZE, &mut rng);

    ws::start(
        GameSessionActor::new(Uuid::new_v4(), state, rng),
        &req,
        stream,
    )
}
