use serde::{Serialize, Deserialize};

use crate::game::state::GameState;
use crate::game::types::Direction;

/// Commands a client may send over the game WebSocket.
#[derive(Debug, Serialize, Deserialize)]
pub enum ClientCommand {
    Move(Direction),
    Restart,
}

/// Full snapshot pushed to the client after every processed command and on
/// countdown expiry. `time_taken` is only present once the run is won.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameUpdate {
    pub state: GameState,
    /// Seconds remaining on the countdown.
    pub time_left: u64,
    /// Seconds between the first move and the winning merge.
    pub time_taken: Option<u64>,
}
