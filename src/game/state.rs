use serde::{Serialize, Deserialize};
use rand::Rng;

use crate::game::grid::{Grid, generate_grid};
use crate::game::systems::{movement, rules};
use crate::game::tiles::spawn_tile;
use crate::game::types::{Direction, Phase};

/// Authoritative state of one game run. Mutated only through
/// `apply_player_move` and `expire`; a restart replaces the whole value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub score: u32,
    pub phase: Phase,
    /// Count of tile ids handed out so far. Strictly increasing while the
    /// run lasts; a new run starts the count over.
    pub next_id: u64,
}

impl GameState {
    /// Fresh Idle state: an empty size x size grid seeded with two tiles.
    pub fn new<R: Rng>(size: usize, rng: &mut R) -> Self {
        assert!(size >= 2, "grid needs at least two slots per line");

        let mut next_id = 0;
        let mut grid = generate_grid(size);
        spawn_tile(&mut grid, &mut next_id, rng);
        spawn_tile(&mut grid, &mut next_id, rng);

        GameState { grid, score: 0, phase: Phase::Idle, next_id }
    }

    /// Run the full move pipeline: slide and fuse, score, freeze on the
    /// winning merge, otherwise spawn and check for a stalemate. Returns
    /// whether the grid changed. Commands on a finished game do nothing.
    pub fn apply_player_move<R: Rng>(&mut self, direction: Direction, rng: &mut R) -> bool {
        if matches!(self.phase, Phase::Won | Phase::Lost) {
            return false;
        }

        // The first command starts the run, whether or not it moves anything.
        if self.phase == Phase::Idle {
            self.phase = Phase::Active;
        }

        let outcome = movement::apply_move(&self.grid, direction, &mut self.next_id);
        if !outcome.moved {
            return false;
        }

        self.grid = outcome.grid;
        self.score += outcome.score_delta;

        if outcome.reached_target {
            // The winning merge ends the run on the spot: no trailing spawn.
            self.phase = Phase::Won;
            return true;
        }

        spawn_tile(&mut self.grid, &mut self.next_id, rng);
        if !rules::is_move_available(&self.grid) {
            self.phase = Phase::Lost;
        }

        true
    }

    /// Countdown ran out. Only an unfinished run can time out; the session
    /// layer owns the clock, the engine just records the verdict.
    pub fn expire(&mut self) {
        if matches!(self.phase, Phase::Idle | Phase::Active) {
            self.phase = Phase::Lost;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Cell;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn tile(value: u32, id: u64) -> Cell {
        Cell { value: Some(value), id, merged_from: None }
    }

    #[test]
    fn test_new_state_has_two_tiles_and_is_idle() {
        let mut rng = Pcg32::seed_from_u64(11);
        let state = GameState::new(4, &mut rng);

        let occupied = state.grid.iter().flatten().filter(|c| !c.is_empty()).count();
        assert_eq!(occupied, 2);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.next_id, 2);
    }

    #[test]
    fn test_first_command_activates_even_when_blocked() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = GameState {
            grid: vec![
                vec![tile(2, 1), Cell::empty(), Cell::empty(), Cell::empty()],
                vec![Cell::empty(); 4],
                vec![Cell::empty(); 4],
                vec![Cell::empty(); 4],
            ],
            score: 0,
            phase: Phase::Idle,
            next_id: 1,
        };

        let moved = state.apply_player_move(Direction::Left, &mut rng);
        assert!(!moved);
        assert_eq!(state.phase, Phase::Active);
        // Nothing moved, so nothing spawned either.
        assert_eq!(state.next_id, 1);
    }

    #[test]
    fn test_winning_merge_freezes_without_spawn() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = GameState {
            grid: vec![
                vec![tile(1024, 1), tile(1024, 2), Cell::empty(), Cell::empty()],
                vec![Cell::empty(); 4],
                vec![Cell::empty(); 4],
                vec![Cell::empty(); 4],
            ],
            score: 0,
            phase: Phase::Active,
            next_id: 2,
        };

        assert!(state.apply_player_move(Direction::Left, &mut rng));
        assert_eq!(state.phase, Phase::Won);
        assert_eq!(state.score, 2048);

        // One merged tile, no post-win spawn.
        let occupied = state.grid.iter().flatten().filter(|c| !c.is_empty()).count();
        assert_eq!(occupied, 1);
        assert_eq!(state.grid[0][0].value, Some(2048));

        // Further commands bounce off the finished game.
        let frozen = state.grid.clone();
        assert!(!state.apply_player_move(Direction::Down, &mut rng));
        assert_eq!(state.grid, frozen);
        assert_eq!(state.phase, Phase::Won);
    }

    #[test]
    fn test_stalemate_after_spawn_loses() {
        let mut rng = Pcg32::seed_from_u64(17);
        // Left fuses the top pair into an 8; the spawn then fills the only
        // hole and no neighbours match, whichever value comes up.
        let mut state = GameState {
            grid: vec![
                vec![tile(4, 1), tile(4, 2)],
                vec![tile(32, 3), tile(64, 4)],
            ],
            score: 0,
            phase: Phase::Active,
            next_id: 4,
        };

        assert!(state.apply_player_move(Direction::Left, &mut rng));
        assert_eq!(state.score, 8);
        assert_eq!(state.phase, Phase::Lost);
        assert!(state.grid.iter().flatten().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_ids_increase_across_merge_and_spawn() {
        let mut rng = Pcg32::seed_from_u64(23);
        let mut state = GameState {
            grid: vec![
                vec![tile(2, 1), tile(2, 2), Cell::empty(), Cell::empty()],
                vec![Cell::empty(); 4],
                vec![Cell::empty(); 4],
                vec![Cell::empty(); 4],
            ],
            score: 0,
            phase: Phase::Active,
            next_id: 2,
        };

        assert!(state.apply_player_move(Direction::Left, &mut rng));
        // One id for the merged tile, one for the spawn.
        assert_eq!(state.next_id, 4);
        assert_eq!(state.grid[0][0].merged_from, Some((1, 2)));
    }

    #[test]
    fn test_expire_only_hits_unfinished_runs() {
        let mut rng = Pcg32::seed_from_u64(29);
        let mut active = GameState::new(4, &mut rng);
        active.phase = Phase::Active;
        active.expire();
        assert_eq!(active.phase, Phase::Lost);

        let mut won = GameState::new(4, &mut rng);
        won.phase = Phase::Won;
        won.expire();
        assert_eq!(won.phase, Phase::Won);
    }
}
