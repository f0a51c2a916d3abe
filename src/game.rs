//! Match state for one battleship game between two players.

use std::collections::HashMap;

use rand::Rng;

use crate::board::Board;
use crate::common::{Coord, GameError, PlayerId, ShotResult};
use crate::config::{FLEET_SCHEME, FLEET_SIZE};

/// Match phase. Shots are only accepted during `Battle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placing,
    Battle,
}

/// Who shoots next after a resolved shot, configurable per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRule {
    /// The turn passes after every shot.
    AlwaysSwitch,
    /// The shooter keeps the turn on `Hit` and `Sunk`, loses it on `Miss`.
    ContinueOnHit,
}

/// Two players, their boards (each the one the *opponent* shoots at),
/// the turn holder and the match phase.
#[derive(Debug, Clone)]
pub struct Game {
    player_a: PlayerId,
    player_b: PlayerId,
    boards: HashMap<PlayerId, Board>,
    turn: PlayerId,
    phase: Phase,
    placed_counts: HashMap<PlayerId, usize>,
    rule: TurnRule,
}

impl Game {
    pub fn new(player_a: PlayerId, player_b: PlayerId) -> Self {
        Self::with_rule(player_a, player_b, TurnRule::AlwaysSwitch)
    }

    pub fn with_rule(player_a: PlayerId, player_b: PlayerId, rule: TurnRule) -> Self {
        Self {
            player_a,
            player_b,
            boards: HashMap::from([(player_a, Board::new()), (player_b, Board::new())]),
            turn: player_a,
            phase: Phase::Placing,
            placed_counts: HashMap::from([(player_a, 0), (player_b, 0)]),
            rule,
        }
    }

    pub fn players(&self) -> (PlayerId, PlayerId) {
        (self.player_a, self.player_b)
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        player == self.player_a || player == self.player_b
    }

    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        if player == self.player_a {
            Some(self.player_b)
        } else if player == self.player_b {
            Some(self.player_a)
        } else {
            None
        }
    }

    pub fn board(&self, player: PlayerId) -> Option<&Board> {
        self.boards.get(&player)
    }

    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rule(&self) -> TurnRule {
        self.rule
    }

    pub fn placed_count(&self, player: PlayerId) -> usize {
        self.placed_counts.get(&player).copied().unwrap_or(0)
    }

    /// Rejection-sample random placements until the player's whole fleet
    /// is down, then count them as ready. The match enters `Battle` once
    /// both fleets are placed.
    pub fn auto_place_fleet_for<R: Rng>(
        &mut self,
        player: PlayerId,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let board = self
            .boards
            .get_mut(&player)
            .ok_or(GameError::UnknownPlayer(player))?;
        for length in FLEET_SCHEME {
            board.place_ship_randomly(rng, length);
        }
        self.placed_counts.insert(player, FLEET_SIZE);
        if self.placed_counts.values().all(|&n| n == FLEET_SIZE) {
            self.phase = Phase::Battle;
        }
        Ok(())
    }

    /// Resolve a shot against `target`'s board. Rejected while fleets
    /// are still being placed.
    pub fn fire(&mut self, target: PlayerId, coord: Coord) -> Result<ShotResult, GameError> {
        if self.phase != Phase::Battle {
            return Err(GameError::NotInBattle);
        }
        let board = self
            .boards
            .get_mut(&target)
            .ok_or(GameError::UnknownPlayer(target))?;
        Ok(board.receive_shot(coord))
    }

    /// Unconditional toggle; policy-aware callers use [`advance_turn`].
    ///
    /// [`advance_turn`]: Game::advance_turn
    pub fn switch_turn(&mut self) {
        self.turn = if self.turn == self.player_a {
            self.player_b
        } else {
            self.player_a
        };
    }

    /// Apply the match turn rule to a resolved shot.
    pub fn advance_turn(&mut self, result: ShotResult) {
        match (self.rule, result) {
            (TurnRule::ContinueOnHit, ShotResult::Hit | ShotResult::Sunk) => {}
            _ => self.switch_turn(),
        }
    }

    /// True once either fleet is destroyed. Meaningful only after both
    /// fleets are placed: a board with no ships reports itself sunk.
    pub fn is_over(&self) -> bool {
        self.boards.values().any(Board::all_ships_sunk)
    }

    /// The player whose fleet survives, once the battle is decided.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.phase != Phase::Battle {
            return None;
        }
        let a_sunk = self.board(self.player_a).is_some_and(Board::all_ships_sunk);
        let b_sunk = self.board(self.player_b).is_some_and(Board::all_ships_sunk);
        match (a_sunk, b_sunk) {
            (true, false) => Some(self.player_b),
            (false, true) => Some(self.player_a),
            _ => None,
        }
    }
}
