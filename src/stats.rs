//! Win/loss/draw records kept per player across matches.

use std::collections::HashMap;

use crate::common::PlayerId;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

#[derive(Debug, Default)]
pub struct StatsBook {
    records: HashMap<PlayerId, PlayerRecord>,
}

impl StatsBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, user: PlayerId) -> PlayerRecord {
        self.records.get(&user).copied().unwrap_or_default()
    }

    pub fn record_win(&mut self, winner: PlayerId, loser: PlayerId) {
        self.records.entry(winner).or_default().wins += 1;
        self.records.entry(loser).or_default().losses += 1;
    }

    pub fn record_draw(&mut self, a: PlayerId, b: PlayerId) {
        for user in [a, b] {
            self.records.entry(user).or_default().draws += 1;
        }
    }

    /// Players with at least one win, most wins first. Ties break on
    /// player id so the leaderboard is stable.
    pub fn top(&self, n: usize) -> Vec<(PlayerId, u32)> {
        let mut board: Vec<_> = self
            .records
            .iter()
            .filter(|(_, rec)| rec.wins > 0)
            .map(|(&id, rec)| (id, rec.wins))
            .collect();
        board.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        board.truncate(n);
        board
    }
}
