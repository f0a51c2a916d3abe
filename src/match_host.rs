//! Bot-facing orchestration of battleship matches: lobby creation,
//! joining, shots, paid hints and forfeits. One host serializes all
//! mutation for the matches it owns; the embedder feeds it one chat
//! event at a time.

use std::collections::HashMap;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{BoardView, CellView};
use crate::common::{format_coord, parse_coord, ChatId, Coord, PlayerId, ShotResult};
use crate::config::{BOARD_SIZE, HINT_COST};
use crate::game::{Game, TurnRule};
use crate::ledger::{Ledger, LedgerError};
use crate::messenger::Messenger;
use crate::stats::StatsBook;

const NO_BATTLE: &str = "No active battle here. Start one with /newsea.";

/// Plain-text projection used for private board messages. Richer emoji
/// rendering belongs to the front end.
pub fn render_view(view: &BoardView) -> String {
    let mut out = String::from("  ");
    let header: Vec<String> = (1..=BOARD_SIZE).map(|c| c.to_string()).collect();
    out.push_str(&header.join(" "));
    out.push('\n');
    for (r, row) in view.iter().enumerate() {
        out.push((b'A' + r as u8) as char);
        for cell in row {
            out.push(' ');
            out.push(match cell {
                CellView::Unknown => '.',
                CellView::Ship => '#',
                CellView::Hit => 'X',
                CellView::Miss => 'o',
            });
        }
        out.push('\n');
    }
    out
}

/// Owns the chat-key to match registry, the pending lobbies, the ledger
/// and the messenger. Matches live here until won or forfeited.
pub struct MatchHost<L, M> {
    ledger: L,
    messenger: M,
    games: HashMap<ChatId, Game>,
    lobbies: HashMap<ChatId, Vec<PlayerId>>,
    stats: StatsBook,
    rule: TurnRule,
    rng: SmallRng,
}

impl<L: Ledger, M: Messenger> MatchHost<L, M> {
    pub fn new(ledger: L, messenger: M) -> Self {
        Self::with_rule(ledger, messenger, TurnRule::AlwaysSwitch)
    }

    pub fn with_rule(ledger: L, messenger: M, rule: TurnRule) -> Self {
        Self {
            ledger,
            messenger,
            games: HashMap::new(),
            lobbies: HashMap::new(),
            stats: StatsBook::new(),
            rule,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic host for tests.
    pub fn with_seed(ledger: L, messenger: M, rule: TurnRule, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..Self::with_rule(ledger, messenger, rule)
        }
    }

    pub fn game(&self, chat: ChatId) -> Option<&Game> {
        self.games.get(&chat)
    }

    pub fn stats(&self) -> &StatsBook {
        &self.stats
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// `/newsea` — open a lobby in this chat.
    pub fn new_match(&mut self, chat: ChatId) -> anyhow::Result<()> {
        if self.games.contains_key(&chat) || self.lobbies.contains_key(&chat) {
            return self.messenger.send(chat, "A sea battle is already running here.");
        }
        self.lobbies.insert(chat, Vec::new());
        info!("battleship lobby opened in chat {chat}");
        self.messenger.send(
            chat,
            "Sea battle created!\n/joinsea - join (first is A, second is B)\n/shot A5 - fire once the battle starts",
        )
    }

    /// `/joinsea` — enter the lobby; the second join places both fleets
    /// and starts the battle.
    pub fn join(&mut self, chat: ChatId, user: PlayerId) -> anyhow::Result<()> {
        let Some(lobby) = self.lobbies.get_mut(&chat) else {
            return self.messenger.send(chat, "No lobby here. Create one with /newsea.");
        };
        if lobby.contains(&user) {
            return self.messenger.send(chat, "You are already in.");
        }
        if lobby.len() >= 2 {
            return self.messenger.send(chat, "Two players already joined.");
        }
        lobby.push(user);
        self.messenger.send(chat, "You joined the battle!")?;

        let ready = self.lobbies.get(&chat).map(Vec::as_slice);
        if let Some(&[a, b]) = ready {
            self.lobbies.remove(&chat);
            let mut game = Game::with_rule(a, b, self.rule);
            game.auto_place_fleet_for(a, &mut self.rng)?;
            game.auto_place_fleet_for(b, &mut self.rng)?;
            Self::send_boards(&mut self.messenger, &game)?;
            self.games.insert(chat, game);
            info!("battleship match started in chat {chat}: {a} vs {b}");
            self.messenger
                .send(chat, "The battle begins! Player A fires first: /shot A5")?;
        }
        Ok(())
    }

    /// `/shot A5` — validate membership, turn and coordinate text, then
    /// fire at the opponent's board.
    pub fn shot(&mut self, chat: ChatId, user: PlayerId, coord_text: &str) -> anyhow::Result<()> {
        let Some(game) = self.games.get(&chat) else {
            return self.messenger.send(chat, NO_BATTLE);
        };
        if !game.contains(user) {
            debug!("chat {chat}: non-participant {user} tried to fire");
            return self.messenger.send(chat, "You are not in this battle.");
        }
        if game.turn() != user {
            debug!("chat {chat}: player {user} fired out of turn");
            return self.messenger.send(chat, "Not your turn.");
        }
        let Some(coord) = parse_coord(coord_text) else {
            return self.messenger.send(chat, "Bad coordinate. Use /shot A5.");
        };
        self.resolve_shot(chat, user, coord)
    }

    /// `/hint` — charge the shooter and fire at one uniformly random
    /// unresolved cell of the opponent board. Insufficient funds are
    /// reported verbatim and nothing else happens.
    pub fn hint(&mut self, chat: ChatId, user: PlayerId) -> anyhow::Result<()> {
        let Some(game) = self.games.get(&chat) else {
            return self.messenger.send(chat, NO_BATTLE);
        };
        if !game.contains(user) {
            return self.messenger.send(chat, "You are not in this battle.");
        }
        if game.turn() != user {
            return self.messenger.send(chat, "Not your turn.");
        }
        let Some(target) = game.opponent_of(user) else {
            return Ok(());
        };
        let candidates = game
            .board(target)
            .map(|b| b.unresolved_cells())
            .unwrap_or_default();
        if candidates.is_empty() {
            return self.messenger.send(chat, "Nothing left to reveal.");
        }
        match self.ledger.change_balance(user, -HINT_COST) {
            Ok(balance) => {
                self.messenger.send(
                    chat,
                    &format!("Hint: -{HINT_COST} diamonds, {balance} left."),
                )?;
            }
            Err(err @ LedgerError::InsufficientFunds { .. }) => {
                return self.messenger.send(chat, &err.to_string());
            }
            Err(err) => return Err(err.into()),
        }
        let coord = candidates[self.rng.random_range(0..candidates.len())];
        self.resolve_shot(chat, user, coord)
    }

    /// `/forfeit` — discard the match and award the win to the opponent.
    pub fn forfeit(&mut self, chat: ChatId, user: PlayerId) -> anyhow::Result<()> {
        let Some(game) = self.games.get(&chat) else {
            return self.messenger.send(chat, NO_BATTLE);
        };
        if !game.contains(user) {
            return self.messenger.send(chat, "You are not in this battle.");
        }
        let Some(winner) = game.opponent_of(user) else {
            return Ok(());
        };
        self.games.remove(&chat);
        self.stats.record_win(winner, user);
        info!("player {user} forfeited in chat {chat}");
        self.messenger
            .send(chat, &format!("Player {user} forfeits. Player {winner} wins!"))
    }

    /// `/balance` — report the caller's diamond count.
    pub fn balance(&mut self, chat: ChatId, user: PlayerId) -> anyhow::Result<()> {
        let balance = self.ledger.get_balance(user)?;
        self.messenger
            .send(chat, &format!("You have {balance} diamonds."))
    }

    /// `/stats` — personal record plus a short leaderboard.
    pub fn stats_report(&mut self, chat: ChatId, user: PlayerId) -> anyhow::Result<()> {
        let record = self.stats.get(user);
        let mut text = format!(
            "Your record:\nWins: {}\nLosses: {}\nDraws: {}\n",
            record.wins, record.losses, record.draws
        );
        let top = self.stats.top(3);
        if top.is_empty() {
            text.push_str("\nNo victories yet; the leaderboard is waiting.");
        } else {
            text.push_str("\nTop players:\n");
            for (place, (id, wins)) in top.iter().enumerate() {
                let marker = if *id == user { " (you)" } else { "" };
                text.push_str(&format!("{}. {} - {} wins{}\n", place + 1, id, wins, marker));
            }
        }
        self.messenger.send(chat, &text)
    }

    fn resolve_shot(&mut self, chat: ChatId, shooter: PlayerId, coord: Coord) -> anyhow::Result<()> {
        let (result, target, finished) = {
            let Some(game) = self.games.get_mut(&chat) else {
                return Ok(());
            };
            let Some(target) = game.opponent_of(shooter) else {
                return Ok(());
            };
            let result = game.fire(target, coord)?;
            let finished = game.is_over();
            if !finished {
                game.advance_turn(result);
            }
            (result, target, finished)
        };

        let report = match result {
            ShotResult::Miss => format!("{}: miss", format_coord(coord)),
            ShotResult::Hit => format!("{}: hit!", format_coord(coord)),
            ShotResult::Sunk => format!("{}: ship sunk!", format_coord(coord)),
        };
        self.messenger.send(chat, &report)?;

        if finished {
            info!("battleship match in chat {chat} won by player {shooter}");
            self.stats.record_win(shooter, target);
            self.messenger
                .send(chat, &format!("Player {shooter} wins!"))?;
            self.games.remove(&chat);
            return Ok(());
        }

        if let Some(game) = self.games.get(&chat) {
            Self::send_boards(&mut self.messenger, game)?;
            let next = game.turn();
            self.messenger
                .send(chat, &format!("Player {next}, your move!"))?;
        }
        Ok(())
    }

    /// Private-message each player their own board and the masked
    /// opponent board.
    fn send_boards(messenger: &mut M, game: &Game) -> anyhow::Result<()> {
        let (a, b) = game.players();
        for (me, other) in [(a, b), (b, a)] {
            if let (Some(mine), Some(theirs)) = (game.board(me), game.board(other)) {
                let text = format!(
                    "Your board:\n{}\nOpponent board:\n{}",
                    render_view(&mine.owner_view()),
                    render_view(&theirs.opponent_view()),
                );
                messenger.send(me, &text)?;
            }
        }
        Ok(())
    }
}
