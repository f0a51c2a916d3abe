//! Shared identifiers, coordinates and shot results.

use crate::config::BOARD_SIZE;

/// (row, column), 0-indexed from the top-left corner.
pub type Coord = (usize, usize);

/// Opaque player identifier assigned by the chat platform.
pub type PlayerId = i64;

/// Opaque chat identifier; a player's private chat shares their id.
pub type ChatId = i64;

/// Outcome of a single shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Open water, or a repeated/out-of-bounds shot.
    Miss,
    /// Struck a ship that still has unhit cells.
    Hit,
    /// Struck the last unhit cell of a ship.
    Sunk,
}

/// Errors from `Game`-level operations. Board-level misuse stays folded
/// into [`ShotResult::Miss`] and never produces an error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    #[error("shots are not accepted while fleets are still being placed")]
    NotInBattle,
    #[error("player {0} is not part of this match")]
    UnknownPlayer(PlayerId),
}

/// Parse human coordinate text such as `A5` or `j10`: a row letter
/// (`A`..) followed by a 1-based column number.
pub fn parse_coord(text: &str) -> Option<Coord> {
    let text = text.trim();
    let mut chars = text.chars();
    let row_char = chars.next()?.to_ascii_uppercase();
    if !row_char.is_ascii_uppercase() {
        return None;
    }
    let row = row_char as usize - 'A' as usize;
    let col: usize = chars.as_str().parse().ok()?;
    if row >= BOARD_SIZE || col < 1 || col > BOARD_SIZE {
        return None;
    }
    Some((row, col - 1))
}

/// Inverse of [`parse_coord`]: `(0, 4)` becomes `A5`.
pub fn format_coord((row, col): Coord) -> String {
    format!("{}{}", (b'A' + row as u8) as char, col + 1)
}
