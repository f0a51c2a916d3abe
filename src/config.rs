/// Side length of the battleship grid.
pub const BOARD_SIZE: usize = 10;

/// Ship lengths each player places before battle:
/// one 4, two 3s, three 2s, four 1s.
pub const FLEET_SCHEME: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Number of ships in a full fleet.
pub const FLEET_SIZE: usize = FLEET_SCHEME.len();

/// Diamonds charged for one hint shot.
pub const HINT_COST: i64 = 5;
