use fleetbot::{Board, CellView, ShotResult, BOARD_SIZE, FLEET_SCHEME, FLEET_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn auto_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    for length in FLEET_SCHEME {
        board.place_ship_randomly(&mut rng, length);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// No two ships end up on or next to each other, diagonals included.
    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let board = auto_board(seed);
        let ships = board.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in ships.iter().skip(i + 1) {
                for &(ar, ac) in a.cells() {
                    for &(br, bc) in b.cells() {
                        let dist = ar.abs_diff(br).max(ac.abs_diff(bc));
                        prop_assert!(dist > 1, "ships touch at ({ar},{ac}) / ({br},{bc})");
                    }
                }
            }
        }
    }

    /// Auto-placement always lands the full fleet scheme.
    #[test]
    fn full_fleet_is_placed(seed in any::<u64>()) {
        let board = auto_board(seed);
        prop_assert_eq!(board.ships().len(), FLEET_SIZE);
        let mut lengths: Vec<usize> = board.ships().iter().map(|s| s.len()).collect();
        lengths.sort_unstable();
        let mut expected = FLEET_SCHEME.to_vec();
        expected.sort_unstable();
        prop_assert_eq!(lengths, expected);
    }

    /// A second shot at any cell reports miss and leaves the board as-is.
    #[test]
    fn repeated_shots_are_inert(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = auto_board(seed);
        board.receive_shot((row, col));
        let snapshot = board.clone();
        prop_assert_eq!(board.receive_shot((row, col)), ShotResult::Miss);
        prop_assert_eq!(board, snapshot);
    }

    /// The opponent projection never exposes an unhit ship cell.
    #[test]
    fn opponent_view_never_leaks(seed in any::<u64>(), shots in 0..40usize) {
        let mut board = auto_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        for _ in 0..shots {
            let coord = (
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            board.receive_shot(coord);
        }
        let owner = board.owner_view();
        let opponent = board.opponent_view();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                prop_assert_ne!(opponent[r][c], CellView::Ship);
                if owner[r][c] == CellView::Ship {
                    prop_assert_eq!(opponent[r][c], CellView::Unknown);
                } else {
                    prop_assert_eq!(opponent[r][c], owner[r][c]);
                }
            }
        }
    }

    /// Shooting every cell on the grid destroys the whole fleet.
    #[test]
    fn saturation_sinks_everything(seed in any::<u64>()) {
        let mut board = auto_board(seed);
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                board.receive_shot((r, c));
            }
        }
        prop_assert!(board.all_ships_sunk());
    }
}
