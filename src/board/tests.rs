use super::*;
use crate::error::PlaceError;
use proptest::prelude::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_with_size_bounds() {
    let board = Board::with_size(0, 40);
    assert_eq!((board.rows(), board.cols()), (1, BOARD_SIZE));

    let mut board = Board::with_size(5, 5);
    assert_eq!(board.positions().count(), 25);
    assert!(matches!(
        board.place(Pos::new(5, 0), Stone::Black),
        Err(PlaceError::OutOfRange { row: 5, col: 0 })
    ));
    assert!(board.place(Pos::new(4, 4), Stone::Black).is_ok());
    assert_eq!(board.get(Pos::new(0, 5)), Stone::Empty);
    assert_eq!(board.pos_at(4, 5), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_manhattan() {
    assert_eq!(Pos::new(7, 7).manhattan(Pos::new(7, 7)), 0);
    assert_eq!(Pos::new(0, 0).manhattan(Pos::new(7, 7)), 14);
    assert_eq!(Pos::new(9, 5).manhattan(Pos::new(7, 7)), 4);
}

#[test]
fn test_center() {
    assert_eq!(Board::new().center(), Pos::new(7, 7));
    assert_eq!(Board::with_size(5, 5).center(), Pos::new(2, 2));
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new();
    assert!(board.place(Pos::new(3, 4), Stone::Black).is_ok());
    assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
    assert_eq!(board.stone_count(), 1);
    assert!(!board.is_board_empty());
}

#[test]
fn test_place_occupied_is_rejected() {
    let mut board = Board::new();
    board.place(Pos::new(7, 7), Stone::Black).unwrap();
    let before = board.clone();

    let err = board.place(Pos::new(7, 7), Stone::White).unwrap_err();
    assert_eq!(err, PlaceError::Occupied(Pos::new(7, 7)));
    assert_eq!(board, before);
}

#[test]
fn test_place_out_of_range_is_rejected() {
    let mut board = Board::with_size(5, 5);
    let err = board.place(Pos::new(5, 0), Stone::Black).unwrap_err();
    assert_eq!(err, PlaceError::OutOfRange { row: 5, col: 0 });

    let err = board.place(Pos { row: 200, col: 1 }, Stone::Black).unwrap_err();
    assert!(matches!(err, PlaceError::OutOfRange { .. }));
    assert!(board.is_board_empty());
}

#[test]
fn test_undo_restores_cell() {
    let mut board = Board::new();
    board.place(Pos::new(1, 1), Stone::White).unwrap();
    board.undo(Pos::new(1, 1));
    assert_eq!(board.get(Pos::new(1, 1)), Stone::Empty);
    assert_eq!(board, Board::new());
}

#[test]
fn test_with_trial_restores_board() {
    let mut board = Board::new();
    board.place(Pos::new(7, 7), Stone::Black).unwrap();
    let before = board.clone();

    let seen = board.with_trial(Pos::new(7, 8), Stone::White, |b| b.get(Pos::new(7, 8)));
    assert_eq!(seen, Stone::White);
    assert_eq!(board, before);
}

#[test]
fn test_is_full_and_empty_cells() {
    let mut board = Board::with_size(3, 3);
    assert_eq!(board.empty_cells().count(), 9);

    let mut stone = Stone::Black;
    let cells: Vec<Pos> = board.empty_cells().collect();
    for pos in cells {
        assert!(!board.is_full());
        board.place(pos, stone).unwrap();
        stone = stone.opponent();
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().next(), None);
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::with_size(2, 3);
    board.place(Pos::new(0, 1), Stone::Black).unwrap();
    let cells: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(
        cells,
        vec![
            Pos::new(0, 0),
            Pos::new(0, 2),
            Pos::new(1, 0),
            Pos::new(1, 1),
            Pos::new(1, 2)
        ]
    );
}

#[test]
fn test_pos_at_bounds() {
    let board = Board::new();
    assert_eq!(board.pos_at(0, 0), Some(Pos::new(0, 0)));
    assert_eq!(board.pos_at(14, 14), Some(Pos::new(14, 14)));
    assert_eq!(board.pos_at(-1, 0), None);
    assert_eq!(board.pos_at(0, 15), None);
}

proptest! {
    #[test]
    fn prop_occupied_count_tracks_place_minus_undo(
        ops in prop::collection::vec((any::<bool>(), 0u8..15, 0u8..15), 0..200)
    ) {
        let mut board = Board::new();
        let mut placed = 0usize;
        let mut undone = 0usize;
        let mut stone = Stone::Black;

        for (is_place, row, col) in ops {
            let pos = Pos::new(row, col);
            if is_place {
                if board.place(pos, stone).is_ok() {
                    placed += 1;
                    stone = stone.opponent();
                }
            } else if board.get(pos) != Stone::Empty {
                board.undo(pos);
                undone += 1;
            }
        }

        let occupied = board.occupied().count();
        prop_assert_eq!(occupied, placed - undone);
        prop_assert_eq!(board.stone_count(), occupied);
    }
}
