//! Five-in-a-row detection through a single cell
//!
//! Only the lines passing through the last placed stone can have changed, so
//! both the controller and the search check just that cell.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Stones needed in a contiguous run to win (overlines also win)
pub const WIN_LENGTH: usize = 5;

/// Ordered run of same-colored stones forming a win, backward end first.
pub type WinLine = Vec<Pos>;

/// Count contiguous `color` stones starting one step from `pos` along `(dr, dc)`.
#[inline]
pub(crate) fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut k = 1;
    loop {
        let (r, c) = pos.offset(dr, dc, k);
        match board.get_signed(r, c) {
            Some(stone) if stone == color => k += 1,
            _ => return (k - 1) as usize,
        }
    }
}

/// Collect the full run through `pos` along one axis.
///
/// The backward part is reversed so the result reads from one end of the
/// line to the other, with `pos` included.
fn collect_line(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> WinLine {
    let backward = run_length(board, pos, -dr, -dc, color) as i32;
    let forward = run_length(board, pos, dr, dc, color) as i32;

    (-backward..=forward)
        .filter_map(|k| {
            let (r, c) = pos.offset(dr, dc, k);
            board.pos_at(r, c)
        })
        .collect()
}

/// Check whether the stone at `pos` is part of five or more in a row.
///
/// Axes are tried in the order of [`DIRECTIONS`] and the first qualifying run
/// is returned, which is not necessarily the longest one.
pub fn check_win(board: &Board, pos: Pos) -> Option<WinLine> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    DIRECTIONS.iter().find_map(|&(dr, dc)| {
        let line = collect_line(board, pos, dr, dc, color);
        (line.len() >= WIN_LENGTH).then_some(line)
    })
}

/// Fast five-in-a-row check at a specific position. No allocation.
#[inline]
pub fn has_five_at(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, dr, dc, color) + run_length(board, pos, -dr, -dc, color)
            >= WIN_LENGTH
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place(Pos::new(r, c), stone).unwrap();
        }
    }

    #[test]
    fn test_horizontal_five() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)], Stone::Black);

        let line = check_win(&board, Pos::new(7, 5)).unwrap();
        assert_eq!(
            line,
            vec![
                Pos::new(7, 3),
                Pos::new(7, 4),
                Pos::new(7, 5),
                Pos::new(7, 6),
                Pos::new(7, 7)
            ]
        );
        assert!(has_five_at(&board, Pos::new(7, 3)));
    }

    #[test]
    fn test_vertical_five_at_edge() {
        let mut board = Board::new();
        place_all(&mut board, &[(10, 14), (11, 14), (12, 14), (13, 14), (14, 14)], Stone::White);

        let line = check_win(&board, Pos::new(14, 14)).unwrap();
        assert_eq!(line.first(), Some(&Pos::new(10, 14)));
        assert_eq!(line.last(), Some(&Pos::new(14, 14)));
    }

    #[test]
    fn test_diagonals() {
        let mut board = Board::new();
        place_all(&mut board, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)], Stone::Black);
        assert!(has_five_at(&board, Pos::new(2, 2)));

        let mut board = Board::new();
        place_all(&mut board, &[(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)], Stone::White);
        let line = check_win(&board, Pos::new(4, 0)).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Pos::new(0, 4));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6), (7, 7)], Stone::Black);
        assert!(check_win(&board, Pos::new(7, 7)).is_none());
        assert!(!has_five_at(&board, Pos::new(7, 7)));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 2), (7, 3), (7, 5), (7, 6), (7, 7)], Stone::Black);
        board.place(Pos::new(7, 4), Stone::White).unwrap();
        assert!(check_win(&board, Pos::new(7, 5)).is_none());
    }

    #[test]
    fn test_overline_wins() {
        let mut board = Board::new();
        place_all(&mut board, &[(3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5)], Stone::Black);
        assert_eq!(check_win(&board, Pos::new(3, 2)).map(|l| l.len()), Some(6));
    }

    #[test]
    fn test_first_direction_is_reported() {
        // Vertical and horizontal fives share (7, 7); vertical is checked first.
        let mut board = Board::new();
        place_all(&mut board, &[(3, 7), (4, 7), (5, 7), (6, 7), (7, 7)], Stone::Black);
        place_all(&mut board, &[(7, 8), (7, 9), (7, 10), (7, 11), (7, 12), (7, 13)], Stone::Black);

        let line = check_win(&board, Pos::new(7, 7)).unwrap();
        assert!(line.iter().all(|p| p.col == 7));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(check_win(&board, Pos::new(7, 7)).is_none());
    }

    fn brute_force_five(board: &Board, pos: Pos) -> bool {
        let color = board.get(pos);
        if color == Stone::Empty {
            return false;
        }
        // Any window of five cells on an axis that contains pos and is all `color`.
        DIRECTIONS.iter().any(|&(dr, dc)| {
            (-4..=0).any(|start| {
                (start..start + 5).all(|k| {
                    let (r, c) = pos.offset(dr, dc, k);
                    board.get_signed(r, c) == Some(color)
                })
            })
        })
    }

    proptest! {
        #[test]
        fn prop_check_win_matches_brute_force(
            cells in prop::collection::vec(0u8..3, 81),
            row in 0u8..9,
            col in 0u8..9,
        ) {
            let mut board = Board::with_size(9, 9);
            for (i, v) in cells.iter().enumerate() {
                let stone = match v {
                    1 => Stone::Black,
                    2 => Stone::White,
                    _ => continue,
                };
                board.place(Pos::new((i / 9) as u8, (i % 9) as u8), stone).unwrap();
            }
            let pos = Pos::new(row, col);
            let expected = brute_force_five(&board, pos);
            prop_assert_eq!(check_win(&board, pos).is_some(), expected);
            prop_assert_eq!(has_five_at(&board, pos), expected);
        }
    }
}
