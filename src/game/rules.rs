use crate::game::{Board, Mark};

/// The 8 winning triples, scanned rows top-to-bottom, then columns
/// left-to-right, then the two diagonals. The first match is the one
/// reported, which keeps line highlighting deterministic.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_winner(board: &Board) -> Option<(Mark, [usize; 3])> {
    for line in LINES {
        if let Some(mark) = board.get(line[0]) {
            if board.get(line[1]) == Some(mark) && board.get(line[2]) == Some(mark) {
                return Some((mark, line));
            }
        }
    }
    None
}

/// True iff every cell is taken. Callers check for a winner first; a full
/// board holding a completed line is a win, never a draw.
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(xs: &[usize], os: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in xs {
            board = board.with_move(i, Mark::X).unwrap();
        }
        for &i in os {
            board = board.with_move(i, Mark::O).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);
        assert!(!check_draw(&Board::new()));
    }

    #[test]
    fn detects_every_line() {
        for line in LINES {
            let others: Vec<usize> = (0..9).filter(|i| !line.contains(i)).take(2).collect();
            let board = board_with(&line, &others);
            assert_eq!(check_winner(&board), Some((Mark::X, line)));
        }
    }

    #[test]
    fn detects_o_win() {
        let board = board_with(&[0, 1, 4], &[6, 7, 8]);
        assert_eq!(check_winner(&board), Some((Mark::O, [6, 7, 8])));
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_with(&[0, 2], &[1]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn first_line_in_scan_order_wins_the_lookup() {
        // X holds both the top row and the left column; the row is
        // reported because rows are scanned before columns.
        let board = board_with(&[0, 1, 2, 3, 6], &[4, 5, 7, 8]);
        assert_eq!(check_winner(&board), Some((Mark::X, [0, 1, 2])));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        // X O X
        // O X X
        // O X O
        let board = board_with(&[0, 2, 4, 5, 7], &[1, 3, 6, 8]);
        assert_eq!(check_winner(&board), None);
        assert!(check_draw(&board));
    }

    #[test]
    fn partial_board_is_not_a_draw() {
        let board = board_with(&[0, 2], &[1]);
        assert!(!check_draw(&board));
    }
}
