// engine.rs - The generation-transition rule

use crate::board::Board;

/// Computes the next generation of `src` into `dst`.
///
/// Standard rules: a cell is alive in the next generation if it has exactly
/// 3 live neighbors, or if it is alive now and has exactly 2. Every
/// destination cell depends only on source values, so traversal order does
/// not matter and `src` is never mutated. Stale contents of `dst` are fully
/// overwritten.
///
/// Both boards must have identical dimensions; diverging buffers are a
/// broken controller invariant, not a recoverable condition.
pub fn next_generation(src: &Board, dst: &mut Board) {
    assert_eq!(
        (src.width(), src.height()),
        (dst.width(), dst.height()),
        "generation buffers must have identical dimensions"
    );

    for idx in 0..src.cells().len() {
        let count = src.live_neighbors(idx);
        let alive = count == 3 || (src.is_alive_at(idx) && count == 2);
        dst.set_alive_at(idx, alive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(board: &Board) -> Board {
        let mut next = Board::new(board.width(), board.height()).unwrap();
        next_generation(board, &mut next);
        next
    }

    fn live_set(board: &Board) -> Vec<(usize, usize)> {
        board
            .cells()
            .iter()
            .filter(|cell| cell.is_alive())
            .map(|cell| (cell.x(), cell.y()))
            .collect()
    }

    #[test]
    fn dead_board_stays_dead() {
        let board = Board::new(10, 10).unwrap();
        assert_eq!(step(&board).population(), 0);
    }

    #[test]
    fn isolated_cells_die() {
        let mut board = Board::new(10, 10).unwrap();
        board.set_alive(2, 2, true).unwrap();
        board.set_alive(7, 7, true).unwrap();
        assert_eq!(step(&board).population(), 0);
    }

    #[test]
    fn block_is_a_fixed_point() {
        let mut board = Board::new(10, 10).unwrap();
        for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
            board.set_alive(x, y, true).unwrap();
        }
        let next = step(&board);
        assert_eq!(live_set(&next), live_set(&board));
        assert_eq!(live_set(&step(&next)), live_set(&board));
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut board = Board::new(10, 10).unwrap();
        for x in [1, 2, 3] {
            board.set_alive(x, 2, true).unwrap();
        }

        let vertical = step(&board);
        assert_eq!(live_set(&vertical), vec![(2, 1), (2, 2), (2, 3)]);

        let horizontal = step(&vertical);
        assert_eq!(live_set(&horizontal), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn stale_destination_contents_are_overwritten() {
        let src = Board::new(10, 10).unwrap();
        let mut dst = Board::new(10, 10).unwrap();
        dst.fill(|_| true);
        next_generation(&src, &mut dst);
        assert_eq!(dst.population(), 0);
    }

    #[test]
    #[should_panic(expected = "identical dimensions")]
    fn mismatched_buffers_are_fatal() {
        let src = Board::new(10, 10).unwrap();
        let mut dst = Board::new(12, 10).unwrap();
        next_generation(&src, &mut dst);
    }
}
