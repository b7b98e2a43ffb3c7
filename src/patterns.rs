// patterns.rs - Named seed patterns
//
// Cells are (x, y) offsets from the pattern's top-left corner. Patterns are
// stamped centered on the board, so they work at any supported board size;
// cells that fall outside a small board are simply skipped.

use crate::board::Board;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding-box size of the pattern, (width, height).
    pub fn extent(&self) -> (usize, usize) {
        let width = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let height = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (width, height)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(2, 0), (1, 1), (2, 1), (0, 2), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

/// Clears the board and stamps `pattern` centered on it. Cells that do not
/// fit (pattern larger than the board) are skipped.
pub fn apply_pattern(board: &mut Board, pattern: &Pattern) {
    board.clear();

    let (pw, ph) = pattern.extent();
    let off_x = board.width().saturating_sub(pw) / 2;
    let off_y = board.height().saturating_sub(ph) / 2;

    for &(x, y) in pattern.cells {
        // Ignore cells beyond a too-small board.
        let _ = board.set_alive(off_x + x, off_y + y, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinker_is_stamped_centered() {
        let mut board = Board::new(11, 11).unwrap();
        let blinker = &PATTERNS[1];
        assert_eq!(blinker.name, "Blinker");

        apply_pattern(&mut board, blinker);
        assert_eq!(board.population(), 3);
        for x in [4, 5, 6] {
            assert!(board.cell_at(x, 5).unwrap().is_alive());
        }
    }

    #[test]
    fn apply_clears_previous_content() {
        let mut board = Board::new(20, 20).unwrap();
        board.fill(|_| true);
        apply_pattern(&mut board, &PATTERNS[0]);
        assert_eq!(board.population(), PATTERNS[0].cells.len());
    }

    #[test]
    fn oversized_pattern_is_clipped_on_small_boards() {
        let mut board = Board::new(10, 10).unwrap();
        let gun = PATTERNS.last().unwrap();
        assert_eq!(gun.name, "Gosper Glider Gun");

        apply_pattern(&mut board, gun);
        assert!(board.population() > 0);
        assert!(board.population() < gun.cells.len());
    }

    #[test]
    fn extents_match_cell_lists() {
        for pattern in PATTERNS {
            let (w, h) = pattern.extent();
            assert!(pattern.cells.iter().all(|&(x, y)| x < w && y < h));
        }
    }
}
