// board.rs - Grid state for Conway's Game of Life
//
// Cells live in a flat arena indexed row * width + col. Neighbor links are
// stored as indices into that arena, so the up-to-8 Moore neighbors of any
// cell can be iterated without chasing references between cells.

use rand::Rng;

use crate::error::{Error, Result};

/// Smallest supported board edge.
pub const MIN_SIZE: usize = 10;
/// Largest supported board edge.
pub const MAX_SIZE: usize = 500;

/// The 8 Moore-neighborhood offsets as (dx, dy), x = column, y = row.
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A single grid position: its coordinates, living/dead status, and the
/// arena indices of its in-bounds Moore neighbors (fewer than 8 at edges
/// and corners).
#[derive(Debug, Clone)]
pub struct Cell {
    x: usize,
    y: usize,
    alive: bool,
    neighbors: Vec<usize>,
}

impl Cell {
    /// Column, 0-indexed.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row, 0-indexed.
    pub fn y(&self) -> usize {
        self.y
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Arena indices of this cell's neighbors.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }
}

/// An immutable-shape, mutable-content W×H grid of cells. The shape
/// (dimensions and neighbor wiring) is fixed at construction; only the
/// `alive` flags ever change afterwards.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

fn validate_dimension(value: usize) -> Result<()> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&value) {
        return Err(Error::InvalidDimension(value));
    }
    Ok(())
}

impl Board {
    /// Builds an all-dead `width` x `height` board with neighbor wiring.
    ///
    /// Construction is two-pass: allocate every cell first, then wire the
    /// neighbor index lists, so no cell ever points at a slot that does
    /// not exist yet.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimension(width)?;
        validate_dimension(height)?;

        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell {
                    x,
                    y,
                    alive: false,
                    neighbors: Vec::new(),
                });
            }
        }

        for idx in 0..cells.len() {
            let (x, y) = (cells[idx].x as i32, cells[idx].y as i32);
            let mut neighbors = Vec::with_capacity(8);
            for (dx, dy) in NEIGHBOURS {
                let (nx, ny) = (x + dx, y + dy);
                if (0..width as i32).contains(&nx) && (0..height as i32).contains(&ny) {
                    neighbors.push(ny as usize * width + nx as usize);
                }
            }
            cells[idx].neighbors = neighbors;
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Bounds-checked cell accessor.
    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Flips the living/dead status of one cell. Neighbor wiring and every
    /// other cell are untouched.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx].alive = !self.cells[idx].alive;
        Ok(())
    }

    /// Sets one cell's living/dead status.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx].alive = alive;
        Ok(())
    }

    /// Sets every cell's `alive` flag to the result of `rule`, in place.
    pub fn fill(&mut self, mut rule: impl FnMut(&Cell) -> bool) {
        for idx in 0..self.cells.len() {
            let alive = rule(&self.cells[idx]);
            self.cells[idx].alive = alive;
        }
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.fill(|_| false);
    }

    /// Sets every cell to a coin flip, independently per cell.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        self.fill(|_| rng.gen_bool(0.5));
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    pub(crate) fn is_alive_at(&self, idx: usize) -> bool {
        self.cells[idx].alive
    }

    pub(crate) fn set_alive_at(&mut self, idx: usize, alive: bool) {
        self.cells[idx].alive = alive;
    }

    /// Live-neighbor count (0-8) for the cell at arena index `idx`.
    pub(crate) fn live_neighbors(&self, idx: usize) -> usize {
        self.cells[idx]
            .neighbors
            .iter()
            .filter(|&&n| self.cells[n].alive)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert_eq!(
            Board::new(MIN_SIZE - 1, 20).unwrap_err(),
            Error::InvalidDimension(MIN_SIZE - 1)
        );
        assert_eq!(
            Board::new(20, MAX_SIZE + 1).unwrap_err(),
            Error::InvalidDimension(MAX_SIZE + 1)
        );
        assert!(Board::new(MIN_SIZE, MAX_SIZE).is_ok());
    }

    #[test]
    fn starts_all_dead() {
        let board = Board::new(10, 12).unwrap();
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 12);
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn coordinates_match_arena_position() {
        let board = Board::new(10, 10).unwrap();
        for (idx, cell) in board.cells().iter().enumerate() {
            assert_eq!(idx, cell.y() * board.width() + cell.x());
        }
    }

    #[test]
    fn neighbor_counts_by_position() {
        let board = Board::new(10, 10).unwrap();
        // Corner, edge, interior.
        assert_eq!(board.cell_at(0, 0).unwrap().neighbors().len(), 3);
        assert_eq!(board.cell_at(5, 0).unwrap().neighbors().len(), 5);
        assert_eq!(board.cell_at(4, 4).unwrap().neighbors().len(), 8);
    }

    #[test]
    fn neighbor_relation_is_symmetric_and_adjacent() {
        let board = Board::new(10, 10).unwrap();
        for (idx, cell) in board.cells().iter().enumerate() {
            for &n in cell.neighbors() {
                let other = &board.cells()[n];
                let dx = cell.x().abs_diff(other.x());
                let dy = cell.y().abs_diff(other.y());
                assert!(dx <= 1 && dy <= 1 && (dx, dy) != (0, 0));
                assert!(
                    other.neighbors().contains(&idx),
                    "neighbor relation must be symmetric"
                );
            }
        }
    }

    #[test]
    fn toggle_flips_exactly_one_cell() {
        let mut board = Board::new(10, 10).unwrap();
        board.toggle(3, 4).unwrap();
        assert!(board.cell_at(3, 4).unwrap().is_alive());
        assert_eq!(board.population(), 1);
        board.toggle(3, 4).unwrap();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut board = Board::new(10, 10).unwrap();
        assert_eq!(
            board.cell_at(10, 0).unwrap_err(),
            Error::OutOfBounds {
                x: 10,
                y: 0,
                width: 10,
                height: 10
            }
        );
        assert!(board.toggle(0, 10).is_err());
    }

    #[test]
    fn fill_and_clear() {
        let mut board = Board::new(10, 10).unwrap();
        board.fill(|cell| (cell.x() + cell.y()) % 2 == 0);
        assert_eq!(board.population(), 50);
        board.clear();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn randomize_is_roughly_half() {
        let mut board = Board::new(20, 20).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        board.randomize(&mut rng);
        let population = board.population();
        assert!(population > 0 && population < 400);
    }
}
