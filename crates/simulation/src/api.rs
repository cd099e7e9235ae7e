//! Relative-offset probe/swap surface passed to material behaviors.

use crate::cell::{Category, Cell};
use crate::Grid;

/// The sole channel through which a behavior reads its neighbors and moves
/// itself. A swap is the only grid mutation a behavior can cause; any
/// state that doesn't move is written back in place with [`Self::update_self`].
pub struct SandApi<'a> {
    grid: &'a mut Grid,
    x: i32,
    y: i32,
    cell: Cell,
}

impl<'a> SandApi<'a> {
    /// `cell` is the caller's already-known contents at `(x, y)` — the
    /// dispatch loop has it on hand from the scan and passing it in means
    /// this type never has to re-probe its own position to read it back.
    pub(crate) fn new(grid: &'a mut Grid, x: i32, y: i32, cell: Cell) -> Self {
        Self { grid, x, y, cell }
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Tick counter, used to alternate scan and tie-break order.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    /// The cell currently being processed, as of the most recent
    /// [`Self::update_self`] or [`Self::swap_to`] call.
    #[must_use]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Read a neighbor relative to the cell being processed; `None` if out
    /// of bounds.
    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Option<Cell> {
        self.grid.probe(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn in_bounds(&self, dx: i32, dy: i32) -> bool {
        self.grid.in_bounds(self.x + dx, self.y + dy)
    }

    /// Whether a mover in category `mover` could swap into the neighbor at
    /// `(dx, dy)`. Out-of-bounds neighbors are never swappable.
    #[must_use]
    pub fn swappable(&self, dx: i32, dy: i32, mover: Category) -> bool {
        self.get(dx, dy).is_some_and(|cell| cell.species.category().swappable_by(mover))
    }

    /// Overwrite the cell being processed without moving it — used to
    /// persist velocity or accumulator changes that didn't result in a
    /// swap this call.
    pub fn update_self(&mut self, cell: Cell) {
        self.cell = cell;
        self.grid.write_in_place(self.x, self.y, cell);
    }

    /// Swap the cell being processed with its neighbor at `(dx, dy)`.
    pub fn swap_to(&mut self, dx: i32, dy: i32) {
        if let Some(incoming) = self.get(dx, dy) {
            self.cell = incoming;
        }
        self.grid.swap(self.x, self.y, self.x + dx, self.y + dy);
    }

    /// Mark the chunk containing the cell being processed active for the
    /// next tick, regardless of whether this call ends up moving anything.
    pub fn mark_own_chunk_active(&mut self) {
        self.grid.activate_chunk(self.x as usize, self.y as usize);
    }

    /// Draw a uniform sample in `[0, 1)` from the grid's own RNG.
    pub fn random_unit(&mut self) -> f64 {
        self.grid.random_unit()
    }
}
