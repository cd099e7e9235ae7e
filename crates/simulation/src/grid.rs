//! Owns the cell array, the chunk-activity bitmap, and the RGBA color
//! buffer consumed by a renderer.
//!
//! Internally, cells live in world space where `+y` is up (`index(x, y) =
//! y * width + x`, down is `y - 1`). `set_cell`/`spawn_disk`/`get` accept
//! canvas-space coordinates (top-left origin) and invert `y` at that
//! boundary; nothing past the boundary ever sees canvas space again.

use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::api::SandApi;
use crate::cell::{Cell, Category, Species};
use crate::elements;
use crate::error::SimError;
use crate::palette;

pub struct Grid {
    width: usize,
    height: usize,
    chunk_size: usize,
    chunks_x: usize,
    chunks_y: usize,
    cells: Vec<Cell>,
    active_chunks: Vec<bool>,
    processed: Vec<bool>,
    changed_chunks: HashSet<usize>,
    color_buffer: Vec<u8>,
    rng: StdRng,
    generation: u64,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("chunk_size", &self.chunk_size)
            .field("generation", &self.generation)
            .field("active_chunks", &self.active_chunk_indices().len())
            .finish()
    }
}

impl Grid {
    /// Build an all-empty grid. `chunk_size` should exceed the fastest
    /// single-tick travel distance a behavior can cause (movable solids
    /// and liquids cap at 10 cells of fall, liquids disperse up to 5
    /// sideways) or the chunk-activity bitmap can undercount neighbors.
    #[must_use]
    pub fn new(width: usize, height: usize, chunk_size: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert!(chunk_size > 0, "chunk size must be positive");

        let chunks_x = width.div_ceil(chunk_size);
        let chunks_y = height.div_ceil(chunk_size);

        let mut grid = Self {
            width,
            height,
            chunk_size,
            chunks_x,
            chunks_y,
            cells: vec![Cell::empty(); width * height],
            active_chunks: vec![false; chunks_x * chunks_y],
            processed: vec![false; width * height],
            changed_chunks: HashSet::new(),
            color_buffer: vec![0u8; width * height * 4],
            rng: StdRng::from_entropy(),
            generation: 0,
        };
        grid.refresh_color_buffer_all();
        grid
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn color_buffer(&self) -> &[u8] {
        &self.color_buffer
    }

    #[must_use]
    pub fn element_names(&self) -> Vec<&'static str> {
        palette::element_names()
    }

    #[must_use]
    pub fn is_chunk_active(&self, cx: usize, cy: usize) -> bool {
        self.active_chunks[self.chunk_index(cx, cy)]
    }

    #[must_use]
    pub fn active_chunk_indices(&self) -> Vec<usize> {
        (0..self.active_chunks.len()).filter(|&i| self.active_chunks[i]).collect()
    }

    /// Read the cell at canvas-space `(x, y)`; `None` if out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let world_y = self.height - 1 - y;
        Some(self.cells[self.index(x, world_y)])
    }

    /// Paint a single cell at canvas-space `(x, y)` with the named
    /// material. Out-of-bounds coordinates are a silent no-op; an
    /// unrecognized name is rejected before anything is touched.
    pub fn set_cell(&mut self, x: usize, y: usize, name: &str) -> Result<(), SimError> {
        let cell = self.make_cell(name)?;
        if x >= self.width || y >= self.height {
            trace!(x, y, "set_cell out of bounds, ignoring");
            return Ok(());
        }
        let world_y = self.height - 1 - y;
        self.write_cell(x, world_y, cell);
        Ok(())
    }

    /// Fill every cell whose Euclidean distance to canvas-space `(cx, cy)`
    /// is strictly less than `r` with freshly constructed cells of the
    /// named material. A zero or negative radius touches nothing.
    pub fn spawn_disk(&mut self, cx: i64, cy: i64, r: f64, name: &str) -> Result<(), SimError> {
        // Validate the name before mutating anything.
        if Species::from_name(name).is_none() {
            return Err(SimError::UnknownMaterial(name.to_string()));
        }

        let r = r.max(0.0);
        let r_sq = r * r;
        let reach = r.ceil() as i64;

        let start_x = (cx - reach).max(0);
        let end_x = (cx + reach).min(self.width as i64 - 1);
        let start_y = (cy - reach).max(0);
        let end_y = (cy + reach).min(self.height as i64 - 1);
        if start_x > end_x || start_y > end_y {
            return Ok(());
        }

        for canvas_y in start_y..=end_y {
            for canvas_x in start_x..=end_x {
                let dx = (canvas_x - cx) as f64;
                let dy = (canvas_y - cy) as f64;
                if dx * dx + dy * dy >= r_sq {
                    continue;
                }
                let cell = self.make_cell(name)?;
                let world_y = self.height - 1 - canvas_y as usize;
                self.write_cell(canvas_x as usize, world_y, cell);
            }
        }
        Ok(())
    }

    /// Advance the simulation by one tick.
    ///
    /// Snapshots which chunks were active, clears the bitmaps that track
    /// this tick's work, then scans every row top-to-bottom with a
    /// per-row randomized horizontal direction. A cell already swapped
    /// into this tick, or sitting in a chunk that wasn't active last
    /// tick, is skipped.
    pub fn step(&mut self) {
        let prev_active = std::mem::replace(&mut self.active_chunks, vec![false; self.chunks_x * self.chunks_y]);
        self.processed.iter_mut().for_each(|p| *p = false);
        self.changed_chunks.clear();
        self.generation = self.generation.wrapping_add(1);

        for y in 0..self.height {
            if self.rng.gen_bool(0.5) {
                for x in (0..self.width).rev() {
                    self.step_cell(x, y, &prev_active);
                }
            } else {
                for x in 0..self.width {
                    self.step_cell(x, y, &prev_active);
                }
            }
        }

        self.refresh_changed_colors();
        trace!(generation = self.generation, active_chunks = self.active_chunk_indices().len(), "tick complete");
    }

    fn step_cell(&mut self, x: usize, y: usize, prev_active: &[bool]) {
        let idx = self.index(x, y);
        if self.processed[idx] {
            return;
        }
        let chunk_idx = self.chunk_index(x / self.chunk_size, y / self.chunk_size);
        if !prev_active[chunk_idx] {
            return;
        }
        let cell = self.cells[idx];
        let mut api = SandApi::new(self, x as i32, y as i32, cell);
        elements::update_cell(cell.species, &mut api);
    }

    fn make_cell(&mut self, name: &str) -> Result<Cell, SimError> {
        let species = Species::from_name(name).ok_or_else(|| {
            warn!(material = name, "rejected unknown material");
            SimError::UnknownMaterial(name.to_string())
        })?;
        let color = palette::color_of(name)?;
        let mut cell = Cell::new(species, color);
        match species.category() {
            Category::Liquid => cell.vx = if self.rng.gen_bool(0.5) { -1 } else { 1 },
            Category::Gas => cell.sideways_direction = if self.rng.gen_bool(0.5) { -1 } else { 1 },
            _ => {}
        }
        Ok(cell)
    }

    fn write_cell(&mut self, x: usize, world_y: usize, cell: Cell) {
        let idx = self.index(x, world_y);
        self.cells[idx] = cell;
        self.activate_chunk(x, world_y);
        let chunk_idx = self.chunk_index(x / self.chunk_size, world_y / self.chunk_size);
        self.refresh_chunk_colors(chunk_idx);
        debug!(x, world_y, species = ?cell.species, "painted cell");
    }

    pub(crate) fn probe(&self, x: i32, y: i32) -> Option<Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.cells[self.index(x as usize, y as usize)])
    }

    #[must_use]
    pub(crate) fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub(crate) fn write_in_place(&mut self, x: i32, y: i32, cell: Cell) {
        let idx = self.index(x as usize, y as usize);
        self.cells[idx] = cell;
    }

    pub(crate) fn swap(&mut self, fx: i32, fy: i32, tx: i32, ty: i32) {
        let from_idx = self.index(fx as usize, fy as usize);
        let to_idx = self.index(tx as usize, ty as usize);
        self.cells.swap(from_idx, to_idx);
        self.processed[to_idx] = true;

        let from_chunk = self.chunk_index(fx as usize / self.chunk_size, fy as usize / self.chunk_size);
        let to_chunk = self.chunk_index(tx as usize / self.chunk_size, ty as usize / self.chunk_size);
        self.changed_chunks.insert(from_chunk);
        self.changed_chunks.insert(to_chunk);
        self.mark_neighbors_active(fx as usize, fy as usize);
    }

    pub(crate) fn activate_chunk(&mut self, x: usize, y: usize) {
        let idx = self.chunk_index(x / self.chunk_size, y / self.chunk_size);
        self.active_chunks[idx] = true;
    }

    pub(crate) fn random_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn mark_neighbors_active(&mut self, x: usize, y: usize) {
        let cx = (x / self.chunk_size) as i64;
        let cy = (y / self.chunk_size) as i64;
        for dy in -1i64..=1 {
            let ny = cy + dy;
            if ny < 0 || ny as usize >= self.chunks_y {
                continue;
            }
            for dx in -1i64..=1 {
                let nx = cx + dx;
                if nx < 0 || nx as usize >= self.chunks_x {
                    continue;
                }
                let idx = self.chunk_index(nx as usize, ny as usize);
                self.active_chunks[idx] = true;
            }
        }
    }

    fn refresh_changed_colors(&mut self) {
        let chunks: Vec<usize> = self.changed_chunks.iter().copied().collect();
        for idx in chunks {
            self.refresh_chunk_colors(idx);
        }
    }

    fn refresh_chunk_colors(&mut self, chunk_idx: usize) {
        let cx = chunk_idx % self.chunks_x;
        let cy = chunk_idx / self.chunks_x;
        let start_x = cx * self.chunk_size;
        let start_y = cy * self.chunk_size;
        let end_x = (start_x + self.chunk_size).min(self.width);
        let end_y = (start_y + self.chunk_size).min(self.height);
        for y in start_y..end_y {
            for x in start_x..end_x {
                self.write_color_buffer_cell(x, y);
            }
        }
    }

    fn refresh_color_buffer_all(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.write_color_buffer_cell(x, y);
            }
        }
    }

    fn write_color_buffer_cell(&mut self, x: usize, world_y: usize) {
        let canvas_y = self.height - 1 - world_y;
        let color = self.cells[self.index(x, world_y)].color;
        let base = (canvas_y * self.width + x) * 4;
        self.color_buffer[base..base + 4].copy_from_slice(&color);
    }

    fn chunk_index(&self, cx: usize, cy: usize) -> usize {
        cy * self.chunks_x + cx
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}
