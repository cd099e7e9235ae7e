//! Falling-sand cellular automaton core, compiled to WASM.

pub mod api;
pub mod cell;
pub mod elements;
pub mod error;
mod grid;
pub mod palette;

pub use error::SimError;
pub use grid::Grid;

use std::fmt;

use wasm_bindgen::prelude::*;

fn js_error(err: SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-exported wrapper around [`Grid`] for browser consumption.
#[wasm_bindgen]
pub struct Universe {
    grid: Grid,
}

impl fmt::Debug for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("generation", &self.grid.generation())
            .finish()
    }
}

#[wasm_bindgen]
impl Universe {
    /// Create a new universe with the given dimensions and chunk size, all
    /// cells empty.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: usize, height: usize, chunk_size: usize) -> Self {
        Self { grid: Grid::new(width, height, chunk_size) }
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self) {
        self.grid.step();
    }

    /// Paint a cell at canvas-space `(x, y)` with the named material.
    pub fn set_cell(&mut self, x: usize, y: usize, name: &str) -> Result<(), JsValue> {
        self.grid.set_cell(x, y, name).map_err(js_error)
    }

    /// Fill a disk of the named material centered at canvas-space `(cx, cy)`.
    pub fn spawn_disk(&mut self, cx: i32, cy: i32, r: f64, name: &str) -> Result<(), JsValue> {
        self.grid.spawn_disk(i64::from(cx), i64::from(cy), r, name).map_err(js_error)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Pointer to the RGBA color buffer, suitable for direct GPU texture upload.
    #[must_use]
    pub fn color_buffer_ptr(&self) -> *const u8 {
        self.grid.color_buffer().as_ptr()
    }

    #[must_use]
    pub fn color_buffer_len(&self) -> usize {
        self.grid.color_buffer().len()
    }

    #[must_use]
    pub fn is_chunk_active(&self, cx: usize, cy: usize) -> bool {
        self.grid.is_chunk_active(cx, cy)
    }

    #[must_use]
    pub fn active_chunk_indices(&self) -> Vec<u32> {
        self.grid.active_chunk_indices().into_iter().map(|i| i as u32).collect()
    }

    /// The canonical, human-facing names of every material `set_cell`/`spawn_disk` accept.
    #[must_use]
    pub fn element_names() -> Vec<String> {
        palette::element_names().into_iter().map(String::from).collect()
    }
}
