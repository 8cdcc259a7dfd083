//! Mapping between the continuous world and the discrete cell grid.

use crate::error::GridError;
use formic_core::{Cell, Point};

/// Geometry of a discretized world: continuous extent plus cell size.
///
/// The grid has `cols × rows` cells, each `cell_size × cell_size` world
/// units, derived by integer division of the world extent. A world whose
/// extent is not a multiple of the cell size keeps its full continuous
/// extent for movement; positions past the last whole cell fall outside
/// the grid and hit the out-of-range no-op policy of
/// [`ScalarField`](crate::ScalarField).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    world_width: f32,
    world_height: f32,
    cell_size: f32,
    cols: u32,
    rows: u32,
}

impl GridSpec {
    /// Create a grid spec, validating the geometry.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if a dimension or the cell size is
    /// non-finite or not positive, or if the world is smaller than one
    /// cell on either axis.
    pub fn new(world_width: f32, world_height: f32, cell_size: f32) -> Result<Self, GridError> {
        if !world_width.is_finite() || world_width <= 0.0 {
            return Err(GridError::InvalidWorldSize {
                axis: "width",
                value: world_width,
            });
        }
        if !world_height.is_finite() || world_height <= 0.0 {
            return Err(GridError::InvalidWorldSize {
                axis: "height",
                value: world_height,
            });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize { value: cell_size });
        }
        let cols = (world_width / cell_size).floor() as u32;
        let rows = (world_height / cell_size).floor() as u32;
        if cols == 0 {
            return Err(GridError::EmptyGrid { axis: "width" });
        }
        if rows == 0 {
            return Err(GridError::EmptyGrid { axis: "height" });
        }
        Ok(Self {
            world_width,
            world_height,
            cell_size,
            cols,
            rows,
        })
    }

    /// Continuous world width.
    pub fn world_width(&self) -> f32 {
        self.world_width
    }

    /// Continuous world height.
    pub fn world_height(&self) -> f32 {
        self.world_height
    }

    /// Edge length of one cell, in world units.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// The cell containing a continuous position.
    ///
    /// Total over all inputs: positions outside the world map to
    /// out-of-range cells, which field operations treat as no-ops.
    pub fn cell_of(&self, p: Point) -> Cell {
        Cell::new(
            (p.x / self.cell_size).floor() as i32,
            (p.y / self.cell_size).floor() as i32,
        )
    }

    /// The continuous center of a cell.
    pub fn cell_center(&self, cell: Cell) -> Point {
        Point::new(
            (cell.col as f32 + 0.5) * self.cell_size,
            (cell.row as f32 + 0.5) * self.cell_size,
        )
    }

    /// Whether a cell lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as u32) < self.cols
            && (cell.row as u32) < self.rows
    }

    /// Row-major flat index of an in-range cell; `None` out of range.
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some((cell.row as usize) * (self.cols as usize) + cell.col as usize)
        } else {
            None
        }
    }
}
