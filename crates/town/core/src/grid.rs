//! Logical town grid and pointer-to-cell conversion.
//!
//! The grid is fixed at 40 columns by 15 rows. Rendering surfaces of any size
//! map onto it through fractions of their width and height, so every frontend
//! shares the same hit-testing rule.
use std::fmt;

pub const GRID_WIDTH: u32 = 40;
pub const GRID_HEIGHT: u32 = 15;

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("pointer fraction ({frac_x}, {frac_y}) is not a finite number")]
    NotFinite { frac_x: f64, frac_y: f64 },

    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i64, y: i64 },
}

/// Discrete grid position expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when `other` sits exactly one step away along a single axis.
    pub fn is_orthogonally_adjacent(self, other: Position) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Placement of one cell on a rendering surface, in percent of its size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    /// The town map every act is edited on.
    pub const TOWN: Self = Self::new(GRID_WIDTH, GRID_HEIGHT);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Converts a pointer location, given as fractions of the surface width
    /// and height, into the cell underneath it.
    pub fn cell_from_fraction(&self, frac_x: f64, frac_y: f64) -> Result<Position, GridError> {
        if !frac_x.is_finite() || !frac_y.is_finite() {
            return Err(GridError::NotFinite { frac_x, frac_y });
        }

        let col = (frac_x * self.width as f64).floor();
        let row = (frac_y * self.height as f64).floor();
        let (x, y) = (col as i64, row as i64);

        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return Err(GridError::OutOfBounds { x, y });
        }

        Ok(Position::new(x as i32, y as i32))
    }

    /// Screen-relative box of a cell, used by render models.
    pub fn cell_rect(&self, position: Position) -> CellRect {
        let (w, h) = (self.width as f64, self.height as f64);
        CellRect {
            left: position.x as f64 * 100.0 / w,
            top: position.y as f64 * 100.0 / h,
            width: 100.0 / w,
            height: 100.0 / h,
        }
    }

    /// Moves one step from `origin`, clamping each axis to the grid.
    pub fn clamped_step(&self, origin: Position, dx: i32, dy: i32) -> Position {
        let max_x = self.width.saturating_sub(1) as i32;
        let max_y = self.height.saturating_sub(1) as i32;
        Position::new(
            (origin.x + dx).clamp(0, max_x),
            (origin.y + dy).clamp(0, max_y),
        )
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self::TOWN
    }
}
