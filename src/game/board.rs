use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};

/// The playing field, measured in grid cells.
///
/// A cell is addressed by a [`Position`] in `[0, width) × [0, height)`,
/// relative to the top-left corner of the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Bounds {
    /// Number of grid columns
    pub(super) width: u16,

    /// Number of grid rows
    pub(super) height: u16,
}

impl Bounds {
    /// Derive the grid dimensions from the size of the drawing surface: one
    /// grid row per terminal row, one grid column per
    /// [`CELL_WIDTH`][consts::CELL_WIDTH] terminal columns.
    pub(super) fn from_surface(surface: Size) -> Bounds {
        Bounds {
            width: surface.width / consts::CELL_WIDTH,
            height: surface.height,
        }
    }

    pub(super) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Iterate over every cell of the board
    pub(super) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }
}
