//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Time between input samples and redraws
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Width of one grid cell in terminal columns.  The snake and food glyphs
/// occupy the first column of their cell; the remaining column is left as a
/// padding gap between adjacent segments.
pub(crate) const CELL_WIDTH: u16 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Default size of the drawing surface (in terminal cells) when no
/// `--width`/`--height` is given; chosen so that the board plus its border
/// fills [`DISPLAY_SIZE`].
pub(crate) const DEFAULT_SURFACE_SIZE: Size = Size {
    width: 76,
    height: 22,
};

/// Smallest allowed drawing surface: a 2×2-cell grid, so that there is
/// always at least one free cell for the food next to the starting snake
pub(crate) const MIN_SURFACE_SIZE: Size = Size {
    width: 2 * CELL_WIDTH,
    height: 2,
};

/// Glyph for the snake's segments
pub(crate) const SNAKE_SYMBOL: char = '█';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '█';

/// Style for the snake
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::Red);

/// Style for the board background
pub(crate) const BOARD_STYLE: Style = Style::new().bg(Color::DarkGray);
