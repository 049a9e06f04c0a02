use super::board::Bounds;
use crossterm::event::KeyCode;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Move `pos` one cell in this direction.  Returns `None` if the step
    /// would leave `bounds`, i.e. a wall collision.
    pub(super) fn advance(self, pos: Position, bounds: Bounds) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => {
                y = y.checked_sub(1)?;
            }
            Direction::East => {
                x = x.checked_add(1).filter(|&xx| xx < bounds.width)?;
            }
            Direction::South => {
                y = y.checked_add(1).filter(|&yy| yy < bounds.height)?;
            }
            Direction::West => {
                x = x.checked_sub(1)?;
            }
        }
        Some(Position { x, y })
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Map a directional key to its direction.  All other keys are ignored
    /// for steering purposes.
    pub(crate) fn from_key(code: KeyCode) -> Option<Direction> {
        match code {
            KeyCode::Char('w' | 'k') | KeyCode::Up => Some(Direction::North),
            KeyCode::Char('s' | 'j') | KeyCode::Down => Some(Direction::South),
            KeyCode::Char('a' | 'h') | KeyCode::Left => Some(Direction::West),
            KeyCode::Char('d' | 'l') | KeyCode::Right => Some(Direction::East),
            _ => None,
        }
    }
}
