use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake's body as an ordered sequence of grid cells, head at the front,
/// tail at the back.  Never empty.
///
/// All positions are relative to the top-left corner of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    pub(super) cells: VecDeque<Position>,
}

impl Snake {
    /// Create a new snake consisting of the single cell `head`
    pub(super) fn spawn(head: Position) -> Snake {
        Snake {
            cells: VecDeque::from([head]),
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        *self
            .cells
            .front()
            .expect("snake should always have at least one cell")
    }

    pub(super) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(super) fn cells(&self) -> &VecDeque<Position> {
        &self.cells
    }

    pub(super) fn contains(&self, cell: Position) -> bool {
        self.cells.contains(&cell)
    }

    /// Would moving the head to `cell` run the snake into its own body?
    ///
    /// The tail cell is excluded: it vacates during the same move, so
    /// chasing one's own tail is legal.
    pub(super) fn hits_body(&self, cell: Position) -> bool {
        self.cells
            .iter()
            .take(self.cells.len() - 1)
            .any(|&c| c == cell)
    }

    /// Move the head to `head` and shift every trailing segment into its
    /// predecessor's old cell.  Returns the vacated tail cell.
    pub(super) fn slither(&mut self, head: Position) -> Position {
        self.cells.push_front(head);
        self.cells
            .pop_back()
            .expect("snake should always have at least one cell")
    }

    /// Append a new tail segment at `cell` in response to eating food
    pub(super) fn grow_tail(&mut self, cell: Position) {
        self.cells.push_back(cell);
    }
}
