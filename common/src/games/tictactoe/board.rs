use std::ops::{Deref, DerefMut};

use super::error::{GameError, MoveRejection};
use super::types::{Mark, Player, WinningLine, CELL_COUNT};

/// Rows, then columns, then diagonals. Winner lookups report the first
/// completed line in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parses nine characters (`X`, `O`, anything else empty), row-major.
    #[cfg(test)]
    pub(crate) fn parse(layout: &str) -> Self {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (cell, ch) in cells.iter_mut().zip(layout.chars()) {
            *cell = match ch {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        match self.cells.get(index) {
            None => Err(MoveRejection::OutOfBounds(index).into()),
            Some(mark) if !mark.is_empty() => Err(MoveRejection::Occupied(index).into()),
            Some(_) => {
                self.cells[index] = player.mark();
                Ok(())
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|line| line.player)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a];
            if mark == self.cells[b] && mark == self.cells[c] {
                mark.player().map(|player| WinningLine::new(player, [a, b, c]))
            } else {
                None
            }
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Only meaningful once `winner()` returned `None`: a full board with a
    /// completed line is a win, not a draw.
    pub fn is_draw(&self) -> bool {
        self.is_full()
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn count(&self, player: Player) -> usize {
        let mark = player.mark();
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Places a mark that is removed again when the returned guard drops.
    pub(crate) fn place_scoped(&mut self, index: usize, player: Player) -> ScopedMove<'_> {
        debug_assert!(self.cells[index].is_empty());
        self.cells[index] = player.mark();
        ScopedMove { board: self, index }
    }
}

pub(crate) struct ScopedMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Mark::Empty;
    }
}
