use alloc::vec::Vec;
use ndarray::Array2;
use scopeguard::guard;
use smallvec::SmallVec;

use crate::*;

/// Everything needed to roll back one simulated move.
#[derive(Clone, Debug, PartialEq)]
struct UndoFrame {
    player: Coord2,
    visited_count: CellCount,
    /// Cells cleared by the move with the step value they held before.
    cleared: SmallVec<[(Coord2, Step); 8]>,
}

/// Game state of the jump puzzle: step values, visited cells and the player.
///
/// Cloning produces a fully independent board with the same logical state, which is how
/// parallel playouts and copy-on-probe lookahead obtain their own scratch state. The clone
/// also carries pending [`simulate`](Self::simulate) records, so it can be undone the same way.
///
/// Equality compares the logical state only: grid, visited cells, player and score.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Array2<Step>,
    visited: Array2<bool>,
    player: Coord2,
    visited_count: CellCount,
    journal: Vec<UndoFrame>,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.player == other.player
            && self.visited_count == other.visited_count
            && self.visited == other.visited
            && self.grid == other.grid
    }
}

impl Board {
    /// Marks the start cell visited and clears its step value.
    pub fn new(layout: BoardLayout) -> Self {
        let (mut grid, start) = layout.into_parts();
        let mut visited = Array2::from_elem(grid.dim(), false);

        visited[start.to_nd_index()] = true;
        grid[start.to_nd_index()] = 0;

        Self {
            grid,
            visited,
            player: start,
            visited_count: 1,
            journal: Vec::new(),
        }
    }

    pub fn from_rows(rows: &[Vec<Step>], start: Coord2) -> Result<Self> {
        Ok(Self::new(BoardLayout::from_rows(rows, start)?))
    }

    pub fn size(&self) -> Coord {
        self.grid.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size())
    }

    pub fn player(&self) -> Coord2 {
        self.player
    }

    pub fn score(&self) -> CellCount {
        self.visited_count
    }

    pub fn coverage_percentage(&self) -> f64 {
        100.0 * f64::from(self.visited_count) / f64::from(self.total_cells())
    }

    /// Step value at `coords`, or 0 once the cell has been visited.
    ///
    /// # Panics
    ///
    /// If `coords` is outside the board; check with [`is_valid_position`](Self::is_valid_position).
    pub fn value_at(&self, coords: Coord2) -> Step {
        self.grid[coords.to_nd_index()]
    }

    /// # Panics
    ///
    /// If `coords` is outside the board; check with [`is_valid_position`](Self::is_valid_position).
    pub fn is_visited(&self, coords: Coord2) -> bool {
        self.visited[coords.to_nd_index()]
    }

    pub fn is_valid_position(&self, coords: Coord2) -> bool {
        coords.0 < self.size() && coords.1 < self.size()
    }

    /// Snapshot of the current step values, visited cells reading as 0.
    pub fn copy_grid(&self) -> Array2<Step> {
        self.grid.clone()
    }

    /// Number of simulated moves still waiting for their [`undo`](Self::undo).
    pub fn pending_probes(&self) -> usize {
        self.journal.len()
    }

    pub fn is_game_over(&self) -> bool {
        !Direction::ALL.into_iter().any(|dir| self.can_move(dir))
    }

    /// Every direction with a legal jump, in [`Direction::ALL`] order.
    pub fn possible_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_move(dir))
            .collect()
    }

    pub fn can_move(&self, dir: Direction) -> bool {
        self.jump_length(dir).is_some()
    }

    /// Length of the jump in `dir`, if the whole path is on the board and unvisited.
    ///
    /// The length is read from the adjacent cell only. A zero step would land back on the
    /// current cell, so it never yields a legal jump.
    fn jump_length(&self, dir: Direction) -> Option<Step> {
        let side = self.size();
        let adjacent = offset(self.player, dir, 1, side)?;
        if self.is_visited(adjacent) {
            return None;
        }

        let step = self.value_at(adjacent);
        if step == 0 {
            return None;
        }

        let target = offset(self.player, dir, step, side)?;
        if self.is_visited(target) {
            return None;
        }

        for distance in 1..=step {
            match offset(self.player, dir, distance, side) {
                Some(cell) if !self.is_visited(cell) => continue,
                _ => return None,
            }
        }

        Some(step)
    }

    /// Commits the jump in `dir`. Returns `false` and leaves the board untouched when the
    /// jump is not legal from the current position.
    #[must_use]
    pub fn apply_move(&mut self, dir: Direction) -> bool {
        match self.jump_length(dir) {
            Some(step) => {
                self.walk(dir, step, None);
                log::debug!(
                    "jumped {:?} by {} to {:?}, score {}",
                    dir,
                    step,
                    self.player,
                    self.visited_count
                );
                true
            }
            None => false,
        }
    }

    /// Like [`apply_move`](Self::apply_move), but remembers enough to restore the current
    /// state with [`undo`](Self::undo). Illegal moves record nothing.
    ///
    /// Prefer [`probe`](Self::probe), which cannot leave a simulation unmatched.
    #[must_use]
    pub fn simulate(&mut self, dir: Direction) -> bool {
        let Some(step) = self.jump_length(dir) else {
            return false;
        };

        let mut frame = UndoFrame {
            player: self.player,
            visited_count: self.visited_count,
            cleared: SmallVec::new(),
        };
        self.walk(dir, step, Some(&mut frame));
        self.journal.push(frame);
        true
    }

    /// Restores the state from before the most recent outstanding [`simulate`](Self::simulate).
    pub fn undo(&mut self) -> Result<()> {
        let frame = self.journal.pop().ok_or(GameError::NothingToUndo)?;

        for &(cell, step) in frame.cleared.iter().rev() {
            self.visited[cell.to_nd_index()] = false;
            self.grid[cell.to_nd_index()] = step;
        }
        self.player = frame.player;
        self.visited_count = frame.visited_count;
        Ok(())
    }

    /// Runs `f` against the state after jumping in `dir`, then rolls the jump back, also
    /// when `f` unwinds. Returns `None` if the jump is illegal.
    pub fn probe<R>(&mut self, dir: Direction, f: impl FnOnce(&Board) -> R) -> Option<R> {
        if !self.simulate(dir) {
            return None;
        }

        let depth = self.journal.len();
        let probed = guard(self, |board| {
            debug_assert_eq!(board.journal.len(), depth, "unbalanced probe");
            // The frame pushed above is still on top.
            let _ = board.undo();
        });
        let result = f(&**probed);
        log::trace!("probed {:?} from {:?}", dir, probed.journal[depth - 1].player);
        Some(result)
    }

    /// Same contract as [`probe`](Self::probe), evaluated on a private copy so that `self`
    /// is never mutated.
    pub fn probe_detached<R>(&self, dir: Direction, f: impl FnOnce(&Board) -> R) -> Option<R> {
        let mut scratch = self.clone();
        scratch.journal.clear();
        scratch.simulate(dir).then(|| f(&scratch))
    }

    /// Count of legal moves left after jumping in `dir`.
    pub fn future_mobility(&mut self, dir: Direction) -> Option<usize> {
        self.probe(dir, |board| board.possible_moves().len())
    }

    fn walk(&mut self, dir: Direction, step: Step, mut frame: Option<&mut UndoFrame>) {
        let side = self.size();
        for distance in 1..=step {
            let Some(cell) = offset(self.player, dir, distance, side) else {
                unreachable!("jump path was validated");
            };
            if let Some(frame) = frame.as_deref_mut() {
                frame.cleared.push((cell, self.grid[cell.to_nd_index()]));
            }
            self.visited[cell.to_nd_index()] = true;
            self.grid[cell.to_nd_index()] = 0;
            self.visited_count += 1;
        }

        self.player = offset(self.player, dir, step, side).unwrap_or(self.player);
    }
}
