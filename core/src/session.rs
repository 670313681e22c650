use alloc::vec::Vec;
use serde::Serialize;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum EndReason {
    /// No legal move is left on the board.
    NoMoves,
    /// The strategy gave up although legal moves remained.
    Resigned,
    /// The strategy recommended a move the board rejected.
    IllegalMove(Direction),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameReport {
    pub turns: usize,
    pub score: CellCount,
    pub total_cells: CellCount,
    pub coverage: f64,
    pub moves: Vec<Direction>,
    /// `None` while the game is still running.
    pub end_reason: Option<EndReason>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TurnOutcome {
    Moved(Direction),
    Finished(EndReason),
}

/// Drives one board with one strategy, a turn at a time.
pub struct Session<'s, S: Strategy + ?Sized> {
    board: Board,
    strategy: &'s mut S,
    moves: Vec<Direction>,
    end_reason: Option<EndReason>,
}

impl<'s, S: Strategy + ?Sized> Session<'s, S> {
    pub fn new(board: Board, strategy: &'s mut S) -> Self {
        Self {
            board,
            strategy,
            moves: Vec::new(),
            end_reason: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_finished(&self) -> bool {
        self.end_reason.is_some()
    }

    /// Asks the strategy for a move and commits it. Once finished, keeps reporting the same
    /// end reason.
    pub fn step(&mut self) -> TurnOutcome {
        if let Some(reason) = self.end_reason {
            return TurnOutcome::Finished(reason);
        }

        if self.board.is_game_over() {
            return self.finish(EndReason::NoMoves);
        }

        let Some(dir) = self.strategy.next_move(&mut self.board) else {
            return self.finish(EndReason::Resigned);
        };

        if !self.board.apply_move(dir) {
            log::warn!(
                "strategy proposed illegal move {:?} at {:?}",
                dir,
                self.board.player()
            );
            return self.finish(EndReason::IllegalMove(dir));
        }

        self.moves.push(dir);
        TurnOutcome::Moved(dir)
    }

    pub fn run(mut self) -> GameReport {
        while let TurnOutcome::Moved(_) = self.step() {}
        self.report()
    }

    pub fn report(&self) -> GameReport {
        GameReport {
            turns: self.moves.len(),
            score: self.board.score(),
            total_cells: self.board.total_cells(),
            coverage: self.board.coverage_percentage(),
            moves: self.moves.clone(),
            end_reason: self.end_reason,
        }
    }

    fn finish(&mut self, reason: EndReason) -> TurnOutcome {
        log::debug!(
            "game over after {} turns: {:?}, score {}",
            self.moves.len(),
            reason,
            self.board.score()
        );
        self.end_reason = Some(reason);
        TurnOutcome::Finished(reason)
    }
}

/// Plays `board` to the end with `strategy`.
pub fn play<S: Strategy + ?Sized>(board: Board, strategy: &mut S) -> GameReport {
    Session::new(board, strategy).run()
}
