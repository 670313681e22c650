use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use rand::prelude::*;

use crate::*;

/// Decides which jump to take next.
pub trait Strategy {
    /// Pick a move for the current position, or `None` when no legal move is left.
    ///
    /// The board is mutable only so that candidates can be [probed](Board::probe);
    /// implementations must hand it back in the state they received it.
    fn next_move(&mut self, board: &mut Board) -> Option<Direction>;
}

impl<F: FnMut(&mut Board) -> Option<Direction>> Strategy for F {
    fn next_move(&mut self, board: &mut Board) -> Option<Direction> {
        self(board)
    }
}

/// Candidates whose follow-up leaves at most this many moves count as traps.
pub const TRAP_THRESHOLD: usize = 2;

/// Legal moves paired with the mobility left after taking each of them.
fn scored_moves(board: &mut Board) -> Vec<(Direction, usize)> {
    board
        .possible_moves()
        .into_iter()
        .filter_map(|dir| board.future_mobility(dir).map(|mobility| (dir, mobility)))
        .collect()
}

/// Greedily steers towards dead ends: takes the move after which the fewest moves remain.
/// Ties go to the first move in [`Direction::ALL`] order.
#[derive(Copy, Clone, Debug, Default)]
pub struct Minimizer;

impl Strategy for Minimizer {
    fn next_move(&mut self, board: &mut Board) -> Option<Direction> {
        let mut best: Option<(Direction, usize)> = None;
        for (dir, mobility) in scored_moves(board) {
            if best.is_none_or(|(_, least)| mobility < least) {
                best = Some((dir, mobility));
            }
        }
        log::trace!("minimizer picked {best:?}");
        best.map(|(dir, _)| dir)
    }
}

/// Picks at random among moves that leave at most [`TRAP_THRESHOLD`] follow-ups, falling
/// back to any legal move when there is no such trap.
#[derive(Clone, Debug)]
pub struct TrapSeeker<R = SmallRng> {
    rng: R,
}

impl TrapSeeker<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TrapSeeker<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for TrapSeeker<R> {
    fn next_move(&mut self, board: &mut Board) -> Option<Direction> {
        let scored = scored_moves(board);
        let traps: Vec<Direction> = scored
            .iter()
            .filter(|&&(_, mobility)| mobility <= TRAP_THRESHOLD)
            .map(|&(dir, _)| dir)
            .collect();

        let pool = if traps.is_empty() {
            scored.into_iter().map(|(dir, _)| dir).collect()
        } else {
            traps
        };

        let choice = pool.choose(&mut self.rng).copied();
        log::trace!("trap seeker picked {choice:?} out of {pool:?}");
        choice
    }
}

/// Uniformly random legal move, without lookahead.
#[derive(Clone, Debug)]
pub struct RandomMover<R = SmallRng> {
    rng: R,
}

impl RandomMover<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMover<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomMover<R> {
    fn next_move(&mut self, board: &mut Board) -> Option<Direction> {
        board.possible_moves().choose(&mut self.rng).copied()
    }
}

/// Built-in strategies by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Minimizer,
    TrapSeeker,
    Random,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [Self::Minimizer, Self::TrapSeeker, Self::Random];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimizer => "minimizer",
            Self::TrapSeeker => "trap-seeker",
            Self::Random => "random",
        }
    }

    /// `seed` is ignored by the deterministic strategies.
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            Self::Minimizer => Box::new(Minimizer),
            Self::TrapSeeker => Box::new(TrapSeeker::seeded(seed)),
            Self::Random => Box::new(RandomMover::seeded(seed)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or(GameError::UnknownStrategy)
    }
}
