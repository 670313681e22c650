use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

pub trait LayoutGenerator {
    fn generate(self) -> Result<BoardLayout>;
}

/// Fills the board with uniformly random step values in `1..=max_step`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
    size: Coord,
    max_step: Step,
    start: Option<Coord2>,
}

impl RandomLayoutGenerator {
    /// The player starts in the centre cell unless [`with_start`](Self::with_start) says otherwise.
    pub fn new(seed: u64, size: Coord, max_step: Step) -> Self {
        Self {
            seed,
            size,
            max_step,
            start: None,
        }
    }

    pub fn with_start(self, start: Coord2) -> Self {
        Self {
            start: Some(start),
            ..self
        }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self) -> Result<BoardLayout> {
        use rand::prelude::*;

        if self.size == 0 {
            return Err(GameError::InvalidBoardShape);
        }

        let max_step = if self.max_step == 0 {
            log::warn!("Maximum step of 0 leaves no legal jumps, using 1 instead");
            1
        } else {
            self.max_step
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let side = usize::from(self.size);
        let cells: Vec<Step> = (0..side * side)
            .map(|_| rng.random_range(1..=max_step))
            .collect();
        let grid = Array2::from_shape_vec((side, side), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;

        let centre = self.size / 2;
        let start = self.start.unwrap_or((centre, centre));
        log::debug!(
            "generated {0}x{0} layout, steps 1..={1}, start {2:?}, seed {3}",
            self.size,
            max_step,
            start,
            self.seed
        );
        BoardLayout::new(grid, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_layout() {
        let a = RandomLayoutGenerator::new(7, 9, 4).generate().unwrap();
        let b = RandomLayoutGenerator::new(7, 9, 4).generate().unwrap();
        let c = RandomLayoutGenerator::new(8, 9, 4).generate().unwrap();

        assert_eq!(a, b);
        assert_ne!(a.grid(), c.grid());
    }

    #[test]
    fn steps_stay_in_range_and_start_is_centred() {
        let layout = RandomLayoutGenerator::new(3, 10, 3).generate().unwrap();

        assert_eq!(layout.start(), (5, 5));
        assert!(layout.grid().iter().all(|&step| (1..=3).contains(&step)));
    }

    #[test]
    fn zero_max_step_is_clamped() {
        let layout = RandomLayoutGenerator::new(1, 4, 0).generate().unwrap();

        assert!(layout.grid().iter().all(|&step| step == 1));
    }

    #[test]
    fn custom_start_is_validated() {
        let generator = RandomLayoutGenerator::new(1, 4, 2);

        assert_eq!(
            generator.clone().with_start((0, 3)).generate().unwrap().start(),
            (0, 3)
        );
        assert_eq!(
            generator.with_start((4, 0)).generate(),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            RandomLayoutGenerator::new(1, 0, 2).generate(),
            Err(GameError::InvalidBoardShape)
        );
    }
}
