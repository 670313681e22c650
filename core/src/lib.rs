#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::Deserialize;

pub use board::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use strategy::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod render;
mod session;
mod strategy;
mod types;

/// Validated construction input for a [`Board`]: a square grid of step values
/// and the cell the player starts on.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct BoardLayout {
    grid: Array2<Step>,
    start: Coord2,
}

#[derive(Deserialize)]
struct RawLayout {
    grid: Vec<Vec<Step>>,
    start: Coord2,
}

impl TryFrom<RawLayout> for BoardLayout {
    type Error = GameError;

    fn try_from(raw: RawLayout) -> Result<Self> {
        Self::from_rows(&raw.grid, raw.start)
    }
}

impl BoardLayout {
    pub fn new(grid: Array2<Step>, start: Coord2) -> Result<Self> {
        let (rows, cols) = grid.dim();
        if rows == 0 || rows != cols || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }

        let layout = Self { grid, start };
        layout.validate_coords(start)?;
        Ok(layout)
    }

    /// Builds a layout from row-major rows.
    ///
    /// Step values are [`Step`]s, so at most 255. A step that large already leaves any board,
    /// and JSON layouts with bigger numbers fail to deserialize.
    pub fn from_rows(rows: &[Vec<Step>], start: Coord2) -> Result<Self> {
        let side = rows.len();
        if rows.iter().any(|row| row.len() != side) {
            return Err(GameError::InvalidBoardShape);
        }

        let grid = Array2::from_shape_vec((side, side), rows.concat())
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::new(grid, start)
    }

    /// Layout where every cell carries the same step value.
    pub fn uniform(side: Coord, step: Step, start: Coord2) -> Result<Self> {
        let side = usize::from(side);
        Self::new(Array2::from_elem((side, side), step), start)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let side = self.size();
        if coords.0 < side && coords.1 < side {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        self.grid.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn start(&self) -> Coord2 {
        self.start
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size())
    }

    pub fn grid(&self) -> &Array2<Step> {
        &self.grid
    }

    pub(crate) fn into_parts(self) -> (Array2<Step>, Coord2) {
        (self.grid, self.start)
    }
}

impl Index<Coord2> for BoardLayout {
    type Output = Step;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.grid[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn rejects_out_of_bounds_start() {
        assert_eq!(
            BoardLayout::uniform(3, 1, (3, 0)),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            BoardLayout::uniform(3, 1, (0, 7)),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn rejects_non_square_grids() {
        let ragged = vec![vec![1, 2, 3], vec![1, 2]];
        assert_eq!(
            BoardLayout::from_rows(&ragged, (0, 0)),
            Err(GameError::InvalidBoardShape)
        );

        let wide = Array2::from_elem((2, 3), 1);
        assert_eq!(
            BoardLayout::new(wide, (0, 0)),
            Err(GameError::InvalidBoardShape)
        );

        assert_eq!(
            BoardLayout::from_rows(&[], (0, 0)),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn from_rows_keeps_row_major_order() {
        let layout = BoardLayout::from_rows(&[vec![1, 2], vec![3, 4]], (1, 0)).unwrap();

        assert_eq!(layout.size(), 2);
        assert_eq!(layout.start(), (1, 0));
        assert_eq!(layout[(0, 1)], 2);
        assert_eq!(layout[(1, 0)], 3);
    }

    #[test]
    fn deserializes_from_json() {
        let layout: BoardLayout =
            serde_json::from_str(r#"{"grid": [[1, 2], [3, 4]], "start": [0, 1]}"#).unwrap();

        assert_eq!(layout.start(), (0, 1));
        assert_eq!(layout[(1, 1)], 4);
        assert_eq!(layout.total_cells(), 4);
    }

    #[test]
    fn json_validation_rejects_bad_layouts() {
        let ragged = serde_json::from_str::<BoardLayout>(r#"{"grid": [[1, 2], [3]], "start": [0, 0]}"#);
        assert!(ragged.is_err());

        let outside = serde_json::from_str::<BoardLayout>(r#"{"grid": [[1]], "start": [0, 1]}"#);
        assert!(outside.is_err());

        let huge_step = serde_json::from_str::<BoardLayout>(r#"{"grid": [[1, 300], [1, 1]], "start": [0, 0]}"#);
        assert!(huge_step.is_err());
    }
}
