use serde::Serialize;

/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Step value printed in a grid cell.
///
/// Any step of at least the board side already jumps off the board, so values above 255
/// are not representable but would never be legal either.
pub type Step = u8;

/// Count type used for visited-cell and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn square(side: Coord) -> CellCount {
    let side = side as CellCount;
    side * side
}

/// One of the eight unit directions a jump can take.
///
/// The declaration order is the enumeration order used by
/// [`Board::possible_moves`](crate::Board::possible_moves), and strategies break
/// ties by it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Self::North,
        Self::South,
        Self::West,
        Self::East,
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// `(d_row, d_col)` delta of a single step.
    pub const fn delta(self) -> (isize, isize) {
        use Direction::*;
        match self {
            North => (-1, 0),
            South => (1, 0),
            West => (0, -1),
            East => (0, 1),
            NorthWest => (-1, -1),
            NorthEast => (-1, 1),
            SouthWest => (1, -1),
            SouthEast => (1, 1),
        }
    }

    pub fn from_delta(delta: (isize, isize)) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.delta() == delta)
    }
}

/// Moves `distance` steps from `coords` along `dir`, returning a value only
/// when the result stays inside a `side`×`side` board.
pub fn offset(coords: Coord2, dir: Direction, distance: Step, side: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = dir.delta();
    let distance = isize::from(distance);

    let next_row = isize::from(row) + d_row * distance;
    let next_col = isize::from(col) + d_col * distance;
    let side = isize::from(side);

    if !(0..side).contains(&next_row) || !(0..side).contains(&next_col) {
        return None;
    }

    Some((next_row.try_into().ok()?, next_col.try_into().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_in_bounds() {
        assert_eq!(offset((1, 1), Direction::NorthWest, 1, 3), Some((0, 0)));
        assert_eq!(offset((1, 1), Direction::SouthEast, 1, 3), Some((2, 2)));
        assert_eq!(offset((0, 0), Direction::North, 1, 3), None);
        assert_eq!(offset((0, 0), Direction::East, 3, 3), None);
        assert_eq!(offset((2, 0), Direction::NorthEast, 2, 3), Some((0, 2)));
    }

    #[test]
    fn offset_handles_large_distances_near_the_edge() {
        assert_eq!(offset((254, 254), Direction::SouthEast, 255, 255), None);
        assert_eq!(offset((0, 254), Direction::West, 254, 255), Some((0, 0)));
    }

    #[test]
    fn directions_round_trip_through_deltas() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_delta(dir.delta()), Some(dir));
        }
        assert_eq!(Direction::from_delta((0, 0)), None);
        assert_eq!(Direction::from_delta((2, 0)), None);
    }
}
