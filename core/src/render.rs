use core::fmt;

use crate::*;

/// Console dump: the player as `*`, visited cells blank, other cells their step value.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let side = self.size();
        let mut line_sep = "";
        for row in 0..side {
            f.write_str(line_sep)?;
            for col in 0..side {
                let coords = (row, col);
                if coords == self.player() {
                    f.write_str(" * ")?;
                } else if self.is_visited(coords) {
                    f.write_str("   ")?;
                } else {
                    write!(f, " {} ", self.value_at(coords))?;
                }
            }
            line_sep = "\n";
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn renders_player_visited_and_values() {
        let mut board = Board::from_rows(&[vec![1, 2], vec![3, 1]], (0, 0)).unwrap();
        assert_eq!(board.to_string(), " *  2 \n 3  1 ");

        assert!(board.apply_move(Direction::SouthEast));
        assert_eq!(board.to_string(), "    2 \n 3  * ");
    }
}
