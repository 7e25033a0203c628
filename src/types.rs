/// One of the two players. The wire calls them 1 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other player. Involutive: `p.opponent().opponent() == p`.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

/// A board coordinate with `row < 8` and `col < 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A legal placement together with the opponent stones it captures.
/// Contract: `flips` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMove {
    pub pos: Position,
    pub flips: Vec<Position>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involutive() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }
}
