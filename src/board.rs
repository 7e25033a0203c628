use crate::types::{CandidateMove, Cell, Player, Position};

pub const BOARD_SIZE: usize = 8;

/// The 8 compass neighbors: every (row, col) delta in {-1, 0, 1} except (0, 0).
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An 8x8 Othello board. Cheap to copy; every simulated move works on a
/// fresh value and never touches the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with no stones placed.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the conventional opening position:
    /// (3,3)=Two, (3,4)=One, (4,3)=One, (4,4)=Two.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::Taken(Player::Two);
        board.cells[3][4] = Cell::Taken(Player::One);
        board.cells[4][3] = Cell::Taken(Player::One);
        board.cells[4][4] = Cell::Taken(Player::Two);
        board
    }

    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, pos: Position) -> Cell {
        debug_assert!(in_bounds(pos.row as i8, pos.col as i8));
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Returns the number of stones the given player has on the board.
    pub fn count(&self, player: Player) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Taken(player))
            .count() as u8
    }

    /// Returns the opponent stones captured by placing `player` at `pos`.
    /// Empty result means the placement is illegal.
    ///
    /// Caller contract: `pos` must be in bounds and refer to an empty cell.
    pub fn flips_for(&self, pos: Position, player: Player) -> Vec<Position> {
        debug_assert!(in_bounds(pos.row as i8, pos.col as i8));
        debug_assert_eq!(
            self.cell(pos),
            Cell::Empty,
            "flips_for() requires an empty target cell"
        );

        let own = Cell::Taken(player);
        let opponent = Cell::Taken(player.opponent());
        let mut flips = Vec::new();

        for (dr, dc) in DIRECTIONS {
            let mut r = pos.row as i8 + dr;
            let mut c = pos.col as i8 + dc;
            let mut line = Vec::new();

            // Walk over consecutive opponent stones.
            while in_bounds(r, c) && self.cells[r as usize][c as usize] == opponent {
                line.push(Position::new(r as u8, c as u8));
                r += dr;
                c += dc;
            }

            // The line counts only when it ends on one of our own stones.
            if in_bounds(r, c) && self.cells[r as usize][c as usize] == own && !line.is_empty() {
                flips.extend(line);
            }
        }

        flips
    }

    /// Returns every legal placement for `player` in row-major order,
    /// each paired with its non-empty flip set.
    ///
    /// Row-major order is part of the contract: the move selector breaks
    /// remaining ties by keeping the first candidate found.
    pub fn legal_moves(&self, player: Player) -> Vec<CandidateMove> {
        let mut moves = Vec::new();

        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Position::new(row, col);
                if self.cell(pos) != Cell::Empty {
                    continue;
                }
                let flips = self.flips_for(pos, player);
                if !flips.is_empty() {
                    moves.push(CandidateMove { pos, flips });
                }
            }
        }

        moves
    }

    /// Returns a new board with `pos` and every position in `flips` set to
    /// `player`. The input board is left untouched.
    pub fn apply(&self, pos: Position, player: Player, flips: &[Position]) -> Board {
        let mut next = *self;
        next.cells[pos.row as usize][pos.col as usize] = Cell::Taken(player);
        for flip in flips {
            next.cells[flip.row as usize][flip.col as usize] = Cell::Taken(player);
        }
        next
    }
}

fn in_bounds(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col)
}
