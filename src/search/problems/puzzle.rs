use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

pub type Tile = u8;

/// The value of the empty tile.
pub const BLANK_TILE: Tile = 0;

/// The widest board whose tiles all fit in a [`Tile`].
pub const MAX_WIDTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("a puzzle needs at least one tile")]
    Empty,
    #[error("{0} tiles cannot be laid out on a square board")]
    NotSquare(usize),
    #[error("tile {tile} is out of range for a board of {len} tiles")]
    TileOutOfRange { tile: Tile, len: usize },
    #[error("tile {0} appears more than once")]
    DuplicateTile(Tile),
    #[error("{0:?} is not a tile")]
    InvalidTile(String),
    #[error("initial board has {initial} tiles but goal board has {goal}")]
    SizeMismatch { initial: usize, goal: usize },
    #[error("puzzle is not solvable")]
    Unsolvable,
    #[error("board width {0} is too large, the widest supported board is {MAX_WIDTH}")]
    TooLarge(usize),
}

/// A sliding tiles board. Tiles are stored row by row, so index `i` is at
/// row `i / n` and column `i % n` of an `n`×`n` board. The board holds every
/// tile from `0` to `n² - 1` exactly once, with `0` being the blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Puzzle {
    tiles: SmallVec<[Tile; 16]>,
}

impl Puzzle {
    /// Create a puzzle from its tiles, checking that they form a valid
    /// square board.
    pub fn from_tiles(tiles: &[Tile]) -> Result<Self, PuzzleError> {
        if tiles.is_empty() {
            return Err(PuzzleError::Empty);
        }
        let len = tiles.len();
        if width_of(len).is_none() {
            return Err(PuzzleError::NotSquare(len));
        }

        let mut seen = vec![false; len];
        for &tile in tiles {
            let index = tile as usize;
            if index >= len {
                return Err(PuzzleError::TileOutOfRange { tile, len });
            }
            if seen[index] {
                return Err(PuzzleError::DuplicateTile(tile));
            }
            seen[index] = true;
        }

        Ok(Self {
            tiles: SmallVec::from_slice(tiles),
        })
    }

    /// The canonical solved board of width `n`: tiles in increasing order
    /// with the blank in the bottom right corner.
    pub fn solved(n: usize) -> Result<Self, PuzzleError> {
        if n == 0 {
            return Err(PuzzleError::Empty);
        }
        if n > MAX_WIDTH {
            return Err(PuzzleError::TooLarge(n));
        }
        let len = n * n;
        let tiles = (1..len)
            .map(|tile| tile as Tile)
            .chain(std::iter::once(BLANK_TILE))
            .collect();
        Ok(Self { tiles })
    }

    /// Shuffle the solved board of width `n` until the result is solvable.
    pub fn random_solvable<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self, PuzzleError> {
        let mut puzzle = Self::solved(n)?;
        loop {
            puzzle.tiles.shuffle(rng);
            if puzzle.is_solvable() {
                return Ok(puzzle);
            }
        }
    }

    /// Parse a puzzle and reject it if it can not reach the solved board.
    pub fn parse_solvable(text: &str) -> Result<Self, PuzzleError> {
        let puzzle: Self = text.parse()?;
        if puzzle.is_solvable() {
            Ok(puzzle)
        } else {
            Err(PuzzleError::Unsolvable)
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Width (and height) of the board.
    pub fn width(&self) -> usize {
        width_of(self.tiles.len()).expect("Puzzle is always square")
    }

    pub fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&tile| tile == BLANK_TILE)
            .expect("Puzzle always contains the blank")
    }

    /// A copy of this puzzle with the tiles at `i` and `j` swapped.
    pub fn with_swapped(&self, i: usize, j: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(i, j);
        Self { tiles }
    }

    /// Number of pairs of non-blank tiles that are out of order.
    pub fn inversions(&self) -> usize {
        self.tiles
            .iter()
            .filter(|&&tile| tile != BLANK_TILE)
            .tuple_combinations()
            .filter(|(a, b)| a > b)
            .count()
    }

    /// Whether the solved board can be reached from this one.
    ///
    /// Every move keeps the parity of the inversion count on boards of odd
    /// width. On boards of even width a vertical move flips it together with
    /// the parity of the blank's row, so there the sum of both is what is
    /// preserved.
    pub fn is_solvable(&self) -> bool {
        let n = self.width();
        if n % 2 == 1 {
            self.inversions() % 2 == 0
        } else {
            let blank_row = self.blank_index() / n;
            (self.inversions() + blank_row) % 2 == (n - 1) % 2
        }
    }
}

fn width_of(len: usize) -> Option<usize> {
    let n = (len as f64).sqrt().round() as usize;
    (n * n == len).then_some(n)
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.width();
        let cell_width = (self.len() - 1).to_string().len();
        for (row_index, row) in self.tiles.chunks(n).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let row = row
                .iter()
                .map(|&tile| {
                    if tile == BLANK_TILE {
                        format!("{:>cell_width$}", "_")
                    } else {
                        format!("{tile:>cell_width$}")
                    }
                })
                .join(" ");
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Parses whitespace or comma separated tiles, e.g. `"1 2 3 4 5 6 7 8 0"`.
/// Boards with fewer than ten tiles may also be written without separators,
/// e.g. `"123456780"`.
impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        let tiles = match tokens.as_slice() {
            [compact] if compact.len() > 1 && compact.chars().all(|c| c.is_ascii_digit()) => {
                compact
                    .chars()
                    .map(|c| c.to_digit(10).map(|d| d as Tile))
                    .collect::<Option<Vec<Tile>>>()
                    .ok_or_else(|| PuzzleError::InvalidTile(compact.to_string()))?
            }
            _ => tokens
                .iter()
                .map(|token| {
                    token
                        .parse::<Tile>()
                        .map_err(|_| PuzzleError::InvalidTile(token.to_string()))
                })
                .collect::<Result<Vec<Tile>, _>>()?,
        };

        Self::from_tiles(&tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn from_tiles_validates_board() {
        assert!(Puzzle::from_tiles(&[1, 2, 3, 4, 5, 6, 7, 8, 0]).is_ok());
        assert_eq!(Puzzle::from_tiles(&[]), Err(PuzzleError::Empty));
        assert_eq!(
            Puzzle::from_tiles(&[1, 2, 0]),
            Err(PuzzleError::NotSquare(3))
        );
        assert_eq!(
            Puzzle::from_tiles(&[1, 2, 3, 9, 5, 6, 7, 8, 0]),
            Err(PuzzleError::TileOutOfRange { tile: 9, len: 9 })
        );
        assert_eq!(
            Puzzle::from_tiles(&[1, 1, 3, 4, 5, 6, 7, 8, 0]),
            Err(PuzzleError::DuplicateTile(1))
        );
    }

    #[test]
    fn solved_board_has_blank_last() {
        assert_eq!(
            Puzzle::solved(3).unwrap().tiles(),
            &[1, 2, 3, 4, 5, 6, 7, 8, BLANK_TILE]
        );
        assert_eq!(Puzzle::solved(4).unwrap().width(), 4);
        assert_eq!(Puzzle::solved(4).unwrap().blank_index(), 15);
    }

    #[test]
    fn solved_rejects_unsupported_widths() {
        assert_eq!(Puzzle::solved(0), Err(PuzzleError::Empty));
        assert_eq!(Puzzle::solved(17), Err(PuzzleError::TooLarge(17)));

        let widest = Puzzle::solved(MAX_WIDTH).unwrap();
        assert_eq!(widest.len(), 256);
        assert_eq!(widest.tiles()[254], 255);
        assert_eq!(widest.blank_index(), 255);

        let mut rng = SmallRng::seed_from_u64(17);
        assert_eq!(
            Puzzle::random_solvable(17, &mut rng),
            Err(PuzzleError::TooLarge(17))
        );
    }

    #[test]
    fn parse_compact_and_separated() {
        let compact: Puzzle = "123456780".parse().unwrap();
        let separated: Puzzle = "1 2 3, 4 5 6, 7 8 0".parse().unwrap();
        assert_eq!(compact, separated);
        assert_eq!(compact, Puzzle::solved(3).unwrap());

        let fifteen: Puzzle = "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0".parse().unwrap();
        assert_eq!(fifteen, Puzzle::solved(4).unwrap());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(
            "12345678a".parse::<Puzzle>(),
            Err(PuzzleError::InvalidTile("12345678a".to_string()))
        );
        assert_eq!("1234".parse::<Puzzle>(), Err(PuzzleError::TileOutOfRange { tile: 4, len: 4 }));
        assert_eq!("12345678".parse::<Puzzle>(), Err(PuzzleError::NotSquare(8)));
        assert_eq!("".parse::<Puzzle>(), Err(PuzzleError::Empty));
    }

    #[test]
    fn parse_solvable_rejects_odd_parity() {
        assert!(Puzzle::parse_solvable("123456780").is_ok());
        assert_eq!(
            Puzzle::parse_solvable("123456870"),
            Err(PuzzleError::Unsolvable)
        );
    }

    #[test]
    fn solvability_of_eight_puzzles() {
        let solvable = |tiles: &[Tile]| Puzzle::from_tiles(tiles).unwrap().is_solvable();
        assert!(solvable(&[0, 1, 2, 3, 4, 5, 6, 7, 8]));
        assert!(solvable(&[1, 2, 3, 4, 5, 6, 7, 8, 0]));
        assert!(solvable(&[1, 2, 3, 4, 0, 6, 7, 5, 8]));
        assert!(!solvable(&[1, 2, 3, 4, 5, 6, 8, 7, 0]));
        assert!(!solvable(&[8, 1, 2, 0, 4, 3, 7, 6, 5]));
    }

    #[test]
    fn solvability_of_fifteen_puzzles() {
        let solvable = |tiles: &[Tile]| Puzzle::from_tiles(tiles).unwrap().is_solvable();
        assert!(solvable(&[
            1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0
        ]));
        // blank moved up once from the solved board
        assert!(solvable(&[
            1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0, 13, 14, 15, 12
        ]));
        // the classic 14-15 swap
        assert!(!solvable(&[
            1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0
        ]));
    }

    #[test]
    fn random_solvable_is_solvable() {
        let mut rng = SmallRng::seed_from_u64(2024);
        for n in 2..=4 {
            for _ in 0..20 {
                let puzzle = Puzzle::random_solvable(n, &mut rng).unwrap();
                assert_eq!(puzzle.width(), n);
                assert!(puzzle.is_solvable());
            }
        }
    }

    #[test]
    fn display_renders_grid() {
        let puzzle = Puzzle::from_tiles(&[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        assert_eq!(puzzle.to_string(), "1 2 3\n4 _ 5\n6 7 8");
    }
}
