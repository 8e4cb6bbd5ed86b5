//! Fixed-capacity scratch buffer for movement-query results.

use crate::game_state::chess_rules::MAX_POSSIBLE_MOVES;
use crate::game_state::chess_types::Coordinate;

/// Destinations offered for the piece most recently queried.
///
/// The backing array is sized by [`MAX_POSSIBLE_MOVES`], so filling it never
/// allocates. Overrunning it means a movement rule is broken and panics.
#[derive(Debug, Clone)]
pub struct CoordPool {
    length: usize,
    coords: [Coordinate; MAX_POSSIBLE_MOVES],
}

impl Default for CoordPool {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordPool {
    pub const CAPACITY: usize = MAX_POSSIBLE_MOVES;

    pub fn new() -> Self {
        Self {
            length: 0,
            coords: [Coordinate::default(); MAX_POSSIBLE_MOVES],
        }
    }

    /// Forget previous results. Stale slots are left as they are.
    #[inline]
    pub fn reset(&mut self) {
        self.length = 0;
    }

    #[inline]
    pub fn add(&mut self, column: u8, row: u8) {
        self.push(Coordinate::new(column, row));
    }

    #[inline]
    pub fn push(&mut self, coord: Coordinate) {
        assert!(
            self.length < MAX_POSSIBLE_MOVES,
            "coordinate pool overflow: more than {MAX_POSSIBLE_MOVES} destinations"
        );
        self.coords[self.length] = coord;
        self.length += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coords[..self.length]
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.as_slice().contains(&coord)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a CoordPool {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
