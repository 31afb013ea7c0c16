//! A player's board: the numbers 1-9 that are still open.
//!
//! Stored as a bitmask where bit `n` is set while number `n` is open.
//! Numbers only ever close within a round; [`Board::reset`] reopens them all
//! at the start of the next one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::combination::Combination;
use super::error::{GameError, Result};

/// Lowest number on a board.
pub const MIN_NUMBER: u8 = 1;

/// Highest number on a board.
pub const MAX_NUMBER: u8 = 9;

/// Numbers that must be closed before a single die may be rolled.
pub const HIGH_NUMBERS: [u8; 3] = [7, 8, 9];

/// Largest number a single die can reach.
const SINGLE_DIE_MAX: u8 = 6;

pub(crate) const FULL_MASK: u16 = 0b11_1111_1110;

/// The set of open numbers owned by one player.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Board {
    mask: u16,
}

impl Board {
    /// A board with every number 1-9 open.
    #[must_use]
    pub const fn full() -> Self {
        Self { mask: FULL_MASK }
    }

    /// A board with every number closed.
    #[must_use]
    pub const fn empty() -> Self {
        Self { mask: 0 }
    }

    /// Build a board with exactly the given numbers open.
    pub fn from_numbers(numbers: &[u8]) -> Result<Self> {
        let mut mask = 0;
        for &n in numbers {
            check_number(n)?;
            mask |= 1 << n;
        }
        Ok(Self { mask })
    }

    /// Raw bitmask (bit `n` set while `n` is open).
    #[must_use]
    pub const fn mask(self) -> u16 {
        self.mask
    }

    /// Reopen every number.
    pub fn reset(&mut self) {
        self.mask = FULL_MASK;
    }

    /// Is `number` still open?
    #[must_use]
    pub fn is_open(self, number: u8) -> bool {
        (MIN_NUMBER..=MAX_NUMBER).contains(&number) && self.mask & (1 << number) != 0
    }

    /// Are all numbers closed?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// Number of open numbers.
    #[must_use]
    pub const fn open_count(self) -> u32 {
        self.mask.count_ones()
    }

    /// Open numbers in ascending order.
    #[must_use]
    pub fn open_numbers(self) -> SmallVec<[u8; 9]> {
        (MIN_NUMBER..=MAX_NUMBER).filter(|&n| self.is_open(n)).collect()
    }

    /// Highest open number, if any.
    #[must_use]
    pub fn max_open(self) -> Option<u8> {
        (MIN_NUMBER..=MAX_NUMBER).rev().find(|&n| self.is_open(n))
    }

    /// Sum of the open numbers. This is the score of a turn that ends here.
    #[must_use]
    pub fn remaining_sum(self) -> u32 {
        self.open_numbers().iter().map(|&n| u32::from(n)).sum()
    }

    /// May the owner roll a single die instead of two?
    ///
    /// True only when 7, 8 and 9 are all closed and nothing above 6 is open.
    #[must_use]
    pub fn single_die_eligible(self) -> bool {
        let high_closed = HIGH_NUMBERS.iter().all(|&n| !self.is_open(n));
        high_closed && self.max_open().is_some_and(|max| max <= SINGLE_DIE_MAX)
    }

    /// Close every number in `combination`.
    ///
    /// Atomic: if any number is not open the board is left untouched and
    /// [`GameError::NumberNotOpen`] names the first offender.
    pub fn close(&mut self, combination: &Combination) -> Result<()> {
        let wanted = combination.mask();
        let missing = wanted & !self.mask;
        if missing != 0 {
            return Err(GameError::NumberNotOpen(missing.trailing_zeros() as u8));
        }
        self.mask &= !wanted;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::full()
    }
}

impl TryFrom<u16> for Board {
    type Error = GameError;

    fn try_from(mask: u16) -> Result<Self> {
        check_mask(mask)?;
        Ok(Self { mask })
    }
}

impl From<Board> for u16 {
    fn from(board: Board) -> Self {
        board.mask
    }
}

/// Reject masks with bits outside 1-9, naming the lowest stray bit.
pub(crate) fn check_mask(mask: u16) -> Result<()> {
    match mask & !FULL_MASK {
        0 => Ok(()),
        stray => Err(GameError::InvalidNumber(stray.trailing_zeros() as u8)),
    }
}

pub(crate) fn check_number(n: u8) -> Result<()> {
    if (MIN_NUMBER..=MAX_NUMBER).contains(&n) {
        Ok(())
    } else {
        Err(GameError::InvalidNumber(n))
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.open_numbers()).finish()
    }
}

/// Renders the 1-9 strip with closed numbers shown as `X`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for n in MIN_NUMBER..=MAX_NUMBER {
            if n > MIN_NUMBER {
                f.write_str(" ")?;
            }
            if self.is_open(n) {
                write!(f, "{n}")?;
            } else {
                f.write_str("X")?;
            }
        }
        Ok(())
    }
}
