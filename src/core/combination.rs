//! A set of distinct board numbers chosen to be closed together.
//!
//! Combinations are stored as a bitmask over 1-9, so two combinations with the
//! same content are equal (and hash equal) however they were discovered.
//!
//! ## Ordering
//!
//! Combinations order by cardinality first, then lexicographically by their
//! ascending numbers. This is the order candidates are listed in:
//!
//! ```
//! use dont_shut_the_box::core::Combination;
//!
//! let five = Combination::from_numbers(&[5]).unwrap();
//! let one_four = Combination::from_numbers(&[4, 1]).unwrap();
//! let two_three = Combination::from_numbers(&[2, 3]).unwrap();
//!
//! assert!(five < one_four);
//! assert!(one_four < two_three);
//! assert_eq!(one_four.numbers().as_slice(), &[1, 4]);
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{check_mask, check_number, FULL_MASK, MAX_NUMBER, MIN_NUMBER};
use super::error::{GameError, Result};

/// Distinct numbers in 1-9, always viewed in ascending order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Combination {
    mask: u16,
}

impl Combination {
    /// Build a combination from its numbers. Order is irrelevant; repeats are
    /// rejected.
    pub fn from_numbers(numbers: &[u8]) -> Result<Self> {
        let mut mask = 0u16;
        for &n in numbers {
            check_number(n)?;
            let bit = 1 << n;
            if mask & bit != 0 {
                return Err(GameError::InvalidNumber(n));
            }
            mask |= bit;
        }
        Ok(Self { mask })
    }

    /// Build from a raw mask. Bits outside 1-9 are dropped.
    pub(crate) const fn from_mask(mask: u16) -> Self {
        Self {
            mask: mask & FULL_MASK,
        }
    }

    /// Raw bitmask (bit `n` set when `n` is included).
    #[must_use]
    pub const fn mask(self) -> u16 {
        self.mask
    }

    /// Numbers in ascending order.
    #[must_use]
    pub fn numbers(self) -> SmallVec<[u8; 9]> {
        (MIN_NUMBER..=MAX_NUMBER)
            .filter(|&n| self.contains(n))
            .collect()
    }

    #[must_use]
    pub fn contains(self, number: u8) -> bool {
        (MIN_NUMBER..=MAX_NUMBER).contains(&number) && self.mask & (1 << number) != 0
    }

    /// Does this combination include any of `numbers`?
    #[must_use]
    pub fn contains_any(self, numbers: &[u8]) -> bool {
        numbers.iter().any(|&n| self.contains(n))
    }

    /// How many numbers this closes.
    #[must_use]
    pub const fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// Sum of the contained numbers.
    #[must_use]
    pub fn sum(self) -> u32 {
        self.numbers().iter().map(|&n| u32::from(n)).sum()
    }
}

impl Ord for Combination {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.numbers().cmp(&other.numbers()))
    }
}

impl PartialOrd for Combination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.numbers()).finish()
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl TryFrom<u16> for Combination {
    type Error = GameError;

    fn try_from(mask: u16) -> Result<Self> {
        check_mask(mask)?;
        Ok(Self { mask })
    }
}

impl From<Combination> for u16 {
    fn from(combination: Combination) -> Self {
        combination.mask
    }
}
