//! Enumerate every set of open numbers that sums to a dice roll.
//!
//! The search walks the numbers 1-9 in ascending order and, for each open
//! one, branches on including or skipping it. A branch is cut as soon as the
//! next number exceeds what is left of the target; since numbers only grow,
//! nothing later in that branch can fit.

use log::trace;
use rustc_hash::FxHashSet;

use crate::core::{Board, Combination, MAX_NUMBER, MIN_NUMBER};

/// Every distinct combination of open numbers on `board` summing to `target`.
///
/// Results are sorted (fewest numbers first, then lexicographically) and
/// contain no duplicates. A target of zero yields nothing, as does any target
/// no subset of the board reaches.
///
/// ```
/// use dont_shut_the_box::core::Board;
/// use dont_shut_the_box::solver::solve;
///
/// let board = Board::from_numbers(&[1, 2, 3, 4, 5]).unwrap();
/// let found: Vec<String> = solve(5, board).iter().map(|c| c.to_string()).collect();
/// assert_eq!(found, vec!["[5]", "[1, 4]", "[2, 3]"]);
/// ```
#[must_use]
pub fn solve(target: u32, board: Board) -> Vec<Combination> {
    if target == 0 || board.is_empty() {
        return Vec::new();
    }

    let mut found = FxHashSet::default();
    search(target, MIN_NUMBER, 0, board.mask(), &mut found);

    let mut combinations: Vec<Combination> = found.into_iter().collect();
    combinations.sort_unstable();
    trace!("solve({target}, {board:?}) -> {combinations:?}");
    combinations
}

fn search(remaining: u32, next: u8, chosen: u16, open: u16, found: &mut FxHashSet<Combination>) {
    if remaining == 0 {
        found.insert(Combination::from_mask(chosen));
        return;
    }
    if next > MAX_NUMBER || u32::from(next) > remaining {
        return;
    }

    let bit = 1u16 << next;
    if open & bit != 0 {
        search(remaining - u32::from(next), next + 1, chosen | bit, open, found);
    }
    search(remaining, next + 1, chosen, open, found);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(numbers: &[u8]) -> Board {
        Board::from_numbers(numbers).unwrap()
    }

    fn combos(found: &[Combination]) -> Vec<Vec<u8>> {
        found.iter().map(|c| c.numbers().to_vec()).collect()
    }

    #[test]
    fn test_five_from_one_to_five() {
        let found = solve(5, board(&[1, 2, 3, 4, 5]));
        assert_eq!(combos(&found), vec![vec![5], vec![1, 4], vec![2, 3]]);
    }

    #[test]
    fn test_unreachable_target() {
        assert!(solve(1, board(&[2, 3, 4])).is_empty());
    }

    #[test]
    fn test_singleton_board() {
        assert_eq!(combos(&solve(9, board(&[9]))), vec![vec![9]]);
    }

    #[test]
    fn test_zero_target() {
        assert!(solve(0, Board::full()).is_empty());
    }

    #[test]
    fn test_empty_board() {
        assert!(solve(7, Board::empty()).is_empty());
    }

    #[test]
    fn test_full_board_twelve() {
        let found = solve(12, Board::full());
        assert!(found.iter().all(|c| c.sum() == 12));
        assert!(combos(&found).contains(&vec![3, 9]));
        assert!(combos(&found).contains(&vec![1, 2, 4, 5]));
        // Nothing with five distinct numbers reaches 12 (1+2+3+4+5 = 15).
        assert!(found.iter().all(|c| c.len() <= 4));
    }

    #[test]
    fn test_no_number_reused() {
        // 4 = 2 + 2 would need 2 twice
        let found = solve(4, board(&[2, 3]));
        assert!(found.is_empty());
    }
}
