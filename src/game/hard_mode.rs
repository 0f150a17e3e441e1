//! Hard-mode constraint validation
//!
//! Hard mode requires every new guess to respect the clues revealed so far:
//! confirmed letters must stay in place, and letters known to be present must
//! appear somewhere. Only the first violation is reported, scanning confirmed
//! positions left to right before the misplaced set in discovery order.

use std::fmt;

/// A hard-mode rule the candidate guess breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeViolation {
    /// A position confirmed Correct holds a different letter (0-based)
    MustContainAtPosition { letter: char, position: usize },
    /// A letter known present is missing from the candidate
    MustContainLetter { letter: char },
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MustContainAtPosition { letter, position } => {
                write!(
                    f,
                    "{} letter must be '{}'.",
                    ordinal(position + 1),
                    letter.to_ascii_uppercase()
                )
            }
            Self::MustContainLetter { letter } => {
                write!(
                    f,
                    "Guess must contain the letter '{}'.",
                    letter.to_ascii_uppercase()
                )
            }
        }
    }
}

impl std::error::Error for HardModeViolation {}

/// Validate a candidate guess against the constraints revealed so far
///
/// `placed[i]` is the letter confirmed Correct at position `i`, if any;
/// `misplaced` holds letters known present but not yet pinned, in the order
/// they were discovered.
///
/// # Errors
/// Returns the first `HardModeViolation` found; confirmed positions are
/// checked before the misplaced set.
pub fn check(
    candidate: &str,
    placed: &[Option<char>],
    misplaced: &[char],
) -> Result<(), HardModeViolation> {
    let letters: Vec<char> = candidate.chars().collect();

    for (position, slot) in placed.iter().enumerate() {
        if let Some(letter) = *slot
            && letters.get(position) != Some(&letter)
        {
            return Err(HardModeViolation::MustContainAtPosition { letter, position });
        }
    }

    for &letter in misplaced {
        if !letters.contains(&letter) {
            return Err(HardModeViolation::MustContainLetter { letter });
        }
    }

    Ok(())
}

/// Format a 1-based rank as an English ordinal (1st, 2nd, 3rd, 4th, ...)
#[must_use]
pub fn ordinal(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{rank}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_passes_with_no_constraints() {
        assert!(check("crane", &[None; 5], &[]).is_ok());
    }

    #[test]
    fn check_confirmed_position_must_match() {
        let placed = [Some('c'), None, None, Some('n'), Some('e')];
        assert!(check("crone", &placed, &[]).is_ok());

        let err = check("slate", &placed, &[]).unwrap_err();
        assert_eq!(
            err,
            HardModeViolation::MustContainAtPosition {
                letter: 'c',
                position: 0
            }
        );
        assert_eq!(err.to_string(), "1st letter must be 'C'.");
    }

    #[test]
    fn check_position_violations_scan_left_to_right() {
        let placed = [None, None, Some('a'), None, Some('e')];
        let err = check("crone", &placed, &[]).unwrap_err();
        assert_eq!(
            err,
            HardModeViolation::MustContainAtPosition {
                letter: 'a',
                position: 2
            }
        );
        assert_eq!(err.to_string(), "3rd letter must be 'A'.");
    }

    #[test]
    fn check_misplaced_letters_must_be_present() {
        let err = check("slate", &[None; 5], &['r', 'c']).unwrap_err();
        assert_eq!(err, HardModeViolation::MustContainLetter { letter: 'r' });
        assert_eq!(err.to_string(), "Guess must contain the letter 'R'.");

        // Present anywhere is enough
        assert!(check("crane", &[None; 5], &['r', 'c']).is_ok());
    }

    #[test]
    fn check_positions_reported_before_misplaced() {
        let placed = [None, Some('r'), None, None, None];
        let err = check("slate", &placed, &['c']).unwrap_err();
        assert!(matches!(
            err,
            HardModeViolation::MustContainAtPosition { letter: 'r', .. }
        ));
    }

    #[test]
    fn ordinal_formatting() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(9), "9th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
    }
}
