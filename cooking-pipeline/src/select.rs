//! Validated 1-based recipe selection.

use recipe_directory::RecipeSummary;

use crate::errors::SelectionError;

/// Picks the recipe at the 1-based `choice` position.
///
/// Pure function, no I/O. The candidate order is the upstream ranking
/// order, so position 1 is the top hit.
///
/// # Errors
/// [`SelectionError::InvalidSelection`] when `choice` is outside
/// `[1, options.len()]`; never silently clamped.
pub fn select(options: &[RecipeSummary], choice: i64) -> Result<RecipeSummary, SelectionError> {
    if choice < 1 || choice as usize > options.len() {
        return Err(SelectionError::InvalidSelection {
            choice,
            len: options.len(),
        });
    }
    Ok(options[(choice - 1) as usize].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<RecipeSummary> {
        vec![
            RecipeSummary {
                id: 1,
                title: "Butter Chicken".into(),
            },
            RecipeSummary {
                id: 2,
                title: "Chicken Tikka".into(),
            },
            RecipeSummary {
                id: 3,
                title: "Paneer Butter Masala".into(),
            },
        ]
    }

    #[test]
    fn every_in_range_choice_picks_by_position() {
        let opts = options();
        for choice in 1..=opts.len() as i64 {
            assert_eq!(select(&opts, choice).unwrap(), opts[choice as usize - 1]);
        }
    }

    #[test]
    fn second_choice_returns_chicken_tikka() {
        let picked = select(&options(), 2).unwrap();
        assert_eq!(picked.id, 2);
        assert_eq!(picked.title, "Chicken Tikka");
    }

    #[test]
    fn zero_is_rejected() {
        let err = select(&options(), 0).unwrap_err();
        assert!(matches!(
            err,
            SelectionError::InvalidSelection { choice: 0, len: 3 }
        ));
    }

    #[test]
    fn negative_choice_is_rejected() {
        assert!(select(&options(), -2).is_err());
    }

    #[test]
    fn past_the_end_is_rejected() {
        let err = select(&options(), 4).unwrap_err();
        assert!(matches!(
            err,
            SelectionError::InvalidSelection { choice: 4, len: 3 }
        ));
    }

    #[test]
    fn empty_options_reject_everything() {
        assert!(select(&[], 1).is_err());
    }
}
