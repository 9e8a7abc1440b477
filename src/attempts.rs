//! Attempt projection from a single known attempt.

use crate::domain::{Attempt, Lift, format_kg, parse_weight};
use crate::error::InputError;
use crate::formulas::round_to_bar;
use crate::tables::attempt_percentages;

/// Fills in the missing attempts of a lift from its opener or its third.
///
/// The opener wins when both are present. Known values are kept exactly as
/// entered; only derived slots are overwritten. The second attempt is never
/// read.
///
/// # Errors
/// Returns `InputError::NothingToProject` when neither the opener nor the
/// third attempt is a positive number.
pub fn project_attempts(lift: Lift, attempts: &Attempt) -> Result<Attempt, InputError> {
    let opener = parse_weight(&attempts.opener).ok();
    let third = parse_weight(&attempts.third).ok();
    let percentages = attempt_percentages(lift);

    let mut projected = attempts.clone();

    match (opener, third) {
        (Some(opener), _) => {
            let (second_pct, third_pct) = percentages.from_opener;
            projected.second = format_kg(round_to_bar(opener * second_pct));
            projected.third = format_kg(round_to_bar(opener * third_pct));
        }
        (None, Some(third)) => {
            let (first_pct, second_pct) = percentages.from_third;
            projected.opener = format_kg(round_to_bar(third * first_pct));
            projected.second = format_kg(round_to_bar(third * second_pct));
        }
        (None, None) => {
            log::warn!("{}: no opener or third attempt to project from", lift);
            return Err(InputError::NothingToProject);
        }
    }

    Ok(projected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_number;

    fn on_bar_increment(value: &str) -> bool {
        parse_number(value).is_ok_and(|v| v % 2.5 == 0.0)
    }

    #[test]
    fn test_squat_from_opener() {
        let result = project_attempts(Lift::Squat, &Attempt::new("150", "", "")).unwrap();
        // 150 × 1.05 = 157.5, 150 × 1.10 = 165
        assert_eq!(result, Attempt::new("150", "157.5", "165"));
    }

    #[test]
    fn test_bench_from_third() {
        let result = project_attempts(Lift::Bench, &Attempt::new("", "", "120")).unwrap();
        // 120 × 0.92 = 110.4 -> 110, 120 × 0.96 = 115.2 -> 115
        assert_eq!(result, Attempt::new("110", "115", "120"));
    }

    #[test]
    fn test_deadlift_from_opener() {
        let result = project_attempts(Lift::Deadlift, &Attempt::new("200", "", "")).unwrap();
        // 200 × 1.055 = 211 -> 210, 200 × 1.11 = 222 -> 222.5
        assert_eq!(result, Attempt::new("200", "210", "222.5"));
    }

    #[test]
    fn test_opener_takes_priority_over_third() {
        let result = project_attempts(Lift::Squat, &Attempt::new("100", "", "200")).unwrap();
        assert_eq!(result.opener, "100");
        assert_eq!(result.third, "110");
    }

    #[test]
    fn test_known_values_kept_verbatim() {
        let result = project_attempts(Lift::Squat, &Attempt::new(" 151 ", "999", "")).unwrap();
        assert_eq!(result.opener, " 151 ");
        assert_eq!(result.second, "157.5");

        let result = project_attempts(Lift::Bench, &Attempt::new("abc", "", "120.0")).unwrap();
        assert_eq!(result.third, "120.0");
        assert_eq!(result.opener, "110");
    }

    #[test]
    fn test_invalid_opener_falls_back_to_third() {
        let result = project_attempts(Lift::Deadlift, &Attempt::new("-5", "", "250")).unwrap();
        // 250 × 0.90 = 225, 250 × 0.95 = 237.5
        assert_eq!(result, Attempt::new("225", "237.5", "250"));
    }

    #[test]
    fn test_nothing_to_project() {
        for attempts in [
            Attempt::default(),
            Attempt::new("", "150", ""),
            Attempt::new("abc", "", "0"),
            Attempt::new("-100", "", "-1"),
        ] {
            assert_eq!(
                project_attempts(Lift::Squat, &attempts),
                Err(InputError::NothingToProject)
            );
        }
    }

    #[test]
    fn test_projected_attempts_on_bar_increments() {
        for lift in Lift::all() {
            let mut opener = 40.0;
            while opener <= 400.0 {
                let from_opener =
                    project_attempts(*lift, &Attempt::new(&format_kg(opener), "", "")).unwrap();
                assert!(on_bar_increment(&from_opener.second));
                assert!(on_bar_increment(&from_opener.third));

                let from_third =
                    project_attempts(*lift, &Attempt::new("", "", &format_kg(opener))).unwrap();
                assert!(on_bar_increment(&from_third.opener));
                assert!(on_bar_increment(&from_third.second));
                opener += 1.5;
            }
        }
    }

    #[test]
    fn test_projection_is_idempotent() {
        let input = Attempt::new("", "", "187.5");
        let a = project_attempts(Lift::Squat, &input).unwrap();
        let b = project_attempts(Lift::Squat, &input).unwrap();
        assert_eq!(a, b);
    }
}
