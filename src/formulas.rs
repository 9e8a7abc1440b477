//! Barbell rounding and bodyweight-normalized scoring formulas.

use crate::domain::{Gender, ScoringFormula};

/// Smallest jump between loadable competition weights.
pub const BAR_INCREMENT_KG: f64 = 2.5;

/// IPF GL coefficients (classic powerlifting).
mod ipf_gl {
    pub const MALE: (f64, f64, f64) = (1236.26169, 1232.89536, 0.00898);
    pub const FEMALE: (f64, f64, f64) = (512.23235, 533.28766, 0.01633);
}

/// Coefficients of a degree-5 bodyweight polynomial.
#[derive(Debug, Clone, Copy)]
struct Polynomial {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

/// Wilks coefficients, evaluated as a + b·bw + … + f·bw⁵.
mod wilks {
    use super::Polynomial;

    pub const MALE: Polynomial = Polynomial {
        a: -216.0475144,
        b: 16.2606339,
        c: -0.002388645,
        d: -0.00113732,
        e: 7.01863e-6,
        f: -1.291e-8,
    };

    pub const FEMALE: Polynomial = Polynomial {
        a: 594.31747775582,
        b: -27.23842536447,
        c: 0.82112226871,
        d: -0.00930733913,
        e: 4.731582e-5,
        f: -9.054e-8,
    };
}

/// DOTS coefficients, evaluated as a·bw⁵ + b·bw⁴ + … + f.
/// The published formula is quartic, so the fifth-degree term is zero.
mod dots {
    use super::Polynomial;

    pub const MALE: Polynomial = Polynomial {
        a: 0.0,
        b: -0.000001093,
        c: 0.0007391293,
        d: -0.1918759221,
        e: 24.0900756,
        f: -307.75076,
    };

    pub const FEMALE: Polynomial = Polynomial {
        a: 0.0,
        b: -0.0000010706,
        c: 0.0005158568,
        d: -0.1126655495,
        e: 13.6175032,
        f: -57.96288,
    };
}

/// Rounds a weight to the nearest multiple of `increment`.
///
/// NaN propagates; callers validate their inputs first.
pub fn round_to_nearest(value: f64, increment: f64) -> f64 {
    (value / increment).round() * increment
}

/// Rounds a weight to the nearest loadable 2.5 kg.
pub fn round_to_bar(value: f64) -> f64 {
    round_to_nearest(value, BAR_INCREMENT_KG)
}

/// Calculates the IPF GL points for a total.
///
/// Formula: GL = Total × 100 / (A - B × e^(-C × BW))
///
/// # Returns
/// IPF GL score, or None if the denominator is not positive
pub fn calculate_ipf_gl(total_kg: f64, bodyweight_kg: f64, gender: Gender) -> Option<f64> {
    let (a, b, c) = match gender {
        Gender::Male => ipf_gl::MALE,
        Gender::Female => ipf_gl::FEMALE,
    };
    let denominator = a - b * (-c * bodyweight_kg).exp();
    normalize(total_kg * 100.0, denominator)
}

/// Calculates the Wilks score for a total.
///
/// Formula: Wilks = Total × 500 / (a + b·bw + c·bw² + d·bw³ + e·bw⁴ + f·bw⁵)
pub fn calculate_wilks(total_kg: f64, bodyweight_kg: f64, gender: Gender) -> Option<f64> {
    let p = match gender {
        Gender::Male => wilks::MALE,
        Gender::Female => wilks::FEMALE,
    };
    let bw = bodyweight_kg;
    let denominator = p.a
        + p.b * bw
        + p.c * bw.powi(2)
        + p.d * bw.powi(3)
        + p.e * bw.powi(4)
        + p.f * bw.powi(5);
    normalize(total_kg * 500.0, denominator)
}

/// Calculates the DOTS score for a total.
///
/// Formula: DOTS = Total × 500 / (a·bw⁵ + b·bw⁴ + c·bw³ + d·bw² + e·bw + f)
///
/// Uses the published DOTS coefficients, not the planner's older
/// coefficient set, which scored a 500 kg total at about 8.
pub fn calculate_dots(total_kg: f64, bodyweight_kg: f64, gender: Gender) -> Option<f64> {
    let p = match gender {
        Gender::Male => dots::MALE,
        Gender::Female => dots::FEMALE,
    };
    let bw = bodyweight_kg;
    let denominator = p.a * bw.powi(5)
        + p.b * bw.powi(4)
        + p.c * bw.powi(3)
        + p.d * bw.powi(2)
        + p.e * bw
        + p.f;
    normalize(total_kg * 500.0, denominator)
}

fn normalize(numerator: f64, denominator: f64) -> Option<f64> {
    // Guard against division by zero or a negative denominator at
    // bodyweights far outside the fitted range
    if !denominator.is_finite() || denominator <= 0.0 {
        return None;
    }
    let score = numerator / denominator;
    score.is_finite().then_some(score)
}

/// Scores a total with the selected formula, rounded to two decimals.
///
/// Returns exactly `0.0` while there is nothing to score yet (no total, no
/// bodyweight, no gender) and whenever the formula degenerates.
pub fn calculate_score(
    total_kg: f64,
    bodyweight_kg: f64,
    gender: Option<Gender>,
    formula: ScoringFormula,
) -> f64 {
    let Some(gender) = gender else {
        return 0.0;
    };
    if !total_kg.is_finite() || !bodyweight_kg.is_finite() {
        return 0.0;
    }
    if total_kg <= 0.0 || bodyweight_kg <= 0.0 {
        return 0.0;
    }

    let score = match formula {
        ScoringFormula::IpfGl => calculate_ipf_gl(total_kg, bodyweight_kg, gender),
        ScoringFormula::Wilks => calculate_wilks(total_kg, bodyweight_kg, gender),
        ScoringFormula::Dots => calculate_dots(total_kg, bodyweight_kg, gender),
    };

    match score {
        Some(s) if s > 0.0 => (s * 100.0).round() / 100.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to check floating point equality with tolerance
    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_round_to_nearest() {
        assert_eq!(round_to_bar(151.0), 150.0);
        assert_eq!(round_to_bar(156.5), 157.5);
        assert_eq!(round_to_bar(158.75), 160.0);
        assert_eq!(round_to_nearest(101.0, 5.0), 100.0);
        assert_eq!(round_to_nearest(0.3, 0.25), 0.25);
    }

    #[test]
    fn test_round_propagates_nan() {
        assert!(round_to_bar(f64::NAN).is_nan());
    }

    #[test]
    fn test_ipf_gl_male() {
        // 500kg total at 83kg: 100 / (1236.26169 - 1232.89536 × e^(-0.00898 × 83)) × 500
        let score = calculate_score(500.0, 83.0, Some(Gender::Male), ScoringFormula::IpfGl);
        assert!(approx_eq(score, 76.79, 0.011));
    }

    #[test]
    fn test_ipf_gl_female() {
        let score = calculate_score(350.0, 63.0, Some(Gender::Female), ScoringFormula::IpfGl);
        assert!(approx_eq(score, 108.83, 0.011));
    }

    #[test]
    fn test_wilks() {
        let male = calculate_score(500.0, 83.0, Some(Gender::Male), ScoringFormula::Wilks);
        assert!(approx_eq(male, 333.75, 0.011));

        let female = calculate_score(350.0, 63.0, Some(Gender::Female), ScoringFormula::Wilks);
        assert!(approx_eq(female, 375.89, 0.011));
    }

    #[test]
    fn test_dots() {
        let male = calculate_score(500.0, 83.0, Some(Gender::Male), ScoringFormula::Dots);
        assert!(approx_eq(male, 337.54, 0.011));

        let female = calculate_score(350.0, 63.0, Some(Gender::Female), ScoringFormula::Dots);
        assert!(approx_eq(female, 376.43, 0.011));
    }

    #[test]
    fn test_score_rounded_to_two_decimals() {
        let score = calculate_score(512.5, 91.3, Some(Gender::Male), ScoringFormula::IpfGl);
        assert_eq!(score, (score * 100.0).round() / 100.0);
    }

    #[test]
    fn test_score_no_score_yet_states() {
        let formulas = [ScoringFormula::IpfGl, ScoringFormula::Wilks, ScoringFormula::Dots];
        for formula in formulas {
            assert_eq!(calculate_score(0.0, 83.0, Some(Gender::Male), formula), 0.0);
            assert_eq!(calculate_score(-10.0, 83.0, Some(Gender::Male), formula), 0.0);
            assert_eq!(calculate_score(500.0, 0.0, Some(Gender::Male), formula), 0.0);
            assert_eq!(calculate_score(500.0, -83.0, Some(Gender::Female), formula), 0.0);
            assert_eq!(calculate_score(500.0, 83.0, None, formula), 0.0);
            assert_eq!(calculate_score(f64::NAN, 83.0, Some(Gender::Male), formula), 0.0);
        }
    }

    #[test]
    fn test_score_degenerate_bodyweight_collapses_to_zero() {
        // Wilks polynomial turns negative far above the fitted range
        assert_eq!(
            calculate_score(500.0, 400.0, Some(Gender::Male), ScoringFormula::Wilks),
            0.0
        );
        assert_eq!(
            calculate_score(500.0, f64::INFINITY, Some(Gender::Male), ScoringFormula::IpfGl),
            0.0
        );
        assert!(calculate_wilks(500.0, 400.0, Gender::Male).is_none());
    }

    #[test]
    fn test_score_is_idempotent() {
        let a = calculate_score(600.0, 93.0, Some(Gender::Male), ScoringFormula::Dots);
        let b = calculate_score(600.0, 93.0, Some(Gender::Male), ScoringFormula::Dots);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
