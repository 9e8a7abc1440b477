//! Warm-up generation leading up to the opener.
//!
//! Two strategies are supported:
//! - `default` looks the rounded opener up in the per-lift warm-up table
//! - `dynamic` spreads the jump from a start weight to a fraction of the
//!   opener over a decelerating series of sets
//!
//! Both return a full [`WarmupPlan`]. An empty plan means "nothing to show"
//! (no table entry, inconsistent settings) and is not an error.

use crate::domain::{
    DynamicWarmupSettings, Lift, WARMUP_SLOTS, WarmupPlan, WarmupStrategy, parse_number,
    parse_weight,
};
use crate::error::InputError;
use crate::formulas::round_to_bar;
use crate::tables::{lookup_warmups, rep_scheme};

/// Reps used when a rep scheme has no entry for a set.
const FALLBACK_REPS: u32 = 1;

/// Fewest sets the dynamic strategy can build.
const MIN_DYNAMIC_SETS: usize = 2;

/// Generates warm-ups for an opener with the chosen strategy.
///
/// `settings` is only consulted by the dynamic strategy.
///
/// # Errors
/// Returns an `InputError` when the opener is not a positive number.
pub fn generate_warmups(
    lift: Lift,
    opener: &str,
    strategy: WarmupStrategy,
    settings: &DynamicWarmupSettings,
) -> Result<WarmupPlan, InputError> {
    let opener_kg = parse_weight(opener).inspect_err(|e| {
        log::warn!("{}: cannot generate warm-ups: {}", lift, e);
    })?;

    let plan = match strategy {
        WarmupStrategy::Default => default_warmups(lift, opener_kg),
        WarmupStrategy::Dynamic => dynamic_warmups(lift, opener_kg, settings),
    };
    Ok(plan)
}

/// Table warm-ups for the opener rounded to the nearest 2.5 kg.
pub fn default_warmups(lift: Lift, opener_kg: f64) -> WarmupPlan {
    let rounded = round_to_bar(opener_kg);
    match lookup_warmups(lift, rounded) {
        Some(weights) => with_reps(lift, weights, weights.len()),
        None => {
            log::debug!("{}: no warm-up table entry for {}kg", lift, rounded);
            WarmupPlan::empty()
        }
    }
}

/// Decelerating progression from the start weight to
/// `opener × finalWarmupPercent / 100`.
///
/// With `k` jumps, jump `i` covers `(k - i) / (k(k+1)/2)` of the range, so
/// early jumps are large and the last ones near the opener are small. Each
/// cumulative weight is rounded to 2.5 kg on its own.
pub fn dynamic_warmups(lift: Lift, opener_kg: f64, settings: &DynamicWarmupSettings) -> WarmupPlan {
    let Some((num_sets, start_weight, final_fraction)) = parse_settings(settings) else {
        log::debug!("{}: unusable dynamic warm-up settings {:?}", lift, settings);
        return WarmupPlan::empty();
    };

    let target_final = opener_kg * final_fraction;
    let weight_range = target_final - start_weight;
    if weight_range.is_nan() || weight_range <= 0.0 {
        log::debug!(
            "{}: final warm-up {}kg is not above start {}kg",
            lift,
            target_final,
            start_weight
        );
        return WarmupPlan::empty();
    }

    // Only the first WARMUP_SLOTS weights are ever kept, so build no more
    let jumps = num_sets - 1;
    let k = jumps as f64;
    let part_size = weight_range / (k * (k + 1.0) / 2.0);

    let jump_weights = (0..jumps).scan(start_weight, |current, i| {
        *current += (k - i as f64) * part_size;
        Some(*current)
    });
    let weights: Vec<f64> = std::iter::once(start_weight)
        .chain(jump_weights)
        .take(WARMUP_SLOTS)
        .map(round_to_bar)
        .collect();
    with_reps(lift, &weights, num_sets)
}

/// Parses dynamic settings into `(sets, start kg, final fraction)`.
fn parse_settings(settings: &DynamicWarmupSettings) -> Option<(usize, f64, f64)> {
    let num_sets = settings.num_sets.trim().parse::<usize>().ok()?;
    let start_weight = parse_number(&settings.start_weight).ok()?;
    let final_percent = parse_number(&settings.final_warmup_percent).ok()?;

    if num_sets < MIN_DYNAMIC_SETS {
        return None;
    }
    Some((num_sets, start_weight, final_percent / 100.0))
}

/// Pairs weights with the lift's rep scheme for `set_count` sets.
///
/// `set_count` may exceed the weights given; the plan keeps at most eight.
fn with_reps(lift: Lift, weights: &[f64], set_count: usize) -> WarmupPlan {
    let scheme = rep_scheme(lift, set_count).unwrap_or(&[]);
    WarmupPlan::from_sets(weights.iter().enumerate().map(|(i, weight)| {
        let reps = scheme.get(i).copied().unwrap_or(FALLBACK_REPS);
        (*weight, reps)
    }))
}
