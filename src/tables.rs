//! Static warm-up tables, rep schemes and attempt percentages.
//!
//! The warm-up tables are keyed by the opener rounded to 2.5 kg. Each entry
//! is an ascending list of warm-up weights ending a little below the opener.
//! Rep schemes are keyed by the number of warm-up sets.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::domain::Lift;

/// Percentages used to project the missing attempts of a lift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptPercentages {
    /// Multipliers applied to the opener for the 2nd and 3rd attempts.
    pub from_opener: (f64, f64),
    /// Multipliers applied to the 3rd attempt for the 1st and 2nd attempts.
    pub from_third: (f64, f64),
}

const SQUAT_PERCENTAGES: AttemptPercentages = AttemptPercentages {
    from_opener: (1.05, 1.10),
    from_third: (0.91, 0.955),
};

const BENCH_PERCENTAGES: AttemptPercentages = AttemptPercentages {
    from_opener: (1.045, 1.09),
    from_third: (0.92, 0.96),
};

const DEADLIFT_PERCENTAGES: AttemptPercentages = AttemptPercentages {
    from_opener: (1.055, 1.11),
    from_third: (0.90, 0.95),
};

/// Returns the attempt percentages for a lift.
pub fn attempt_percentages(lift: Lift) -> AttemptPercentages {
    match lift {
        Lift::Squat => SQUAT_PERCENTAGES,
        Lift::Bench => BENCH_PERCENTAGES,
        Lift::Deadlift => DEADLIFT_PERCENTAGES,
    }
}

pub const SQUAT_REP_SCHEMES: &[(usize, &[u32])] = &[
    (2, &[5, 1]),
    (3, &[5, 3, 1]),
    (4, &[5, 3, 2, 1]),
    (5, &[5, 5, 3, 2, 1]),
    (6, &[5, 5, 3, 2, 1, 1]),
    (7, &[5, 5, 3, 3, 2, 1, 1]),
    (8, &[5, 5, 3, 3, 2, 1, 1, 1]),
];

pub const BENCH_REP_SCHEMES: &[(usize, &[u32])] = &[
    (2, &[8, 1]),
    (3, &[8, 5, 1]),
    (4, &[8, 5, 3, 1]),
    (5, &[8, 5, 3, 2, 1]),
    (6, &[8, 5, 3, 2, 1, 1]),
    (7, &[8, 5, 5, 3, 2, 1, 1]),
    (8, &[8, 5, 5, 3, 2, 1, 1, 1]),
];

pub const DEADLIFT_REP_SCHEMES: &[(usize, &[u32])] = &[
    (2, &[5, 1]),
    (3, &[5, 3, 1]),
    (4, &[5, 3, 2, 1]),
    (5, &[5, 3, 2, 1, 1]),
    (6, &[5, 3, 3, 2, 1, 1]),
    (7, &[5, 3, 3, 2, 1, 1, 1]),
    (8, &[5, 3, 3, 2, 2, 1, 1, 1]),
];

/// Lookup maps keyed by the opener in half-kilogram units.
type WarmupIndex = BTreeMap<u32, &'static [f64]>;

fn build_index(rows: &'static [(f64, &'static [f64])]) -> WarmupIndex {
    rows.iter()
        .map(|(opener, weights)| (half_kg_units(*opener), *weights))
        .collect()
}

static SQUAT_INDEX: LazyLock<WarmupIndex> = LazyLock::new(|| build_index(SQUAT_WARMUPS));
static BENCH_INDEX: LazyLock<WarmupIndex> = LazyLock::new(|| build_index(BENCH_WARMUPS));
static DEADLIFT_INDEX: LazyLock<WarmupIndex> = LazyLock::new(|| build_index(DEADLIFT_WARMUPS));

/// Converts a non-negative weight to whole half-kilograms.
fn half_kg_units(kg: f64) -> u32 {
    // Saturating cast: out-of-range openers simply find no entry
    (kg * 2.0).round() as u32
}

/// Looks up the table warm-ups for an opener already rounded to 2.5 kg.
pub fn lookup_warmups(lift: Lift, rounded_opener: f64) -> Option<&'static [f64]> {
    if !rounded_opener.is_finite() || rounded_opener <= 0.0 {
        return None;
    }
    let index: &WarmupIndex = match lift {
        Lift::Squat => &SQUAT_INDEX,
        Lift::Bench => &BENCH_INDEX,
        Lift::Deadlift => &DEADLIFT_INDEX,
    };
    index.get(&half_kg_units(rounded_opener)).copied()
}

/// Returns the rep scheme for a warm-up of `set_count` sets.
pub fn rep_scheme(lift: Lift, set_count: usize) -> Option<&'static [u32]> {
    let schemes = match lift {
        Lift::Squat => SQUAT_REP_SCHEMES,
        Lift::Bench => BENCH_REP_SCHEMES,
        Lift::Deadlift => DEADLIFT_REP_SCHEMES,
    };
    schemes
        .iter()
        .find(|(count, _)| *count == set_count)
        .map(|(_, reps)| *reps)
}

/// Every opener covered by the warm-up table of a lift, ascending.
#[cfg(test)]
pub fn table_openers(lift: Lift) -> impl Iterator<Item = (f64, &'static [f64])> {
    let rows = match lift {
        Lift::Squat => SQUAT_WARMUPS,
        Lift::Bench => BENCH_WARMUPS,
        Lift::Deadlift => DEADLIFT_WARMUPS,
    };
    rows.iter().copied()
}

// === Warm-up tables ===

pub const SQUAT_WARMUPS: &[(f64, &[f64])] = &[
    (60.0, &[20.0, 27.5, 40.0, 47.5, 55.0]),
    (62.5, &[20.0, 27.5, 40.0, 50.0, 57.5]),
    (65.0, &[20.0, 30.0, 42.5, 52.5, 57.5]),
    (67.5, &[20.0, 30.0, 45.0, 55.0, 60.0]),
    (70.0, &[20.0, 32.5, 45.0, 55.0, 62.5]),
    (72.5, &[20.0, 32.5, 47.5, 57.5, 65.0]),
    (75.0, &[20.0, 35.0, 50.0, 60.0, 67.5]),
    (77.5, &[20.0, 35.0, 50.0, 62.5, 70.0]),
    (80.0, &[20.0, 35.0, 52.5, 65.0, 72.5]),
    (82.5, &[20.0, 37.5, 52.5, 65.0, 75.0]),
    (85.0, &[20.0, 37.5, 55.0, 67.5, 77.5]),
    (87.5, &[20.0, 40.0, 57.5, 70.0, 80.0]),
    (90.0, &[20.0, 40.0, 57.5, 72.5, 80.0]),
    (92.5, &[20.0, 42.5, 60.0, 75.0, 82.5]),
    (95.0, &[20.0, 42.5, 62.5, 75.0, 85.0]),
    (97.5, &[20.0, 40.0, 52.5, 67.5, 77.5, 87.5]),
    (100.0, &[20.0, 40.0, 55.0, 70.0, 80.0, 90.0]),
    (102.5, &[20.0, 40.0, 57.5, 72.5, 82.5, 92.5]),
    (105.0, &[20.0, 42.5, 57.5, 72.5, 85.0, 95.0]),
    (107.5, &[20.0, 42.5, 60.0, 75.0, 85.0, 97.5]),
    (110.0, &[20.0, 45.0, 60.0, 77.5, 87.5, 100.0]),
    (112.5, &[20.0, 45.0, 62.5, 80.0, 90.0, 102.5]),
    (115.0, &[20.0, 45.0, 62.5, 80.0, 92.5, 102.5]),
    (117.5, &[20.0, 47.5, 65.0, 82.5, 95.0, 105.0]),
    (120.0, &[20.0, 47.5, 65.0, 85.0, 95.0, 107.5]),
    (122.5, &[20.0, 50.0, 67.5, 85.0, 97.5, 110.0]),
    (125.0, &[20.0, 50.0, 70.0, 87.5, 100.0, 112.5]),
    (127.5, &[20.0, 50.0, 70.0, 90.0, 102.5, 115.0]),
    (130.0, &[20.0, 52.5, 72.5, 90.0, 105.0, 117.5]),
    (132.5, &[20.0, 52.5, 72.5, 92.5, 105.0, 120.0]),
    (135.0, &[20.0, 55.0, 75.0, 95.0, 107.5, 122.5]),
    (137.5, &[20.0, 55.0, 75.0, 97.5, 110.0, 125.0]),
    (140.0, &[20.0, 55.0, 77.5, 97.5, 112.5, 125.0]),
    (142.5, &[20.0, 57.5, 77.5, 100.0, 115.0, 127.5]),
    (145.0, &[20.0, 57.5, 80.0, 102.5, 115.0, 130.0]),
    (147.5, &[20.0, 60.0, 80.0, 102.5, 117.5, 132.5]),
    (150.0, &[20.0, 52.5, 75.0, 95.0, 110.0, 125.0, 137.5]),
    (152.5, &[20.0, 52.5, 77.5, 95.0, 110.0, 125.0, 140.0]),
    (155.0, &[20.0, 55.0, 77.5, 97.5, 112.5, 127.5, 140.0]),
    (157.5, &[20.0, 55.0, 80.0, 97.5, 115.0, 130.0, 142.5]),
    (160.0, &[20.0, 55.0, 80.0, 100.0, 115.0, 132.5, 145.0]),
    (162.5, &[20.0, 57.5, 82.5, 102.5, 117.5, 135.0, 147.5]),
    (165.0, &[20.0, 57.5, 82.5, 102.5, 120.0, 135.0, 150.0]),
    (167.5, &[20.0, 57.5, 85.0, 105.0, 122.5, 137.5, 152.5]),
    (170.0, &[20.0, 60.0, 85.0, 107.5, 122.5, 140.0, 155.0]),
    (172.5, &[20.0, 60.0, 87.5, 107.5, 125.0, 142.5, 157.5]),
    (175.0, &[20.0, 60.0, 87.5, 110.0, 127.5, 145.0, 160.0]),
    (177.5, &[20.0, 62.5, 90.0, 110.0, 127.5, 147.5, 162.5]),
    (180.0, &[20.0, 62.5, 90.0, 112.5, 130.0, 147.5, 165.0]),
    (182.5, &[20.0, 65.0, 92.5, 115.0, 132.5, 150.0, 165.0]),
    (185.0, &[20.0, 65.0, 92.5, 115.0, 135.0, 152.5, 167.5]),
    (187.5, &[20.0, 65.0, 95.0, 117.5, 135.0, 155.0, 170.0]),
    (190.0, &[20.0, 67.5, 95.0, 120.0, 137.5, 157.5, 172.5]),
    (192.5, &[20.0, 67.5, 97.5, 120.0, 140.0, 160.0, 175.0]),
    (195.0, &[20.0, 67.5, 97.5, 122.5, 142.5, 160.0, 177.5]),
    (197.5, &[20.0, 70.0, 100.0, 122.5, 142.5, 162.5, 180.0]),
    (200.0, &[20.0, 70.0, 100.0, 125.0, 145.0, 165.0, 182.5]),
    (202.5, &[20.0, 70.0, 102.5, 127.5, 147.5, 167.5, 185.0]),
    (205.0, &[20.0, 72.5, 102.5, 127.5, 147.5, 170.0, 187.5]),
    (207.5, &[20.0, 72.5, 105.0, 130.0, 150.0, 170.0, 190.0]),
    (210.0, &[20.0, 72.5, 105.0, 132.5, 152.5, 172.5, 190.0]),
    (212.5, &[20.0, 75.0, 107.5, 132.5, 155.0, 175.0, 192.5]),
    (215.0, &[20.0, 75.0, 107.5, 135.0, 155.0, 177.5, 195.0]),
    (217.5, &[20.0, 75.0, 110.0, 135.0, 157.5, 180.0, 197.5]),
    (220.0, &[20.0, 65.0, 92.5, 120.0, 142.5, 165.0, 185.0, 202.5]),
    (222.5, &[20.0, 67.5, 95.0, 122.5, 145.0, 167.5, 187.5, 205.0]),
    (225.0, &[20.0, 67.5, 95.0, 125.0, 147.5, 170.0, 190.0, 207.5]),
    (227.5, &[20.0, 67.5, 97.5, 125.0, 147.5, 170.0, 190.0, 210.0]),
    (230.0, &[20.0, 70.0, 97.5, 127.5, 150.0, 172.5, 192.5, 212.5]),
    (232.5, &[20.0, 70.0, 100.0, 127.5, 150.0, 175.0, 195.0, 215.0]),
    (235.0, &[20.0, 70.0, 100.0, 130.0, 152.5, 177.5, 197.5, 215.0]),
    (237.5, &[20.0, 72.5, 100.0, 130.0, 155.0, 177.5, 200.0, 217.5]),
    (240.0, &[20.0, 72.5, 102.5, 132.5, 155.0, 180.0, 202.5, 220.0]),
    (242.5, &[20.0, 72.5, 102.5, 132.5, 157.5, 182.5, 202.5, 222.5]),
    (245.0, &[20.0, 72.5, 105.0, 135.0, 160.0, 185.0, 205.0, 225.0]),
    (247.5, &[20.0, 75.0, 105.0, 135.0, 160.0, 185.0, 207.5, 227.5]),
    (250.0, &[20.0, 75.0, 107.5, 137.5, 162.5, 187.5, 210.0, 230.0]),
    (252.5, &[20.0, 75.0, 107.5, 140.0, 165.0, 190.0, 212.5, 232.5]),
    (255.0, &[20.0, 77.5, 107.5, 140.0, 165.0, 192.5, 215.0, 235.0]),
    (257.5, &[20.0, 77.5, 110.0, 142.5, 167.5, 192.5, 217.5, 237.5]),
    (260.0, &[20.0, 77.5, 110.0, 142.5, 170.0, 195.0, 217.5, 240.0]),
    (262.5, &[20.0, 80.0, 112.5, 145.0, 170.0, 197.5, 220.0, 242.5]),
    (265.0, &[20.0, 80.0, 112.5, 145.0, 172.5, 200.0, 222.5, 245.0]),
    (267.5, &[20.0, 80.0, 112.5, 147.5, 175.0, 200.0, 225.0, 245.0]),
    (270.0, &[20.0, 80.0, 115.0, 147.5, 175.0, 202.5, 227.5, 247.5]),
    (272.5, &[20.0, 82.5, 115.0, 150.0, 177.5, 205.0, 230.0, 250.0]),
    (275.0, &[20.0, 82.5, 117.5, 152.5, 180.0, 207.5, 230.0, 252.5]),
    (277.5, &[20.0, 82.5, 117.5, 152.5, 180.0, 207.5, 232.5, 255.0]),
    (280.0, &[20.0, 85.0, 120.0, 155.0, 182.5, 210.0, 235.0, 257.5]),
    (282.5, &[20.0, 85.0, 120.0, 155.0, 182.5, 212.5, 237.5, 260.0]),
    (285.0, &[20.0, 85.0, 120.0, 157.5, 185.0, 215.0, 240.0, 262.5]),
    (287.5, &[20.0, 87.5, 122.5, 157.5, 187.5, 215.0, 242.5, 265.0]),
    (290.0, &[20.0, 87.5, 122.5, 160.0, 187.5, 217.5, 242.5, 267.5]),
    (292.5, &[20.0, 87.5, 125.0, 160.0, 190.0, 220.0, 245.0, 270.0]),
    (295.0, &[20.0, 87.5, 125.0, 162.5, 192.5, 222.5, 247.5, 272.5]),
    (297.5, &[20.0, 90.0, 127.5, 162.5, 192.5, 222.5, 250.0, 272.5]),
    (300.0, &[20.0, 90.0, 127.5, 165.0, 195.0, 225.0, 252.5, 275.0]),
    (302.5, &[20.0, 90.0, 127.5, 167.5, 197.5, 227.5, 255.0, 277.5]),
    (305.0, &[20.0, 92.5, 130.0, 167.5, 197.5, 230.0, 255.0, 280.0]),
    (307.5, &[20.0, 92.5, 130.0, 170.0, 200.0, 230.0, 257.5, 282.5]),
    (310.0, &[20.0, 92.5, 132.5, 170.0, 202.5, 232.5, 260.0, 285.0]),
    (312.5, &[20.0, 95.0, 132.5, 172.5, 202.5, 235.0, 262.5, 287.5]),
    (315.0, &[20.0, 95.0, 135.0, 172.5, 205.0, 237.5, 265.0, 290.0]),
    (317.5, &[20.0, 95.0, 135.0, 175.0, 207.5, 237.5, 267.5, 292.5]),
    (320.0, &[20.0, 95.0, 135.0, 175.0, 207.5, 240.0, 270.0, 295.0]),
];

pub const BENCH_WARMUPS: &[(f64, &[f64])] = &[
    (40.0, &[20.0, 22.5, 30.0, 35.0]),
    (42.5, &[20.0, 22.5, 32.5, 37.5]),
    (45.0, &[20.0, 25.0, 35.0, 40.0]),
    (47.5, &[20.0, 25.0, 35.0, 42.5]),
    (50.0, &[20.0, 27.5, 37.5, 45.0]),
    (52.5, &[20.0, 30.0, 40.0, 47.5]),
    (55.0, &[20.0, 30.0, 42.5, 50.0]),
    (57.5, &[20.0, 32.5, 42.5, 52.5]),
    (60.0, &[20.0, 32.5, 45.0, 55.0]),
    (62.5, &[20.0, 35.0, 47.5, 57.5]),
    (65.0, &[20.0, 35.0, 50.0, 57.5]),
    (67.5, &[20.0, 37.5, 50.0, 60.0]),
    (70.0, &[20.0, 32.5, 45.0, 55.0, 62.5]),
    (72.5, &[20.0, 32.5, 47.5, 57.5, 65.0]),
    (75.0, &[20.0, 35.0, 50.0, 60.0, 67.5]),
    (77.5, &[20.0, 35.0, 50.0, 62.5, 70.0]),
    (80.0, &[20.0, 35.0, 52.5, 65.0, 72.5]),
    (82.5, &[20.0, 37.5, 52.5, 65.0, 75.0]),
    (85.0, &[20.0, 37.5, 55.0, 67.5, 77.5]),
    (87.5, &[20.0, 40.0, 57.5, 70.0, 80.0]),
    (90.0, &[20.0, 40.0, 57.5, 72.5, 80.0]),
    (92.5, &[20.0, 42.5, 60.0, 75.0, 82.5]),
    (95.0, &[20.0, 42.5, 62.5, 75.0, 85.0]),
    (97.5, &[20.0, 45.0, 62.5, 77.5, 87.5]),
    (100.0, &[20.0, 45.0, 65.0, 80.0, 90.0]),
    (102.5, &[20.0, 45.0, 67.5, 82.5, 92.5]),
    (105.0, &[20.0, 47.5, 67.5, 85.0, 95.0]),
    (107.5, &[20.0, 47.5, 70.0, 85.0, 97.5]),
    (110.0, &[20.0, 45.0, 60.0, 77.5, 87.5, 100.0]),
    (112.5, &[20.0, 45.0, 62.5, 80.0, 90.0, 102.5]),
    (115.0, &[20.0, 45.0, 62.5, 80.0, 92.5, 102.5]),
    (117.5, &[20.0, 47.5, 65.0, 82.5, 95.0, 105.0]),
    (120.0, &[20.0, 47.5, 65.0, 85.0, 95.0, 107.5]),
    (122.5, &[20.0, 50.0, 67.5, 85.0, 97.5, 110.0]),
    (125.0, &[20.0, 50.0, 70.0, 87.5, 100.0, 112.5]),
    (127.5, &[20.0, 50.0, 70.0, 90.0, 102.5, 115.0]),
    (130.0, &[20.0, 52.5, 72.5, 90.0, 105.0, 117.5]),
    (132.5, &[20.0, 52.5, 72.5, 92.5, 105.0, 120.0]),
    (135.0, &[20.0, 55.0, 75.0, 95.0, 107.5, 122.5]),
    (137.5, &[20.0, 55.0, 75.0, 97.5, 110.0, 125.0]),
    (140.0, &[20.0, 55.0, 77.5, 97.5, 112.5, 125.0]),
    (142.5, &[20.0, 57.5, 77.5, 100.0, 115.0, 127.5]),
    (145.0, &[20.0, 57.5, 80.0, 102.5, 115.0, 130.0]),
    (147.5, &[20.0, 60.0, 80.0, 102.5, 117.5, 132.5]),
    (150.0, &[20.0, 60.0, 82.5, 105.0, 120.0, 135.0]),
    (152.5, &[20.0, 60.0, 85.0, 107.5, 122.5, 137.5]),
    (155.0, &[20.0, 62.5, 85.0, 107.5, 125.0, 140.0]),
    (157.5, &[20.0, 62.5, 87.5, 110.0, 125.0, 142.5]),
    (160.0, &[20.0, 55.0, 80.0, 100.0, 115.0, 132.5, 145.0]),
    (162.5, &[20.0, 57.5, 82.5, 102.5, 117.5, 135.0, 147.5]),
    (165.0, &[20.0, 57.5, 82.5, 102.5, 120.0, 135.0, 150.0]),
    (167.5, &[20.0, 57.5, 85.0, 105.0, 122.5, 137.5, 152.5]),
    (170.0, &[20.0, 60.0, 85.0, 107.5, 122.5, 140.0, 155.0]),
    (172.5, &[20.0, 60.0, 87.5, 107.5, 125.0, 142.5, 157.5]),
    (175.0, &[20.0, 60.0, 87.5, 110.0, 127.5, 145.0, 160.0]),
    (177.5, &[20.0, 62.5, 90.0, 110.0, 127.5, 147.5, 162.5]),
    (180.0, &[20.0, 62.5, 90.0, 112.5, 130.0, 147.5, 165.0]),
    (182.5, &[20.0, 65.0, 92.5, 115.0, 132.5, 150.0, 165.0]),
    (185.0, &[20.0, 65.0, 92.5, 115.0, 135.0, 152.5, 167.5]),
    (187.5, &[20.0, 65.0, 95.0, 117.5, 135.0, 155.0, 170.0]),
    (190.0, &[20.0, 67.5, 95.0, 120.0, 137.5, 157.5, 172.5]),
    (192.5, &[20.0, 67.5, 97.5, 120.0, 140.0, 160.0, 175.0]),
    (195.0, &[20.0, 67.5, 97.5, 122.5, 142.5, 160.0, 177.5]),
    (197.5, &[20.0, 70.0, 100.0, 122.5, 142.5, 162.5, 180.0]),
    (200.0, &[20.0, 70.0, 100.0, 125.0, 145.0, 165.0, 182.5]),
    (202.5, &[20.0, 70.0, 102.5, 127.5, 147.5, 167.5, 185.0]),
    (205.0, &[20.0, 72.5, 102.5, 127.5, 147.5, 170.0, 187.5]),
    (207.5, &[20.0, 72.5, 105.0, 130.0, 150.0, 170.0, 190.0]),
    (210.0, &[20.0, 72.5, 105.0, 132.5, 152.5, 172.5, 190.0]),
    (212.5, &[20.0, 75.0, 107.5, 132.5, 155.0, 175.0, 192.5]),
    (215.0, &[20.0, 75.0, 107.5, 135.0, 155.0, 177.5, 195.0]),
    (217.5, &[20.0, 75.0, 110.0, 135.0, 157.5, 180.0, 197.5]),
    (220.0, &[20.0, 77.5, 110.0, 137.5, 160.0, 182.5, 200.0]),
];

pub const DEADLIFT_WARMUPS: &[(f64, &[f64])] = &[
    (80.0, &[40.0, 47.5, 60.0, 67.5, 72.5]),
    (82.5, &[40.0, 50.0, 62.5, 70.0, 75.0]),
    (85.0, &[40.0, 50.0, 65.0, 72.5, 77.5]),
    (87.5, &[40.0, 52.5, 65.0, 75.0, 80.0]),
    (90.0, &[40.0, 55.0, 67.5, 77.5, 82.5]),
    (92.5, &[40.0, 55.0, 70.0, 77.5, 85.0]),
    (95.0, &[40.0, 57.5, 72.5, 80.0, 87.5]),
    (97.5, &[40.0, 57.5, 72.5, 82.5, 90.0]),
    (100.0, &[40.0, 60.0, 75.0, 85.0, 92.5]),
    (102.5, &[40.0, 62.5, 77.5, 87.5, 95.0]),
    (105.0, &[40.0, 62.5, 80.0, 90.0, 97.5]),
    (107.5, &[40.0, 65.0, 80.0, 92.5, 100.0]),
    (110.0, &[40.0, 65.0, 82.5, 92.5, 100.0]),
    (112.5, &[40.0, 67.5, 85.0, 95.0, 102.5]),
    (115.0, &[40.0, 70.0, 87.5, 97.5, 105.0]),
    (117.5, &[40.0, 70.0, 87.5, 100.0, 107.5]),
    (120.0, &[60.0, 65.0, 80.0, 92.5, 102.5, 110.0]),
    (122.5, &[60.0, 67.5, 82.5, 95.0, 105.0, 112.5]),
    (125.0, &[60.0, 70.0, 85.0, 97.5, 107.5, 115.0]),
    (127.5, &[60.0, 70.0, 85.0, 97.5, 107.5, 117.5]),
    (130.0, &[60.0, 72.5, 87.5, 100.0, 110.0, 120.0]),
    (132.5, &[60.0, 72.5, 90.0, 102.5, 112.5, 122.5]),
    (135.0, &[60.0, 75.0, 90.0, 105.0, 115.0, 125.0]),
    (137.5, &[60.0, 75.0, 92.5, 105.0, 117.5, 127.5]),
    (140.0, &[60.0, 77.5, 95.0, 107.5, 120.0, 130.0]),
    (142.5, &[60.0, 77.5, 95.0, 110.0, 120.0, 130.0]),
    (145.0, &[60.0, 80.0, 97.5, 112.5, 122.5, 132.5]),
    (147.5, &[60.0, 80.0, 100.0, 112.5, 125.0, 135.0]),
    (150.0, &[60.0, 82.5, 100.0, 115.0, 127.5, 137.5]),
    (152.5, &[60.0, 85.0, 102.5, 117.5, 130.0, 140.0]),
    (155.0, &[60.0, 85.0, 105.0, 120.0, 132.5, 142.5]),
    (157.5, &[60.0, 87.5, 105.0, 122.5, 135.0, 145.0]),
    (160.0, &[60.0, 87.5, 107.5, 122.5, 135.0, 147.5]),
    (162.5, &[60.0, 90.0, 110.0, 125.0, 137.5, 150.0]),
    (165.0, &[60.0, 90.0, 110.0, 127.5, 140.0, 152.5]),
    (167.5, &[60.0, 92.5, 112.5, 130.0, 142.5, 155.0]),
    (170.0, &[60.0, 92.5, 115.0, 130.0, 145.0, 157.5]),
    (172.5, &[60.0, 95.0, 115.0, 132.5, 147.5, 157.5]),
    (175.0, &[60.0, 97.5, 117.5, 135.0, 150.0, 160.0]),
    (177.5, &[60.0, 97.5, 120.0, 137.5, 150.0, 162.5]),
    (180.0, &[60.0, 90.0, 107.5, 125.0, 140.0, 152.5, 165.0]),
    (182.5, &[60.0, 92.5, 110.0, 127.5, 142.5, 155.0, 167.5]),
    (185.0, &[60.0, 92.5, 110.0, 130.0, 145.0, 157.5, 170.0]),
    (187.5, &[60.0, 95.0, 112.5, 132.5, 147.5, 160.0, 172.5]),
    (190.0, &[60.0, 95.0, 115.0, 132.5, 147.5, 162.5, 175.0]),
    (192.5, &[60.0, 97.5, 115.0, 135.0, 150.0, 162.5, 177.5]),
    (195.0, &[60.0, 97.5, 117.5, 137.5, 152.5, 165.0, 180.0]),
    (197.5, &[60.0, 100.0, 117.5, 137.5, 155.0, 167.5, 182.5]),
    (200.0, &[60.0, 100.0, 120.0, 140.0, 155.0, 170.0, 185.0]),
    (202.5, &[60.0, 102.5, 122.5, 142.5, 157.5, 172.5, 187.5]),
    (205.0, &[60.0, 102.5, 122.5, 142.5, 160.0, 175.0, 187.5]),
    (207.5, &[60.0, 105.0, 125.0, 145.0, 162.5, 177.5, 190.0]),
    (210.0, &[60.0, 105.0, 125.0, 147.5, 165.0, 177.5, 192.5]),
    (212.5, &[60.0, 107.5, 127.5, 150.0, 165.0, 180.0, 195.0]),
    (215.0, &[60.0, 107.5, 130.0, 150.0, 167.5, 182.5, 197.5]),
    (217.5, &[60.0, 110.0, 130.0, 152.5, 170.0, 185.0, 200.0]),
    (220.0, &[60.0, 110.0, 132.5, 155.0, 172.5, 187.5, 202.5]),
    (222.5, &[60.0, 112.5, 132.5, 155.0, 172.5, 190.0, 205.0]),
    (225.0, &[60.0, 112.5, 135.0, 157.5, 175.0, 192.5, 207.5]),
    (227.5, &[60.0, 115.0, 137.5, 160.0, 177.5, 192.5, 210.0]),
    (230.0, &[60.0, 115.0, 137.5, 160.0, 180.0, 195.0, 212.5]),
    (232.5, &[60.0, 117.5, 140.0, 162.5, 182.5, 197.5, 215.0]),
    (235.0, &[60.0, 117.5, 140.0, 165.0, 182.5, 200.0, 215.0]),
    (237.5, &[60.0, 120.0, 142.5, 167.5, 185.0, 202.5, 217.5]),
    (240.0, &[60.0, 120.0, 145.0, 167.5, 187.5, 205.0, 220.0]),
    (242.5, &[60.0, 122.5, 145.0, 170.0, 190.0, 205.0, 222.5]),
    (245.0, &[60.0, 122.5, 147.5, 172.5, 190.0, 207.5, 225.0]),
    (247.5, &[60.0, 125.0, 147.5, 172.5, 192.5, 210.0, 227.5]),
    (250.0, &[60.0, 125.0, 150.0, 175.0, 195.0, 212.5, 230.0]),
    (252.5, &[60.0, 127.5, 152.5, 177.5, 197.5, 215.0, 232.5]),
    (255.0, &[60.0, 127.5, 152.5, 177.5, 200.0, 217.5, 235.0]),
    (257.5, &[60.0, 130.0, 155.0, 180.0, 200.0, 220.0, 237.5]),
    (260.0, &[60.0, 117.5, 142.5, 167.5, 187.5, 205.0, 222.5, 240.0]),
    (262.5, &[60.0, 117.5, 145.0, 167.5, 190.0, 207.5, 225.0, 242.5]),
    (265.0, &[60.0, 120.0, 145.0, 170.0, 190.0, 210.0, 227.5, 245.0]),
    (267.5, &[60.0, 120.0, 147.5, 170.0, 192.5, 212.5, 230.0, 245.0]),
    (270.0, &[60.0, 122.5, 147.5, 172.5, 195.0, 212.5, 232.5, 247.5]),
    (272.5, &[60.0, 122.5, 150.0, 175.0, 195.0, 215.0, 235.0, 250.0]),
    (275.0, &[60.0, 125.0, 152.5, 175.0, 197.5, 217.5, 237.5, 252.5]),
    (277.5, &[60.0, 125.0, 152.5, 177.5, 200.0, 220.0, 237.5, 255.0]),
    (280.0, &[60.0, 125.0, 155.0, 180.0, 202.5, 220.0, 240.0, 257.5]),
    (282.5, &[60.0, 127.5, 155.0, 180.0, 202.5, 222.5, 242.5, 260.0]),
    (285.0, &[60.0, 127.5, 157.5, 182.5, 205.0, 225.0, 245.0, 262.5]),
    (287.5, &[60.0, 130.0, 157.5, 185.0, 207.5, 227.5, 247.5, 265.0]),
    (290.0, &[60.0, 130.0, 160.0, 185.0, 210.0, 230.0, 250.0, 267.5]),
    (292.5, &[60.0, 132.5, 160.0, 187.5, 210.0, 230.0, 252.5, 270.0]),
    (295.0, &[60.0, 132.5, 162.5, 190.0, 212.5, 232.5, 252.5, 272.5]),
    (297.5, &[60.0, 135.0, 162.5, 190.0, 215.0, 235.0, 255.0, 272.5]),
    (300.0, &[60.0, 135.0, 165.0, 192.5, 215.0, 237.5, 257.5, 275.0]),
    (302.5, &[60.0, 135.0, 167.5, 192.5, 217.5, 240.0, 260.0, 277.5]),
    (305.0, &[60.0, 137.5, 167.5, 195.0, 220.0, 240.0, 262.5, 280.0]),
    (307.5, &[60.0, 137.5, 170.0, 197.5, 222.5, 242.5, 265.0, 282.5]),
    (310.0, &[60.0, 140.0, 170.0, 197.5, 222.5, 245.0, 267.5, 285.0]),
    (312.5, &[60.0, 140.0, 172.5, 200.0, 225.0, 247.5, 270.0, 287.5]),
    (315.0, &[60.0, 142.5, 172.5, 202.5, 227.5, 250.0, 270.0, 290.0]),
    (317.5, &[60.0, 142.5, 175.0, 202.5, 227.5, 250.0, 272.5, 292.5]),
    (320.0, &[60.0, 145.0, 175.0, 205.0, 230.0, 252.5, 275.0, 295.0]),
    (322.5, &[60.0, 145.0, 177.5, 207.5, 232.5, 255.0, 277.5, 297.5]),
    (325.0, &[60.0, 147.5, 180.0, 207.5, 235.0, 257.5, 280.0, 300.0]),
    (327.5, &[60.0, 147.5, 180.0, 210.0, 235.0, 257.5, 282.5, 302.5]),
    (330.0, &[60.0, 147.5, 182.5, 210.0, 237.5, 260.0, 285.0, 302.5]),
    (332.5, &[60.0, 150.0, 182.5, 212.5, 240.0, 262.5, 285.0, 305.0]),
    (335.0, &[60.0, 150.0, 185.0, 215.0, 240.0, 265.0, 287.5, 307.5]),
    (337.5, &[60.0, 152.5, 185.0, 215.0, 242.5, 267.5, 290.0, 310.0]),
    (340.0, &[60.0, 152.5, 187.5, 217.5, 245.0, 267.5, 292.5, 312.5]),
    (342.5, &[60.0, 155.0, 187.5, 220.0, 247.5, 270.0, 295.0, 315.0]),
    (345.0, &[60.0, 155.0, 190.0, 220.0, 247.5, 272.5, 297.5, 317.5]),
    (347.5, &[60.0, 157.5, 190.0, 222.5, 250.0, 275.0, 300.0, 320.0]),
    (350.0, &[60.0, 157.5, 192.5, 225.0, 252.5, 277.5, 300.0, 322.5]),
    (352.5, &[60.0, 157.5, 195.0, 225.0, 255.0, 277.5, 302.5, 325.0]),
    (355.0, &[60.0, 160.0, 195.0, 227.5, 255.0, 280.0, 305.0, 327.5]),
    (357.5, &[60.0, 160.0, 197.5, 230.0, 257.5, 282.5, 307.5, 330.0]),
    (360.0, &[60.0, 162.5, 197.5, 230.0, 260.0, 285.0, 310.0, 330.0]),
];
