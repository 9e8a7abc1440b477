//! Plate loading for a barbell total.
//!
//! Loads are resolved greedily, largest plate first, for one side of the
//! bar. The arithmetic runs in whole quarter-kilograms (the smallest plate)
//! so repeated subtraction never drifts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::format_kg;
use crate::error::InputError;

/// Weight of the empty competition bar.
pub const BAR_WEIGHT_KG: f64 = 20.0;

/// Weight of one collar. A pair adds 5 kg to the bar.
pub const COLLAR_WEIGHT_KG: f64 = 2.5;

/// Heaviest total the resolver will load.
pub const MAX_TOTAL_KG: f64 = 1000.0;

/// Available plate denominations, heaviest first.
pub const PLATE_DENOMINATIONS_KG: [f64; 9] = [25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25, 0.5, 0.25];

const QUARTERS_PER_KG: f64 = 4.0;

/// Absorbs binary-fraction error when converting kilograms to quarters.
const TOLERANCE: f64 = 1e-9;

/// A single physical plate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Plate {
    pub weight: f64,
}

/// Plates of one denomination on one side of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlateCount {
    pub weight: f64,
    pub count: u64,
}

/// Why a total cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidLoad {
    /// Lighter than the empty bar (or not a number).
    BelowBar,
    /// Collars requested, but the total leaves no room for them.
    CollarsDoNotFit,
    /// Heavier than any bar is loaded.
    AboveMax,
}

/// Outcome of resolving a total into plates.
#[derive(Debug, Clone, PartialEq)]
pub enum PlateLoad {
    Invalid(InvalidLoad),
    BarOnly {
        collars: bool,
    },
    /// Plate counts for one side, heaviest first.
    Loaded {
        plates: Vec<PlateCount>,
        collars: bool,
    },
}

impl PlateLoad {
    /// Plate counts for one side; empty unless the bar is loaded.
    pub fn plate_counts(&self) -> &[PlateCount] {
        match self {
            PlateLoad::Loaded { plates, .. } => plates,
            _ => &[],
        }
    }

    /// One entry per physical plate on one side, heaviest first.
    pub fn plates(&self) -> Vec<Plate> {
        self.plate_counts()
            .iter()
            .flat_map(|group| (0..group.count).map(move |_| Plate { weight: group.weight }))
            .collect()
    }

    /// Short machine-readable status.
    pub fn status(&self) -> &'static str {
        match self {
            PlateLoad::Invalid(_) => "invalid",
            PlateLoad::BarOnly { .. } => "bar_only",
            PlateLoad::Loaded { .. } => "loaded",
        }
    }

    /// Weight actually on the bar: bar, collars and both sides of plates.
    pub fn loaded_weight(&self) -> Option<f64> {
        match self {
            PlateLoad::Invalid(_) => None,
            PlateLoad::BarOnly { collars } => Some(BAR_WEIGHT_KG + collar_total(*collars)),
            PlateLoad::Loaded { plates, collars } => {
                let per_side: f64 = plates.iter().map(|p| p.weight * p.count as f64).sum();
                Some(BAR_WEIGHT_KG + collar_total(*collars) + 2.0 * per_side)
            }
        }
    }
}

impl fmt::Display for PlateLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlateLoad::Invalid(InvalidLoad::BelowBar) => {
                write!(f, "Invalid (below {}kg bar)", format_kg(BAR_WEIGHT_KG))
            }
            PlateLoad::Invalid(InvalidLoad::CollarsDoNotFit) => write!(
                f,
                "Invalid (collars need at least {}kg)",
                format_kg(BAR_WEIGHT_KG + collar_total(true))
            ),
            PlateLoad::Invalid(InvalidLoad::AboveMax) => {
                write!(f, "Invalid (above {}kg)", format_kg(MAX_TOTAL_KG))
            }
            PlateLoad::BarOnly { collars } => {
                write!(f, "Bar only ({}kg)", format_kg(BAR_WEIGHT_KG))?;
                if *collars {
                    write!(f, " + {}kg Collars", format_kg(collar_total(true)))?;
                }
                Ok(())
            }
            PlateLoad::Loaded { plates, .. } => {
                let parts: Vec<String> = plates
                    .iter()
                    .map(|p| format!("{}×{}kg", p.count, format_kg(p.weight)))
                    .collect();
                write!(f, "{}", parts.join(" + "))
            }
        }
    }
}

fn collar_total(collars: bool) -> f64 {
    if collars { 2.0 * COLLAR_WEIGHT_KG } else { 0.0 }
}

fn to_quarters(kg: f64) -> u64 {
    (kg * QUARTERS_PER_KG + TOLERANCE).floor() as u64
}

/// Resolves a bar total into per-side plates.
///
/// - below 20 kg (or NaN) or above [`MAX_TOTAL_KG`] is invalid
/// - exactly 20 kg is the bar alone
/// - collars on a total under 25 kg is invalid
/// - any per-side remainder under 0.25 kg is dropped
pub fn resolve_plates(total_kg: f64, include_collars: bool) -> PlateLoad {
    if total_kg.is_nan() || total_kg < BAR_WEIGHT_KG {
        return PlateLoad::Invalid(InvalidLoad::BelowBar);
    }
    if total_kg > MAX_TOTAL_KG {
        return PlateLoad::Invalid(InvalidLoad::AboveMax);
    }
    if (total_kg - BAR_WEIGHT_KG).abs() < TOLERANCE {
        return PlateLoad::BarOnly { collars: false };
    }

    let mut per_side_kg = (total_kg - BAR_WEIGHT_KG) / 2.0;
    if include_collars {
        per_side_kg -= COLLAR_WEIGHT_KG;
    }
    if per_side_kg < -TOLERANCE {
        return PlateLoad::Invalid(InvalidLoad::CollarsDoNotFit);
    }

    let mut remaining = to_quarters(per_side_kg.max(0.0));
    let mut plates = Vec::new();
    for denomination in PLATE_DENOMINATIONS_KG {
        let size = to_quarters(denomination);
        let count = remaining / size;
        if count > 0 {
            plates.push(PlateCount {
                weight: denomination,
                count,
            });
            remaining -= count * size;
        }
    }

    if plates.is_empty() {
        return PlateLoad::BarOnly {
            collars: include_collars,
        };
    }
    PlateLoad::Loaded {
        plates,
        collars: include_collars,
    }
}

/// Human-readable breakdown, e.g. `2×25kg + 1×10kg`.
pub fn plate_breakdown_text(total_kg: f64, include_collars: bool) -> String {
    resolve_plates(total_kg, include_collars).to_string()
}

/// One entry per physical plate on one side, heaviest first.
pub fn plate_breakdown_list(total_kg: f64, include_collars: bool) -> Vec<Plate> {
    resolve_plates(total_kg, include_collars).plates()
}

// === Display metadata ===

/// Rendering size for plate graphics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplaySize {
    #[default]
    #[serde(rename = "sm")]
    Small,
    #[serde(rename = "lg")]
    Large,
}

impl FromStr for DisplaySize {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sm" | "small" => Ok(DisplaySize::Small),
            "lg" | "large" => Ok(DisplaySize::Large),
            _ => Err(InputError::UnknownSize(s.to_string())),
        }
    }
}

/// Colour and relative dimensions used to draw a plate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlateStyle {
    pub color: &'static str,
    pub height: f32,
    pub width: f32,
}

/// A plate with its display style attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayPlate {
    pub weight: f64,
    #[serde(flatten)]
    pub style: PlateStyle,
}

/// Competition colour and drawing size for a denomination.
pub fn plate_style(weight: f64, size: DisplaySize) -> PlateStyle {
    // (weight, colour, small h/w, large h/w)
    const STYLES: [(f64, &str, (f32, f32), (f32, f32)); 9] = [
        (25.0, "red", (10.0, 3.0), (14.0, 5.0)),
        (20.0, "blue", (10.0, 2.5), (14.0, 4.0)),
        (15.0, "yellow", (9.0, 2.5), (12.0, 4.0)),
        (10.0, "green", (9.0, 2.0), (12.0, 3.0)),
        (5.0, "white", (8.0, 2.0), (11.0, 3.0)),
        (2.5, "black", (7.0, 1.5), (10.0, 2.0)),
        (1.25, "chrome", (6.0, 1.0), (8.0, 2.0)),
        (0.5, "silver", (5.0, 1.0), (7.0, 2.0)),
        (0.25, "silver", (4.0, 1.0), (6.0, 2.0)),
    ];

    let (color, small, large) = STYLES
        .iter()
        .find(|(w, ..)| *w == weight)
        .map(|(_, color, small, large)| (*color, *small, *large))
        .unwrap_or(("grey", (4.0, 1.0), (6.0, 2.0)));
    let (height, width) = match size {
        DisplaySize::Small => small,
        DisplaySize::Large => large,
    };
    PlateStyle {
        color,
        height,
        width,
    }
}

/// Per-side plates with display styles, for drawing a loaded bar.
pub fn plates_for_display(
    total_kg: f64,
    include_collars: bool,
    size: DisplaySize,
) -> Vec<DisplayPlate> {
    plate_breakdown_list(total_kg, include_collars)
        .into_iter()
        .map(|plate| DisplayPlate {
            weight: plate.weight,
            style: plate_style(plate.weight, size),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(plates: &[Plate]) -> Vec<f64> {
        plates.iter().map(|p| p.weight).collect()
    }

    #[test]
    fn test_140_without_collars() {
        // 60kg per side
        assert_eq!(plate_breakdown_text(140.0, false), "2×25kg + 1×10kg");
        assert_eq!(
            weights(&plate_breakdown_list(140.0, false)),
            vec![25.0, 25.0, 10.0]
        );
    }

    #[test]
    fn test_with_collars() {
        // (100 - 20) / 2 - 2.5 = 37.5 per side
        assert_eq!(plate_breakdown_text(100.0, true), "1×25kg + 1×10kg + 1×2.5kg");
    }

    #[test]
    fn test_small_plates() {
        // (102.5 - 20) / 2 = 41.25 per side
        assert_eq!(plate_breakdown_text(102.5, false), "1×25kg + 1×15kg + 1×1.25kg");
        // (21.5 - 20) / 2 = 0.75 per side
        assert_eq!(plate_breakdown_text(21.5, false), "1×0.5kg + 1×0.25kg");
    }

    #[test]
    fn test_below_bar_is_invalid() {
        assert_eq!(
            resolve_plates(15.0, false),
            PlateLoad::Invalid(InvalidLoad::BelowBar)
        );
        assert_eq!(
            resolve_plates(f64::NAN, true),
            PlateLoad::Invalid(InvalidLoad::BelowBar)
        );
        assert!(plate_breakdown_list(0.0, false).is_empty());
    }

    #[test]
    fn test_bar_only() {
        assert_eq!(resolve_plates(20.0, false), PlateLoad::BarOnly { collars: false });
        assert_eq!(resolve_plates(20.0, true), PlateLoad::BarOnly { collars: false });
        assert_eq!(plate_breakdown_text(20.0, false), "Bar only (20kg)");
        assert_eq!(plate_breakdown_text(25.0, true), "Bar only (20kg) + 5kg Collars");
        assert!(plate_breakdown_list(20.0, false).is_empty());
    }

    #[test]
    fn test_collars_do_not_fit() {
        assert_eq!(
            resolve_plates(22.5, true),
            PlateLoad::Invalid(InvalidLoad::CollarsDoNotFit)
        );
        assert_eq!(
            plate_breakdown_text(22.5, true),
            "Invalid (collars need at least 25kg)"
        );
        assert!(resolve_plates(22.5, false).plates().len() == 1);
    }

    #[test]
    fn test_unmatched_remainder_dropped() {
        // 0.1kg per side cannot be loaded
        assert_eq!(resolve_plates(20.2, false), PlateLoad::BarOnly { collars: false });
        // 40.1kg per side -> 25 + 15
        assert_eq!(weights(&plate_breakdown_list(100.2, false)), vec![25.0, 15.0]);
    }

    #[test]
    fn test_round_trip_loaded_weight() {
        for total in [20.0, 60.0, 100.0, 140.0, 142.5, 227.5, 301.0, 400.5] {
            let load = resolve_plates(total, false);
            assert_eq!(load.loaded_weight(), Some(total), "{total}");
        }
        for total in [25.0, 60.0, 100.0, 140.0, 182.5, 250.0] {
            let load = resolve_plates(total, true);
            assert_eq!(load.loaded_weight(), Some(total), "{total} with collars");
        }
    }

    #[test]
    fn test_text_and_list_agree() {
        for total in [42.5, 97.5, 165.0, 212.5, 333.0] {
            let list = plate_breakdown_list(total, false);
            let text = plate_breakdown_text(total, false);
            let from_text: usize = text
                .split(" + ")
                .map(|part| part.split('×').next().unwrap().parse::<usize>().unwrap())
                .sum();
            assert_eq!(from_text, list.len(), "{total}: {text}");
        }
    }

    #[test]
    fn test_above_max_is_invalid() {
        assert_eq!(
            resolve_plates(1000.5, false),
            PlateLoad::Invalid(InvalidLoad::AboveMax)
        );
        assert_eq!(plate_breakdown_text(4e9, true), "Invalid (above 1000kg)");
        assert!(plate_breakdown_list(1e300, false).is_empty());
        assert!(plates_for_display(f64::MAX, false, DisplaySize::Small).is_empty());
        assert_eq!(
            resolve_plates(f64::INFINITY, false),
            PlateLoad::Invalid(InvalidLoad::AboveMax)
        );

        // 490kg per side -> 19×25 + 15
        let load = resolve_plates(MAX_TOTAL_KG, false);
        assert_eq!(load.to_string(), "19×25kg + 1×15kg");
        assert_eq!(load.plates().len(), 20);
    }

    #[test]
    fn test_plate_counts_grouped() {
        let load = resolve_plates(227.5, false);
        // 103.75 per side -> 4×25 + 2.5 + 1.25
        assert_eq!(
            load.plate_counts(),
            &[
                PlateCount { weight: 25.0, count: 4 },
                PlateCount { weight: 2.5, count: 1 },
                PlateCount { weight: 1.25, count: 1 },
            ]
        );
        assert_eq!(weights(&load.plates()), vec![25.0, 25.0, 25.0, 25.0, 2.5, 1.25]);
    }

    #[test]
    fn test_descending_order() {
        let list = weights(&plate_breakdown_list(287.5, true));
        assert!(list.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_plate_style() {
        assert_eq!(plate_style(25.0, DisplaySize::Small).color, "red");
        assert_eq!(plate_style(20.0, DisplaySize::Large).color, "blue");
        assert!(
            plate_style(25.0, DisplaySize::Large).height
                > plate_style(25.0, DisplaySize::Small).height
        );

        let display = plates_for_display(100.0, false, DisplaySize::Large);
        assert_eq!(display.len(), 2);
        assert_eq!(display[0].style.color, "red");
        assert_eq!(display[1].style.color, "yellow");
    }
}
