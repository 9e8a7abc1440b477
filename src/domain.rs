//! Domain types for competition planning.
//!
//! Weights travel as text, the way a lifter types them in. Parsing happens
//! at the edge of each calculation through [`parse_weight`] and
//! [`parse_number`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Number of warm-up slots in every plan.
pub const WARMUP_SLOTS: usize = 8;

/// The three competition lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lift {
    Squat,
    Bench,
    Deadlift,
}

impl Lift {
    /// Returns all lifts in competition order.
    pub fn all() -> &'static [Lift] {
        &[Lift::Squat, Lift::Bench, Lift::Deadlift]
    }

    /// Returns the display name for the lift.
    pub fn display_name(&self) -> &'static str {
        match self {
            Lift::Squat => "Squat",
            Lift::Bench => "Bench",
            Lift::Deadlift => "Deadlift",
        }
    }

    /// Returns the lowercase identifier used in plan files and exports.
    pub fn id(&self) -> &'static str {
        match self {
            Lift::Squat => "squat",
            Lift::Bench => "bench",
            Lift::Deadlift => "deadlift",
        }
    }
}

impl FromStr for Lift {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" | "sq" => Ok(Lift::Squat),
            "bench" | "bench press" | "bp" => Ok(Lift::Bench),
            "deadlift" | "dl" => Ok(Lift::Deadlift),
            _ => Err(InputError::UnknownLift(s.to_string())),
        }
    }
}

impl fmt::Display for Lift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One of the three attempt slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptSlot {
    First,
    Second,
    Third,
}

impl AttemptSlot {
    /// Returns all slots in order.
    pub fn all() -> &'static [AttemptSlot] {
        &[AttemptSlot::First, AttemptSlot::Second, AttemptSlot::Third]
    }

    /// Zero-based position of the slot.
    pub fn index(&self) -> usize {
        match self {
            AttemptSlot::First => 0,
            AttemptSlot::Second => 1,
            AttemptSlot::Third => 2,
        }
    }

    /// The attempt that follows this one, if any.
    pub fn next(&self) -> Option<AttemptSlot> {
        match self {
            AttemptSlot::First => Some(AttemptSlot::Second),
            AttemptSlot::Second => Some(AttemptSlot::Third),
            AttemptSlot::Third => None,
        }
    }
}

impl FromStr for AttemptSlot {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(AttemptSlot::First),
            "2" => Ok(AttemptSlot::Second),
            "3" => Ok(AttemptSlot::Third),
            _ => Err(InputError::UnknownSlot(s.to_string())),
        }
    }
}

impl fmt::Display for AttemptSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// The three competition attempts for a lift, in kilograms.
///
/// Serialized with the keys `"1"`, `"2"` and `"3"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    #[serde(rename = "1", default)]
    pub opener: String,
    #[serde(rename = "2", default)]
    pub second: String,
    #[serde(rename = "3", default)]
    pub third: String,
}

impl Attempt {
    /// Creates an attempt set from the three slot values.
    pub fn new(opener: &str, second: &str, third: &str) -> Self {
        Self {
            opener: opener.to_string(),
            second: second.to_string(),
            third: third.to_string(),
        }
    }

    /// Returns the raw value of a slot.
    pub fn get(&self, slot: AttemptSlot) -> &str {
        match slot {
            AttemptSlot::First => &self.opener,
            AttemptSlot::Second => &self.second,
            AttemptSlot::Third => &self.third,
        }
    }

    /// Overwrites a slot.
    pub fn set(&mut self, slot: AttemptSlot, value: impl Into<String>) {
        let value = value.into();
        match slot {
            AttemptSlot::First => self.opener = value,
            AttemptSlot::Second => self.second = value,
            AttemptSlot::Third => self.third = value,
        }
    }

    /// Returns true if every slot holds a positive number.
    pub fn is_complete(&self) -> bool {
        AttemptSlot::all()
            .iter()
            .all(|slot| parse_weight(self.get(*slot)).is_ok())
    }
}

/// A single warm-up set. Empty strings mark an unused slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarmupSet {
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub reps: String,
}

impl WarmupSet {
    pub fn new(weight_kg: f64, reps: u32) -> Self {
        Self {
            weight: format_kg(weight_kg),
            reps: reps.to_string(),
        }
    }

    /// Returns true if the slot carries a weight.
    pub fn is_populated(&self) -> bool {
        !self.weight.trim().is_empty()
    }

    /// Parsed weight, if the slot holds a positive number.
    pub fn weight_kg(&self) -> Option<f64> {
        parse_weight(&self.weight).ok()
    }
}

/// Fixed-capacity warm-up plan. Unused trailing slots are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarmupPlan([WarmupSet; WARMUP_SLOTS]);

impl WarmupPlan {
    /// A plan with every slot empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a plan from `(weight, reps)` pairs. Pairs beyond the slot
    /// capacity are dropped.
    pub fn from_sets<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = (f64, u32)>,
    {
        let mut plan = Self::empty();
        for (slot, (weight, reps)) in plan.0.iter_mut().zip(sets) {
            *slot = WarmupSet::new(weight, reps);
        }
        plan
    }

    pub fn sets(&self) -> &[WarmupSet] {
        &self.0
    }

    /// Iterates over the populated slots.
    pub fn populated(&self) -> impl Iterator<Item = &WarmupSet> {
        self.0.iter().filter(|set| set.is_populated())
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.populated().count()
    }

    /// Returns true if no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The heaviest (last) populated set with a numeric weight.
    pub fn last_weight_kg(&self) -> Option<f64> {
        self.0.iter().rev().find_map(|set| set.weight_kg())
    }
}

/// How warm-ups are derived from the opener.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarmupStrategy {
    /// Hand-curated table lookup.
    #[default]
    Default,
    /// Decelerating progression between a start weight and a fraction of the opener.
    Dynamic,
}

impl FromStr for WarmupStrategy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" | "table" => Ok(WarmupStrategy::Default),
            "dynamic" => Ok(WarmupStrategy::Dynamic),
            _ => Err(InputError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Tunable parameters for the dynamic warm-up strategy.
///
/// `final_warmup_percent` is a percentage of the opener (e.g. `"92"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicWarmupSettings {
    pub num_sets: String,
    pub start_weight: String,
    pub final_warmup_percent: String,
}

impl DynamicWarmupSettings {
    pub fn new(num_sets: &str, start_weight: &str, final_warmup_percent: &str) -> Self {
        Self {
            num_sets: num_sets.to_string(),
            start_weight: start_weight.to_string(),
            final_warmup_percent: final_warmup_percent.to_string(),
        }
    }
}

impl Default for DynamicWarmupSettings {
    fn default() -> Self {
        Self::new("6", "20", "92")
    }
}

/// Lifter gender, selecting the coefficient set of a scoring formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn id(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Parses a gender field where an empty value means "not set yet".
pub fn parse_gender(s: &str) -> Result<Option<Gender>, InputError> {
    match s.trim().to_lowercase().as_str() {
        "" => Ok(None),
        "male" | "m" => Ok(Some(Gender::Male)),
        "female" | "f" => Ok(Some(Gender::Female)),
        _ => Err(InputError::UnknownGender(s.to_string())),
    }
}

/// Bodyweight-normalized scoring formulas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringFormula {
    #[default]
    #[serde(rename = "ipfgl")]
    IpfGl,
    #[serde(rename = "wilks")]
    Wilks,
    #[serde(rename = "dots")]
    Dots,
}

impl ScoringFormula {
    pub fn display_name(&self) -> &'static str {
        match self {
            ScoringFormula::IpfGl => "IPF GL",
            ScoringFormula::Wilks => "Wilks",
            ScoringFormula::Dots => "DOTS",
        }
    }
}

impl FromStr for ScoringFormula {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "").as_str() {
            "ipfgl" | "gl" => Ok(ScoringFormula::IpfGl),
            "wilks" => Ok(ScoringFormula::Wilks),
            "dots" => Ok(ScoringFormula::Dots),
            _ => Err(InputError::UnknownFormula(s.to_string())),
        }
    }
}

impl fmt::Display for ScoringFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Parses a finite number from a text field.
pub fn parse_number(s: &str) -> Result<f64, InputError> {
    let trimmed = s.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotANumber(s.to_string())),
    }
}

/// Parses a strictly positive weight from a text field.
pub fn parse_weight(s: &str) -> Result<f64, InputError> {
    let value = parse_number(s)?;
    if value <= 0.0 {
        return Err(InputError::NonPositive(value));
    }
    Ok(value)
}

/// Formats kilograms without a trailing `.0` (`150`, `157.5`, `1.25`).
pub fn format_kg(value: f64) -> String {
    // Normalize -0.0 so it never prints with a sign.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}
