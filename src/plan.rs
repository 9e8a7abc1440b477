//! Competition plans.
//!
//! A plan holds the meet details and the planning state of each lift. The
//! engine functions are applied to it in place, and the finished plan is
//! flattened into a record for external exporters.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attempts::project_attempts;
use crate::domain::{
    Attempt, AttemptSlot, DynamicWarmupSettings, Gender, Lift, ScoringFormula, WarmupPlan,
    WarmupSet, WarmupStrategy, format_kg, parse_number, parse_weight,
};
use crate::error::{InputError, PlanError};
use crate::formulas::calculate_score;
use crate::plates::plate_breakdown_text;
use crate::warmups::generate_warmups;

/// Meet and lifter details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompetitionDetails {
    pub event_name: String,
    pub lifter_name: String,
    pub weight_class: String,
    pub competition_date: Option<NaiveDate>,
    pub weigh_in_time: String,
    pub body_weight: String,
    pub gender: Option<Gender>,
    pub scoring_formula: ScoringFormula,
}

/// Rack and bench settings, carried through to exports untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentSettings {
    pub squat_rack_height: String,
    pub squat_stands: String,
    pub bench_rack_height: String,
    pub hand_out: String,
    pub bench_safety_height: String,
}

/// Planning state of a single lift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiftPlan {
    pub attempts: Attempt,
    pub warmups: WarmupPlan,
    pub include_collars: bool,
    pub warmup_strategy: WarmupStrategy,
    pub dynamic_warmup_settings: DynamicWarmupSettings,
    /// Opener the current warm-ups were generated from.
    pub opener_for_warmups: String,
}

impl LiftPlan {
    /// Projects the missing attempts. On error the attempts are untouched.
    pub fn calculate_attempts(&mut self, lift: Lift) -> Result<(), InputError> {
        self.attempts = project_attempts(lift, &self.attempts)?;
        Ok(())
    }

    /// Regenerates warm-ups from the current opener. On error the previous
    /// warm-ups are kept.
    pub fn generate_warmups(&mut self, lift: Lift) -> Result<(), InputError> {
        self.warmups = generate_warmups(
            lift,
            &self.attempts.opener,
            self.warmup_strategy,
            &self.dynamic_warmup_settings,
        )?;
        self.opener_for_warmups = self.attempts.opener.clone();
        Ok(())
    }

    /// Projects attempts when any is missing, then (re)generates warm-ups
    /// when there are none or they no longer match the opener.
    pub fn fill_in(&mut self, lift: Lift) -> Result<(), InputError> {
        if !self.attempts.is_complete() {
            self.calculate_attempts(lift)?;
        }
        if self.warmups.is_empty() || self.warmups_stale() {
            self.generate_warmups(lift)?;
        }
        Ok(())
    }

    /// True when the warm-ups were generated for a different opener.
    pub fn warmups_stale(&self) -> bool {
        !self.opener_for_warmups.is_empty()
            && self.opener_for_warmups != self.attempts.opener
            && !self.warmups.is_empty()
    }

    /// All attempts filled in and at least one warm-up weight.
    pub fn is_complete(&self) -> bool {
        self.attempts.is_complete() && self.warmups.last_weight_kg().is_some()
    }

    /// Plates for the opener and the last warm-up.
    pub fn plate_summary(&self) -> Option<String> {
        let opener = parse_number(&self.attempts.opener).ok()?;
        let last_warmup = self.warmups.last_weight_kg()?;

        Some(format!(
            "Opener ({}kg): {} | Last WU ({}kg): {}",
            self.attempts.opener.trim(),
            plate_breakdown_text(opener, self.include_collars),
            format_kg(last_warmup),
            plate_breakdown_text(last_warmup, self.include_collars)
        ))
    }
}

/// Planning state of all three lifts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lifts {
    pub squat: LiftPlan,
    pub bench: LiftPlan,
    pub deadlift: LiftPlan,
}

impl Lifts {
    pub fn get(&self, lift: Lift) -> &LiftPlan {
        match lift {
            Lift::Squat => &self.squat,
            Lift::Bench => &self.bench,
            Lift::Deadlift => &self.deadlift,
        }
    }

    pub fn get_mut(&mut self, lift: Lift) -> &mut LiftPlan {
        match lift {
            Lift::Squat => &mut self.squat,
            Lift::Bench => &mut self.bench,
            Lift::Deadlift => &mut self.deadlift,
        }
    }
}

/// A whole competition plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitionPlan {
    pub details: CompetitionDetails,
    pub equipment: EquipmentSettings,
    pub lifts: Lifts,
}

/// Per-lift part of a [`PlanSummary`].
#[derive(Debug, Clone, Serialize)]
pub struct LiftSummary {
    pub lift: Lift,
    pub attempts: Attempt,
    pub warmups: Vec<WarmupSet>,
    pub plates: Option<String>,
    pub complete: bool,
    pub stale_warmups: bool,
}

/// Derived view of a plan: totals, score and per-lift status.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub lifter_name: String,
    pub event_name: String,
    pub days_out: Option<i64>,
    pub predicted_total: f64,
    pub formula: ScoringFormula,
    pub score: f64,
    pub lifts: Vec<LiftSummary>,
}

impl CompetitionPlan {
    /// Sum of the three third attempts. Unparseable thirds count as zero.
    pub fn predicted_total(&self) -> f64 {
        Lift::all()
            .iter()
            .map(|lift| parse_number(&self.lifts.get(*lift).attempts.third).unwrap_or(0.0))
            .sum()
    }

    /// Score of the predicted total with the selected formula.
    pub fn predicted_score(&self) -> f64 {
        let bodyweight = parse_number(&self.details.body_weight).unwrap_or(0.0);
        calculate_score(
            self.predicted_total(),
            bodyweight,
            self.details.gender,
            self.details.scoring_formula,
        )
    }

    /// Fills in every lift, collecting the lifts that could not be filled in.
    pub fn fill_in(&mut self) -> Vec<(Lift, InputError)> {
        let mut failures = Vec::new();
        for lift in Lift::all() {
            if let Err(e) = self.lifts.get_mut(*lift).fill_in(*lift) {
                log::warn!("{}: {}", lift, e);
                failures.push((*lift, e));
            }
        }
        failures
    }

    /// Builds the summary view. `today` anchors the countdown to the meet.
    pub fn summary(&self, today: NaiveDate) -> PlanSummary {
        let lifts = Lift::all()
            .iter()
            .map(|lift| {
                let plan = self.lifts.get(*lift);
                LiftSummary {
                    lift: *lift,
                    attempts: plan.attempts.clone(),
                    warmups: plan.warmups.populated().cloned().collect(),
                    plates: plan.plate_summary(),
                    complete: plan.is_complete(),
                    stale_warmups: plan.warmups_stale(),
                }
            })
            .collect();

        PlanSummary {
            lifter_name: self.details.lifter_name.clone(),
            event_name: self.details.event_name.clone(),
            days_out: self
                .details
                .competition_date
                .map(|date| (date - today).num_days()),
            predicted_total: self.predicted_total(),
            formula: self.details.scoring_formula,
            score: self.predicted_score(),
            lifts,
        }
    }

    /// Flat, ordered key/value record of the plan for tabular export.
    pub fn export_record(&self) -> Vec<(String, String)> {
        let d = &self.details;
        let e = &self.equipment;
        let mut record: Vec<(String, String)> = [
            ("eventName", d.event_name.clone()),
            ("lifterName", d.lifter_name.clone()),
            ("weightClass", d.weight_class.clone()),
            ("bodyWeight", d.body_weight.clone()),
            ("gender", d.gender.map(|g| g.id().to_string()).unwrap_or_default()),
            (
                "competitionDate",
                d.competition_date.map(|date| date.to_string()).unwrap_or_default(),
            ),
            ("weighInTime", d.weigh_in_time.clone()),
            ("squatRackHeight", e.squat_rack_height.clone()),
            ("squatStands", e.squat_stands.clone()),
            ("benchRackHeight", e.bench_rack_height.clone()),
            ("handOut", e.hand_out.clone()),
            ("benchSafetyHeight", e.bench_safety_height.clone()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        for lift in Lift::all() {
            let attempts = &self.lifts.get(*lift).attempts;
            for slot in AttemptSlot::all() {
                record.push((format!("{}{}", lift.id(), slot), attempts.get(*slot).to_string()));
            }
        }

        for lift in Lift::all() {
            let warmups = &self.lifts.get(*lift).warmups;
            for (i, set) in warmups.sets().iter().enumerate() {
                record.push((format!("{}Warmup{}Weight", lift.id(), i + 1), set.weight.clone()));
                record.push((format!("{}Warmup{}Reps", lift.id(), i + 1), set.reps.clone()));
            }
        }

        record
    }

    /// Writes the export record as CSV: a header row of keys, then one row
    /// of values.
    pub fn write_export_csv<W: Write>(&self, out: W) -> Result<(), csv::Error> {
        let record = self.export_record();
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(record.iter().map(|(key, _)| key))?;
        writer.write_record(record.iter().map(|(_, value)| value))?;
        writer.flush()?;
        Ok(())
    }
}

/// Builds a plan from nothing but the third attempts.
///
/// Each lift with a numeric third gets attempts projected from that third
/// and table warm-ups from the projected opener. Other lifts stay empty.
pub fn lite_plan(lifter_name: &str, thirds: &[(Lift, &str)]) -> CompetitionPlan {
    let mut plan = CompetitionPlan::default();
    plan.details.lifter_name = lifter_name.to_string();

    for (lift, third) in thirds {
        if parse_weight(third).is_err() {
            log::debug!("{}: no usable third attempt {:?}", lift, third);
            continue;
        }
        let lift_plan = plan.lifts.get_mut(*lift);
        lift_plan.attempts = Attempt::new("", "", third);
        if lift_plan.calculate_attempts(*lift).is_err() {
            continue;
        }
        if let Err(e) = lift_plan.generate_warmups(*lift) {
            log::warn!("{}: {}", lift, e);
        }
    }

    plan
}

/// Loads a competition plan from a JSON file.
///
/// # Errors
/// Returns PlanError if the file is missing, unreadable or not a plan.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<CompetitionPlan, PlanError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PlanError::FileNotFound(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| PlanError::CannotRead(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| PlanError::InvalidFormat(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_with_thirds(squat: &str, bench: &str, deadlift: &str) -> CompetitionPlan {
        let mut plan = CompetitionPlan::default();
        plan.lifts.squat.attempts = Attempt::new("", "", squat);
        plan.lifts.bench.attempts = Attempt::new("", "", bench);
        plan.lifts.deadlift.attempts = Attempt::new("", "", deadlift);
        plan
    }

    #[test]
    fn test_default_lift_plan() {
        let plan = LiftPlan::default();
        assert!(plan.warmups.is_empty());
        assert_eq!(plan.warmup_strategy, WarmupStrategy::Default);
        assert_eq!(plan.dynamic_warmup_settings, DynamicWarmupSettings::new("6", "20", "92"));
        assert!(!plan.include_collars);
    }

    #[test]
    fn test_predicted_total_and_score() {
        let mut plan = plan_with_thirds("200", "abc", "300");
        assert_eq!(plan.predicted_total(), 500.0);
        // No bodyweight or gender yet
        assert_eq!(plan.predicted_score(), 0.0);

        plan.details.body_weight = "83".into();
        plan.details.gender = Some(Gender::Male);
        assert_eq!(
            plan.predicted_score(),
            calculate_score(500.0, 83.0, Some(Gender::Male), ScoringFormula::IpfGl)
        );
        assert!(plan.predicted_score() > 0.0);
    }

    #[test]
    fn test_calculate_attempts_failure_leaves_state() {
        let mut lift = LiftPlan::default();
        lift.attempts = Attempt::new("", "140", "");
        assert!(lift.calculate_attempts(Lift::Squat).is_err());
        assert_eq!(lift.attempts, Attempt::new("", "140", ""));
    }

    #[test]
    fn test_generate_warmups_records_opener() {
        let mut lift = LiftPlan::default();
        lift.attempts = Attempt::new("100", "", "");
        lift.generate_warmups(Lift::Bench).unwrap();
        assert_eq!(lift.opener_for_warmups, "100");
        assert_eq!(lift.warmups.len(), 5);
        assert!(!lift.warmups_stale());

        lift.attempts.opener = "102.5".into();
        assert!(lift.warmups_stale());

        // A failed regeneration keeps the previous warm-ups
        let before = lift.warmups.clone();
        lift.attempts.opener = "heavy".into();
        assert!(lift.generate_warmups(Lift::Bench).is_err());
        assert_eq!(lift.warmups, before);
        assert_eq!(lift.opener_for_warmups, "100");
    }

    #[test]
    fn test_fill_in_lift() {
        let mut lift = LiftPlan::default();
        lift.attempts = Attempt::new("150", "", "");
        lift.fill_in(Lift::Squat).unwrap();
        assert!(lift.is_complete());
        assert_eq!(lift.attempts, Attempt::new("150", "157.5", "165"));
    }

    #[test]
    fn test_plan_fill_in_reports_failures() {
        let mut plan = plan_with_thirds("200", "", "250");
        let failures = plan.fill_in();
        assert_eq!(failures, vec![(Lift::Bench, InputError::NothingToProject)]);
        assert!(plan.lifts.squat.is_complete());
        assert!(plan.lifts.deadlift.is_complete());
        assert_eq!(plan.lifts.bench, LiftPlan::default());
    }

    #[test]
    fn test_plate_summary() {
        let mut lift = LiftPlan::default();
        assert!(lift.plate_summary().is_none());

        lift.attempts = Attempt::new("140", "", "");
        lift.warmups = WarmupPlan::from_sets([(60.0, 5), (100.0, 3), (125.0, 1)]);
        assert_eq!(
            lift.plate_summary().unwrap(),
            "Opener (140kg): 2×25kg + 1×10kg | Last WU (125kg): 2×25kg + 1×2.5kg"
        );
    }

    #[test]
    fn test_lite_plan() {
        let plan = lite_plan(
            "Sam",
            &[(Lift::Squat, "200"), (Lift::Bench, ""), (Lift::Deadlift, "250")],
        );
        assert_eq!(plan.details.lifter_name, "Sam");

        let squat = &plan.lifts.squat;
        // 200 × 0.91 = 182 -> 182.5, 200 × 0.955 = 191 -> 190
        assert_eq!(squat.attempts, Attempt::new("182.5", "190", "200"));
        assert_eq!(squat.opener_for_warmups, "182.5");
        assert!(!squat.warmups.is_empty());

        assert_eq!(plan.lifts.bench, LiftPlan::default());
        assert_eq!(plan.lifts.deadlift.attempts.opener, "225");
        assert_eq!(plan.predicted_total(), 450.0);
    }

    #[test]
    fn test_summary_days_out() {
        let mut plan = lite_plan("Sam", &[(Lift::Squat, "200")]);
        plan.details.competition_date = NaiveDate::from_ymd_opt(2024, 6, 15);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let summary = plan.summary(today);
        assert_eq!(summary.days_out, Some(14));
        assert_eq!(summary.lifts.len(), 3);
        assert!(summary.lifts[0].complete);
        assert!(summary.lifts[0].plates.is_some());
        assert!(!summary.lifts[1].complete);
    }

    #[test]
    fn test_export_record_layout() {
        let mut plan = lite_plan("Sam", &[(Lift::Bench, "120")]);
        plan.details.gender = Some(Gender::Female);
        let record = plan.export_record();

        // 12 detail fields + 9 attempts + 3 lifts × 8 sets × 2
        assert_eq!(record.len(), 12 + 9 + 48);
        assert_eq!(record[0].0, "eventName");
        assert_eq!(record[1], ("lifterName".to_string(), "Sam".to_string()));
        assert_eq!(record[4], ("gender".to_string(), "female".to_string()));

        let get = |key: &str| {
            record
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("bench1"), "110");
        assert_eq!(get("bench3"), "120");
        assert_eq!(get("squat1"), "");
        assert_eq!(get("benchWarmup1Weight"), "20");
        assert_eq!(get("deadliftWarmup8Reps"), "");
    }

    #[test]
    fn test_export_csv_quotes_line_breaks() {
        let mut plan = lite_plan("A\rB", &[(Lift::Squat, "200")]);
        plan.details.event_name = "Nationals, \"Open\"".into();

        let mut out = Vec::new();
        plan.write_export_csv(&mut out).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 12 + 9 + 48);
        assert_eq!(&headers[1], "lifterName");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "Nationals, \"Open\"");
        assert_eq!(&rows[0][1], "A\rB");
        assert_eq!(&rows[0][12], "182.5");
    }

    #[test]
    fn test_plan_json_round_trip() {
        let json = r#"{
            "details": {
                "lifterName": "Alex",
                "competitionDate": "2025-03-08",
                "bodyWeight": "74.2",
                "gender": "male",
                "scoringFormula": "dots"
            },
            "lifts": {
                "squat": { "attempts": { "1": "180" }, "includeCollars": true },
                "bench": {
                    "attempts": { "1": "120" },
                    "warmupStrategy": "dynamic",
                    "dynamicWarmupSettings": { "numSets": "5", "startWeight": "20", "finalWarmupPercent": "90" }
                }
            }
        }"#;

        let mut plan: CompetitionPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.details.scoring_formula, ScoringFormula::Dots);
        assert!(plan.lifts.squat.include_collars);
        assert_eq!(plan.lifts.bench.warmup_strategy, WarmupStrategy::Dynamic);

        let failures = plan.fill_in();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Lift::Deadlift);
        // 120 × 0.9 = 108, five sets from 20
        assert_eq!(plan.lifts.bench.warmups.last_weight_kg(), Some(107.5));

        let text = serde_json::to_string(&plan).unwrap();
        let back: CompetitionPlan = serde_json::from_str(&text).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_load_plan_missing_file() {
        let result = load_plan("/nonexistent/plan.json");
        assert!(matches!(result, Err(PlanError::FileNotFound(_))));
    }
}
