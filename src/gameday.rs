//! Competition-day tracking of attempts and warm-ups.

use serde::{Deserialize, Serialize};

use crate::domain::{Attempt, AttemptSlot, Lift, WarmupSet, format_kg, parse_number};
use crate::error::InputError;
use crate::formulas::BAR_INCREMENT_KG;
use crate::plan::LiftPlan;

/// Outcome of a competition attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptStatus {
    #[default]
    Pending,
    Completed,
    Missed,
}

/// A warm-up set with a check-off flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDayWarmup {
    #[serde(flatten)]
    pub set: WarmupSet,
    #[serde(default)]
    pub completed: bool,
}

/// Live state of one lift on competition day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDayLift {
    pub lift: Lift,
    pub attempts: Attempt,
    #[serde(default)]
    pub status: [AttemptStatus; 3],
    #[serde(default)]
    pub warmups: Vec<GameDayWarmup>,
}

impl GameDayLift {
    /// Starts a lift from its plan with every attempt pending.
    pub fn from_plan(lift: Lift, plan: &LiftPlan) -> Self {
        Self {
            lift,
            attempts: plan.attempts.clone(),
            status: [AttemptStatus::Pending; 3],
            warmups: plan
                .warmups
                .sets()
                .iter()
                .map(|set| GameDayWarmup {
                    set: set.clone(),
                    completed: false,
                })
                .collect(),
        }
    }

    pub fn status(&self, slot: AttemptSlot) -> AttemptStatus {
        self.status[slot.index()]
    }

    /// Changes an attempt weight, e.g. after a call to the table.
    pub fn set_attempt_weight(&mut self, slot: AttemptSlot, value: &str) {
        self.attempts.set(slot, value);
    }

    /// Records the outcome of an attempt.
    ///
    /// A good lift pushes the next attempt, when one is entered, to at least
    /// 2.5 kg above the weight just made.
    pub fn set_attempt_status(&mut self, slot: AttemptSlot, status: AttemptStatus) {
        self.status[slot.index()] = status;

        if status != AttemptStatus::Completed {
            return;
        }
        let Ok(made) = parse_number(self.attempts.get(slot)) else {
            return;
        };
        let Some(next) = slot.next() else {
            return;
        };
        if self.attempts.get(next).is_empty() {
            return;
        }

        let min_next = made + BAR_INCREMENT_KG;
        let raise = match parse_number(self.attempts.get(next)) {
            Ok(planned) => planned < min_next,
            Err(_) => true,
        };
        if raise {
            log::info!("{}: attempt {} raised to {}kg", self.lift, next, format_kg(min_next));
            self.attempts.set(next, format_kg(min_next));
        }
    }

    /// Flips a warm-up's completed flag and returns the new value.
    pub fn toggle_warmup(&mut self, index: usize) -> Result<bool, InputError> {
        let warmup = self
            .warmups
            .get_mut(index)
            .ok_or(InputError::WarmupIndex(index))?;
        warmup.completed = !warmup.completed;
        Ok(warmup.completed)
    }

    /// Best good lift: the latest completed attempt, 0 if none.
    pub fn best_lift(&self) -> f64 {
        [AttemptSlot::Third, AttemptSlot::Second, AttemptSlot::First]
            .into_iter()
            .find(|slot| {
                self.status(*slot) == AttemptStatus::Completed
                    && !self.attempts.get(*slot).is_empty()
            })
            .and_then(|slot| parse_number(self.attempts.get(slot)).ok())
            .unwrap_or(0.0)
    }
}

/// Running total of best good lifts.
pub fn current_total(lifts: &[GameDayLift]) -> f64 {
    lifts.iter().map(GameDayLift::best_lift).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WarmupPlan;

    fn lift_with(opener: &str, second: &str, third: &str) -> GameDayLift {
        let plan = LiftPlan {
            attempts: Attempt::new(opener, second, third),
            warmups: WarmupPlan::from_sets([(20.0, 5), (60.0, 3), (100.0, 1)]),
            ..LiftPlan::default()
        };
        GameDayLift::from_plan(Lift::Squat, &plan)
    }

    #[test]
    fn test_from_plan_all_pending() {
        let lift = lift_with("150", "160", "170");
        assert!(lift.status.iter().all(|s| *s == AttemptStatus::Pending));
        assert_eq!(lift.warmups.len(), 8);
        assert!(lift.warmups.iter().all(|w| !w.completed));
    }

    #[test]
    fn test_good_lift_raises_low_next_attempt() {
        let mut lift = lift_with("150", "150", "170");
        lift.set_attempt_status(AttemptSlot::First, AttemptStatus::Completed);
        assert_eq!(lift.attempts.second, "152.5");

        lift.set_attempt_status(AttemptSlot::Second, AttemptStatus::Completed);
        assert_eq!(lift.attempts.third, "170");
    }

    #[test]
    fn test_good_lift_replaces_unparseable_next_attempt() {
        let mut lift = lift_with("150", "160", "tbd");
        lift.set_attempt_status(AttemptSlot::Second, AttemptStatus::Completed);
        assert_eq!(lift.attempts.third, "162.5");
    }

    #[test]
    fn test_empty_next_attempt_left_alone() {
        let mut lift = lift_with("150", "", "");
        lift.set_attempt_status(AttemptSlot::First, AttemptStatus::Completed);
        assert_eq!(lift.attempts.second, "");
    }

    #[test]
    fn test_missed_lift_changes_nothing() {
        let mut lift = lift_with("150", "140", "170");
        lift.set_attempt_status(AttemptSlot::First, AttemptStatus::Missed);
        assert_eq!(lift.attempts.second, "140");
        assert_eq!(lift.status(AttemptSlot::First), AttemptStatus::Missed);
    }

    #[test]
    fn test_best_lift() {
        let mut lift = lift_with("150", "160", "170");
        assert_eq!(lift.best_lift(), 0.0);

        lift.set_attempt_status(AttemptSlot::First, AttemptStatus::Completed);
        assert_eq!(lift.best_lift(), 150.0);

        lift.set_attempt_status(AttemptSlot::Second, AttemptStatus::Completed);
        lift.set_attempt_status(AttemptSlot::Third, AttemptStatus::Missed);
        assert_eq!(lift.best_lift(), 160.0);

        lift.set_attempt_status(AttemptSlot::Third, AttemptStatus::Completed);
        assert_eq!(lift.best_lift(), 170.0);
    }

    #[test]
    fn test_current_total() {
        let mut squat = lift_with("200", "210", "220");
        let mut bench = lift_with("120", "125", "130");
        let deadlift = lift_with("250", "260", "270");

        squat.set_attempt_status(AttemptSlot::Second, AttemptStatus::Completed);
        bench.set_attempt_status(AttemptSlot::First, AttemptStatus::Completed);
        bench.set_attempt_weight(AttemptSlot::First, "122.5");

        assert_eq!(current_total(&[squat, bench, deadlift]), 210.0 + 122.5);
    }

    #[test]
    fn test_toggle_warmup() {
        let mut lift = lift_with("150", "160", "170");
        assert_eq!(lift.toggle_warmup(1), Ok(true));
        assert_eq!(lift.toggle_warmup(1), Ok(false));
        assert_eq!(lift.toggle_warmup(8), Err(InputError::WarmupIndex(8)));
    }

    #[test]
    fn test_game_day_json() {
        let lift = lift_with("150", "160", "170");
        let json = serde_json::to_value(&lift).unwrap();
        assert_eq!(json["status"][0], "pending");
        assert_eq!(json["warmups"][0]["weight"], "20");
        assert_eq!(json["warmups"][0]["completed"], false);
    }
}
