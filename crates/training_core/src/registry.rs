//! Activity codes and the table that turns a raw sensor package into a
//! concrete workout.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::training::Training;
use crate::workouts::{Running, SportsWalking, Swimming};
use crate::{TrainingError, TrainingResult};

/// The closed set of supported activities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Swimming,
    Running,
    SportsWalking,
}

/// Dispatch table from activity code to variant.
pub const ACTIVITY_TABLE: &[(&str, ActivityKind)] = &[
    ("SWM", ActivityKind::Swimming),
    ("RUN", ActivityKind::Running),
    ("WLK", ActivityKind::SportsWalking),
];

impl ActivityKind {
    pub fn from_code(code: &str) -> TrainingResult<Self> {
        ACTIVITY_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| TrainingError::UnknownActivityCode(code.to_string()))
    }

    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Swimming => "SWM",
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::Swimming => Swimming::NAME,
            ActivityKind::Running => Running::NAME,
            ActivityKind::SportsWalking => SportsWalking::NAME,
        }
    }

    /// Number of positional values the constructor takes.
    pub fn arity(self) -> usize {
        match self {
            ActivityKind::Swimming => 5,
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
        }
    }

    /// Build the variant from positional values:
    /// `action, duration, weight, [height | length_pool, count_pool]`.
    pub fn build(self, data: &[f64]) -> TrainingResult<Workout> {
        if data.len() != self.arity() {
            return Err(TrainingError::Arity {
                name: self.name(),
                expected: self.arity(),
                got: data.len(),
            });
        }
        let action = data[0];
        let workout = match self {
            ActivityKind::Swimming => {
                Workout::Swimming(Swimming::new(action, data[1], data[2], data[3], data[4]))
            }
            ActivityKind::Running => Workout::Running(Running::new(action, data[1], data[2])),
            ActivityKind::SportsWalking => {
                Workout::SportsWalking(SportsWalking::new(action, data[1], data[2], data[3]))
            }
        };
        Ok(workout)
    }
}

/// Select the workout variant for `code` and construct it from `data`.
pub fn dispatch(code: &str, data: &[f64]) -> TrainingResult<Workout> {
    ActivityKind::from_code(code)?.build(data)
}

/// A workout of any supported kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Workout {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Workout::Swimming(_) => ActivityKind::Swimming,
            Workout::Running(_) => ActivityKind::Running,
            Workout::SportsWalking(_) => ActivityKind::SportsWalking,
        }
    }

    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Swimming(w) => w,
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
        }
    }
}

impl Training for Workout {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn action(&self) -> f64 {
        self.inner().action()
    }

    fn duration(&self) -> f64 {
        self.inner().duration()
    }

    fn weight(&self) -> f64 {
        self.inner().weight()
    }

    fn step_length(&self) -> f64 {
        self.inner().step_length()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn calories(&self) -> f64 {
        self.inner().calories()
    }
}

/// One raw input entry: activity code plus positional readings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Package {
    /// Activity code: "SWM", "RUN" or "WLK"
    pub code: String,
    /// action, duration, weight, then height (WLK) or length_pool, count_pool (SWM)
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    pub fn read(&self) -> TrainingResult<Workout> {
        dispatch(&self.code, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_builds_swimming_positionally() {
        let workout = dispatch("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swimming");
        assert_eq!(
            workout,
            Workout::Swimming(Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0))
        );
    }

    #[test]
    fn dispatch_rejects_unknown_code() {
        let err = dispatch("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, TrainingError::UnknownActivityCode(ref c) if c == "XYZ"));
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(ActivityKind::from_code("run").is_err());
    }

    #[test]
    fn dispatch_rejects_wrong_arity() {
        let err = dispatch("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            TrainingError::Arity {
                name: "SportsWalking",
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn fractional_action_passes_through() {
        let workout = dispatch("RUN", &[15000.5, 1.0, 75.0]).expect("running");
        assert_eq!(workout.action(), 15000.5);
        assert!(
            workout
                .show_training_info()
                .get_message()
                .ends_with("Потрачено ккал: 699.776.")
        );
    }

    #[test]
    fn large_action_keeps_magnitude() {
        let workout = dispatch("RUN", &[1e20, 1.0, 75.0]).expect("running");
        assert!((workout.distance() / 6.5e16 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn table_and_kind_agree() {
        for (code, kind) in ACTIVITY_TABLE {
            assert_eq!(kind.code(), *code);
            let data = vec![1.0; kind.arity()];
            assert_eq!(kind.build(&data).expect("build").name(), kind.name());
            assert_eq!(ActivityKind::from_code(code).expect("known"), *kind);
        }
    }

    #[test]
    fn workout_reports_variant_name() {
        let workout = dispatch("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("walking");
        assert_eq!(workout.name(), "SportsWalking");
        assert_eq!(workout.kind(), ActivityKind::SportsWalking);
    }

    #[test]
    fn package_deserializes_integers_as_floats() {
        let pkg: Package =
            serde_json::from_str(r#"{"code":"RUN","data":[15000,1,75]}"#).expect("package");
        assert_eq!(pkg, Package::new("RUN", [15000.0, 1.0, 75.0]));
        assert!(matches!(pkg.read(), Ok(Workout::Running(_))));
    }
}
