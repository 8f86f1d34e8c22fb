//! The capability set shared by every workout variant.

use crate::InfoMessage;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;
/// Stride length of one step, in meters.
pub const DEFAULT_STEP_LENGTH: f64 = 0.65;

/// A single workout reading together with the formulas that turn it into
/// distance, speed and calories.
///
/// `distance` and `mean_speed` have default implementations driven by
/// [`Training::step_length`]. `calories` has none: every variant supplies
/// its own formula.
pub trait Training {
    /// Variant name as shown in the summary line.
    fn name(&self) -> &'static str;

    /// Recorded steps or strokes.
    fn action(&self) -> f64;

    /// Duration in hours.
    fn duration(&self) -> f64;

    /// Body weight in kilograms.
    fn weight(&self) -> f64;

    /// Distance covered by a single action, in meters.
    fn step_length(&self) -> f64 {
        DEFAULT_STEP_LENGTH
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        self.action() * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    /// Spent calories in kcal.
    fn calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.name().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.calories(),
        }
    }
}
