//! Human-readable workout summary.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Computed metrics of one workout, ready to be rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// km/h
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Render the summary line. Every number carries exactly three decimals.
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(duration: f64, distance: f64, speed: f64, calories: f64) -> InfoMessage {
        InfoMessage {
            training_type: "Running".into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    #[test]
    fn renders_fixed_layout() {
        let out = message(1.0, 9.75, 9.75, 645.75).get_message();
        assert_eq!(
            out,
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 645.750."
        );
    }

    #[test]
    fn rounds_instead_of_truncating() {
        let out = message(0.1249999, 0.0005001, 2.9996, 1234567.8916).get_message();
        assert!(out.contains("Длительность: 0.125 ч."));
        assert!(out.contains("Дистанция: 0.001 км"));
        assert!(out.contains("Ср. скорость: 3.000 км/ч"));
        assert!(out.contains("Потрачено ккал: 1234567.892."));
    }

    #[test]
    fn negative_values_keep_three_decimals() {
        let out = message(1.0, 0.65, 0.65, -90.0).get_message();
        assert!(out.ends_with("Потрачено ккал: -90.000."));
    }

    #[test]
    fn serializes_field_names() {
        let value = serde_json::to_value(message(1.0, 2.0, 3.0, 4.0)).expect("json");
        assert_eq!(value["training_type"], "Running");
        assert_eq!(value["calories"], 4.0);
    }
}
