use crate::training::{M_IN_KM, Training};

/// Swimming reading. `action` counts strokes; `length_pool` is in meters.
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub action: f64,
    pub duration: f64,
    pub weight: f64,
    pub length_pool: f64,
    pub count_pool: f64,
}

impl Swimming {
    pub const NAME: &'static str = "Swimming";
    pub const STROKE_LENGTH: f64 = 1.38;
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: f64, duration: f64, weight: f64, length_pool: f64, count_pool: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn action(&self) -> f64 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn step_length(&self) -> f64 {
        Self::STROKE_LENGTH
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.duration
    }

    fn calories(&self) -> f64 {
        (self.mean_speed() + Self::SPEED_SHIFT) * Self::WEIGHT_MULTIPLIER * self.weight
    }
}
