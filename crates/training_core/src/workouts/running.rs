use crate::training::{M_IN_KM, MIN_IN_HOUR, Training};

/// Running reading.
#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub action: f64,
    pub duration: f64,
    pub weight: f64,
}

impl Running {
    pub const NAME: &'static str = "Running";
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Training for Running {
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

    fn calories(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed() - Self::SPEED_SHIFT) * self.weight / M_IN_KM
            * self.duration
            * MIN_IN_HOUR
    }
}
