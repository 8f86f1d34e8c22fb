use crate::training::{MIN_IN_HOUR, Training};

/// Sports walking reading; `height` is in centimeters.
#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub action: f64,
    pub duration: f64,
    pub weight: f64,
    pub height: f64,
}

impl SportsWalking {
    pub const NAME: &'static str = "SportsWalking";
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }
}

impl Training for SportsWalking {
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
        let speed_by_height = floor_div(self.mean_speed().powi(2), self.height);
        (Self::WEIGHT_MULTIPLIER * self.weight
            + speed_by_height * Self::SPEED_HEIGHT_MULTIPLIER * self.weight)
            * self.duration
            * MIN_IN_HOUR
    }
}

/// Float floor division with the quotient rebuilt from the remainder, so
/// `1.0 / 0.1` floors to 9, not 10. A zero divisor yields NaN.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div != 0.0 {
        let floored = div.floor();
        if div - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    } else {
        0.0_f64.copysign(a / b)
    }
}
