//! Workout variants.
//!
//! Each variant owns its reading and implements [`crate::Training`] with
//! its own calorie formula.
//!
//! - [`running`]: default stride, speed-driven calories
//! - [`walking`]: default stride, height-adjusted calories
//! - [`swimming`]: stroke length and pool-based speed

pub mod running;
pub mod swimming;
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;
