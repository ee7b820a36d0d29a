//! Rabbit Dodge - gameplay simulation for a dodge-the-rabbits arcade game
//!
//! Core modules:
//! - `sim`: Per-frame simulation (rabbits, collisions, car, moon, input)
//! - `tuning`: Data-driven game balance
//! - `hud`: Overlay text for the presentation layer
//! - `error`: Error types for scene resolution, state decoding and tuning

pub mod error;
pub mod hud;
pub mod sim;
pub mod tuning;

pub use error::{SceneError, StateError, TuningError};
pub use tuning::Tuning;

use glam::{Quat, Vec3};

/// Game configuration constants
pub mod consts {
    /// Nominal frame step used by the headless runner (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Scene transform names bound to simulation roles
    pub const MOON_NAME: &str = "Moon";
    pub const CAR_NAME: &str = "Car";
    /// Every transform whose name starts with this is a rabbit
    pub const RABBIT_PREFIX: &str = "rabbit";

    /// Denominator of the percent draw used for activation trials
    pub const TRIAL_RESOLUTION: u32 = 100;
    /// Moon retarget draws are `draw % MOON_TARGET_STEPS / 100`
    pub const MOON_TARGET_STEPS: u32 = 30;
}

/// World-space direction of an object's local +Z axis
#[inline]
pub fn local_up(rotation: Quat) -> Vec3 {
    rotation * Vec3::Z
}
