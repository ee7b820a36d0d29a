//! Background moon spin
//!
//! The moon rolls backwards so the car appears to drive forwards. Once per
//! retarget period its axis tilts to a new random lean, and the spin keeps
//! speeding up a little every frame.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use super::random::RandomSource;
use super::scene::TransformId;
use crate::consts::MOON_TARGET_STEPS;
use crate::tuning::Tuning;

/// Moon oscillator state
#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    pub transform: TransformId,
    /// Seconds since the last retarget
    pub timer: f32,
    /// Z lean of the spin axis, in [0, 0.3)
    pub target_z: f32,
    /// Current spin axis (unit length)
    pub axis: Vec3,
    /// Angular speed (radians per second, negative = backwards)
    pub spin: f32,
}

impl Moon {
    pub fn new(transform: TransformId, tuning: &Tuning) -> Self {
        Self {
            transform,
            timer: 0.0,
            target_z: 0.0,
            axis: Vec3::Z,
            spin: -TAU * tuning.moon_base_spin,
        }
    }

    /// Advance one frame and return the new orientation for `rotation`
    pub fn update(
        &mut self,
        rotation: Quat,
        rng: &mut impl RandomSource,
        tuning: &Tuning,
        elapsed: f32,
    ) -> Quat {
        self.timer += elapsed;
        if self.timer >= tuning.moon_retarget_secs {
            self.timer = 0.0;
            self.target_z = rng.next_below(MOON_TARGET_STEPS) as f32 / 100.0;
            log::debug!("moon axis retargeted to z = {:.2}", self.target_z);
        }

        self.axis = Vec3::new(1.0, 0.0, self.target_z).normalize();
        self.spin -= TAU * tuning.moon_spin_drift * self.timer;

        rotation * Quat::from_axis_angle(self.axis, self.spin * elapsed)
    }
}
