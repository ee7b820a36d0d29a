//! Rabbit obstacles
//!
//! Each rabbit cycles inactive -> rising -> falling -> inactive along its own
//! local +Z axis, anchored at the position it had when the scene was bound.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::scene::{Transform, TransformId};
use crate::error::StateError;
use crate::local_up;
use crate::tuning::Tuning;

/// Motion phase of a rabbit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum RabbitState {
    #[default]
    Inactive = 0,
    MovingUp = 1,
    MovingDown = 2,
}

impl TryFrom<u8> for RabbitState {
    type Error = StateError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(RabbitState::Inactive),
            1 => Ok(RabbitState::MovingUp),
            2 => Ok(RabbitState::MovingDown),
            other => Err(StateError::InvalidRabbitState(other)),
        }
    }
}

impl From<RabbitState> for u8 {
    fn from(state: RabbitState) -> Self {
        state as u8
    }
}

/// A rabbit bound to its scene transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rabbit {
    pub transform: TransformId,
    pub state: RabbitState,
    /// Anchor of the motion cycle, captured once
    base_pos: Vec3,
}

impl Rabbit {
    pub fn new(transform: TransformId, base_pos: Vec3) -> Self {
        Self {
            transform,
            state: RabbitState::Inactive,
            base_pos,
        }
    }

    pub fn base_pos(&self) -> Vec3 {
        self.base_pos
    }

    #[inline]
    pub fn is_rising(&self) -> bool {
        self.state == RabbitState::MovingUp
    }

    /// Distance of `transform` from this rabbit's anchor
    #[inline]
    pub fn height(&self, transform: &Transform) -> f32 {
        transform.position.distance(self.base_pos)
    }

    /// Advance one frame.
    ///
    /// `rising` is the running count of risers among the rabbits already
    /// advanced this frame. It starts at zero each frame, throttles activation,
    /// and this rabbit adds itself while it rises.
    pub fn advance(
        &mut self,
        transform: &mut Transform,
        rising: &mut u32,
        rng: &mut impl RandomSource,
        tuning: &Tuning,
        elapsed: f32,
    ) {
        let step = tuning.rabbit_speed * elapsed;
        // Two frames of travel: close enough to the anchor to idle briefly
        let min_height = 2.0 * step;

        match self.state {
            RabbitState::Inactive => {
                if rng.trial(tuning.activation_chance(*rising)) {
                    self.state = RabbitState::MovingUp;
                    *rising += 1;
                    log::debug!("rabbit {:?} starts rising ({} rising)", self.transform, rising);
                }
            }
            RabbitState::MovingUp => {
                *rising += 1;
                transform.position += local_up(transform.rotation) * step;
                if self.height(transform) >= tuning.rabbit_max_height {
                    self.state = RabbitState::MovingDown;
                    *rising = rising.saturating_sub(1);
                    log::debug!("rabbit {:?} turns down", self.transform);
                }
            }
            RabbitState::MovingDown => {
                transform.position -= local_up(transform.rotation) * step;
                if self.height(transform) <= min_height {
                    self.state = RabbitState::Inactive;
                    log::debug!("rabbit {:?} back at rest", self.transform);
                }
            }
        }
    }
}
