//! Player car
//!
//! The car slides along world X only and refuses any move that would take it
//! further than `car_max_displacement` from where it started.

use glam::Vec3;

use super::input::Controls;
use super::scene::TransformId;
use crate::tuning::Tuning;

/// The car bound to its scene transform
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub transform: TransformId,
    base_pos: Vec3,
}

impl Car {
    pub fn new(transform: TransformId, base_pos: Vec3) -> Self {
        Self {
            transform,
            base_pos,
        }
    }

    pub fn base_pos(&self) -> Vec3 {
        self.base_pos
    }

    /// Signed X displacement for this frame. Opposing keys cancel.
    pub fn steer_delta(controls: &Controls, speed: f32, elapsed: f32) -> f32 {
        match (controls.left.pressed, controls.right.pressed) {
            (false, true) => speed * elapsed,
            (true, false) => -speed * elapsed,
            _ => 0.0,
        }
    }

    /// Move `position` for this frame, or leave it if the move would leave the
    /// allowed range
    pub fn drive(&self, position: &mut Vec3, controls: &Controls, tuning: &Tuning, elapsed: f32) {
        let delta_x = Self::steer_delta(controls, tuning.car_speed, elapsed);
        if delta_x == 0.0 {
            return;
        }
        let candidate = *position + Vec3::new(delta_x, 0.0, 0.0);
        if candidate.distance(self.base_pos) <= tuning.car_max_displacement {
            *position = candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use proptest::prelude::*;

    fn controls(left: bool, right: bool) -> Controls {
        let mut c = Controls::default();
        c.left.pressed = left;
        c.right.pressed = right;
        c
    }

    #[test]
    fn test_steer_delta() {
        assert_eq!(Car::steer_delta(&controls(false, true), 30.0, 0.5), 15.0);
        assert_eq!(Car::steer_delta(&controls(true, false), 30.0, 0.5), -15.0);
        assert_eq!(Car::steer_delta(&controls(true, true), 30.0, 0.5), 0.0);
        assert_eq!(Car::steer_delta(&controls(false, false), 30.0, 0.5), 0.0);
    }

    #[test]
    fn test_right_for_one_second_clamps_at_ten() {
        let car = Car::new(TransformId(0), Vec3::ZERO);
        let tuning = Tuning::default();
        let held = controls(false, true);
        let mut pos = Vec3::ZERO;
        for _ in 0..60 {
            car.drive(&mut pos, &held, &tuning, FRAME_DT);
            assert!(pos.x <= 10.0);
            assert_eq!(pos.y, 0.0);
            assert_eq!(pos.z, 0.0);
        }
        // Rejection stops within one frame of the boundary
        assert!(pos.x > 10.0 - 30.0 * FRAME_DT);
    }

    #[test]
    fn test_blocked_at_edge_can_still_back_off() {
        let car = Car::new(TransformId(0), Vec3::ZERO);
        let tuning = Tuning::default();
        let mut pos = Vec3::new(9.9, 0.0, 0.0);
        car.drive(&mut pos, &controls(false, true), &tuning, 0.1);
        assert_eq!(pos.x, 9.9);
        car.drive(&mut pos, &controls(true, false), &tuning, 0.1);
        assert!((pos.x - 6.9).abs() < 1e-5);
    }

    #[test]
    fn test_both_keys_hold_still() {
        let car = Car::new(TransformId(0), Vec3::new(2.0, 1.0, 0.0));
        let mut pos = Vec3::new(4.0, 1.0, 0.0);
        car.drive(&mut pos, &controls(true, true), &Tuning::default(), 0.25);
        assert_eq!(pos, Vec3::new(4.0, 1.0, 0.0));
    }

    proptest! {
        #[test]
        fn prop_never_leaves_range(
            keys in proptest::collection::vec((any::<bool>(), any::<bool>(), 0.0f32..0.2), 1..300),
        ) {
            let base = Vec3::new(3.0, -2.0, 0.5);
            let car = Car::new(TransformId(0), base);
            let tuning = Tuning::default();
            let mut pos = base;
            for (left, right, elapsed) in keys {
                car.drive(&mut pos, &controls(left, right), &tuning, elapsed);
                prop_assert!(pos.distance(base) <= tuning.car_max_displacement + 1e-4);
                prop_assert_eq!(pos.y, base.y);
                prop_assert_eq!(pos.z, base.z);
            }
        }
    }
}
