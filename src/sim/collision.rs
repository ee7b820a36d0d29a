//! Rabbit vs car hit test
//!
//! Not a geometric collider: a distance check whose radius widens when the car
//! sits inside a cone in front of the rabbit's facing axis.

use glam::Vec3;

use crate::local_up;
use crate::tuning::Tuning;

use super::scene::Transform;

/// Hit radius for a car at `car_pos` relative to a rabbit
pub fn hit_radius(rabbit: &Transform, car_pos: Vec3, tuning: &Tuning) -> f32 {
    let to_car = car_pos - rabbit.position;
    // No direction when the car sits exactly on the rabbit
    if to_car == Vec3::ZERO {
        return tuning.hit_radius_facing;
    }
    let angle = local_up(rabbit.rotation).angle_between(to_car);
    if angle <= tuning.hit_cone_degrees.to_radians() {
        tuning.hit_radius_facing
    } else {
        tuning.hit_radius_side
    }
}

/// Whether the rabbit at `rabbit` hits a car at `car_pos`
pub fn rabbit_hits_car(rabbit: &Transform, car_pos: Vec3, tuning: &Tuning) -> bool {
    rabbit.position.distance(car_pos) < hit_radius(rabbit, car_pos, tuning)
}
