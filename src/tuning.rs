//! Game balance constants
//!
//! Every number the simulation uses lives here so hosts can override them from
//! a JSON file. Missing fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// RNG seed for a session
    pub seed: u64,
    /// Minimum number of rabbits the scene must provide
    pub min_rabbits: usize,

    // === Rabbits ===
    /// Rise/fall speed (units per second)
    pub rabbit_speed: f32,
    /// Distance from base at which a rising rabbit turns around
    pub rabbit_max_height: f32,
    /// Concurrent rising slots
    pub max_rising_rabbits: u32,
    /// Subtracted from the activation chance even when no rabbit rises
    pub rising_bias: f32,

    // === Collision ===
    /// Half-angle of the cone in front of a rabbit (degrees)
    pub hit_cone_degrees: f32,
    /// Hit radius when the car is inside the cone
    pub hit_radius_facing: f32,
    /// Hit radius otherwise
    pub hit_radius_side: f32,

    // === Car ===
    /// Horizontal speed (units per second)
    pub car_speed: f32,
    /// Maximum distance from the car's base position
    pub car_max_displacement: f32,

    // === Moon ===
    /// Initial spin in turns per second (applied backwards)
    pub moon_base_spin: f32,
    /// Extra backward turns per second added each frame, scaled by the retarget timer
    pub moon_spin_drift: f32,
    /// Seconds between axis retargets
    pub moon_retarget_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            seed: 15666,
            min_rabbits: 14,

            rabbit_speed: 70.0,
            rabbit_max_height: 30.0,
            max_rising_rabbits: 3,
            rising_bias: 0.2,

            hit_cone_degrees: 40.0,
            hit_radius_facing: 8.0,
            hit_radius_side: 5.0,

            car_speed: 30.0,
            car_max_displacement: 10.0,

            moon_base_spin: 0.10,
            moon_spin_drift: 0.0003,
            moon_retarget_secs: 1.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, then validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("rabbit_speed", self.rabbit_speed),
            ("rabbit_max_height", self.rabbit_max_height),
            ("hit_radius_facing", self.hit_radius_facing),
            ("hit_radius_side", self.hit_radius_side),
            ("car_speed", self.car_speed),
            ("car_max_displacement", self.car_max_displacement),
            ("moon_retarget_secs", self.moon_retarget_secs),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.max_rising_rabbits == 0 {
            return Err(TuningError::Invalid("max_rising_rabbits must be at least 1".into()));
        }
        if !(self.hit_cone_degrees > 0.0 && self.hit_cone_degrees <= 180.0) {
            return Err(TuningError::Invalid(format!(
                "hit_cone_degrees must be in (0, 180], got {}",
                self.hit_cone_degrees
            )));
        }
        Ok(())
    }

    /// Chance that an inactive rabbit starts rising while `rising` others are
    #[inline]
    pub fn activation_chance(&self, rising: u32) -> f32 {
        (1.0 - rising as f32 / self.max_rising_rabbits as f32 - self.rising_bias).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "car_speed": 12.5, "seed": 7 }"#).unwrap();
        assert_eq!(tuning.car_speed, 12.5);
        assert_eq!(tuning.seed, 7);
        assert_eq!(tuning.rabbit_speed, 70.0);
        assert_eq!(tuning.min_rabbits, 14);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "rabbit_speed": 0.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "max_rising_rabbits": 0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "hit_cone_degrees": 270.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(Tuning::from_json("not json"), Err(TuningError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Tuning::load("/definitely/not/here/tuning.json"),
            Err(TuningError::Io(_))
        ));
    }

    #[test]
    fn test_activation_chance_throttles() {
        let tuning = Tuning::default();
        assert!((tuning.activation_chance(0) - 0.8).abs() < 1e-6);
        assert!((tuning.activation_chance(1) - (0.8 - 1.0 / 3.0)).abs() < 1e-6);
        assert!(tuning.activation_chance(2) > 0.0);
        assert_eq!(tuning.activation_chance(3), 0.0);
        assert_eq!(tuning.activation_chance(10), 0.0);
    }
}
