//! Game state
//!
//! Everything the per-frame step mutates lives here: the scene copy, the bound
//! actors, held controls, the RNG and the game-over flag. The scene's single
//! camera is moved out at bind time, so the state always owns exactly one.

use glam::UVec2;

use super::car::Car;
use super::input::Controls;
use super::moon::Moon;
use super::rabbit::Rabbit;
use super::random::{PcgRandom, RandomSource};
use super::scene::{Camera, Scene, SceneBindings};
use crate::error::SceneError;
use crate::tuning::Tuning;

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState<R = PcgRandom> {
    /// Local copy of the level; positions and rotations change during play
    pub(crate) scene: Scene,
    pub(crate) camera: Camera,
    pub tuning: Tuning,
    pub moon: Moon,
    pub car: Car,
    /// In scene order
    pub rabbits: Vec<Rabbit>,
    pub controls: Controls,
    /// Simulated seconds since the session started
    pub time: f32,
    pub(crate) rng: R,
    pub(crate) pointer_captured: bool,
    pub(crate) game_over: bool,
}

impl GameState<PcgRandom> {
    /// Bind `scene` and seed the RNG from `tuning.seed`
    pub fn new(scene: Scene, tuning: Tuning) -> Result<Self, SceneError> {
        let rng = PcgRandom::new(tuning.seed);
        Self::with_rng(scene, tuning, rng)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Bind `scene` using an injected random source
    pub fn with_rng(mut scene: Scene, tuning: Tuning, rng: R) -> Result<Self, SceneError> {
        let bindings = SceneBindings::resolve(&scene, tuning.min_rabbits)?;
        let camera = scene.cameras.pop().ok_or(SceneError::CameraCount(0))?;

        let rabbits: Vec<Rabbit> = bindings
            .rabbits
            .iter()
            .map(|&id| Rabbit::new(id, scene.transform(id).position))
            .collect();
        let car = Car::new(bindings.car, scene.transform(bindings.car).position);
        let moon = Moon::new(bindings.moon, &tuning);

        log::info!("Scene bound: {} rabbits", rabbits.len());

        Ok(Self {
            scene,
            camera,
            tuning,
            moon,
            car,
            rabbits,
            controls: Controls::default(),
            time: 0.0,
            rng,
            pointer_captured: false,
            game_over: false,
        })
    }

    /// Set once a rabbit reaches the car; never cleared
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether pointer motion currently steers the camera
    pub fn pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    /// Number of rabbits currently rising
    pub fn rising_count(&self) -> u32 {
        self.rabbits.iter().filter(|r| r.is_rising()).count() as u32
    }

    /// Current transforms, for drawing
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Update the camera aspect ratio for the drawable size
    pub fn set_drawable_size(&mut self, size: UVec2) {
        self.camera.set_drawable_size(size);
    }
}
