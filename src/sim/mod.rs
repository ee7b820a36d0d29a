//! Gameplay simulation
//!
//! Everything that changes from frame to frame lives here. This module must be
//! deterministic for a given random source:
//! - Randomness only through `RandomSource`
//! - Stable iteration order (scene order)
//! - No rendering or platform dependencies

pub mod car;
pub mod collision;
pub mod input;
pub mod moon;
pub mod rabbit;
pub mod random;
pub mod scene;
pub mod state;
pub mod tick;

pub use car::Car;
pub use collision::{hit_radius, rabbit_hits_car};
pub use input::{Button, Controls, InputEvent, Key, handle_event};
pub use moon::Moon;
pub use rabbit::{Rabbit, RabbitState};
pub use random::{PcgRandom, RandomSource, ScriptedRandom};
pub use scene::{Camera, Scene, SceneBindings, Transform, TransformId};
pub use state::GameState;
pub use tick::tick;
