//! Scene model shared with the host
//!
//! The host owns asset loading and drawing. It hands the simulation a flat list
//! of named transforms and its cameras; the simulation binds roles to them once
//! and afterwards only touches position and rotation through [`TransformId`].

use glam::{Quat, UVec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::{CAR_NAME, MOON_NAME, RABBIT_PREFIX};
use crate::error::SceneError;

/// Handle to a transform in [`Scene::transforms`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformId(pub usize);

/// A named, positioned and oriented scene object
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub name: String,
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Perspective camera attached to a transform
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub transform: TransformId,
    /// Vertical field of view (radians)
    pub fovy: f32,
    /// Width / height, written by the presentation layer
    pub aspect: f32,
}

impl Camera {
    pub fn new(transform: TransformId, fovy: f32) -> Self {
        Self {
            transform,
            fovy,
            aspect: 1.0,
        }
    }

    /// Match the aspect ratio to the drawable size
    pub fn set_drawable_size(&mut self, size: UVec2) {
        if size.y > 0 {
            self.aspect = size.x as f32 / size.y as f32;
        }
    }
}

/// Transforms and cameras making up a level
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub transforms: Vec<Transform>,
    pub cameras: Vec<Camera>,
}

impl Scene {
    /// Append a transform and return its handle
    pub fn add(&mut self, transform: Transform) -> TransformId {
        self.transforms.push(transform);
        TransformId(self.transforms.len() - 1)
    }

    #[inline]
    pub fn transform(&self, id: TransformId) -> &Transform {
        &self.transforms[id.0]
    }

    #[inline]
    pub fn transform_mut(&mut self, id: TransformId) -> &mut Transform {
        &mut self.transforms[id.0]
    }
}

/// Simulation roles resolved against a scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBindings {
    pub moon: TransformId,
    pub car: TransformId,
    /// In scene order
    pub rabbits: Vec<TransformId>,
}

impl SceneBindings {
    /// Bind roles by name: exactly one `Moon`, exactly one `Car`, at least
    /// `min_rabbits` transforms prefixed `rabbit`, and exactly one camera.
    pub fn resolve(scene: &Scene, min_rabbits: usize) -> Result<Self, SceneError> {
        let mut moon = None;
        let mut car = None;
        let mut rabbits = Vec::new();

        for (index, transform) in scene.transforms.iter().enumerate() {
            let id = TransformId(index);
            if transform.name == MOON_NAME {
                bind_unique(&mut moon, id, "moon", MOON_NAME)?;
            } else if transform.name.starts_with(RABBIT_PREFIX) {
                rabbits.push(id);
            } else if transform.name == CAR_NAME {
                bind_unique(&mut car, id, "car", CAR_NAME)?;
            }
        }

        let moon = moon.ok_or(SceneError::MissingObject {
            role: "moon",
            name: MOON_NAME,
        })?;
        let car = car.ok_or(SceneError::MissingObject {
            role: "car",
            name: CAR_NAME,
        })?;
        if rabbits.len() < min_rabbits {
            return Err(SceneError::TooFewRabbits {
                found: rabbits.len(),
                required: min_rabbits,
            });
        }
        if scene.cameras.len() != 1 {
            return Err(SceneError::CameraCount(scene.cameras.len()));
        }

        Ok(Self { moon, car, rabbits })
    }
}

fn bind_unique(
    slot: &mut Option<TransformId>,
    id: TransformId,
    role: &'static str,
    name: &'static str,
) -> Result<(), SceneError> {
    if slot.replace(id).is_some() {
        return Err(SceneError::DuplicateObject { role, name });
    }
    Ok(())
}
