//! Error types
//!
//! Scene resolution failures are fatal at startup: the scene asset does not
//! match what the game expects.

/// Scene could not be bound to the simulation roles.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A required named object is absent.
    #[error("{role} not found (expected a transform named {name:?})")]
    MissingObject { role: &'static str, name: &'static str },

    /// A role that must be unique matched more than one transform.
    #[error("{role} is ambiguous: more than one transform named {name:?}")]
    DuplicateObject { role: &'static str, name: &'static str },

    /// Fewer rabbits than the game needs.
    #[error("some rabbits are lost: found {found}, need at least {required}")]
    TooFewRabbits { found: usize, required: usize },

    /// The scene must contain exactly one camera.
    #[error("expecting scene to have exactly one camera, but it has {0}")]
    CameraCount(usize),
}

/// Corrupted simulation state.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StateError {
    #[error("unexpected rabbit state {0}")]
    InvalidRabbitState(u8),
}

/// Tuning file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    Invalid(String),
}
