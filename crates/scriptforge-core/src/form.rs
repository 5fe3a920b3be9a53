//! Configuration extraction from raw form values
//!
//! The configurator form delivers its field values as raw strings plus a
//! strict boolean for the jump checkbox. [`extract`] normalizes them into a
//! [`GenerationConfig`]: the class name is trimmed (with a default when
//! empty) and the option enums are coerced. There is no validation beyond
//! the coercion -- malformed option values degrade to the non-matching
//! branch instead of erroring.

use crate::generator::{Dimension, GenerationConfig, MovementKind, DEFAULT_CLASS_NAME};

/// Raw option values as read from the configurator form
#[derive(Debug, Clone, Default)]
pub struct RawConfigInput {
    /// Class name field, untrimmed
    pub class_name: String,

    /// Dimension select value ("2d" or "3d")
    pub dimension: String,

    /// Movement select value ("rigidbody" or "transform")
    pub movement_type: String,

    /// Jump checkbox state
    pub enable_jump: bool,
}

/// Produce a normalized [`GenerationConfig`] from raw field values
pub fn extract(input: &RawConfigInput) -> GenerationConfig {
    let class_name = input.class_name.trim();
    GenerationConfig {
        class_name: if class_name.is_empty() {
            DEFAULT_CLASS_NAME.to_string()
        } else {
            class_name.to_string()
        },
        dimension: Dimension::from_raw(&input.dimension),
        movement: MovementKind::from_raw(&input.movement_type),
        enable_jump: input.enable_jump,
    }
}
