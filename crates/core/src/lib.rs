//! Core shared types (renderer-agnostic): math re-exports and diagnostics.

pub use glam::{Vec2, Vec3, vec2, vec3};

pub mod diagnostic;

pub use diagnostic::{Origin, report};
