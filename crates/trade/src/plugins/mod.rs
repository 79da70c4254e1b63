//! Concrete format plugins shipped with the engine.

pub mod png;
pub mod wav;

pub use png::PngImageConverter;
pub use wav::{WavError, WavImporter};
