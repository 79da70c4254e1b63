//! Asset value types produced by importers and consumed by the engine.
//! Meshes, images and audio buffers are plain owned data: built once, then only read.
//! Also hosts the procedural primitives and vertex interleaving helpers.

pub mod audio;
pub mod error;
pub mod image;
pub mod interleave;
pub mod mesh;
pub mod primitives;

pub use audio::{AudioData, AudioFormat};
pub use error::{AssetError, AssetResult};
pub use image::{Image2D, ImageView2D, PixelFormat};
pub use interleave::Interleave;
pub use mesh::{MeshData3D, MeshPrimitive};
