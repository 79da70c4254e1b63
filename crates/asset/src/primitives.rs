//! Procedural primitives we can render without external assets.
//! All of them span the [-1, 1] cube centered at the origin.

use corelib::{Vec3, vec3};

use crate::mesh::{MeshData3D, MeshPrimitive};

/// Solid cube: 24 vertices (4 per face) with flat per-face normals.
pub fn cube_solid() -> MeshData3D {
    #[rustfmt::skip]
    let indices = vec![
         0,  1,  2,  0,  2,  3, // +Z
         4,  5,  6,  4,  6,  7, // +X
         8,  9, 10,  8, 10, 11, // +Y
        12, 13, 14, 12, 14, 15, // -Z
        16, 17, 18, 16, 18, 19, // -Y
        20, 21, 22, 20, 22, 23, // -X
    ];

    #[rustfmt::skip]
    let positions = vec![
        vec3(-1.0, -1.0,  1.0), vec3( 1.0, -1.0,  1.0), vec3( 1.0,  1.0,  1.0), vec3(-1.0,  1.0,  1.0),
        vec3( 1.0, -1.0,  1.0), vec3( 1.0, -1.0, -1.0), vec3( 1.0,  1.0, -1.0), vec3( 1.0,  1.0,  1.0),
        vec3(-1.0,  1.0,  1.0), vec3( 1.0,  1.0,  1.0), vec3( 1.0,  1.0, -1.0), vec3(-1.0,  1.0, -1.0),
        vec3( 1.0, -1.0, -1.0), vec3(-1.0, -1.0, -1.0), vec3(-1.0,  1.0, -1.0), vec3( 1.0,  1.0, -1.0),
        vec3(-1.0, -1.0, -1.0), vec3( 1.0, -1.0, -1.0), vec3( 1.0, -1.0,  1.0), vec3(-1.0, -1.0,  1.0),
        vec3(-1.0, -1.0, -1.0), vec3(-1.0, -1.0,  1.0), vec3(-1.0,  1.0,  1.0), vec3(-1.0,  1.0, -1.0),
    ];

    let normals = [Vec3::Z, Vec3::X, Vec3::Y, Vec3::NEG_Z, Vec3::NEG_Y, Vec3::NEG_X]
        .into_iter()
        .flat_map(|n| [n; 4])
        .collect();

    MeshData3D::new(
        MeshPrimitive::Triangles,
        indices,
        vec![positions],
        vec![normals],
        Vec::new(),
    )
}

/// Solid cube as a single 14-vertex triangle strip, without normals.
pub fn cube_solid_strip() -> MeshData3D {
    #[rustfmt::skip]
    let positions = vec![
        vec3( 1.0,  1.0,  1.0), vec3(-1.0,  1.0,  1.0),
        vec3( 1.0, -1.0,  1.0), vec3(-1.0, -1.0,  1.0),
        vec3(-1.0, -1.0, -1.0), vec3(-1.0,  1.0,  1.0),
        vec3(-1.0,  1.0, -1.0), vec3( 1.0,  1.0,  1.0),
        vec3( 1.0,  1.0, -1.0), vec3( 1.0, -1.0,  1.0),
        vec3( 1.0, -1.0, -1.0), vec3(-1.0, -1.0, -1.0),
        vec3( 1.0,  1.0, -1.0), vec3(-1.0,  1.0, -1.0),
    ];

    MeshData3D::new(
        MeshPrimitive::TriangleStrip,
        Vec::new(),
        vec![positions],
        Vec::new(),
        Vec::new(),
    )
}

/// Cube edges as an indexed line list.
pub fn cube_wireframe() -> MeshData3D {
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 1, 2, 2, 3, 3, 0, // +Z
        4, 5, 5, 6, 6, 7, 7, 4, // -Z
        1, 5, 2, 6,             // +X
        0, 4, 3, 7,             // -X
    ];

    #[rustfmt::skip]
    let positions = vec![
        vec3(-1.0, -1.0,  1.0), vec3( 1.0, -1.0,  1.0),
        vec3( 1.0,  1.0,  1.0), vec3(-1.0,  1.0,  1.0),
        vec3(-1.0, -1.0, -1.0), vec3( 1.0, -1.0, -1.0),
        vec3( 1.0,  1.0, -1.0), vec3(-1.0,  1.0, -1.0),
    ];

    MeshData3D::new(
        MeshPrimitive::Lines,
        indices,
        vec![positions],
        Vec::new(),
        Vec::new(),
    )
}
