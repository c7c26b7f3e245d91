//! World-space mesh bounds computation
//!
//! A single pure fold over every vertex of a mesh: each local-space
//! position is transformed into world space and accumulated into an
//! [`AABB`] together with a vertex count. No state is shared between
//! meshes, so each call is independent.

use crate::{aabb::AABB, math::transform_point, mesh::Mesh, types::Matrix4x4};

/// World-space bounds of a single mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshBounds {
    /// The enclosing world-space box; empty when the mesh contributed no
    /// vertices
    pub aabb: AABB,
    /// Number of vertices folded into the box
    pub vertex_count: usize,
}

impl MeshBounds {
    /// Bounds of a mesh with no geometry: an empty box and a zero count
    pub fn empty() -> Self {
        Self {
            aabb: AABB::empty(),
            vertex_count: 0,
        }
    }

    /// Check whether no vertices contributed to these bounds
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl Default for MeshBounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// Compute the world-space AABB of `mesh` under `world`
///
/// Every primitive with a position attribute contributes all of its
/// vertices; primitives without positions are skipped silently. A mesh
/// with zero contributing vertices yields [`MeshBounds::empty`].
pub fn world_bounds(mesh: &Mesh, world: &Matrix4x4) -> MeshBounds {
    mesh.primitives()
        .iter()
        .flat_map(|primitive| primitive.positions().iter().copied())
        .map(|position| transform_point(world, position))
        .fold(MeshBounds::empty(), |acc, point| MeshBounds {
            aabb: acc.aabb.expanded_to_include_point(point),
            vertex_count: acc.vertex_count + 1,
        })
}
