//! Mesh and primitive representation

use crate::{scene::MaterialIndex, types::Vector3D};

/// A single drawable primitive: a position attribute plus an optional
/// material reference
///
/// Primitives without a position attribute are represented with an empty
/// position list; the bounds computation skips them without error.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    positions: Vec<Vector3D>,
    material: Option<MaterialIndex>,
}

impl Primitive {
    /// Create a primitive from its local-space positions and material
    pub fn new(positions: Vec<Vector3D>, material: Option<MaterialIndex>) -> Self {
        Self {
            positions,
            material,
        }
    }

    /// Get the local-space vertex positions of this primitive
    pub fn positions(&self) -> &[Vector3D] {
        &self.positions
    }

    /// Get the material reference of this primitive
    pub fn material(&self) -> Option<MaterialIndex> {
        self.material
    }

    /// Get the number of vertices in this primitive
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }
}

/// A mesh containing an ordered list of primitives
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    name: Option<String>,
    primitives: Vec<Primitive>,
}

impl Mesh {
    /// Create a mesh from an optional name and its primitives
    pub fn new(name: Option<String>, primitives: Vec<Primitive>) -> Self {
        Self { name, primitives }
    }

    /// Get the name of the mesh, if the asset provides one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the primitives of the mesh in declaration order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Get the number of primitives in the mesh
    pub fn num_primitives(&self) -> usize {
        self.primitives.len()
    }

    /// Get the total number of vertices across all primitives
    pub fn num_vertices(&self) -> usize {
        self.primitives.iter().map(Primitive::num_vertices).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_counts_sum_over_primitives() {
        let mesh = Mesh::new(
            Some("Case".to_owned()),
            vec![
                Primitive::new(vec![Vector3D::ZERO, Vector3D::ONE], None),
                Primitive::new(vec![Vector3D::new(1.0, 2.0, 3.0)], Some(MaterialIndex(0))),
                Primitive::new(Vec::new(), None),
            ],
        );
        assert_eq!(mesh.num_primitives(), 3);
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.name(), Some("Case"));
    }
}
