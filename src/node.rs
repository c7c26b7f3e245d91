//! Scene node representation and hierarchy
//!
//! Nodes form a forest: each node carries at most one parent reference,
//! stored as a plain arena index into the owning [`Scene`](crate::Scene).
//! The parent link is non-owning; the scene owns every node in a flat
//! collection and world transforms are always derived, never stored.

use crate::{
    math::compose_trs,
    scene::{MeshIndex, NodeIndex},
    types::{Matrix4x4, Quaternion, Vector3D},
};

/// A node in the scene hierarchy
///
/// Translation, rotation, and scale default to the identity transform when
/// the asset omits them, matching the glTF defaults `(0, 0, 0)`,
/// `(0, 0, 0, 1)`, and `(1, 1, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: Option<String>,
    translation: Vector3D,
    rotation: Quaternion,
    scale: Vector3D,
    mesh: Option<MeshIndex>,
    parent: Option<NodeIndex>,
}

impl Node {
    /// Create a node with an identity local transform and no references
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            translation: Vector3D::ZERO,
            rotation: Quaternion::IDENTITY,
            scale: Vector3D::ONE,
            mesh: None,
            parent: None,
        }
    }

    /// Set the local translation
    pub fn with_translation(mut self, translation: Vector3D) -> Self {
        self.translation = translation;
        self
    }

    /// Set the local rotation (unit quaternion)
    pub fn with_rotation(mut self, rotation: Quaternion) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the local scale
    pub fn with_scale(mut self, scale: Vector3D) -> Self {
        self.scale = scale;
        self
    }

    /// Attach a mesh reference
    pub fn with_mesh(mut self, mesh: MeshIndex) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Get the name of the node, if the asset provides one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the local translation
    pub fn translation(&self) -> Vector3D {
        self.translation
    }

    /// Get the local rotation
    pub fn rotation(&self) -> Quaternion {
        self.rotation
    }

    /// Get the local scale
    pub fn scale(&self) -> Vector3D {
        self.scale
    }

    /// Get the mesh referenced by this node
    pub fn mesh(&self) -> Option<MeshIndex> {
        self.mesh
    }

    /// Get the parent of this node
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: NodeIndex) {
        self.parent = Some(parent);
    }

    /// Get the local transformation matrix of the node
    pub fn local_transform(&self) -> Matrix4x4 {
        compose_trs(self.translation, self.rotation, self.scale)
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(None)
    }
}
