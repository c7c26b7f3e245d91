//! Scene representation and hierarchy traversal
//!
//! The [`Scene`] owns every node, mesh, and material in flat, indexed
//! collections. Cross-references between entities are typed arena indices,
//! so the node hierarchy is a forest of plain back-links with no shared
//! ownership and no cycles by construction of the asset format. The world
//! transform of a node is always derived on demand from its ancestor chain.

use crate::{
    error::{Error, Result},
    material::Material,
    math::{identity, multiply},
    mesh::Mesh,
    node::Node,
    types::Matrix4x4,
};

/// Index of a [`Node`] within its owning [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex(pub(crate) usize);

/// Index of a [`Mesh`] within its owning [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshIndex(pub(crate) usize);

/// Index of a [`Material`] within its owning [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialIndex(pub(crate) usize);

/// A fully loaded 3D scene: nodes, meshes, and materials
///
/// Immutable once loaded; the importer is the only writer. The
/// construction API (`add_*`, `set_parent`) is public so tests and custom
/// loaders can assemble scenes directly.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    meshes: Vec<Mesh>,
    materials: Vec<Material>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a scene from a file with default settings
    ///
    /// Convenience delegation to [`Importer`](crate::Importer).
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        crate::importer::Importer::new().import_file(path)
    }

    /// Load a scene from an in-memory binary glTF slice
    ///
    /// Convenience delegation to [`Importer`](crate::Importer).
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        crate::importer::Importer::new().import_slice(bytes)
    }

    /// Append a node, returning its index
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        NodeIndex(self.nodes.len() - 1)
    }

    /// Append a mesh, returning its index
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshIndex {
        self.meshes.push(mesh);
        MeshIndex(self.meshes.len() - 1)
    }

    /// Append a material, returning its index
    pub fn add_material(&mut self, material: Material) -> MaterialIndex {
        self.materials.push(material);
        MaterialIndex(self.materials.len() - 1)
    }

    /// Link `child` under `parent` in the node forest
    ///
    /// Fails with [`Error::MalformedScene`] if either index is out of
    /// bounds or the child already has a different parent, which would make
    /// the hierarchy a general graph rather than a forest.
    pub fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) -> Result<()> {
        if parent.0 >= self.nodes.len() {
            return Err(Error::malformed_scene(format!(
                "parent node index {} out of bounds",
                parent.0
            )));
        }
        let node = self.nodes.get_mut(child.0).ok_or_else(|| {
            Error::malformed_scene(format!("child node index {} out of bounds", child.0))
        })?;
        match node.parent() {
            Some(existing) if existing != parent => Err(Error::malformed_scene(format!(
                "node {} is referenced by more than one parent",
                child.0
            ))),
            _ => {
                node.set_parent(parent);
                Ok(())
            }
        }
    }

    /// Get the number of nodes in the scene
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Get a node by index
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.0)
    }

    /// Get an iterator over all nodes with their indices, in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i), node))
    }

    /// Get the number of meshes in the scene
    pub fn num_meshes(&self) -> usize {
        self.meshes.len()
    }

    /// Get a mesh by index
    pub fn mesh(&self, index: MeshIndex) -> Option<&Mesh> {
        self.meshes.get(index.0)
    }

    /// Get an iterator over all meshes with their indices, in declaration order
    pub fn meshes(&self) -> impl Iterator<Item = (MeshIndex, &Mesh)> {
        self.meshes
            .iter()
            .enumerate()
            .map(|(i, mesh)| (MeshIndex(i), mesh))
    }

    /// Get the number of materials in the scene
    pub fn num_materials(&self) -> usize {
        self.materials.len()
    }

    /// Get a material by index
    pub fn material(&self, index: MaterialIndex) -> Option<&Material> {
        self.materials.get(index.0)
    }

    /// Compute the world transform of a node from its ancestor chain
    ///
    /// The chain is collected root-first and folded left to right, so
    /// `world = parent_world * local` at every step; a root node's world
    /// transform is its own local TRS matrix.
    ///
    /// The asset format guarantees the hierarchy is a forest, but the input
    /// is untrusted: a parent chain longer than the node count fails with
    /// [`Error::MalformedScene`] instead of looping forever.
    pub fn world_transform(&self, index: NodeIndex) -> Result<Matrix4x4> {
        let mut chain = Vec::new();
        let mut cursor = Some(index);
        while let Some(current) = cursor {
            let node = self.node(current).ok_or_else(|| {
                Error::malformed_scene(format!("node index {} out of bounds", current.0))
            })?;
            chain.push(current);
            if chain.len() > self.nodes.len() {
                return Err(Error::malformed_scene(
                    "node parent chain forms a cycle",
                ));
            }
            cursor = node.parent();
        }

        chain.reverse();
        Ok(chain.into_iter().fold(identity(), |world, i| {
            multiply(world, self.nodes[i.0].local_transform())
        }))
    }
}
