//! Report aggregation over a loaded scene
//!
//! A single pass over the scene in mesh declaration order: each mesh is
//! positioned by the first node that references it, measured in world
//! space, and appended as a [`ReportEntry`]. Two derived results ride on
//! top of the listing: the first entry carrying an exact-name material
//! match (the highlight), and the aggregate bounding box of every entry
//! matching the variant keyword. The aggregator only computes data;
//! rendering is the caller's concern.

use bitflags::bitflags;
use log::debug;

use crate::{
    aabb::AABB,
    bounds::{MeshBounds, world_bounds},
    error::{Error, Result},
    material::Material,
    mesh::Mesh,
    scene::{NodeIndex, Scene},
    types::Vector3D,
};

/// Placeholder material name for primitives without a material reference
pub const NO_MATERIAL: &str = "(none)";

bitflags! {
    /// Report sections a presentation layer can choose to render
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Sections: u32 {
        /// The per-mesh listing table
        const MESH_TABLE = 1 << 0;
        /// Details of the highlighted entry
        const HIGHLIGHT = 1 << 1;
        /// The variant aggregate summary
        const VARIANT_SUMMARY = 1 << 2;
    }
}

impl Default for Sections {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration for [`build_report`]
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Case-insensitive substring matched against mesh and material names
    pub variant_keyword: String,
    /// Exact material name whose first carrier becomes the highlighted entry
    pub highlight_material: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            variant_keyword: "orange".to_owned(),
            highlight_material: "Display_orange".to_owned(),
        }
    }
}

/// One row of the report: a mesh with its resolved materials and bounds
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    /// Mesh declaration index
    pub index: usize,
    /// Display name: the mesh name, or `(unnamed-<index>)` when absent
    pub name: String,
    /// Material names of the mesh's primitives, deduplicated in first-seen
    /// order
    pub materials: Vec<String>,
    /// World-space bounds under the first referencing node, or empty bounds
    /// when no node references the mesh
    pub bounds: MeshBounds,
}

impl ReportEntry {
    /// Check whether this entry matches the variant keyword
    ///
    /// True when the display name or any material name contains `keyword`,
    /// case-insensitively.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self
                .materials
                .iter()
                .any(|material| material.to_lowercase().contains(&keyword))
    }
}

/// Combined bounds of every entry matching the variant keyword
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateBounds {
    /// Number of matched entries
    pub count: usize,
    /// Display names of the matched entries, in report order
    pub mesh_names: Vec<String>,
    /// Union of the matched entries' boxes; empty when none of them carried
    /// geometry
    pub aabb: AABB,
}

impl AggregateBounds {
    /// Midpoint of the aggregate box, when the union is non-empty
    pub fn center(&self) -> Option<Vector3D> {
        self.aabb.is_valid().then(|| self.aabb.center())
    }

    /// Per-axis dimensions of the aggregate box, when the union is non-empty
    pub fn dimensions(&self) -> Option<Vector3D> {
        self.aabb.is_valid().then(|| self.aabb.size())
    }
}

/// The full inspection result for one scene
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// One entry per mesh, in declaration order
    pub entries: Vec<ReportEntry>,
    /// Position in `entries` of the first entry whose materials contain the
    /// exact highlight name
    pub highlight: Option<usize>,
    /// Aggregate over keyword-matched entries; `None` when nothing matched
    pub variant: Option<AggregateBounds>,
}

impl Report {
    /// Get the highlighted entry, if one was found
    pub fn highlighted_entry(&self) -> Option<&ReportEntry> {
        self.highlight.map(|i| &self.entries[i])
    }
}

/// Build the full report for `scene`
///
/// Meshes are visited in declaration order; each one is positioned by its
/// first referencing node (node declaration order, first wins; later
/// references are ignored). The whole computation is one stateless pass
/// over the immutable scene.
pub fn build_report(scene: &Scene, options: &ReportOptions) -> Result<Report> {
    if options.variant_keyword.is_empty() {
        return Err(Error::invalid_parameter(
            "variant keyword must not be empty",
        ));
    }

    let node_for_mesh = first_referencing_nodes(scene);

    let mut entries = Vec::with_capacity(scene.num_meshes());
    let mut highlight = None;
    for (mesh_index, mesh) in scene.meshes() {
        let bounds = match node_for_mesh[mesh_index.0] {
            Some(node_index) => {
                let world = scene.world_transform(node_index)?;
                world_bounds(mesh, &world)
            }
            None => MeshBounds::empty(),
        };

        let materials = material_names(scene, mesh);
        let name = mesh
            .name()
            .map(str::to_owned)
            .unwrap_or_else(|| format!("(unnamed-{})", mesh_index.0));

        if highlight.is_none()
            && materials.iter().any(|m| m == &options.highlight_material)
        {
            highlight = Some(entries.len());
        }

        entries.push(ReportEntry {
            index: mesh_index.0,
            name,
            materials,
            bounds,
        });
    }

    let variant = aggregate_variant(&entries, &options.variant_keyword);
    debug!(
        "report built: {} entries, highlight {:?}, {} variant matches",
        entries.len(),
        highlight,
        variant.as_ref().map_or(0, |v| v.count)
    );

    Ok(Report {
        entries,
        highlight,
        variant,
    })
}

/// Resolve, for every mesh, the first node that references it
fn first_referencing_nodes(scene: &Scene) -> Vec<Option<NodeIndex>> {
    let mut node_for_mesh = vec![None; scene.num_meshes()];
    for (node_index, node) in scene.nodes() {
        if let Some(mesh_index) = node.mesh() {
            if let Some(slot) = node_for_mesh.get_mut(mesh_index.0) {
                if slot.is_none() {
                    *slot = Some(node_index);
                }
            }
        }
    }
    node_for_mesh
}

/// Collect the mesh's material names, deduplicated in first-seen order
fn material_names(scene: &Scene, mesh: &Mesh) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for primitive in mesh.primitives() {
        let name = primitive
            .material()
            .and_then(|index| scene.material(index))
            .and_then(Material::name)
            .unwrap_or(NO_MATERIAL);
        if !names.iter().any(|n| n == name) {
            names.push(name.to_owned());
        }
    }
    names
}

/// Union the boxes of keyword-matched entries; `None` when nothing matches
fn aggregate_variant(entries: &[ReportEntry], keyword: &str) -> Option<AggregateBounds> {
    let matched: Vec<&ReportEntry> = entries
        .iter()
        .filter(|entry| entry.matches_keyword(keyword))
        .collect();
    if matched.is_empty() {
        return None;
    }

    let mut aabb = AABB::empty();
    for entry in &matched {
        aabb.expand_to_include_aabb(&entry.bounds.aabb);
    }

    Some(AggregateBounds {
        count: matched.len(),
        mesh_names: matched.iter().map(|entry| entry.name.clone()).collect(),
        aabb,
    })
}
