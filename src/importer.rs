//! Scene importer for binary glTF assets
//!
//! Loading happens once, atomically, before any analysis: the glTF
//! document and its buffers are read through the `gltf` crate, then
//! converted into the flat, index-linked [`Scene`] arena. The glTF node
//! hierarchy stores child lists; the conversion inverts them into the
//! single-parent back-references the traversal code works with.

use std::path::Path;

use log::{debug, info};

use crate::{
    error::{Error, Result},
    material::Material,
    mesh::{Mesh, Primitive},
    node::Node,
    scene::{MaterialIndex, MeshIndex, NodeIndex, Scene},
    types::{quat_from_array, vec3_from_array},
};

/// File extensions accepted by [`Importer::import_file`]
const SUPPORTED_EXTENSIONS: &[&str] = &["glb", "gltf"];

/// Loads glTF assets into [`Scene`] values
///
/// ```rust,no_run
/// use asset_inspector::Importer;
///
/// # fn main() -> asset_inspector::Result<()> {
/// let scene = Importer::new().import_file("model.glb")?;
/// println!("Loaded {} meshes", scene.num_meshes());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Importer;

impl Importer {
    /// Create a new importer
    pub fn new() -> Self {
        Self
    }

    /// Import a scene from a `.glb` or `.gltf` file
    pub fn import_file<P: AsRef<Path>>(&self, path: P) -> Result<Scene> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::file_error(format!(
                "no such file: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(Error::unsupported_format(extension));
        }

        info!("importing scene asset from {}", path.display());
        let (document, buffers, _images) = gltf::import(path)?;
        scene_from_document(&document, &buffers)
    }

    /// Import a scene from an in-memory binary glTF slice
    pub fn import_slice(&self, bytes: &[u8]) -> Result<Scene> {
        info!("importing scene asset from a {}-byte slice", bytes.len());
        let (document, buffers, _images) = gltf::import_slice(bytes)?;
        scene_from_document(&document, &buffers)
    }
}

/// Convert a parsed glTF document into the flat scene arena
fn scene_from_document(
    document: &gltf::Document,
    buffers: &[gltf::buffer::Data],
) -> Result<Scene> {
    let mut scene = Scene::new();

    for material in document.materials() {
        scene.add_material(Material::new(material.name().map(str::to_owned)));
    }

    for mesh in document.meshes() {
        let mut primitives = Vec::new();
        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
            let positions = reader
                .read_positions()
                .map(|iter| iter.map(vec3_from_array).collect())
                .unwrap_or_default();
            let material = primitive.material().index().map(MaterialIndex);
            primitives.push(Primitive::new(positions, material));
        }
        scene.add_mesh(Mesh::new(mesh.name().map(str::to_owned), primitives));
    }

    for node in document.nodes() {
        let (translation, rotation, scale) = node.transform().decomposed();
        let mut converted = Node::new(node.name().map(str::to_owned))
            .with_translation(vec3_from_array(translation))
            .with_rotation(quat_from_array(rotation))
            .with_scale(vec3_from_array(scale));
        if let Some(mesh) = node.mesh() {
            converted = converted.with_mesh(MeshIndex(mesh.index()));
        }
        scene.add_node(converted);
    }

    // Invert the child lists into single-parent back-links.
    for node in document.nodes() {
        for child in node.children() {
            scene.set_parent(NodeIndex(child.index()), NodeIndex(node.index()))?;
        }
    }

    debug!(
        "converted document: {} nodes, {} meshes, {} materials",
        scene.num_nodes(),
        scene.num_meshes(),
        scene.num_materials()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector3D;

    /// Assemble a GLB byte stream from a JSON chunk and an optional binary
    /// chunk, per the glTF 2.0 container layout.
    fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
        let mut json_chunk = json.as_bytes().to_vec();
        while json_chunk.len() % 4 != 0 {
            json_chunk.push(b' ');
        }
        let mut bin_chunk = bin.to_vec();
        while bin_chunk.len() % 4 != 0 {
            bin_chunk.push(0);
        }

        let mut total = 12 + 8 + json_chunk.len();
        if !bin.is_empty() {
            total += 8 + bin_chunk.len();
        }

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(b"glTF");
        out.extend_from_slice(&2u32.to_le_bytes());
        out.extend_from_slice(&(total as u32).to_le_bytes());
        out.extend_from_slice(&(json_chunk.len() as u32).to_le_bytes());
        out.extend_from_slice(b"JSON");
        out.extend_from_slice(&json_chunk);
        if !bin.is_empty() {
            out.extend_from_slice(&(bin_chunk.len() as u32).to_le_bytes());
            out.extend_from_slice(b"BIN\0");
            out.extend_from_slice(&bin_chunk);
        }
        out
    }

    fn triangle_bin() -> Vec<u8> {
        let vertices: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let mut bin = Vec::with_capacity(36);
        for vertex in vertices {
            for component in vertex {
                bin.extend_from_slice(&component.to_le_bytes());
            }
        }
        bin
    }

    const TRIANGLE_JSON: &str = r#"{
        "asset": {"version": "2.0"},
        "scene": 0,
        "scenes": [{"nodes": [0]}],
        "nodes": [
            {"name": "root", "translation": [5.0, 0.0, 0.0], "children": [1]},
            {"name": "leaf", "mesh": 0}
        ],
        "meshes": [{
            "name": "Display",
            "primitives": [{"attributes": {"POSITION": 0}, "material": 0}]
        }],
        "materials": [{"name": "Display_orange"}],
        "accessors": [{
            "bufferView": 0,
            "componentType": 5126,
            "count": 3,
            "type": "VEC3",
            "min": [0.0, 0.0, 0.0],
            "max": [1.0, 1.0, 0.0]
        }],
        "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 36}],
        "buffers": [{"byteLength": 36}]
    }"#;

    #[test]
    fn test_import_slice_builds_arena_scene() {
        let scene = Scene::from_slice(&glb(TRIANGLE_JSON, &triangle_bin())).unwrap();

        assert_eq!(scene.num_nodes(), 2);
        assert_eq!(scene.num_meshes(), 1);
        assert_eq!(scene.num_materials(), 1);

        let mesh = scene.mesh(MeshIndex(0)).unwrap();
        assert_eq!(mesh.name(), Some("Display"));
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(
            mesh.primitives()[0].material(),
            Some(MaterialIndex(0))
        );
        assert_eq!(
            scene.material(MaterialIndex(0)).unwrap().name(),
            Some("Display_orange")
        );
    }

    #[test]
    fn test_import_inverts_children_into_parent_links() {
        let scene = Importer::new()
            .import_slice(&glb(TRIANGLE_JSON, &triangle_bin()))
            .unwrap();

        let root = scene.node(NodeIndex(0)).unwrap();
        let leaf = scene.node(NodeIndex(1)).unwrap();
        assert_eq!(root.parent(), None);
        assert_eq!(leaf.parent(), Some(NodeIndex(0)));
        assert_eq!(leaf.mesh(), Some(MeshIndex(0)));

        // The leaf inherits the root translation through the chain.
        let world = scene.world_transform(NodeIndex(1)).unwrap();
        let p = crate::math::transform_point(&world, Vector3D::ZERO);
        assert!(p.abs_diff_eq(Vector3D::new(5.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_import_file_rejects_missing_path() {
        let err = Importer::new()
            .import_file("does-not-exist.glb")
            .unwrap_err();
        assert!(matches!(err, Error::FileError { .. }));
    }

    #[test]
    fn test_import_file_rejects_unknown_extension() {
        let dir = std::env::temp_dir();
        let path = dir.join("asset-inspector-unsupported.fbx");
        std::fs::write(&path, b"not a scene").unwrap();
        let err = Scene::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_import_slice_rejects_garbage() {
        let err = Importer::new().import_slice(b"garbage").unwrap_err();
        assert!(matches!(err, Error::Gltf(_)));
    }

    #[test]
    fn test_mesh_without_positions_loads_with_no_vertices() {
        // A mesh whose only primitive has no POSITION attribute; normals
        // alone don't contribute geometry to the bounds pass.
        let json = r#"{
            "asset": {"version": "2.0"},
            "scene": 0,
            "scenes": [{"nodes": [0]}],
            "nodes": [{"name": "root", "mesh": 0}],
            "meshes": [{
                "name": "Hollow",
                "primitives": [{"attributes": {"NORMAL": 0}}]
            }],
            "accessors": [{
                "bufferView": 0,
                "componentType": 5126,
                "count": 1,
                "type": "VEC3"
            }],
            "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 12}],
            "buffers": [{"byteLength": 12}]
        }"#;
        let bin = [0u8; 12];

        let scene = Importer::new().import_slice(&glb(json, &bin)).unwrap();
        let mesh = scene.mesh(MeshIndex(0)).unwrap();
        assert_eq!(mesh.num_primitives(), 1);
        assert_eq!(mesh.num_vertices(), 0);
    }
}
