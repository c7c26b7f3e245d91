//! # Asset Inspector
//!
//! Offline inspection of binary glTF (`.glb`) scene assets.
//!
//! Given a scene file, the inspector loads the node/mesh/material graph,
//! computes every mesh's world-space axis-aligned bounding box, and builds
//! a structured report: a per-mesh listing, the first mesh carrying an
//! exact-name material match, and the combined bounds of every mesh whose
//! name or materials match a keyword.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use asset_inspector::{Importer, report::{build_report, ReportOptions}};
//!
//! # fn main() -> asset_inspector::Result<()> {
//! let scene = Importer::new().import_file("model.glb")?;
//! let report = build_report(&scene, &ReportOptions::default())?;
//! println!("{} meshes inspected", report.entries.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The importer is the only component that touches the asset file; it runs
//! once, before analysis, and produces an immutable [`Scene`] arena with
//! typed indices linking nodes, meshes, and materials. Everything after
//! that is a pure, single-pass computation:
//!
//! - [`scene::Scene::world_transform`] folds the ancestor chain into a
//!   world matrix
//! - [`bounds::world_bounds`] folds transformed vertices into an AABB
//! - [`report::build_report`] assembles the listing and the aggregates

#![warn(missing_docs)]

// Re-export common types for convenience
pub use crate::{
    aabb::AABB,
    bounds::{MeshBounds, world_bounds},
    error::{Error, Result},
    importer::Importer,
    report::{Report, ReportEntry, ReportOptions, Sections, build_report},
    scene::{MaterialIndex, MeshIndex, NodeIndex, Scene},
    types::*,
};

// Core modules
pub mod error;
pub mod importer;
pub mod scene;
pub mod types;

// Component modules
pub mod material;
pub mod mesh;
pub mod node;

// Data structure modules
pub mod aabb;
pub mod bounds;

// Analysis modules
pub mod math;
pub mod report;

/// Version information
pub mod version {
    /// Version of this crate
    pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");
}
