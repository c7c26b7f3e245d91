//! Axis-Aligned Bounding Box (AABB) support
//!
//! This module provides the bounding-box value type the inspector folds
//! vertex positions into. The empty box (`min > max`) is the single
//! degenerate convention used throughout the crate: meshes with no
//! geometry and meshes with no referencing node both report an empty box,
//! and callers query it through [`AABB::is_empty`] instead of comparing
//! against sentinel coordinates.

use crate::types::Vector3D;

/// An axis-aligned bounding box in 3D space
///
/// An AABB is defined by its minimum and maximum corner points.
/// It's called "axis-aligned" because its faces are parallel to the
/// coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3D,
    /// Maximum corner of the bounding box
    pub max: Vector3D,
}

impl AABB {
    /// Create a new AABB with the given minimum and maximum points
    pub fn new(min: Vector3D, max: Vector3D) -> Self {
        Self { min, max }
    }

    /// Create an empty AABB (min > max, indicating no volume)
    pub fn empty() -> Self {
        Self {
            min: Vector3D::splat(f32::INFINITY),
            max: Vector3D::splat(f32::NEG_INFINITY),
        }
    }

    /// Create an AABB from a single point
    pub fn from_point(point: Vector3D) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Create an AABB from a collection of points
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector3D>,
    {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include_point(point);
        }
        aabb
    }

    /// Check if this AABB is empty (has no volume)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Check if this AABB is valid (min <= max for all axes)
    pub fn is_valid(&self) -> bool {
        !self.is_empty()
    }

    /// Get the center point of the AABB
    pub fn center(&self) -> Vector3D {
        (self.min + self.max) * 0.5
    }

    /// Get the size (extent) of the AABB along each axis
    pub fn size(&self) -> Vector3D {
        if self.is_empty() {
            Vector3D::ZERO
        } else {
            self.max - self.min
        }
    }

    /// Expand the AABB to include a point
    pub fn expand_to_include_point(&mut self, point: Vector3D) {
        if self.is_empty() {
            self.min = point;
            self.max = point;
        } else {
            self.min = self.min.min(point);
            self.max = self.max.max(point);
        }
    }

    /// Expand the AABB to include another AABB
    pub fn expand_to_include_aabb(&mut self, other: &AABB) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
        } else {
            self.min = self.min.min(other.min);
            self.max = self.max.max(other.max);
        }
    }

    /// Create a new AABB that includes both this AABB and a point
    pub fn expanded_to_include_point(&self, point: Vector3D) -> Self {
        let mut result = *self;
        result.expand_to_include_point(point);
        result
    }

    /// Check if a point is inside this AABB
    pub fn contains_point(&self, point: Vector3D) -> bool {
        !self.is_empty()
            && point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

impl Default for AABB {
    fn default() -> Self {
        Self::empty()
    }
}
