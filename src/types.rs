//! Common types and type aliases used throughout the inspector
//!
//! This module re-exports glam types for mathematical operations and provides
//! conversion utilities for the plain float arrays the glTF format exposes.
//!
//! # Why glam?
//!
//! glam is the math library the Rust graphics ecosystem has settled on:
//! SIMD-backed vectors, matrices, and quaternions with a clean API. All
//! inspector math is expressed in glam types so results compose directly
//! with downstream tooling.

// Re-export glam types as our primary math types
pub use glam::{
    Mat4 as Matrix4x4, Quat as Quaternion, Vec3 as Vector3D, Vec4 as Vector4D,
};

/// Convert a glTF `[x, y, z]` array to a [`Vector3D`]
#[inline]
pub fn vec3_from_array(v: [f32; 3]) -> Vector3D {
    Vector3D::new(v[0], v[1], v[2])
}

/// Convert a glTF `[x, y, z, w]` quaternion array to a [`Quaternion`]
///
/// glTF stores quaternions with the scalar part last, matching
/// [`Quaternion::from_xyzw`].
#[inline]
pub fn quat_from_array(q: [f32; 4]) -> Quaternion {
    Quaternion::from_xyzw(q[0], q[1], q[2], q[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_from_array() {
        let v = vec3_from_array([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3D::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_quat_from_array_identity() {
        let q = quat_from_array([0.0, 0.0, 0.0, 1.0]);
        assert_eq!(q, Quaternion::IDENTITY);
    }
}
