//! TRS composition and point transforms for scene-graph evaluation.
//! These helpers pin down the column-major conventions of the glTF format,
//! returning glam types for ergonomics. Prefer glam methods directly for
//! general math; use these where the asset-format semantics matter.

use crate::types::{Matrix4x4, Quaternion, Vector3D};

/// The 4x4 identity matrix, the neutral element of composition
pub fn identity() -> Matrix4x4 {
    Matrix4x4::IDENTITY
}

/// Compose a column-major TRS matrix: scale, then rotate, then translate
///
/// The rotation quaternion is expected to be of unit length, as guaranteed
/// for node rotations by the glTF specification. Translation occupies the
/// last column; the bottom row is `(0, 0, 0, 1)`.
pub fn compose_trs(
    translation: Vector3D,
    rotation: Quaternion,
    scale: Vector3D,
) -> Matrix4x4 {
    Matrix4x4::from_scale_rotation_translation(scale, rotation, translation)
}

/// Multiply two column-major 4x4 matrices: returns `a * b`
pub fn multiply(a: Matrix4x4, b: Matrix4x4) -> Matrix4x4 {
    a * b
}

/// Transform a point by a 4x4 matrix with implicit `w = 1`, dividing
/// through by the resulting `w`
///
/// The division is a no-op for affine TRS matrices; it keeps the result
/// correct should a projective matrix ever reach this path.
pub fn transform_point(m: &Matrix4x4, p: Vector3D) -> Vector3D {
    m.project_point3(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector4D;
    use approx::assert_relative_eq;

    // Reference TRS composition via the textbook quaternion expansion,
    // kept independent of glam so the production path is checked against
    // the raw formula.
    fn compose_trs_reference(t: Vector3D, r: Quaternion, s: Vector3D) -> Matrix4x4 {
        let (x, y, z, w) = (r.x, r.y, r.z, r.w);
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, xy, xz) = (x * x2, x * y2, x * z2);
        let (yy, yz, zz) = (y * y2, y * z2, z * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        Matrix4x4::from_cols(
            Vector4D::new(
                (1.0 - (yy + zz)) * s.x,
                (xy + wz) * s.x,
                (xz - wy) * s.x,
                0.0,
            ),
            Vector4D::new(
                (xy - wz) * s.y,
                (1.0 - (xx + zz)) * s.y,
                (yz + wx) * s.y,
                0.0,
            ),
            Vector4D::new(
                (xz + wy) * s.z,
                (yz - wx) * s.z,
                (1.0 - (xx + yy)) * s.z,
                0.0,
            ),
            Vector4D::new(t.x, t.y, t.z, 1.0),
        )
    }

    #[test]
    fn test_compose_matches_quaternion_expansion() {
        let t = Vector3D::new(1.0, -2.0, 3.5);
        let r = Quaternion::from_euler(glam::EulerRot::XYZ, 0.3, -1.1, 2.4);
        let s = Vector3D::new(2.0, 0.5, 3.0);

        let composed = compose_trs(t, r, s);
        let reference = compose_trs_reference(t, r, s);
        assert!(composed.abs_diff_eq(reference, 1e-6));
    }

    #[test]
    fn test_pure_rotation_has_orthonormal_columns() {
        let rotations = [
            Quaternion::from_rotation_x(0.7),
            Quaternion::from_rotation_y(-2.1),
            Quaternion::from_rotation_z(3.0),
            Quaternion::from_euler(glam::EulerRot::XYZ, 0.5, 1.3, -0.8),
        ];

        for r in rotations {
            let m = compose_trs(Vector3D::ZERO, r, Vector3D::ONE);
            let cols = [
                m.col(0).truncate(),
                m.col(1).truncate(),
                m.col(2).truncate(),
            ];
            for col in cols {
                assert_relative_eq!(col.length(), 1.0, epsilon = 1e-6);
            }
            assert_relative_eq!(cols[0].dot(cols[1]), 0.0, epsilon = 1e-6);
            assert_relative_eq!(cols[1].dot(cols[2]), 0.0, epsilon = 1e-6);
            assert_relative_eq!(cols[0].dot(cols[2]), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_identity_is_neutral_exactly() {
        let m = compose_trs(
            Vector3D::new(4.0, 5.0, 6.0),
            Quaternion::from_rotation_y(1.2),
            Vector3D::new(1.0, 2.0, 0.5),
        );

        assert_eq!(multiply(identity(), m), m);
        assert_eq!(multiply(m, identity()), m);
    }

    #[test]
    fn test_transform_point_applies_translation() {
        let m = compose_trs(
            Vector3D::new(10.0, 0.0, -3.0),
            Quaternion::IDENTITY,
            Vector3D::ONE,
        );
        let p = transform_point(&m, Vector3D::new(1.0, 2.0, 3.0));
        assert!(p.abs_diff_eq(Vector3D::new(11.0, 2.0, 0.0), 1e-6));
    }

    #[test]
    fn test_transform_point_divides_by_w() {
        // Not produced by TRS composition, but the helper must stay correct
        // for a matrix with a non-trivial bottom row.
        let mut m = identity();
        m.w_axis = Vector4D::new(0.0, 0.0, 0.0, 2.0);
        let p = transform_point(&m, Vector3D::new(2.0, 4.0, 6.0));
        assert!(p.abs_diff_eq(Vector3D::new(1.0, 2.0, 3.0), 1e-6));
    }
}
