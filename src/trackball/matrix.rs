//! Closed-form conversion from an orientation quaternion to a model
//! rotation matrix.

use glam::{Mat3, Mat4, Quat, Vec3};

/// 3×3 rotation matrix for an orientation.
///
/// The entries are the standard quaternion identities, laid out
/// row-for-column the way the model transform consumes them: the result is
/// the inverse of `q`'s rotation. Since a drag increment carries the
/// drag-end sphere point back onto the drag-start point, this matrix moves
/// the model along with the pointer.
///
/// The input is renormalized first; a zero-length quaternion yields the
/// identity.
#[must_use]
pub fn rotation_matrix3(q: Quat) -> Mat3 {
    if q.length_squared() <= f32::EPSILON {
        return Mat3::IDENTITY;
    }
    let q = q.normalize();
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);

    let (xx, yy, zz) = (x * x, y * y, z * z);
    let (xy, xz, yz) = (x * y, x * z, y * z);
    let (wx, wy, wz) = (w * x, w * y, w * z);

    Mat3::from_cols(
        Vec3::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)),
        Vec3::new(2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)),
        Vec3::new(2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)),
    )
}

/// [`rotation_matrix3`] embedded in a homogeneous matrix with no
/// translation or scale.
#[must_use]
pub fn rotation_matrix(q: Quat) -> Mat4 {
    Mat4::from_mat3(rotation_matrix3(q))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(m: Mat3) {
        let cols = [m.x_axis, m.y_axis, m.z_axis];
        for (i, a) in cols.iter().enumerate() {
            assert!((a.length() - 1.0).abs() < 1e-5, "column {i} not unit");
            for b in &cols[i + 1..] {
                assert!(a.dot(*b).abs() < 1e-5, "columns not orthogonal");
            }
        }
        assert!((m.determinant() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn identity_maps_to_identity() {
        assert_eq!(rotation_matrix(Quat::IDENTITY), Mat4::IDENTITY);
    }

    #[test]
    fn matches_inverse_rotation() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, -0.5).normalize(), 1.3);
        let expected = Mat4::from_quat(q.conjugate());
        assert!(rotation_matrix(q).abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn output_is_orthonormal() {
        for (axis, angle) in [
            (Vec3::X, 0.3),
            (Vec3::new(0.2, -0.9, 0.4), 2.5),
            (Vec3::new(-1.0, 1.0, 1.0), 3.1),
        ] {
            assert_orthonormal(rotation_matrix3(Quat::from_axis_angle(
                axis.normalize(),
                angle,
            )));
        }
    }

    #[test]
    fn drifted_input_is_renormalized() {
        let q = Quat::from_rotation_y(0.8);
        let drifted = Quat::from_xyzw(q.x * 1.2, q.y * 1.2, q.z * 1.2, q.w * 1.2);
        assert!(rotation_matrix3(drifted).abs_diff_eq(rotation_matrix3(q), 1e-6));
        assert_orthonormal(rotation_matrix3(drifted));
    }

    #[test]
    fn zero_quaternion_is_identity() {
        assert_eq!(
            rotation_matrix(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0)),
            Mat4::IDENTITY
        );
    }

    #[test]
    fn homogeneous_row_and_column_are_untouched() {
        let m = rotation_matrix(Quat::from_rotation_z(0.6));
        assert_eq!(m.w_axis, glam::Vec4::W);
        assert_eq!(m.x_axis.w, 0.0);
        assert_eq!(m.y_axis.w, 0.0);
        assert_eq!(m.z_axis.w, 0.0);
    }
}
