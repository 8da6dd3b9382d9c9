//! Shoemake's virtual-sphere mapping from window coordinates to 3D.

use glam::{Vec2, Vec3};

/// Radius, in normalized window units, of the disk covered by the sphere.
pub const DISK_RADIUS: f32 = 0.5;

/// Lift a normalized window point onto the unit sphere.
///
/// Inside the disk the point lands on the near hemisphere. Outside it is
/// pulled radially onto the equator (`z = 0`). Both branches agree at the
/// disk edge, and the function is total over finite inputs.
#[must_use]
pub fn project(p: Vec2) -> Vec3 {
    let k = p.length();
    if k <= DISK_RADIUS {
        // Round-off can push the radicand just below zero at the rim
        let z = (1.0 - 4.0 * k * k).max(0.0).sqrt();
        Vec3::new(2.0 * p.x, 2.0 * p.y, z)
    } else {
        Vec3::new(p.x / k, p.y / k, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_pole() {
        assert_eq!(project(Vec2::ZERO), Vec3::Z);
    }

    #[test]
    fn inside_points_are_on_unit_sphere() {
        for p in [
            Vec2::new(0.25, 0.0),
            Vec2::new(-0.1, 0.3),
            Vec2::new(0.35, -0.35),
        ] {
            let s = project(p);
            assert!((s.length() - 1.0).abs() < 1e-6, "{s:?}");
            assert!(s.z >= 0.0);
        }
        let s = project(Vec2::new(0.25, 0.0));
        assert!((s - Vec3::new(0.5, 0.0, 0.75_f32.sqrt())).length() < 1e-6);
    }

    #[test]
    fn outside_points_land_on_equator() {
        let s = project(Vec2::new(1.0, -1.0));
        assert_eq!(s.z, 0.0);
        assert!((s.length() - 1.0).abs() < 1e-6);
        assert!((s - Vec3::new(1.0, -1.0, 0.0).normalize()).length() < 1e-6);
    }

    #[test]
    fn boundary_agrees_from_both_sides() {
        assert_eq!(project(Vec2::new(0.5, 0.0)), Vec3::X);
        let inside = project(Vec2::new(0.5 - 1e-6, 0.0));
        let outside = project(Vec2::new(0.5 + 1e-6, 0.0));
        assert!((inside - outside).length() < 1e-2);
    }

    #[test]
    fn z_vanishes_approaching_rim() {
        let mut last = 1.0;
        for k in [0.4, 0.45, 0.49, 0.499, 0.4999] {
            let z = project(Vec2::new(0.0, k)).z;
            assert!(z < last);
            last = z;
        }
        assert!(last < 0.03);
    }
}
