use glam::{Mat4, Vec3};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Componentwise minimum corner.
    pub min: Vec3,
    /// Componentwise maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Bounds of a point set, or `None` when it is empty.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis.
    #[must_use]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the longest edge.
    #[must_use]
    pub fn largest_extent(&self) -> f32 {
        self.extent().max_element()
    }
}

/// Fixed scale and translation that put a model at the origin with its
/// longest edge one unit long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelFrame {
    /// Uniform scale applied after translation.
    pub scale: f32,
    /// Translation moving the model's center to the origin.
    pub translation: Vec3,
}

impl Default for ModelFrame {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translation: Vec3::ZERO,
        }
    }
}

impl ModelFrame {
    /// Frame that centers `bounds` and scales its longest edge to 1.
    ///
    /// A flat or point-sized box keeps unit scale.
    #[must_use]
    pub fn fit(bounds: &Aabb) -> Self {
        let largest = bounds.largest_extent();
        let scale = if largest > f32::EPSILON {
            1.0 / largest
        } else {
            1.0
        };
        Self {
            scale,
            translation: -bounds.center(),
        }
    }

    /// Frame fitted to a point set; the identity frame when it is empty.
    #[must_use]
    pub fn fit_points(points: &[Vec3]) -> Self {
        Aabb::from_points(points).map_or_else(Self::default, |b| {
            let frame = Self::fit(&b);
            log::debug!(
                "model frame: scale={:.4} translation=({:.4}, {:.4}, {:.4})",
                frame.scale,
                frame.translation.x,
                frame.translation.y,
                frame.translation.z,
            );
            frame
        })
    }

    /// `scale * translate`: the placement applied before rotation.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_translation(self.translation)
    }

    /// Full model transform with `rotation` applied after placement.
    #[must_use]
    pub fn model_matrix(&self, rotation: Mat4) -> Mat4 {
        rotation * self.matrix()
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;
    use crate::trackball::rotation_matrix;

    fn cube_corners(min: Vec3, max: Vec3) -> Vec<Vec3> {
        (0..8)
            .map(|i| {
                Vec3::new(
                    if i & 1 == 0 { min.x } else { max.x },
                    if i & 2 == 0 { min.y } else { max.y },
                    if i & 4 == 0 { min.z } else { max.z },
                )
            })
            .collect()
    }

    #[test]
    fn empty_set_has_no_bounds() {
        assert_eq!(Aabb::from_points(&[]), None);
        assert_eq!(ModelFrame::fit_points(&[]), ModelFrame::default());
    }

    #[test]
    fn bounds_cover_every_axis_independently() {
        // A point that is extreme on several axes at once must update all
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(5.0, 7.0, -3.0),
            Vec3::new(-1.0, 2.0, 4.0),
        ];
        let b = Aabb::from_points(&points).unwrap();
        assert_eq!(b.min, Vec3::new(-1.0, 0.0, -3.0));
        assert_eq!(b.max, Vec3::new(5.0, 7.0, 4.0));
        assert_eq!(b.center(), Vec3::new(2.0, 3.5, 0.5));
        assert_eq!(b.largest_extent(), 7.0);
    }

    #[test]
    fn fit_centers_and_unit_scales() {
        let points = cube_corners(Vec3::new(10.0, -2.0, 3.0), Vec3::new(14.0, 0.0, 4.0));
        let frame = ModelFrame::fit_points(&points);
        assert_eq!(frame.scale, 0.25);

        let placed: Vec<Vec3> = points
            .iter()
            .map(|p| frame.matrix().transform_point3(*p))
            .collect();
        let b = Aabb::from_points(&placed).unwrap();
        assert!(b.center().length() < 1e-6);
        assert!((b.largest_extent() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_box_keeps_unit_scale() {
        let frame = ModelFrame::fit_points(&[Vec3::new(2.0, 2.0, 2.0)]);
        assert_eq!(frame.scale, 1.0);
        assert_eq!(frame.translation, Vec3::splat(-2.0));
    }

    #[test]
    fn rotation_applies_about_model_center() {
        let points = cube_corners(Vec3::splat(1.0), Vec3::splat(3.0));
        let frame = ModelFrame::fit_points(&points);
        let rotation = rotation_matrix(Quat::from_rotation_y(1.0));
        let m = frame.model_matrix(rotation);
        // The model center stays fixed at the origin under rotation
        assert!(m.transform_point3(Vec3::splat(2.0)).length() < 1e-6);
        assert_eq!(frame.model_matrix(Mat4::IDENTITY), frame.matrix());
    }
}
