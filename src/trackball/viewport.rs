use glam::Vec2;

use crate::error::TrackballError;

/// Pixel dimensions of the drawable area the pointer moves over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport, rejecting a zero width or height.
    pub fn new(width: u32, height: u32) -> Result<Self, TrackballError> {
        if width == 0 || height == 0 {
            return Err(TrackballError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel position of the viewport center.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * 0.5
    }

    /// Map a top-left-origin pixel position to centered window coordinates.
    ///
    /// The center maps to `(0, 0)`, the edges to `±0.5`, and Y points up.
    /// Positions outside the viewport are not clamped.
    #[must_use]
    pub fn to_normalized(self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            x / self.width as f32 - 0.5,
            0.5 - y / self.height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            Viewport::new(0, 600),
            Err(TrackballError::InvalidViewport { width: 0, height: 600 })
        ));
        assert!(Viewport::new(800, 0).is_err());
        assert!(Viewport::new(1, 1).is_ok());
    }

    #[test]
    fn center_pixel_maps_to_origin() {
        let vp = Viewport::new(800, 600).unwrap();
        let c = vp.center();
        assert_eq!(vp.to_normalized(c.x, c.y), Vec2::ZERO);

        let odd = Viewport::new(801, 599).unwrap();
        let c = odd.center();
        assert!(odd.to_normalized(c.x, c.y).length() < 1e-6);
    }

    #[test]
    fn corners_and_y_flip() {
        let vp = Viewport::new(800, 600).unwrap();
        assert_eq!(vp.to_normalized(0.0, 0.0), Vec2::new(-0.5, 0.5));
        assert_eq!(vp.to_normalized(800.0, 600.0), Vec2::new(0.5, -0.5));
        // Moving down the screen lowers normalized Y
        assert!(vp.to_normalized(400.0, 500.0).y < 0.0);
    }

    #[test]
    fn outside_positions_are_not_clamped() {
        let vp = Viewport::new(800, 600).unwrap();
        let p = vp.to_normalized(-400.0, 1200.0);
        assert_eq!(p, Vec2::new(-1.0, -1.5));
    }
}
