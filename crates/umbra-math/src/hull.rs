use glam::{Mat4, Vec3};

use crate::BoundingBox;

/// The eight corners of a box, carried into some target space.
///
/// Rebuilt from the caster bounds every frame; never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConvexHull {
    points: [Vec3; 8],
}

impl ConvexHull {
    /// Hull made of the corners of `bounds`, in the box's own space.
    pub fn from_box(bounds: &BoundingBox) -> Self {
        Self {
            points: bounds.corners(),
        }
    }

    /// Transform every point by `m` (with perspective divide).
    pub fn transformed(&self, m: &Mat4) -> Self {
        Self {
            points: self.points.map(|p| m.project_point3(p)),
        }
    }

    /// Axis-aligned bounds of the points after transforming them by `m`.
    pub fn bounds_in(&self, m: &Mat4) -> BoundingBox {
        self.transformed(m).bounds()
    }

    /// Axis-aligned bounds of the points.
    pub fn bounds(&self) -> BoundingBox {
        let first = self.points[0];
        BoundingBox::from_points(self.iter()).unwrap_or(BoundingBox::new(first, first))
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().copied()
    }
}
