use glam::Vec3;

/// Axis-aligned bounding box in f32 space.
///
/// Invariant: min.x <= max.x, min.y <= max.y, min.z <= max.z.
/// The constructor enforces this by swapping components if needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Create a box from two corners. Automatically sorts
    /// components so that min <= max on every axis.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a box from a center point and half-extents.
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        let half = half.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |acc, p| Self {
            min: acc.min.min(p),
            max: acc.max.max(p),
        }))
    }

    /// The eight corners. Bit 0 of the index selects max.x, bit 1 max.y,
    /// bit 2 max.z.
    pub fn corners(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        })
    }

    /// Returns the center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_auto_sorts() {
        let b = BoundingBox::new(Vec3::new(10.0, -1.0, 3.0), Vec3::new(0.0, 2.0, -3.0));
        assert_eq!(b.min, Vec3::new(0.0, -1.0, -3.0));
        assert_eq!(b.max, Vec3::new(10.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_center_half_extents() {
        let b = BoundingBox::from_center_half_extents(Vec3::new(0.0, 0.0, 50.0), Vec3::ONE);
        assert_eq!(b.min, Vec3::new(-1.0, -1.0, 49.0));
        assert_eq!(b.max, Vec3::new(1.0, 1.0, 51.0));
        assert_eq!(b.center(), Vec3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn test_from_points_empty_is_none() {
        assert!(BoundingBox::from_points(std::iter::empty::<Vec3>()).is_none());
    }

    #[test]
    fn test_from_points_encloses_all() {
        let pts = [
            Vec3::new(1.0, 5.0, -2.0),
            Vec3::new(-3.0, 0.0, 4.0),
            Vec3::new(2.0, -1.0, 0.0),
        ];
        let b = BoundingBox::from_points(pts).unwrap();
        assert_eq!(b.min, Vec3::new(-3.0, -1.0, -2.0));
        assert_eq!(b.max, Vec3::new(2.0, 5.0, 4.0));
    }

    #[test]
    fn test_corners_are_distinct_and_on_box() {
        let b = BoundingBox::new(Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0));
        let corners = b.corners();
        for (i, a) in corners.iter().enumerate() {
            assert!(a.cmpge(b.min).all() && a.cmple(b.max).all());
            for c in &corners[i + 1..] {
                assert_ne!(a, c);
            }
        }
        assert_eq!(corners[0], b.min);
        assert_eq!(corners[7], b.max);
    }
}
