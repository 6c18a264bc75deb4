use glam::Vec3;

/// Orthonormal frame built around a light's forward axis.
///
/// `w` is the light direction, `v` serves as the light's up vector and `u`
/// completes the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightBasis {
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
}

impl LightBasis {
    /// Build a frame whose `w` axis points along `direction`.
    ///
    /// The helper axis switches from +X to +Y when `direction` is close to
    /// the X axis so the cross product never degenerates.
    ///
    /// # Panics
    ///
    /// Panics if `direction` has near-zero length.
    pub fn from_w(direction: Vec3) -> Self {
        let len = direction.length();
        assert!(len > 1e-6, "light direction must not be zero");
        let w = direction / len;
        let helper = if w.x.abs() > 0.9 { Vec3::Y } else { Vec3::X };
        let v = w.cross(helper).normalize();
        let u = w.cross(v);
        Self { u, v, w }
    }
}

impl Default for LightBasis {
    fn default() -> Self {
        Self::from_w(Vec3::NEG_Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(b: &LightBasis) {
        for axis in [b.u, b.v, b.w] {
            assert!((axis.length() - 1.0).abs() < 1e-5, "axis not unit: {axis}");
        }
        assert!(b.u.dot(b.v).abs() < 1e-5);
        assert!(b.v.dot(b.w).abs() < 1e-5);
        assert!(b.w.dot(b.u).abs() < 1e-5);
    }

    #[test]
    fn test_basis_is_orthonormal_for_many_directions() {
        let dirs = [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::new(0.3, -1.0, 0.2),
            Vec3::new(0.95, 0.1, 0.0),
            Vec3::new(-5.0, 2.0, 7.0),
        ];
        for d in dirs {
            let b = LightBasis::from_w(d);
            assert_orthonormal(&b);
            assert!((b.w - d.normalize()).length() < 1e-5);
        }
    }

    #[test]
    fn test_forward_light_uses_world_up() {
        let b = LightBasis::from_w(Vec3::Z);
        assert!((b.v - Vec3::Y).length() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "must not be zero")]
    fn test_zero_direction_panics() {
        LightBasis::from_w(Vec3::ZERO);
    }
}
