use glam::{Mat4, Vec3};
use umbra_config::CasterConfig;
use umbra_math::{BoundingBox, ConvexHull};

/// Shadow caster: local-space bounds plus a uniform world transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CasterParams {
    /// Bounds in the caster's local space.
    pub bounds: BoundingBox,
    /// Local-to-world transform.
    pub world: Mat4,
}

impl CasterParams {
    pub fn new(bounds: BoundingBox, world: Mat4) -> Self {
        Self { bounds, world }
    }

    /// Caster corners carried into world space.
    pub fn world_hull(&self) -> ConvexHull {
        ConvexHull::from_box(&self.bounds).transformed(&self.world)
    }
}

impl Default for CasterParams {
    fn default() -> Self {
        Self::from(&CasterConfig::default())
    }
}

impl From<&CasterConfig> for CasterParams {
    fn from(config: &CasterConfig) -> Self {
        Self {
            bounds: BoundingBox::from_center_half_extents(
                Vec3::from_array(config.center),
                Vec3::from_array(config.half_extents),
            ),
            world: Mat4::from_scale(Vec3::splat(config.scale)),
        }
    }
}
