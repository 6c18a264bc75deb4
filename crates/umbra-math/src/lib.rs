//! f32 bounding volumes and orthonormal frames used by the shadow-fitting math.

mod aabb;
mod basis;
mod hull;

pub use aabb::BoundingBox;
pub use basis::LightBasis;
pub use hull::ConvexHull;
