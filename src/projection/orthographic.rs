use crate::math::Point3;
use crate::topology::VERTEX_COUNT;

/// Drops every corner straight onto z = 0.
///
/// The ray direction is the z axis itself, so no intersection has to be
/// solved and nothing can fail.
pub(super) fn project(vertices: &[Point3; VERTEX_COUNT]) -> [Point3; VERTEX_COUNT] {
    vertices.map(|v| Point3::new(v.x, v.y, 0.0))
}
