use crate::error::GeometryError;
use crate::math::intersect_3d::intersect_ground_plane;
use crate::math::{normalize, Point3};
use crate::topology::VERTEX_COUNT;

use super::try_map_vertices;

/// Parallel projection along the ray from `light` to `centroid`.
///
/// The direction is computed once and shared by every corner.
pub(super) fn project(
    vertices: &[Point3; VERTEX_COUNT],
    centroid: &Point3,
    light: &Point3,
) -> Result<[Point3; VERTEX_COUNT], GeometryError> {
    let direction = normalize(&(centroid - light), "light-to-centroid direction")?;
    try_map_vertices(vertices, |v| Ok(intersect_ground_plane(v, &direction)?.point))
}
