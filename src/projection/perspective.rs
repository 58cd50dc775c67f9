use crate::error::GeometryError;
use crate::math::intersect_3d::intersect_ground_plane;
use crate::math::{normalize, Point3};
use crate::topology::VERTEX_COUNT;

use super::try_map_vertices;

/// Central projection: each corner is cast along its own ray from `light`.
pub(super) fn project(
    vertices: &[Point3; VERTEX_COUNT],
    light: &Point3,
) -> Result<[Point3; VERTEX_COUNT], GeometryError> {
    try_map_vertices(vertices, |v| {
        let direction = normalize(&(v - light), "light-to-vertex direction")?;
        Ok(intersect_ground_plane(v, &direction)?.point)
    })
}
