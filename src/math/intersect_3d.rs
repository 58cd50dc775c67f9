use crate::error::GeometryError;

use super::{Point3, Vector3, TOLERANCE};

/// Where a ray `origin + t * dir` meets the ground plane z = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    /// The intersection point. Its z coordinate is exactly zero.
    pub point: Point3,
    /// Ray parameter at the intersection.
    pub t: f64,
}

/// Intersects the line `origin + t * dir` with the plane z = 0.
///
/// `dir` need not be unit length. Solves `(origin + t * dir).z == 0`, i.e.
/// `t = -origin.z / dir.z`.
///
/// # Errors
///
/// Returns [`GeometryError::ParallelDirection`] if `dir` has no z component,
/// in which case the line never reaches the plane.
pub fn intersect_ground_plane(origin: &Point3, dir: &Vector3) -> Result<GroundHit, GeometryError> {
    if dir.z.abs() < TOLERANCE {
        return Err(GeometryError::ParallelDirection {
            direction: [dir.x, dir.y, dir.z],
        });
    }

    let t = -origin.z / dir.z;
    let mut point = origin + dir * t;
    // On the plane by construction; drop the rounding residue.
    point.z = 0.0;
    Ok(GroundHit { point, t })
}
