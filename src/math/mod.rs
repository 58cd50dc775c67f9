pub mod aabb;
pub mod intersect_3d;

pub use aabb::Aabb;

use crate::error::GeometryError;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns `v` scaled to unit length.
///
/// `what` names the direction in the error message.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateDirection`] if `v` is shorter than
/// [`TOLERANCE`].
pub fn normalize(v: &Vector3, what: &str) -> Result<Vector3, GeometryError> {
    let len = v.norm();
    if len < TOLERANCE {
        return Err(GeometryError::DegenerateDirection(format!(
            "{what} has zero length"
        )));
    }
    Ok(v / len)
}
