use crate::math::Point3;

/// Number of corner vertices of a cuboid.
pub const VERTEX_COUNT: usize = 8;

/// A planar quadrilateral face, as four indices into a vertex array.
pub type Face = [usize; 4];

/// Face topology shared by every cuboid.
///
/// Indices refer to the canonical corner order of
/// [`UNIT_CORNERS`]: bottom, top, then the four sides.
pub const CUBOID_FACES: [Face; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [1, 2, 6, 5],
    [0, 3, 7, 4],
];

/// Corners of the unit cube in canonical order.
///
/// The bottom ring (z = 0) runs counter-clockwise seen from above, the top
/// ring (z = 1) repeats it.
pub const UNIT_CORNERS: [[f64; 3]; VERTEX_COUNT] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// Resolves every face of [`CUBOID_FACES`] against `vertices`.
#[must_use]
pub fn face_points(vertices: &[Point3; VERTEX_COUNT]) -> [[Point3; 4]; 6] {
    CUBOID_FACES.map(|face| face.map(|i| vertices[i]))
}
