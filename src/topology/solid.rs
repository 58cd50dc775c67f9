use crate::math::{Aabb, Point3, Vector3};

use super::face::{face_points, Face, CUBOID_FACES, UNIT_CORNERS, VERTEX_COUNT};

/// An axis-aligned box described by its eight corner positions.
///
/// Vertex `i` always corresponds to corner `i` of [`UNIT_CORNERS`], and the
/// faces are always [`CUBOID_FACES`]. Transforms move the corners, never the
/// topology.
///
/// `Solid` is a plain value: transforms either mutate a solid the caller
/// owns (`translate`, `scale`) or return a new one (`translated`, `scaled`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    vertices: [Point3; VERTEX_COUNT],
}

impl Solid {
    /// Builds a box with minimum corner `coordinate` and edge length `size`.
    ///
    /// Each corner is `unit_corner * size + coordinate`. A zero `size`
    /// collapses every corner onto `coordinate` and a negative `size` flips
    /// the box through `coordinate`; neither is rejected.
    #[must_use]
    pub fn new(coordinate: Point3, size: f64) -> Self {
        let vertices =
            UNIT_CORNERS.map(|[x, y, z]| coordinate + Vector3::new(x, y, z) * size);
        Self { vertices }
    }

    /// Current corner positions in canonical order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3; VERTEX_COUNT] {
        &self.vertices
    }

    /// Face topology, as quads of vertex indices.
    #[must_use]
    pub fn faces(&self) -> &'static [Face; 6] {
        &CUBOID_FACES
    }

    /// The corner positions of each face, in [`faces`](Self::faces) order.
    #[must_use]
    pub fn face_points(&self) -> [[Point3; 4]; 6] {
        face_points(&self.vertices)
    }

    /// Axis-aligned bounding box of the current corners.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        let [first, rest @ ..] = &self.vertices;
        rest.iter().fold(Aabb::from_point(*first), |aabb, p| aabb.including(p))
    }

    /// Center of the bounding box, the pivot used by [`scale`](Self::scale).
    ///
    /// This is `(min + max) / 2` per axis, which matches the center of mass
    /// only because the corners form a box.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        self.bounding_box().center()
    }

    /// Moves every corner by `delta`.
    pub fn translate(&mut self, delta: &Vector3) {
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    /// Scales every corner by `factor` about the current centroid.
    ///
    /// A zero factor collapses the box onto its centroid; a negative factor
    /// reflects it through the centroid.
    pub fn scale(&mut self, factor: f64) {
        let center = self.centroid();
        for v in &mut self.vertices {
            *v = center + (*v - center) * factor;
        }
    }

    /// Returns a copy moved by `delta`.
    #[must_use]
    pub fn translated(mut self, delta: &Vector3) -> Self {
        self.translate(delta);
        self
    }

    /// Returns a copy scaled by `factor` about its centroid.
    #[must_use]
    pub fn scaled(mut self, factor: f64) -> Self {
        self.scale(factor);
        self
    }
}

impl Default for Solid {
    /// The unit cube at the origin.
    fn default() -> Self {
        Self::new(Point3::origin(), 1.0)
    }
}
