//! Projection of box corners onto the ground plane z = 0.
//!
//! Each [`ProjectionKind`] picks a rule for the ray direction through every
//! corner; the ray is then intersected with the plane by
//! [`intersect_ground_plane`](crate::math::intersect_3d::intersect_ground_plane).

mod oblique;
mod orthographic;
mod perspective;

use std::fmt;
use std::str::FromStr;

use crate::error::{GeometryError, InputError};
use crate::math::Point3;
use crate::topology::face::{face_points, VERTEX_COUNT};

/// The projection model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectionKind {
    /// Straight down the z axis. The light source is ignored.
    #[default]
    Orthographic,
    /// Parallel rays, all along the direction from the light to the centroid.
    Oblique,
    /// Rays from the light (the eye) through each corner.
    Perspective,
}

impl ProjectionKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 3] = [Self::Orthographic, Self::Oblique, Self::Perspective];

    /// Lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Orthographic => "orthographic",
            Self::Oblique => "oblique",
            Self::Perspective => "perspective",
        }
    }

    /// Whether the light position takes part in the projection.
    #[must_use]
    pub fn uses_light(self) -> bool {
        match self {
            Self::Orthographic => false,
            Self::Oblique | Self::Perspective => true,
        }
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectionKind {
    type Err = InputError;

    /// Parses a kind name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputError::UnknownProjectionKind(s.to_owned()))
    }
}

/// Projected corner positions, indexed like the source solid's vertices.
///
/// Every point has z = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedVertices {
    points: [Point3; VERTEX_COUNT],
}

impl ProjectedVertices {
    /// The projected corners.
    #[must_use]
    pub fn points(&self) -> &[Point3; VERTEX_COUNT] {
        &self.points
    }

    /// The projected corners of each face, in
    /// [`CUBOID_FACES`](crate::topology::CUBOID_FACES) order.
    #[must_use]
    pub fn face_points(&self) -> [[Point3; 4]; 6] {
        face_points(&self.points)
    }
}

/// Projects `vertices` onto z = 0 under `kind`.
///
/// `centroid` is the pivot of the box the vertices belong to; only the
/// oblique rule reads it. `light` is ignored by the orthographic rule.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateDirection`] if a ray direction has zero
/// length, or [`GeometryError::ParallelDirection`] if a ray never meets the
/// plane.
pub fn project_vertices(
    kind: ProjectionKind,
    vertices: &[Point3; VERTEX_COUNT],
    centroid: &Point3,
    light: &Point3,
) -> Result<ProjectedVertices, GeometryError> {
    let points = match kind {
        ProjectionKind::Orthographic => orthographic::project(vertices),
        ProjectionKind::Oblique => oblique::project(vertices, centroid, light)?,
        ProjectionKind::Perspective => perspective::project(vertices, light)?,
    };
    Ok(ProjectedVertices { points })
}

/// Applies a fallible per-corner projection, stopping at the first failure.
fn try_map_vertices<F>(
    vertices: &[Point3; VERTEX_COUNT],
    mut f: F,
) -> Result<[Point3; VERTEX_COUNT], GeometryError>
where
    F: FnMut(&Point3) -> Result<Point3, GeometryError>,
{
    let mut out = *vertices;
    for (slot, v) in out.iter_mut().zip(vertices) {
        *slot = f(v)?;
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::Solid;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in ProjectionKind::ALL {
            assert_eq!(kind.to_string().parse::<ProjectionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_parsing_ignores_case_and_padding() {
        assert_eq!(
            " Perspective ".parse::<ProjectionKind>().unwrap(),
            ProjectionKind::Perspective
        );
        assert_eq!(
            "OBLIQUE".parse::<ProjectionKind>().unwrap(),
            ProjectionKind::Oblique
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "parallel".parse::<ProjectionKind>().unwrap_err();
        assert_eq!(err, InputError::UnknownProjectionKind("parallel".into()));
    }

    #[test]
    fn only_orthographic_ignores_light() {
        assert!(!ProjectionKind::Orthographic.uses_light());
        assert!(ProjectionKind::Oblique.uses_light());
        assert!(ProjectionKind::Perspective.uses_light());
    }

    #[test]
    fn every_kind_lands_on_the_plane() {
        let solid = Solid::new(p(1.0, 1.0, 1.0), 2.0);
        for kind in ProjectionKind::ALL {
            let projected =
                project_vertices(kind, solid.vertices(), &solid.centroid(), &p(0.0, 0.0, 8.0))
                    .unwrap();
            assert!(projected.points().iter().all(|v| v.z == 0.0));
        }
    }

    #[test]
    fn projected_faces_follow_solid_faces() {
        let solid = Solid::new(p(0.0, 0.0, 1.0), 1.0);
        let projected = project_vertices(
            ProjectionKind::Orthographic,
            solid.vertices(),
            &solid.centroid(),
            &p(0.0, 0.0, 8.0),
        )
        .unwrap();
        let faces = projected.face_points();
        assert_relative_eq!(faces[2][2], p(1.0, 0.0, 0.0));
        assert_relative_eq!(faces[2][3], p(0.0, 0.0, 0.0));
    }
}
