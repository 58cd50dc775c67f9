use tracing::{debug, trace};

use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::projection::{project_vertices, ProjectedVertices, ProjectionKind};
use crate::topology::Solid;

use super::transform::{Scale, Translate};

/// Outcome of a [`Project`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// The solid after the requested scale and translation.
    pub solid: Solid,
    /// Its corners projected onto z = 0, indexed like `solid.vertices()`.
    pub projected: ProjectedVertices,
    /// The projection model used.
    pub kind: ProjectionKind,
    /// The light (or eye) position used.
    pub light: Point3,
}

impl Projection {
    /// The light position, if the projection model uses it.
    ///
    /// Renderers mark the light only for oblique and perspective projections.
    #[must_use]
    pub fn light_marker(&self) -> Option<Point3> {
        self.kind.uses_light().then_some(self.light)
    }
}

/// Transforms a solid and projects it onto the ground plane z = 0.
///
/// The optional scale runs first, then the optional translation, then the
/// projection. The order is fixed.
pub struct Project {
    light: Point3,
    kind: ProjectionKind,
    translation: Option<Vector3>,
    scale_factor: Option<f64>,
}

impl Project {
    /// Creates a new `Project` operation with no transforms.
    #[must_use]
    pub fn new(light: Point3, kind: ProjectionKind) -> Self {
        Self {
            light,
            kind,
            translation: None,
            scale_factor: None,
        }
    }

    /// Translates the solid by `translation` before projecting.
    #[must_use]
    pub fn with_translation(mut self, translation: Vector3) -> Self {
        self.translation = Some(translation);
        self
    }

    /// Scales the solid about its centroid by `factor` before projecting.
    #[must_use]
    pub fn with_scale(mut self, factor: f64) -> Self {
        self.scale_factor = Some(factor);
        self
    }

    /// Executes the pipeline against `solid`.
    ///
    /// `solid` itself is not modified; the transformed copy is returned in
    /// [`Projection::solid`]. Feed it back in to keep accumulating transforms.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if a projection ray is degenerate or parallel
    /// to the ground plane.
    pub fn execute(&self, solid: &Solid) -> Result<Projection> {
        let mut current = *solid;

        if let Some(factor) = self.scale_factor {
            trace!(factor, "scaling solid about centroid");
            current = Scale::new(factor).execute(&current);
        }
        if let Some(translation) = self.translation {
            trace!(?translation, "translating solid");
            current = Translate::new(translation).execute(&current);
        }

        let projected = project_vertices(
            self.kind,
            current.vertices(),
            &current.centroid(),
            &self.light,
        )
        .inspect_err(|err| debug!(kind = %self.kind, %err, "projection failed"))?;

        debug!(kind = %self.kind, light = ?self.light, "projected solid");

        Ok(Projection {
            solid: current,
            projected,
            kind: self.kind,
            light: self.light,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, ShadowcastError};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn unit_cube_orthographic() {
        let solid = Solid::new(p(0.0, 0.0, 0.0), 1.0);
        let result = Project::new(p(0.0, 0.0, 8.0), ProjectionKind::Orthographic)
            .execute(&solid)
            .unwrap();

        let expected = [
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ];
        assert_eq!(result.projected.points(), &expected);
        assert_eq!(result.light_marker(), None);
    }

    #[test]
    fn orthographic_ignores_light() {
        let solid = Solid::new(p(1.0, 2.0, 3.0), 1.5);
        let a = Project::new(p(0.0, 0.0, 8.0), ProjectionKind::Orthographic)
            .execute(&solid)
            .unwrap();
        // Light on the centroid would break the other models.
        let b = Project::new(solid.centroid(), ProjectionKind::Orthographic)
            .execute(&solid)
            .unwrap();
        assert_eq!(a.projected, b.projected);
    }

    #[test]
    fn cube_perspective_from_overhead_light() {
        let solid = Solid::new(p(1.0, 1.0, 1.0), 2.0);
        let result = Project::new(p(0.0, 0.0, 8.0), ProjectionKind::Perspective)
            .execute(&solid)
            .unwrap();

        let points = result.projected.points();
        assert_relative_eq!(points[0], p(8.0 / 7.0, 8.0 / 7.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(points[6], p(4.8, 4.8, 0.0), epsilon = 1e-12);
        assert_eq!(result.light_marker(), Some(p(0.0, 0.0, 8.0)));
    }

    #[test]
    fn oblique_with_light_at_centroid_is_degenerate() {
        let solid = Solid::new(p(1.0, 1.0, 1.0), 2.0);
        let err = Project::new(solid.centroid(), ProjectionKind::Oblique)
            .execute(&solid)
            .unwrap_err();
        assert!(matches!(
            err,
            ShadowcastError::Geometry(GeometryError::DegenerateDirection(_))
        ));
    }

    #[test]
    fn scale_runs_before_translate() {
        let solid = Solid::new(p(1.0, 1.0, 1.0), 2.0);
        let result = Project::new(p(0.0, 0.0, 8.0), ProjectionKind::Orthographic)
            .with_translation(Vector3::new(1.0, 0.0, 0.0))
            .with_scale(2.0)
            .execute(&solid)
            .unwrap();

        let expected = solid.scaled(2.0).translated(&Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(result.solid, expected);
        assert_relative_eq!(result.solid.centroid(), p(3.0, 2.0, 2.0));
    }

    #[test]
    fn input_solid_is_not_mutated() {
        let solid = Solid::new(p(1.0, 1.0, 1.0), 2.0);
        let before = solid;
        let result = Project::new(p(0.0, 4.0, 8.0), ProjectionKind::Perspective)
            .with_scale(2.0)
            .with_translation(Vector3::new(1.0, 1.0, 1.0))
            .execute(&solid)
            .unwrap();
        assert_eq!(solid, before);
        assert_ne!(result.solid, solid);
    }

    #[test]
    fn transforms_accumulate_when_threaded() {
        let light = p(0.0, 0.0, 8.0);
        let step = Project::new(light, ProjectionKind::Orthographic)
            .with_translation(Vector3::new(1.0, 1.0, 1.0));

        let first = step.execute(&Solid::default()).unwrap();
        let second = step.execute(&first.solid).unwrap();
        assert_relative_eq!(second.solid.bounding_box().min, p(2.0, 2.0, 2.0));
    }

    #[test]
    fn failed_projection_is_recoverable() {
        let solid = Solid::new(p(0.0, 0.0, 1.0), 1.0);
        assert!(Project::new(solid.centroid(), ProjectionKind::Oblique)
            .execute(&solid)
            .is_err());
        let retry = Project::new(p(0.0, 0.0, 8.0), ProjectionKind::Oblique)
            .execute(&solid)
            .unwrap();
        assert!(retry.projected.points().iter().all(|v| v.z == 0.0));
    }
}
