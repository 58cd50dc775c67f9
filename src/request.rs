//! A complete projection job, either typed or as raw form text.

use tracing::debug;

use crate::error::{InputError, Result};
use crate::input::{parse_point3, parse_scalar, parse_vector3};
use crate::math::{Point3, Vector3};
use crate::operations::{MakeBox, Project, Projection};
use crate::projection::ProjectionKind;

/// Text fields of a projection form, exactly as a user typed them.
///
/// Blank `translation` or `scale_factor` fields mean "no transform".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionForm {
    pub coordinate: String,
    pub size: String,
    pub light: String,
    pub kind: String,
    pub translation: String,
    pub scale_factor: String,
}

impl Default for ProjectionForm {
    fn default() -> Self {
        Self {
            coordinate: "0, 0, 1".into(),
            size: "1".into(),
            light: "0, 0, 8".into(),
            kind: ProjectionKind::Orthographic.name().into(),
            translation: "0, 0, 0".into(),
            scale_factor: "1".into(),
        }
    }
}

/// A typed projection job: build a box, transform it, project it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionRequest {
    /// Minimum corner of the box.
    pub coordinate: Point3,
    /// Edge length of the box.
    pub size: f64,
    /// Light or eye position.
    pub light: Point3,
    pub kind: ProjectionKind,
    pub translation: Option<Vector3>,
    pub scale_factor: Option<f64>,
}

impl Default for ProjectionRequest {
    fn default() -> Self {
        Self {
            coordinate: Point3::new(0.0, 0.0, 1.0),
            size: 1.0,
            light: Point3::new(0.0, 0.0, 8.0),
            kind: ProjectionKind::Orthographic,
            translation: None,
            scale_factor: None,
        }
    }
}

impl ProjectionRequest {
    /// Parses every field of `form`.
    ///
    /// Fails on the first malformed field; nothing is built until all fields
    /// have parsed.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidInput`] for malformed numbers or wrong
    /// arity, and [`InputError::UnknownProjectionKind`] for an unrecognized
    /// kind.
    pub fn from_form(form: &ProjectionForm) -> std::result::Result<Self, InputError> {
        let request = Self {
            coordinate: parse_point3("coordinate", &form.coordinate)?,
            size: parse_scalar("size", &form.size)?,
            light: parse_point3("light", &form.light)?,
            kind: form.kind.parse()?,
            translation: optional(&form.translation, |text| {
                parse_vector3("translation", text)
            })?,
            scale_factor: optional(&form.scale_factor, |text| {
                parse_scalar("scale_factor", text)
            })?,
        };
        debug!(?request, "parsed projection form");
        Ok(request)
    }

    /// Builds the box and runs the projection pipeline.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if the projection is degenerate.
    pub fn run(&self) -> Result<Projection> {
        let solid = MakeBox::new(self.coordinate, self.size).execute();

        let mut project = Project::new(self.light, self.kind);
        if let Some(factor) = self.scale_factor {
            project = project.with_scale(factor);
        }
        if let Some(translation) = self.translation {
            project = project.with_translation(translation);
        }
        project.execute(&solid)
    }
}

fn optional<T>(
    text: &str,
    parse: impl FnOnce(&str) -> std::result::Result<T, InputError>,
) -> std::result::Result<Option<T>, InputError> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        parse(text).map(Some)
    }
}
