use crate::topology::Solid;

/// Scales a solid uniformly about its own centroid.
pub struct Scale {
    factor: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Executes the scaling, returning the resized solid.
    ///
    /// The pivot is the centroid of `solid` as it is now, so scaling after a
    /// translation pivots about the translated centroid.
    #[must_use]
    pub fn execute(&self, solid: &Solid) -> Solid {
        solid.scaled(self.factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use approx::assert_relative_eq;

    #[test]
    fn uniform_scale_doubles_size() {
        let solid = Solid::new(Point3::new(1.0, 1.0, 1.0), 2.0);
        let scaled = Scale::new(2.0).execute(&solid);

        let aabb = scaled.bounding_box();
        assert_relative_eq!(aabb.extents(), Vector3::repeat(4.0));
        assert_relative_eq!(aabb.min, Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(scaled.centroid(), solid.centroid());
    }
}
