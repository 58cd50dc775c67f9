use super::{Point3, Vector3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Computes the bounding box of a set of points.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Self::from_point(*first), |aabb, p| aabb.including(p)),
        )
    }

    /// A zero-volume box around a single point.
    #[must_use]
    pub fn from_point(point: Point3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Returns the smallest box containing both `self` and `point`.
    #[must_use]
    pub fn including(self, point: &Point3) -> Self {
        Self {
            min: self.min.inf(point),
            max: self.max.sup(point),
        }
    }

    /// Midpoint of the box, `(min + max) / 2` per axis.
    #[must_use]
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Edge lengths of the box along x, y and z.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }
}
