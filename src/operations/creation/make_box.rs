use crate::math::Point3;
use crate::topology::Solid;

/// Creates a box solid from its minimum corner and edge length.
pub struct MakeBox {
    coordinate: Point3,
    size: f64,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(coordinate: Point3, size: f64) -> Self {
        Self { coordinate, size }
    }

    /// Executes the operation, returning the new box.
    #[must_use]
    pub fn execute(&self) -> Solid {
        Solid::new(self.coordinate, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn box_spans_coordinate_to_coordinate_plus_size() {
        let solid = MakeBox::new(Point3::new(1.0, 1.0, 1.0), 2.0).execute();
        let aabb = solid.bounding_box();
        assert_relative_eq!(aabb.min, Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(aabb.max, Point3::new(3.0, 3.0, 3.0));
        assert_eq!(solid.vertices().len(), 8);
    }
}
