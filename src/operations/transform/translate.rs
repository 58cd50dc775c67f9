use crate::math::Vector3;
use crate::topology::Solid;

/// Translates a solid by a displacement vector.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Executes the translation, returning the moved solid.
    ///
    /// The input is left untouched.
    #[must_use]
    pub fn execute(&self, solid: &Solid) -> Solid {
        solid.translated(&self.displacement)
    }
}
