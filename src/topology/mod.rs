pub mod face;
pub mod solid;

pub use face::{Face, CUBOID_FACES, UNIT_CORNERS, VERTEX_COUNT};
pub use solid::Solid;
