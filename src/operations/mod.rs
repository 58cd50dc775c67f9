pub mod creation;
pub mod project;
pub mod transform;

pub use creation::MakeBox;
pub use project::{Project, Projection};
pub use transform::{Scale, Translate};
