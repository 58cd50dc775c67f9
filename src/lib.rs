pub mod error;
pub mod input;
pub mod math;
pub mod operations;
pub mod projection;
pub mod request;
pub mod topology;

pub use error::{Result, ShadowcastError};
pub use operations::{Project, Projection};
pub use projection::{ProjectedVertices, ProjectionKind};
pub use request::{ProjectionForm, ProjectionRequest};
pub use topology::Solid;
