/// spin3d Core Library - Shared transform pipeline for the demo frontends
///
/// This library provides the stateless math the demos are built on: the
/// orthographic projection, per-object pose composition, the per-draw
/// matrix pipeline (including the inverse-transpose normal matrix), the
/// planar spin transforms, and the static demo geometry.

pub mod geometry;
pub mod planar;
pub mod pose;
pub mod projection;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Mesh, Triangle, Vertex};
pub use pose::{pointer_rotation, Pose};
pub use projection::Frustum;
pub use scene::{Placement, SceneState};
pub use transform::{normal_matrix, transform_set, LightingMode, TransformSet};
