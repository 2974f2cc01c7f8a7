// Optional extension modules, decoupled from core Entity/Scene.
// Games opt in by creating these systems alongside their scene.

pub mod interp;
pub mod transform;

pub use interp::{lerp, lerp_vec3};
pub use transform::{LocalTransform, TransformGraph};
