/// Reusable shape helpers for the scene.
pub mod primitives;
/// Drawing surface abstraction and in-memory surfaces.
pub mod surface;
