//! Fixed-size `f32` vectors and a 4x4 matrix for graphics and simulation code.
//!
//! All types are plain `Copy` values with a `#[repr(C)]` layout, so they can be
//! handed to the GPU through [`bytemuck`] without conversion.

pub mod metric;
pub mod types;

pub use metric::{distance, length, Metric};
pub use types::{Matrix4, Vector2, Vector3, Vector4};
