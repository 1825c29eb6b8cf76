mod matrix;
mod vector;

pub use matrix::Matrix4;
pub use vector::{Vector2, Vector3, Vector4};

const EPS: f32 = 1e-6;
