//! Core compute primitives (Vector, Matrix).
//!
//! Row-major `f32` storage; reductions accumulate in `f64`.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
