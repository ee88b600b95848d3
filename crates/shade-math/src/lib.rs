//! Small-dimension vectors, matrices and quaternions modeled after shading languages.
//!
//! `shade-math` provides the numeric model of a GPU shading language on the CPU: vectors with 1
//! to 4 components, column-major matrices from 2x2 to 4x4, quaternions, and the bit-exact codecs
//! used to move such values through buffers and over the wire (half floats, normalized integer
//! packing).
//!
//! # Overview
//!
//! - [`Vector`], [`Matrix`] and [`Quat`] are plain value types. They are generic over their
//!   element type (any [`Scalar`]: `f32`, `f64`, 8 to 64-bit integers, `bool`) and over a
//!   storage [`Qualifier`][storage::Qualifier] choosing between a packed and a register-aligned
//!   layout (see the [`storage`] module).
//! - Operations are only available for element kinds where they make sense. Bitwise operators
//!   don't exist on float vectors, trigonometry doesn't exist on integer vectors; misuse is a
//!   compile error.
//! - The [`codec`] module contains the wire-format relevant conversions. Any two conforming
//!   implementations produce identical packed bits for identical inputs.
//! - [`transform`] and [`projection`] build the usual camera and model matrices on top of the
//!   kernel.
//!
//! # Failure Model
//!
//! Nothing in this crate returns errors. Out-of-range indices panic (like slices do), and
//! numerically degenerate input (inverting a singular matrix, dividing by zero) produces the
//! IEEE-754 special values `inf` and `NaN`, which propagate to the result. Checking for
//! singularity is up to the caller. Where a meaningful answer exists for degenerate input (the
//! rotation between two opposite vectors, normalizing a zero quaternion), it is returned instead.
//!
//! # Equality
//!
//! `==` compares floats exactly, so a vector containing `NaN` never equals anything. Approximate
//! comparisons are separate, explicitly named operations: [`Vector::approx_equal`] and the
//! [`approx`] module.

pub mod approx;
pub mod codec;
mod matrix;
pub mod projection;
mod quat;
pub mod storage;
mod traits;
pub mod transform;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
