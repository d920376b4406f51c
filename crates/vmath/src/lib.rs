//! Small, fixed-size linear algebra for graphics, games and simulations.
//!
//! The crate provides:
//!
//! - [`Vector`]s with 2, 3 or 4 elements ([`Vec2f`], [`Vec3i`], ...).
//! - Square, column-major [`Matrix`] types ([`Mat2f`], [`Mat3f`], [`Mat4f`]) with determinants,
//!   inverses and the usual 3D transform and projection constructors.
//! - [`Quat`]ernions for rotations, including conversion from and to rotation matrices.
//! - Axis-aligned rectangles ([`Rectf`], [`Recti`]).
//! - A [`MatStack4`] for hierarchical transforms.
//! - Scalar helpers for angles, wrapping and epsilon-relative float comparison ([`equal`]).
//!
//! # Conventions
//!
//! - Matrices are stored column by column, and indexed as `mat[(row, col)]`. Vectors are column
//!   vectors, so `mat * vec` transforms `vec` and `a * b` applies `b` first.
//! - Translations live in the last column of a 4x4 matrix.
//! - All angles are in radians.
//! - Operations that can fail on degenerate input (inverting a singular matrix, normalizing a
//!   zero vector) return a fallback value instead of panicking, and log the event at `trace`
//!   level through the [`log`] crate.
//!
//! Element types are abstracted by the traits in this crate ([`Number`], [`Float`], ...), which
//! are implemented for the built-in signed integers and floats.
//!
//! [`log`]: https://docs.rs/log

#[macro_use]
pub mod approx;
mod matrix;
mod quat;
mod rect;
mod scalar;
mod stack;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use rect::*;
pub use scalar::*;
pub use stack::*;
pub use traits::*;
pub use vector::*;

#[cfg(test)]
pub(crate) fn test_log() {
    env_logger::builder()
        .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Trace)
        .is_test(true)
        .try_init()
        .ok();
}
