//! A stack of 4x4 transform matrices.

use std::{error::Error, fmt};

use crate::{Float, Mat4};

/// Error returned by [`MatStack4::pop`] when only the base matrix is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackUnderflow;

impl fmt::Display for StackUnderflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot pop last element from matrix stack")
    }
}

impl Error for StackUnderflow {}

/// A stack of [`Mat4`] transforms, as used when walking a scene hierarchy.
///
/// The stack is never empty. It starts out holding a single identity matrix, and all operations
/// apply to the top element.
///
/// # Examples
///
/// ```
/// # use vmath::*;
/// let mut stack = MatStack4::<f32>::new();
/// stack.mul_right(Mat4f::from_translation(vec3(1.0, 0.0, 0.0)));
///
/// stack.push();
/// stack.mul_right(Mat4f::from_scaling(vec3(2.0, 2.0, 2.0)));
/// assert_eq!(stack.top().transform_point(vec3(1.0, 1.0, 1.0)), vec3(3.0, 2.0, 2.0));
///
/// stack.pop().unwrap();
/// assert_eq!(stack.top().transform_point(vec3(1.0, 1.0, 1.0)), vec3(2.0, 1.0, 1.0));
/// assert_eq!(stack.pop(), Err(StackUnderflow));
/// ```
#[derive(Debug, Clone)]
pub struct MatStack4<T> {
    stack: Vec<Mat4<T>>,
}

impl<T: Float> MatStack4<T> {
    /// Creates a stack holding a single identity matrix.
    pub fn new() -> Self {
        Self {
            stack: vec![Mat4::IDENTITY],
        }
    }

    /// Returns the number of matrices on the stack. This is always at least 1.
    pub fn size(&self) -> usize {
        self.stack.len()
    }

    /// Pushes a copy of the current top matrix.
    pub fn push(&mut self) {
        let top = self.top();
        self.stack.push(top);
    }

    /// Removes the top matrix.
    ///
    /// Fails and leaves the stack untouched if the top matrix is the only one left.
    pub fn pop(&mut self) -> Result<(), StackUnderflow> {
        if self.stack.len() <= 1 {
            log::debug!("refusing to pop the base matrix");
            return Err(StackUnderflow);
        }
        self.stack.pop();
        Ok(())
    }

    pub fn top(&self) -> Mat4<T> {
        self.stack[self.stack.len() - 1]
    }

    fn top_mut(&mut self) -> &mut Mat4<T> {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Replaces the top matrix.
    pub fn set(&mut self, mat: Mat4<T>) {
        *self.top_mut() = mat;
    }

    /// Replaces the top matrix with the identity.
    pub fn set_identity(&mut self) {
        self.set(Mat4::IDENTITY);
    }

    /// Post-multiplies the top matrix: `top = top * mat`.
    ///
    /// `mat` is applied to points *before* the existing transform.
    pub fn mul_right(&mut self, mat: Mat4<T>) {
        let top = self.top_mut();
        *top = *top * mat;
    }

    /// Pre-multiplies the top matrix: `top = mat * top`.
    pub fn mul_left(&mut self, mat: Mat4<T>) {
        let top = self.top_mut();
        *top = mat * *top;
    }
}

impl<T: Float> Default for MatStack4<T> {
    fn default() -> Self {
        Self::new()
    }
}
