// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Scalar / array polymorphism.
//!
//! Every quantity in this crate is defined per element. [`Broadcast`] lets a
//! single function body accept either one value or a whole batch:
//!
//! ```rust
//! use marstime::mars_ls;
//!
//! let one: f64 = mars_ls(0.0);
//! let many: Vec<f64> = mars_ls(vec![0.0, 1000.0]);
//! assert_eq!(one, many[0]);
//! ```
//!
//! With the `ndarray` feature enabled, `ndarray::Array<f64, D>` of any
//! dimension is supported as well.

/// A container of `f64` that can be mapped element-wise, preserving shape.
pub trait Broadcast: Sized {
    /// Apply `f` to every element.
    fn map_each<F: Fn(f64) -> f64>(self, f: F) -> Self;
}

impl Broadcast for f64 {
    #[inline]
    fn map_each<F: Fn(f64) -> f64>(self, f: F) -> Self {
        f(self)
    }
}

impl Broadcast for Vec<f64> {
    #[inline]
    fn map_each<F: Fn(f64) -> f64>(mut self, f: F) -> Self {
        for v in self.iter_mut() {
            *v = f(*v);
        }
        self
    }
}

impl<const N: usize> Broadcast for [f64; N] {
    #[inline]
    fn map_each<F: Fn(f64) -> f64>(self, f: F) -> Self {
        std::array::from_fn(|i| f(self[i]))
    }
}

#[cfg(feature = "ndarray")]
impl<D: ndarray::Dimension> Broadcast for ndarray::Array<f64, D> {
    #[inline]
    fn map_each<F: Fn(f64) -> f64>(self, f: F) -> Self {
        self.mapv_into(f)
    }
}
