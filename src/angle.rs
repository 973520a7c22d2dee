// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angle wrapping and the longitude convention.
//!
//! Mars24 quotes site positions in **west** longitude. Everything in this
//! crate that takes a longitude expects degrees west; use [`east_to_west`]
//! to convert from the east-positive convention.

use crate::broadcast::Broadcast;

/// Floor-modulo for a positive `modulus`, always in `[0, modulus)`.
///
/// Unlike `%`, negative inputs wrap to the positive range. Unlike a bare
/// `rem_euclid`, a tiny negative input that rounds up to `modulus` folds
/// back to `0.0`.
#[inline]
pub fn wrap(value: f64, modulus: f64) -> f64 {
    let r = value.rem_euclid(modulus);
    if r >= modulus {
        0.0
    } else {
        r
    }
}

/// Convert west longitude to east longitude (degrees), in `[0, 360)`.
///
/// The map `x ↦ (360 − x) mod 360` is its own inverse.
pub fn west_to_east<T: Broadcast>(west: T) -> T {
    west.map_each(|w| wrap(360.0 - w, 360.0))
}

/// Convert east longitude to west longitude (degrees), in `[0, 360)`.
pub fn east_to_west<T: Broadcast>(east: T) -> T {
    west_to_east(east)
}
