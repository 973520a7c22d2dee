// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Mars orbital elements
//!
//! Analytic orbit of Mars after Allison & McEwen (2000), *Planet. Space Sci.*
//! 48, 215–235. All inputs are J2000 TT offsets in days (see
//! [`conversion`](crate::conversion)); all angles are returned in degrees.
//!
//! Periodic terms take their arguments in degrees and convert them to
//! radians explicitly. Every `mod 360` is a floor-mod into `[0, 360)`.

use std::f64::consts::PI;

use crate::angle::wrap;
use crate::broadcast::Broadcast;

/// Planetary perturbation terms `(A, τ, φ)`: amplitude (deg), period
/// (Julian years), phase (deg).
#[rustfmt::skip]
const PERTURBATIONS: [(f64, f64, f64); 7] = [
    (0.0071,  2.2353,  49.409),
    (0.0057,  2.7543, 168.173),
    (0.0039,  1.1177, 191.837),
    (0.0037, 15.7866,  21.736),
    (0.0021,  2.1354,  15.704),
    (0.0020,  2.4694,  95.528),
    (0.0018, 32.8493,  49.095),
];

/// Mars mean anomaly **M**, degrees in `[0, 360)`.
pub fn mars_mean_anomaly<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| wrap(19.3870 + 0.524_020_75 * t, 360.0))
}

/// Right ascension of the Fictional Mean Sun **α_FMS**, degrees in `[0, 360)`.
pub fn fms_angle<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| wrap(270.3863 + 0.524_038_40 * t, 360.0))
}

/// Sum of the planetary perturbations to the FMS angle, degrees (not wrapped).
pub fn alpha_perturbs<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| {
        PERTURBATIONS
            .iter()
            .map(|&(a, tau, phi)| a * ((0.985_626 * t / tau + phi) * PI / 180.0).cos())
            .sum()
    })
}

/// Equation of center **ν − M**: true minus mean anomaly, degrees.
pub fn equation_of_center<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| {
        let m = mars_mean_anomaly(t) * PI / 180.0;
        (10.691 + 3.0e-7 * t) * m.sin()
            + 0.6230 * (2.0 * m).sin()
            + 0.0500 * (3.0 * m).sin()
            + 0.0050 * (4.0 * m).sin()
            + 0.0005 * (5.0 * m).sin()
            + alpha_perturbs(t)
    })
}

/// Areocentric solar longitude **Ls**, degrees in `[0, 360)`.
///
/// Ls = 0 is the northern spring equinox, 90 northern summer solstice,
/// 180 autumn equinox, 270 winter solstice.
pub fn mars_ls<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| wrap(fms_angle(t) + equation_of_center(t), 360.0))
}

/// Equation of time, degrees: true minus mean solar time as an angle.
///
/// Multiply by `24/360` for hours or use [`equation_of_time_minutes`].
pub fn equation_of_time<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| {
        let ls = mars_ls(t) * PI / 180.0;
        2.861 * (2.0 * ls).sin() - 0.071 * (4.0 * ls).sin() + 0.002 * (6.0 * ls).sin()
            - equation_of_center(t)
    })
}

/// Equation of time in minutes of Mars time (`EOT × 60 / 15`).
pub fn equation_of_time_minutes<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| equation_of_time(t) * 60.0 / 15.0)
}

/// Sun–Mars distance in AU.
pub fn heliocentric_distance<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| {
        let m = mars_mean_anomaly(t) * PI / 180.0;
        1.523_679
            * (1.00436
                - 0.09309 * m.cos()
                - 0.004_336 * (2.0 * m).cos()
                - 0.00031 * (3.0 * m).cos()
                - 0.00003 * (4.0 * m).cos())
    })
}

/// Heliocentric ecliptic longitude of Mars, degrees in `[0, 360)`.
///
/// Not the same angle as Ls: the two differ by the longitude of the
/// vernal equinox of Mars on the ecliptic.
pub fn heliocentric_longitude<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| {
        let ls = mars_ls(t);
        let im = ls + 85.061 - 0.015 * ((71.0 + 2.0 * ls) * PI / 180.0).sin() - 5.5e-6 * t;
        wrap(im, 360.0)
    })
}

/// Heliocentric ecliptic latitude of Mars, degrees.
pub fn heliocentric_latitude<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| {
        let ls = mars_ls(t);
        -(1.8497 - 2.23e-5 * t) * ((ls - 144.50 + 2.57e-6 * t) * PI / 180.0).sin()
    })
}
