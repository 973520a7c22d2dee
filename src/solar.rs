// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Local solar time and sun position
//!
//! Site coordinates follow the Mars24 convention:
//!
//! * `longitude`: degrees **west** of the prime meridian (see
//!   [`east_to_west`](crate::east_to_west));
//! * `latitude`: planetographic degrees north, in `[−90, 90]`.
//!
//! Times are hours in `[0, 24)`; angles are degrees unless stated otherwise.
//! [`hour_angle`] is the one quantity returned in radians.
//!
//! The site is a single point: `longitude` and `latitude` are plain `f64`
//! and only the time argument broadcasts. Evaluate several sites by calling
//! once per site:
//!
//! ```rust
//! use marstime::local_true_solar_time;
//!
//! let sols = [1463.0, 1463.5, 1464.0];
//! let gusev: [f64; 3] = local_true_solar_time(184.702, sols);
//! let meridiani: [f64; 3] = local_true_solar_time(5.53, sols);
//! assert!(gusev.iter().zip(&meridiani).all(|(a, b)| a != b));
//! ```
//!
//! Only the latitude is validated, and only against the `±90` bounds; NaN
//! passes through. Geometry that has no answer (e.g. an azimuth at a pole)
//! comes back as NaN or infinity.

use std::f64::consts::PI;

use crate::angle::wrap;
use crate::broadcast::Broadcast;
use crate::calendar::coordinated_mars_time;
use crate::error::{MarsTimeError, Result};
use crate::orbit::{equation_of_time, mars_ls};

/// Local Mean Solar Time at a west longitude, hours.
pub fn local_mean_solar_time<T: Broadcast>(longitude: f64, j2000_ott: T) -> T {
    j2000_ott.map_each(|t| wrap(coordinated_mars_time(t) - longitude * (24.0 / 360.0), 24.0))
}

/// Local True Solar Time at a west longitude, hours.
///
/// Mean solar time corrected by the equation of time, i.e. the time read by
/// a sundial.
pub fn local_true_solar_time<T: Broadcast>(longitude: f64, j2000_ott: T) -> T {
    j2000_ott.map_each(|t| {
        let eot = equation_of_time(t);
        let lmst = local_mean_solar_time(longitude, t);
        wrap(lmst + eot * (24.0 / 360.0), 24.0)
    })
}

/// West longitude of the point with the Sun at zenith, degrees in `[0, 360)`.
pub fn subsolar_longitude<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| {
        let mtc = coordinated_mars_time(t);
        let eot = equation_of_time(t) * 24.0 / 360.0;
        wrap((mtc + eot) * (360.0 / 24.0) + 180.0, 360.0)
    })
}

/// Planetographic solar declination for a solar longitude `ls` (degrees).
pub fn solar_declination<T: Broadcast>(ls: T) -> T {
    ls.map_each(|ls| {
        let ls = ls * PI / 180.0;
        let dec = (0.42565 * ls.sin()).asin() + 0.25 * (PI / 180.0) * ls.sin();
        dec * 180.0 / PI
    })
}

/// Hour angle of the Sun at a west longitude, **radians**.
///
/// Site longitude minus subsolar longitude; not wrapped.
pub fn hour_angle<T: Broadcast>(longitude: f64, j2000_ott: T) -> T {
    j2000_ott.map_each(|t| longitude * PI / 180.0 - subsolar_longitude(t) * PI / 180.0)
}

/// Solar zenith angle, degrees in `[0, 180]`.
///
/// # Errors
///
/// [`MarsTimeError::InvalidArgument`] if `latitude` is above 90 or below
/// −90. A NaN latitude is not rejected and gives a NaN zenith.
pub fn solar_zenith<T: Broadcast>(longitude: f64, latitude: f64, j2000_ott: T) -> Result<T> {
    let phi = checked_latitude(latitude)? * PI / 180.0;
    Ok(j2000_ott.map_each(|t| {
        let ha = hour_angle(longitude, t);
        let dec = declination_radians(t);
        let cos_z = dec.sin() * phi.sin() + dec.cos() * phi.cos() * ha.cos();
        // rounding can push |cos Z| a hair past 1 at the subsolar point
        cos_z.clamp(-1.0, 1.0).acos() * 180.0 / PI
    }))
}

/// Solar elevation above the horizontal, degrees: `90 − zenith`.
///
/// # Errors
///
/// Same as [`solar_zenith`].
pub fn solar_elevation<T: Broadcast>(longitude: f64, latitude: f64, j2000_ott: T) -> Result<T> {
    Ok(solar_zenith(longitude, latitude, j2000_ott)?.map_each(|z| 90.0 - z))
}

/// Solar azimuth, degrees clockwise from north in `[0, 360)`.
///
/// The latitude is not range-checked here; at the poles the result is
/// undefined and may be NaN.
pub fn solar_azimuth<T: Broadcast>(longitude: f64, latitude: f64, j2000_ott: T) -> T {
    let phi = latitude * PI / 180.0;
    j2000_ott.map_each(|t| {
        let ha = hour_angle(longitude, t);
        let dec = declination_radians(t);
        let denom = phi.cos() * dec.tan() - phi.sin() * ha.cos();
        let num = ha.sin();
        wrap(360.0 + num.atan2(denom) * 180.0 / PI, 360.0)
    })
}

#[inline]
fn declination_radians(j2000_ott: f64) -> f64 {
    solar_declination(mars_ls(j2000_ott)) * PI / 180.0
}

// not a range check: NaN must get through
#[allow(clippy::manual_range_contains)]
fn checked_latitude(latitude: f64) -> Result<f64> {
    if latitude > 90.0 || latitude < -90.0 {
        return Err(MarsTimeError::latitude(latitude));
    }
    Ok(latitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ls ≈ 0 and Ls ≈ 90 respectively.
    const EQUINOX: f64 = 151.2737;
    const SOLSTICE: f64 = 349.8778;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn lmst_is_one_hour_per_15_degrees() {
        let d = local_mean_solar_time(0.0, 0.0) - local_mean_solar_time(15.0, 0.0);
        assert!(close(d, 1.0, 1e-2));
    }

    #[test]
    fn ltst_is_one_hour_per_15_degrees() {
        let d = local_true_solar_time(0.0, 0.0) - local_true_solar_time(15.0, 0.0);
        assert!(close(d, 1.0, 1e-2));
    }

    #[test]
    fn subsolar_moves_west_one_hour_per_mars_hour() {
        let d = subsolar_longitude(0.0) - subsolar_longitude(3698.9685 / 86_400.0);
        assert!(close(d, -14.99, 1e-2));
    }

    #[test]
    fn declination_follows_season() {
        assert!(close(solar_declination(0.0), 0.0, 1e-3));
        assert!(close(solar_declination(90.0), 25.441, 1e-3));
        assert!(close(solar_declination(180.0), 0.0, 1e-3));
        assert!(close(solar_declination(270.0), -25.441, 1e-3));
    }

    #[test]
    fn hour_angle_tracks_longitude() {
        assert!(close(hour_angle(0.0, 0.0), -0.67287, 1e-4));
        let d = (hour_angle(15.0, 0.0) - hour_angle(0.0, 0.0)) * 180.0 / PI;
        assert!(close(d, 15.0, 1e-3));
    }

    #[test]
    fn zenith_at_subsolar_point() {
        let x = subsolar_longitude(EQUINOX);
        assert!(close(x, 114.113, 1e-3));
        assert!(close(solar_zenith(x, 0.0, EQUINOX).unwrap(), 0.0, 1e-4));
        assert!(close(solar_zenith(x, 15.0, EQUINOX).unwrap(), 15.0, 1e-4));
        assert!(close(solar_zenith(x + 15.0, 0.0, EQUINOX).unwrap(), 15.0, 1e-4));
    }

    #[test]
    fn elevation_complements_zenith() {
        let x = subsolar_longitude(EQUINOX);
        let z = solar_zenith(x, 45.0, EQUINOX).unwrap();
        let e = solar_elevation(x, 45.0, EQUINOX).unwrap();
        assert!(close(e, 90.0 - z, 1e-12));
    }

    #[test]
    fn solstice_noon_on_equator() {
        let x = subsolar_longitude(SOLSTICE);
        assert!(close(x, 232.7006, 1e-3));
        assert!(close(solar_zenith(x, 0.0, SOLSTICE).unwrap(), 25.441, 1e-3));
        assert!(close(solar_elevation(x, 0.0, SOLSTICE).unwrap(), 64.5581, 1e-4));
    }

    #[test]
    fn latitude_out_of_bounds() {
        for lat in [100.0, -100.0, 90.000_001, f64::INFINITY] {
            let err = solar_zenith(0.0, lat, 0.0).unwrap_err();
            assert!(matches!(err, MarsTimeError::InvalidArgument { .. }));
            assert!(solar_elevation(0.0, lat, 0.0).is_err());
        }
        assert!(solar_zenith(0.0, 90.0, 0.0).is_ok());
        assert!(solar_zenith(0.0, -90.0, 0.0).is_ok());
    }

    #[test]
    fn nan_latitude_is_not_rejected() {
        let z = solar_zenith(0.0, f64::NAN, 0.0).unwrap();
        assert!(z.is_nan());
        assert!(solar_elevation(0.0, f64::NAN, 0.0).unwrap().is_nan());
    }

    #[test]
    fn azimuth_quadrants() {
        let x = subsolar_longitude(EQUINOX);
        assert!(close(solar_azimuth(x + 10.0, 0.0, EQUINOX), 90.0, 1e-3));
        assert!(close(solar_azimuth(x - 10.0, 0.0, EQUINOX), 270.0, 1e-3));
        assert!(close(solar_azimuth(x, 45.0, EQUINOX), 180.0, 1e-3));
        assert!(close(solar_azimuth(x, -45.0, EQUINOX), 0.0, 1e-3));
    }

    #[test]
    fn zenith_over_a_batch_of_times() {
        let ts = vec![EQUINOX, EQUINOX + 0.25, EQUINOX + 0.5];
        let z = solar_zenith(0.0, 0.0, ts.clone()).unwrap();
        for (i, &t) in ts.iter().enumerate() {
            assert_eq!(z[i], solar_zenith(0.0, 0.0, t).unwrap());
        }
    }
}
