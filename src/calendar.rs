// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Mars calendar
//!
//! * **MSD**: Mars Solar Date, a running count of sols analogous to the
//!   Julian Day; MSD 0 is 1873-12-29.
//! * **MTC**: Coordinated Mars Time, mean solar time at the prime meridian,
//!   in hours.
//! * **Clancy year**: Mars year numbered from the Ls = 0 of 1955-04-11
//!   (Clancy et al. 2000) with a fixed mean year length.
//!
//! The table-based Mars year lives in [`mars_year`](crate::mars_year); the
//! two numbering schemes are deliberately separate and can disagree near
//! year boundaries.

use crate::angle::wrap;
use crate::broadcast::Broadcast;
use crate::conversion::{j2000_epoch, julian_tt};

/// Length of the Mars solar day in Earth days.
pub const SOL_DAYS: f64 = 1.027_491_252;

/// Mean length of the Mars tropical year in Earth days (Clancy scheme).
pub const CLANCY_YEAR_DAYS: f64 = 686.978;

/// J2000 TT offset of Ls = 0 in 1955 (Mars year 1, 1955-04-11 ~11h).
pub const CLANCY_EPOCH_J2000: f64 = -16_336.0416;

/// MSD at the J2000 offset `4.5` days.
const MSD_AT_J2000_PLUS_4_5: f64 = 44_796.0;

/// Empirical MSD alignment correction, sols.
const MSD_CORRECTION: f64 = 0.00096;

/// Mars Solar Date from a J2000 TT offset.
pub fn mars_solar_date<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| (t - 4.5) / SOL_DAYS + MSD_AT_J2000_PLUS_4_5 - MSD_CORRECTION)
}

/// J2000 offset from a Mars Solar Date.
///
/// Exact inverse of [`mars_solar_date`]. The result is treated as a
/// UTC-equivalent offset; use [`j2000_ott_from_mars_solar_date`] to put it
/// back on the TT axis.
pub fn j2000_from_mars_solar_date<T: Broadcast>(msd: T) -> T {
    msd.map_each(|m| (m + MSD_CORRECTION - MSD_AT_J2000_PLUS_4_5) * SOL_DAYS + 4.5)
}

/// J2000 TT offset from a Mars Solar Date.
///
/// Reads the inverse of [`mars_solar_date`] as a UTC offset and runs it
/// through the UTC → TT conversion, adding TT − UTC for that date.
pub fn j2000_ott_from_mars_solar_date<T: Broadcast>(msd: T) -> T {
    msd.map_each(|m| {
        let jd_utc = j2000_from_mars_solar_date(m) + j2000_epoch();
        julian_tt(jd_utc) - j2000_epoch()
    })
}

/// Coordinated Mars Time: mean solar time at Airy-0, hours in `[0, 24)`.
pub fn coordinated_mars_time<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| wrap(24.0 * mars_solar_date(t), 24.0))
}

/// Mars year after Clancy et al. (2000): `⌊1 + (t − t₁₉₅₅) / 686.978⌋`.
pub fn clancy_year<T: Broadcast>(j2000_ott: T) -> T {
    j2000_ott.map_each(|t| (1.0 + (t - CLANCY_EPOCH_J2000) / CLANCY_YEAR_DAYS).floor())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn msd_inverse() {
        assert!(close(j2000_from_mars_solar_date(44_795.99904), 4.5, 1e-2));
        assert!(close(j2000_from_mars_solar_date(0.0), -46_022.997, 1e-3));
    }

    #[test]
    fn msd_roundtrip() {
        for msd in [0.0, 44_795.99904, 52_000.25] {
            let back = mars_solar_date(j2000_from_mars_solar_date(msd));
            assert!(close(back, msd, 1e-2), "MSD {msd} came back as {back}");
        }
    }

    #[test]
    fn msd_to_tt_offset() {
        assert!(close(j2000_ott_from_mars_solar_date(0.0), -46_022.997, 1e-3));
        assert!(close(j2000_ott_from_mars_solar_date(1000.0), -44_995.505, 1e-3));
        let msd = mars_solar_date(0.0);
        assert!(close(j2000_ott_from_mars_solar_date(msd), 0.000_742_8, 1e-5));
    }

    #[test]
    fn mtc_advances_one_hour_per_mars_hour() {
        assert!(close(coordinated_mars_time(0.0), 14.8665, 2e-4));
        assert!(close(coordinated_mars_time(3698.9685 / 86_400.0), 15.8665, 2e-4));
        assert!(close(coordinated_mars_time(88_775.244 / 86_400.0), 14.8665, 2e-4));
    }

    #[test]
    fn clancy_years() {
        assert_eq!(clancy_year(0.0), 24.0);
        assert_eq!(clancy_year(-16_335.0), 1.0);
        assert_eq!(clancy_year(-16_200.0), 1.0);
        assert_eq!(clancy_year(-16_500.0), 0.0);
    }
}
