// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mars time and solar geometry.
//!
//! An implementation of the Mars24 analytic model of Allison & McEwen (2000)
//! and Allison (1997): from an Earth timestamp or a Mars Solar Date to Mars
//! orbital position, calendar, local solar time and sun angles.
//!
//! # Pipeline
//!
//! ```text
//! millis ─▶ JD(UTC) ─▶ JD(TT) ─▶ j2000_ott ─┬─▶ orbit    (M, α_FMS, ν−M, Ls, EOT, r, l, b)
//!                                          ├─▶ calendar (MSD, MTC, Mars year)
//!                                          └─▶ solar    (LMST, LTST, subsolar point, Z, azimuth)
//! ```
//!
//! Every function taking a time takes the **J2000 TT offset** in days and is
//! generic over [`Broadcast`], so it accepts a single `f64` or a batch:
//!
//! ```rust
//! use marstime::{j2000_offset_tt, julian, julian_tt, local_true_solar_time, mars_ls};
//!
//! // Spirit landing, 2004-01-04T04:26:31Z, Gusev crater
//! let t = j2000_offset_tt(julian_tt(julian(1_073_137_591_000.0)));
//! assert!((mars_ls(t) - 327.32322).abs() < 1e-4);
//! assert!(local_true_solar_time(184.702, t) < 0.001);
//! ```
//!
//! Use [`j2000_offset_tt_now`] (or [`Time::now`]) for the current instant.
//!
//! # Typed instants
//!
//! [`Time<S>`] wraps a day count on one of the [`TimeScale`] markers
//! ([`TT`], [`J2000`], [`UTC`], [`UnixTime`], [`MSD`]) and converts between
//! them through JD(TT).
//!
//! # Conventions
//!
//! * Longitudes are degrees **west**; latitudes planetographic degrees north.
//! * Angles are degrees unless documented otherwise; times of day are hours.
//! * TT − UTC comes from a leap-second table loaded from data, see
//!   [`leap_seconds`].

mod angle;
mod broadcast;
pub mod calendar;
pub mod conversion;
mod error;
pub(crate) mod instant;
pub mod leap_seconds;
mod mars_ext;
pub mod mars_year;
pub mod orbit;
pub(crate) mod scales;
mod search;
pub mod solar;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{east_to_west, west_to_east, wrap};
pub use broadcast::Broadcast;
pub use calendar::{
    clancy_year, coordinated_mars_time, j2000_from_mars_solar_date,
    j2000_ott_from_mars_solar_date, mars_solar_date,
};
pub use conversion::{
    j2000_epoch, j2000_offset_tt, j2000_offset_tt_now, julian, julian_now, julian_tt,
    julian_tt_now, mills, utc_to_tt_offset, utc_to_tt_offset_with,
};
pub use error::{MarsTimeError, Result};
pub use instant::{Time, TimeScale};
pub use leap_seconds::{LeapSecond, LeapSecondTable};
pub use mars_year::{mars_year, mars_year_with, mars_year_with_length, MarsYear, MarsYearEpoch};
pub use orbit::{
    alpha_perturbs, equation_of_center, equation_of_time, equation_of_time_minutes, fms_angle,
    heliocentric_distance, heliocentric_latitude, heliocentric_longitude, mars_ls,
    mars_mean_anomaly,
};
pub use scales::{UnixTime, J2000, MSD, TT, UTC};
pub use search::TableSearch;
pub use solar::{
    hour_angle, local_mean_solar_time, local_true_solar_time, solar_azimuth, solar_declination,
    solar_elevation, solar_zenith, subsolar_longitude,
};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Day in Terrestrial Time.
pub type JulianDateTT = Time<TT>;

/// Julian Day in UTC.
pub type JulianDateUTC = Time<UTC>;

/// Days since J2000.0 in Terrestrial Time.
pub type J2000Offset = Time<J2000>;

/// Mars Solar Date.
pub type MarsSolarDate = Time<MSD>;
