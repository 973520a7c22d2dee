// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Earth time → J2000 TT offset
//!
//! The canonical pipeline that feeds every Mars quantity:
//!
//! ```text
//! millis ─julian─▶ JD(UTC) ─julian_tt─▶ JD(TT) ─j2000_offset_tt─▶ j2000_ott
//! ```
//!
//! `j2000_ott` (days since JD 2451545.0 in Terrestrial Time) is the time
//! argument of every function in [`orbit`](crate::orbit),
//! [`calendar`](crate::calendar) and [`solar`](crate::solar).
//!
//! The `*_now` variants read the wall clock once and run the same pipeline;
//! they are the explicit form of "no time given, use the current time".
//!
//! ```rust
//! use marstime::{julian, julian_tt, j2000_offset_tt};
//!
//! // 2000-01-06T00:00:00Z
//! let j2000_ott = j2000_offset_tt(julian_tt(julian(947_116_800_000.0)));
//! assert!((j2000_ott - 4.50074).abs() < 1e-3);
//! ```

use chrono::Utc;
use qtty::{Day, Seconds};

use crate::broadcast::Broadcast;
use crate::leap_seconds::{default_table, LeapSecondTable};
use crate::search::TableSearch;

/// JD of the J2000.0 epoch, 2000-01-01T12:00:00 TT.
pub const J2000_EPOCH_JD: f64 = 2_451_545.0;

/// JD of the Unix epoch, 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Milliseconds per day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// The J2000 epoch as a Julian Day.
#[inline]
pub const fn j2000_epoch() -> f64 {
    J2000_EPOCH_JD
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn mills() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000.0
}

/// UTC Julian Day from milliseconds since the Unix epoch.
pub fn julian<T: Broadcast>(millis: T) -> T {
    millis.map_each(|m| UNIX_EPOCH_JD + m / MILLIS_PER_DAY)
}

/// **TT − UTC** in seconds at a UTC Julian Day, from the process-default
/// leap-second table.
pub fn utc_to_tt_offset<T: Broadcast>(jd_utc: T) -> T {
    utc_to_tt_offset_with(default_table(), TableSearch::default(), jd_utc)
}

/// [`utc_to_tt_offset`] against an explicit table and search strategy.
pub fn utc_to_tt_offset_with<T: Broadcast>(
    table: &LeapSecondTable,
    search: TableSearch,
    jd_utc: T,
) -> T {
    jd_utc.map_each(|jd| table.tt_minus_utc(jd, search).value())
}

/// TT Julian Day from a UTC Julian Day.
pub fn julian_tt<T: Broadcast>(jd_utc: T) -> T {
    let table = default_table();
    jd_utc.map_each(|jd| jd + tt_minus_utc_days(table, jd))
}

/// Days since J2000.0 from a TT Julian Day.
pub fn j2000_offset_tt<T: Broadcast>(jd_tt: T) -> T {
    jd_tt.map_each(|jd| jd - J2000_EPOCH_JD)
}

/// UTC Julian Day of the current instant.
pub fn julian_now() -> f64 {
    julian(mills())
}

/// TT Julian Day of the current instant.
pub fn julian_tt_now() -> f64 {
    julian_tt(julian_now())
}

/// J2000 TT offset of the current instant.
pub fn j2000_offset_tt_now() -> f64 {
    j2000_offset_tt(julian_tt_now())
}

#[inline]
pub(crate) fn tt_minus_utc_days(table: &LeapSecondTable, jd_utc: f64) -> f64 {
    let dt: Seconds = table.tt_minus_utc(jd_utc, TableSearch::default());
    dt.to::<Day>().value()
}
