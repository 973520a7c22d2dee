// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Typed instants.
//!
//! [`Time<S>`] is a day count whose epoch and clock are fixed by the marker
//! `S: TimeScale`. Every scale knows how to reach JD(TT) and back, so any
//! instant converts to any other scale through that one axis.
//!
//! The free functions of this crate work on raw `f64` J2000 TT offsets; the
//! typed layer exists so callers cannot mix a UTC Julian Day with a TT one:
//!
//! ```rust
//! use marstime::{Time, J2000, UTC};
//!
//! let utc = Time::<UTC>::from_unix_millis(947_116_800_000.0);
//! let t: Time<J2000> = utc.to::<J2000>();
//! assert!((t.value() - 4.50074).abs() < 1e-3);
//! ```

use chrono::{DateTime, Utc};
use qtty::Days;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::marker::PhantomData;

use crate::conversion::{julian, MILLIS_PER_DAY};
use crate::scales::{UnixTime, UTC};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// A clock and epoch for [`Time`] values.
///
/// Implementors map their own day count to an absolute Julian Day in
/// Terrestrial Time and back. Epoch counters (TT, J2000) differ from JD(TT)
/// by a constant; UTC counters add the step from
/// [`default_table`](crate::leap_seconds::default_table); MSD rescales to
/// sols.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix used when displaying a [`Time`].
    const LABEL: &'static str;

    /// Day count on this scale → JD(TT).
    fn to_jd_tt(value: Days) -> Days;

    /// JD(TT) → day count on this scale.
    fn from_jd_tt(jd_tt: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// An instant on time scale `S`, stored as a single [`Days`] value.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Instant at `value` days on scale `S`.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    /// Instant from milliseconds since the Unix epoch (UTC), the same input
    /// as [`julian`].
    pub fn from_unix_millis(millis: f64) -> Self {
        Time::<UTC>::new(julian(millis)).to::<S>()
    }

    /// The current instant, read from the system clock.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// Day count on scale `S`.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Julian Day in Terrestrial Time.
    #[inline]
    pub fn jd_tt(&self) -> f64 {
        S::to_jd_tt(self.quantity).value()
    }

    /// The same instant on scale `T`, via JD(TT).
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::from_days(T::from_jd_tt(S::to_jd_tt(self.quantity)))
    }

    /// Milliseconds since the Unix epoch, the inverse of
    /// [`from_unix_millis`](Self::from_unix_millis).
    pub fn unix_millis(&self) -> f64 {
        self.to::<UnixTime>().value() * MILLIS_PER_DAY
    }

    /// Calendar UTC timestamp, rounded to the millisecond.
    ///
    /// `None` for non-finite instants and those outside chrono's range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let millis = self.unix_millis();
        if !millis.is_finite() {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(millis.round() as i64)
    }

    /// Instant from a calendar UTC timestamp, to microsecond resolution.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self::from_unix_millis(datetime.timestamp_micros() as f64 / 1_000.0)
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::{J2000, TT};

    #[test]
    fn creation_and_accessors() {
        let t = Time::<TT>::new(2_451_545.0);
        assert_eq!(t.quantity(), Days::new(2_451_545.0));
        assert_eq!(t.value(), 2_451_545.0);
        assert_eq!(t.jd_tt(), 2_451_545.0);
        assert_eq!(Time::<J2000>::new(100.0).jd_tt(), 2_451_645.0);
    }

    #[test]
    fn from_unix_millis_matches_pipeline() {
        let t = Time::<J2000>::from_unix_millis(947_116_800_000.0);
        assert!((t.value() - 4.500_742_870).abs() < 1e-8);
    }

    #[test]
    fn unix_millis_roundtrip() {
        let t = Time::<J2000>::from_unix_millis(1_073_137_591_000.0);
        assert!((t.unix_millis() - 1_073_137_591_000.0).abs() < 1.0);
    }

    #[test]
    fn utc_roundtrip_through_chrono() {
        let datetime = DateTime::from_timestamp(1_073_137_591, 0).unwrap();
        let t = Time::<J2000>::from_utc(datetime);
        assert!((t.value() - 1463.07471).abs() < 1e-5);
        let back = t.to_utc().expect("to_utc");
        let delta_ms = back.timestamp_millis() - datetime.timestamp_millis();
        assert!(delta_ms.abs() <= 1, "delta = {delta_ms} ms");
    }

    #[test]
    fn non_finite_has_no_utc() {
        assert!(Time::<TT>::new(f64::NAN).to_utc().is_none());
    }

    #[test]
    fn now_is_after_2012() {
        assert!(Time::<UTC>::now().value() > 2_456_203.0);
    }

    #[test]
    fn display_uses_label() {
        let s = Time::<J2000>::new(1.5).to_string();
        assert!(s.starts_with("J2000"), "{s}");
    }

    #[test]
    fn serde_as_plain_number() {
        let t = Time::<J2000>::new(4.5);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "4.5");
        let back: Time<J2000> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
