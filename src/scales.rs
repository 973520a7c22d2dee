// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a specific time scale and encodes how
//! values in that scale relate to the canonical **Julian Date in TT**.
//!
//! | Marker | Quantity | Relation to JD(TT) |
//! |--------|----------|--------------------|
//! | [`TT`] | Julian Day, Terrestrial Time | identity |
//! | [`J2000`] | days since J2000.0, TT | `+ 2 451 545.0` |
//! | [`UTC`] | Julian Day, UTC | `+ (TT − UTC)` leap-second step |
//! | [`UnixTime`] | days since 1970-01-01, UTC | Unix epoch, then as [`UTC`] |
//! | [`MSD`] | Mars Solar Date, sols | inverse of the MSD formula |

use qtty::Days;

use super::instant::TimeScale;
use crate::calendar::{j2000_from_mars_solar_date, mars_solar_date};
use crate::conversion::{tt_minus_utc_days, J2000_EPOCH_JD, UNIX_EPOCH_JD};
use crate::leap_seconds::default_table;

// ---------------------------------------------------------------------------
// Terrestrial Time counters
// ---------------------------------------------------------------------------

/// Terrestrial Time Julian Day, the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "JD(TT)";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Days since J2000.0 in Terrestrial Time: the `j2000_ott` of the free
/// functions.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct J2000;

const J2000_EPOCH: Days = Days::new(J2000_EPOCH_JD);

impl TimeScale for J2000 {
    const LABEL: &'static str = "J2000";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value + J2000_EPOCH
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt - J2000_EPOCH
    }
}

// ---------------------------------------------------------------------------
// UTC-based counters
// ---------------------------------------------------------------------------

/// Coordinated Universal Time Julian Day.
///
/// The conversion to JD(TT) adds the TT − UTC step of the process-default
/// leap-second table; the inverse uses a three-iteration fixed-point solver,
/// which is exact away from the instant of a step.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UTC;

impl TimeScale for UTC {
    const LABEL: &'static str = "JD(UTC)";

    #[inline]
    fn to_jd_tt(value: Days) -> Days {
        let dt = tt_minus_utc_days(default_table(), value.value());
        value + Days::new(dt)
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        let table = default_table();
        let mut utc = jd_tt;
        for _ in 0..3 {
            utc = jd_tt - Days::new(tt_minus_utc_days(table, utc.value()));
        }
        utc
    }
}

/// Unix Time: days since 1970-01-01T00:00:00 UTC.
///
/// Like POSIX time, this counter ignores leap seconds; they enter only when
/// converting to TT.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

const UNIX_EPOCH: Days = Days::new(UNIX_EPOCH_JD);

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix";

    #[inline]
    fn to_jd_tt(value: Days) -> Days {
        UTC::to_jd_tt(value + UNIX_EPOCH)
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        UTC::from_jd_tt(jd_tt) - UNIX_EPOCH
    }
}

// ---------------------------------------------------------------------------
// Mars counters
// ---------------------------------------------------------------------------

/// Mars Solar Date: sols since 1873-12-29.
///
/// The MSD formula is applied directly to the TT axis, so conversion in both
/// directions is exact. This differs from
/// [`j2000_ott_from_mars_solar_date`](crate::j2000_ott_from_mars_solar_date),
/// which reads the inverse as a UTC offset.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MSD;

impl TimeScale for MSD {
    const LABEL: &'static str = "MSD";

    #[inline]
    fn to_jd_tt(value: Days) -> Days {
        Days::new(j2000_from_mars_solar_date(value.value())) + J2000_EPOCH
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        Days::new(mars_solar_date((jd_tt - J2000_EPOCH).value()))
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(TT, J2000, UTC, UnixTime, MSD);

#[cfg(test)]
mod tests {
    use super::super::instant::Time;
    use super::*;
    use qtty::{Day, Second, Seconds};

    #[test]
    fn j2000_epoch_is_zero() {
        let tt = Time::<TT>::new(2_451_545.0);
        assert_eq!(tt.to::<J2000>().value(), 0.0);
        let t: Time<J2000> = Time::<TT>::new(2_451_645.0).into();
        assert_eq!(t.value(), 100.0);
    }

    #[test]
    fn utc_to_tt_adds_leap_seconds() {
        let utc = Time::<UTC>::new(2_451_545.0);
        let tt: Time<TT> = utc.to::<TT>();
        let offset = (tt.quantity() - utc.quantity()).to::<Second>();
        assert!((offset - Seconds::new(64.184)).abs() < Seconds::new(1e-6));
    }

    #[test]
    fn utc_roundtrip() {
        let tt = Time::<TT>::new(2_453_008.074_71);
        let utc: Time<UTC> = tt.to::<UTC>();
        let back: Time<TT> = utc.to::<TT>();
        assert!((back.quantity() - tt.quantity()).abs() < Days::new(1e-9));
    }

    #[test]
    fn unix_epoch() {
        let unix_zero = Time::<UnixTime>::new(0.0);
        let tt: Time<TT> = unix_zero.to::<TT>();
        // no leap-second step before 1972
        assert!((tt.quantity() - Days::new(2_440_587.5)).abs() < Days::new(1e-12));
    }

    #[test]
    fn unix_after_leap_seconds() {
        // 2000-01-06T00:00:00Z
        let unix = Time::<UnixTime>::new(947_116_800.0 / 86_400.0);
        let t: Time<J2000> = unix.into();
        let expected = Days::new(4.5) + Seconds::new(64.184).to::<Day>();
        assert!((t.quantity() - expected).abs() < Days::new(1e-9));
    }

    #[test]
    fn msd_is_exact_inverse() {
        let t = Time::<J2000>::new(1463.074_71);
        let msd: Time<MSD> = t.to::<MSD>();
        assert!((msd.value() - mars_solar_date(1463.074_71)).abs() < 1e-9);
        let back: Time<J2000> = msd.into();
        assert!((back.value() - t.value()).abs() < 1e-6);
    }

    #[test]
    fn msd_epoch_alignment() {
        // MSD 44795.99904 sits 4.5 TT days after J2000.0
        let t: Time<J2000> = Time::<MSD>::new(44_795.999_04).to::<J2000>();
        assert!((t.value() - 4.5).abs() < 1e-6);
    }
}
