// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mars quantities as methods on typed instants.
//!
//! Every method converts the instant to a J2000 TT offset and calls the
//! matching free function, so `t.solar_longitude()` on any scale equals
//! `mars_ls(t.j2000_ott())`.

use qtty::Days;

use super::instant::{Time, TimeScale};
use super::scales::{J2000, TT};
use crate::error::Result;
use crate::mars_year::{mars_year_with_length, MarsYear};
use crate::search::TableSearch;
use crate::{calendar, orbit, solar};

impl Time<TT> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Mars sol expressed in Earth days.
    pub const SOL: Days = Days::new(calendar::SOL_DAYS);
}

impl<S: TimeScale> Time<S> {
    /// Days since J2000.0 in Terrestrial Time.
    #[inline]
    pub fn j2000_ott(&self) -> f64 {
        self.to::<J2000>().value()
    }

    /// Mars Solar Date.
    #[inline]
    pub fn mars_solar_date(&self) -> f64 {
        calendar::mars_solar_date(self.j2000_ott())
    }

    /// Coordinated Mars Time, hours.
    #[inline]
    pub fn coordinated_mars_time(&self) -> f64 {
        calendar::coordinated_mars_time(self.j2000_ott())
    }

    /// Areocentric solar longitude Ls, degrees.
    #[inline]
    pub fn solar_longitude(&self) -> f64 {
        orbit::mars_ls(self.j2000_ott())
    }

    /// Table-based Mars year and its length.
    pub fn mars_year(&self) -> Option<MarsYear> {
        mars_year_with_length(TableSearch::default(), self.j2000_ott())
    }

    /// Local True Solar Time at a west longitude, hours.
    #[inline]
    pub fn local_true_solar_time(&self, longitude: f64) -> f64 {
        solar::local_true_solar_time(longitude, self.j2000_ott())
    }

    /// Solar elevation at a site, degrees.
    pub fn solar_elevation(&self, longitude: f64, latitude: f64) -> Result<f64> {
        solar::solar_elevation(longitude, latitude, self.j2000_ott())
    }
}
