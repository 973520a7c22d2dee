// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # TT − UTC leap-second table
//!
//! UTC drifts against Terrestrial Time in whole-second steps. This module
//! keeps the step function as **data**, not code: the table ships as
//! `data/leap_seconds.json` and can be replaced at run time when IERS
//! announces a new leap second.
//!
//! ## Format
//!
//! ```json
//! { "entries": [ { "jd": 2441317.5, "tt_minus_utc": 42.184 }, ... ] }
//! ```
//!
//! `jd` is the UTC Julian Day at which the step takes effect and
//! `tt_minus_utc` is the total offset (`32.184 s + TAI − UTC`) from then on.
//! Entries must be strictly ascending on `jd`.
//!
//! ## Lookup
//!
//! The offset at `x` is that of the last entry with `jd ≤ x`. Keys before
//! the first entry take the first offset; keys after the last take the last.
//!
//! ## Process default
//!
//! [`default_table`] is built once, on first use. If the environment
//! variable `MARSTIME_LEAP_SECONDS` names a readable table it is used;
//! otherwise the compiled-in table is.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::OnceLock;

use log::{debug, warn};
use qtty::Seconds;
use serde::{Deserialize, Serialize};

use crate::error::{MarsTimeError, Result};
use crate::search::{Bracket, TableSearch};

/// Environment variable naming a JSON leap-second table to use instead of
/// the built-in one.
pub const LEAP_SECONDS_ENV: &str = "MARSTIME_LEAP_SECONDS";

// generated by build.rs from data/leap_seconds.json, checked non-empty and ascending
const BUILTIN: &[LeapSecond] = &include!(concat!(env!("OUT_DIR"), "/leap_seconds.rs"));

/// One step of the TT − UTC function.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeapSecond {
    /// UTC Julian Day at which this offset takes effect.
    pub jd: f64,
    /// TT − UTC in seconds from `jd` onwards.
    pub tt_minus_utc: f64,
}

/// Sorted TT − UTC step table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeapSecondTable {
    entries: Vec<LeapSecond>,
    #[serde(skip)]
    keys: Vec<f64>,
}

#[derive(Deserialize)]
struct RawTable {
    entries: Vec<LeapSecond>,
}

impl LeapSecondTable {
    /// Build a table, checking that it is non-empty and strictly ascending.
    pub fn new(entries: Vec<LeapSecond>) -> Result<Self> {
        if entries.is_empty() {
            return Err(MarsTimeError::EmptyTable);
        }
        if let Some(index) = entries
            .windows(2)
            .position(|w| !(w[1].jd > w[0].jd))
            .map(|i| i + 1)
        {
            return Err(MarsTimeError::UnsortedTable { index });
        }
        Ok(Self::from_sorted(entries))
    }

    fn from_sorted(entries: Vec<LeapSecond>) -> Self {
        let keys = entries.iter().map(|e| e.jd).collect();
        Self { entries, keys }
    }

    /// The table compiled into the crate (last step: 2017-01-01, 69.184 s).
    pub fn builtin() -> Self {
        Self::from_sorted(BUILTIN.to_vec())
    }

    /// Parse a table from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawTable = serde_json::from_str(json)?;
        Self::new(raw.entries)
    }

    /// Read and parse a JSON table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Table named by `MARSTIME_LEAP_SECONDS`, falling back to
    /// [`builtin`](Self::builtin) when the variable is unset or unusable.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var_os(LEAP_SECONDS_ENV).as_deref())
    }

    /// Table from `path` if it loads, else the built-in one.
    fn from_override(path: Option<&OsStr>) -> Self {
        let Some(path) = path.map(Path::new) else {
            debug!("using built-in leap-second table");
            return Self::builtin();
        };
        match Self::from_path(path) {
            Ok(table) => {
                debug!(
                    "loaded {} leap-second entries from {}",
                    table.len(),
                    path.display()
                );
                table
            }
            Err(e) => {
                warn!(
                    "cannot use leap-second table {}: {e}; falling back to built-in table",
                    path.display()
                );
                Self::builtin()
            }
        }
    }

    /// The steps, ascending.
    #[inline]
    pub fn entries(&self) -> &[LeapSecond] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: construction rejects empty tables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialise back to the JSON configuration format.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// **TT − UTC** at a UTC Julian Day.
    pub fn tt_minus_utc(&self, jd_utc: f64, search: TableSearch) -> Seconds {
        let entry = match search.bracket(&self.keys, jd_utc) {
            Bracket::Before => &self.entries[0],
            Bracket::Within(i) => &self.entries[i],
            Bracket::After => &self.entries[self.entries.len() - 1],
        };
        Seconds::new(entry.tt_minus_utc)
    }
}

impl Default for LeapSecondTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'de> Deserialize<'de> for LeapSecondTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawTable::deserialize(deserializer)?;
        Self::new(raw.entries).map_err(serde::de::Error::custom)
    }
}

/// The process-wide table used by the free conversion functions.
///
/// Initialised once from [`LeapSecondTable::from_env`] and immutable after.
pub fn default_table() -> &'static LeapSecondTable {
    static TABLE: OnceLock<LeapSecondTable> = OnceLock::new();
    TABLE.get_or_init(LeapSecondTable::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn step(jd: f64, tt_minus_utc: f64) -> LeapSecond {
        LeapSecond { jd, tt_minus_utc }
    }

    #[test]
    fn builtin_parses() {
        let table = LeapSecondTable::builtin();
        assert_eq!(table.len(), 29);
        assert_eq!(table.entries()[1], step(2_441_317.5, 42.184));
        assert_eq!(table.entries().last().map(|e| e.tt_minus_utc), Some(69.184));
    }

    #[test]
    fn j2000_is_64_184() {
        let table = LeapSecondTable::builtin();
        let dt = table.tt_minus_utc(2_451_545.0, TableSearch::Bisect);
        assert!((dt - Seconds::new(64.184)).abs() < Seconds::new(1e-3));
    }

    #[test]
    fn before_table_uses_first_step() {
        let table = LeapSecondTable::builtin();
        assert_eq!(table.tt_minus_utc(-10.0, TableSearch::Linear), Seconds::new(0.0));
        assert_eq!(table.tt_minus_utc(0.0, TableSearch::Bisect), Seconds::new(0.0));
    }

    #[test]
    fn after_table_uses_last_step() {
        let table = LeapSecondTable::builtin();
        let dt = table.tt_minus_utc(2_470_000.0, TableSearch::Linear);
        assert_eq!(dt, Seconds::new(69.184));
    }

    #[test]
    fn step_takes_effect_on_its_day() {
        let table = LeapSecondTable::builtin();
        for search in [TableSearch::Linear, TableSearch::Bisect] {
            assert_eq!(table.tt_minus_utc(2_453_736.4, search), Seconds::new(64.184));
            assert_eq!(table.tt_minus_utc(2_453_736.5, search), Seconds::new(65.184));
        }
    }

    #[test]
    fn strategies_agree_over_the_table() {
        let table = LeapSecondTable::builtin();
        let mut jd = 2_440_000.0;
        while jd < 2_460_000.0 {
            let a = table.tt_minus_utc(jd, TableSearch::Linear);
            let b = table.tt_minus_utc(jd, TableSearch::Bisect);
            assert!((a - b).abs() < Seconds::new(1e-3), "disagreement at JD {jd}");
            jd += 17.25;
        }
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            LeapSecondTable::new(Vec::new()),
            Err(MarsTimeError::EmptyTable)
        ));
    }

    #[test]
    fn rejects_unsorted() {
        let err = LeapSecondTable::new(vec![step(10.0, 1.0), step(5.0, 2.0)]).unwrap_err();
        assert!(matches!(err, MarsTimeError::UnsortedTable { index: 1 }));
    }

    #[test]
    fn json_roundtrip_keeps_entries() {
        let table = LeapSecondTable::builtin();
        let json = table.to_json_string().unwrap();
        let back = LeapSecondTable::from_json_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn extended_table_from_json() {
        let json = r#"{ "entries": [
            { "jd": 0.0, "tt_minus_utc": 0.0 },
            { "jd": 2441317.5, "tt_minus_utc": 42.184 },
            { "jd": 2470000.5, "tt_minus_utc": 70.184 }
        ] }"#;
        let table = LeapSecondTable::from_json_str(json).unwrap();
        let dt = table.tt_minus_utc(2_480_000.0, TableSearch::Bisect);
        assert_eq!(dt, Seconds::new(70.184));
    }

    #[test]
    fn deserialize_validates() {
        let json = r#"{ "entries": [] }"#;
        assert!(serde_json::from_str::<LeapSecondTable>(json).is_err());
    }

    #[test]
    fn builtin_matches_data_file() {
        let parsed =
            LeapSecondTable::from_json_str(include_str!("../data/leap_seconds.json")).unwrap();
        assert_eq!(parsed, LeapSecondTable::builtin());
    }

    #[test]
    fn override_file_replaces_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "entries": [ {{ "jd": 0.0, "tt_minus_utc": 0.0 }},
                              {{ "jd": 2470000.5, "tt_minus_utc": 70.184 }} ] }}"#
        )
        .unwrap();

        let table = LeapSecondTable::from_path(file.path()).unwrap();
        assert_eq!(table.len(), 2);

        let table = LeapSecondTable::from_override(Some(file.path().as_os_str()));
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.tt_minus_utc(2_480_000.0, TableSearch::Bisect),
            Seconds::new(70.184)
        );
    }

    #[test]
    fn unusable_override_falls_back_to_builtin() {
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(
            bad,
            r#"{{ "entries": [ {{ "jd": 5.0, "tt_minus_utc": 1.0 }},
                              {{ "jd": 1.0, "tt_minus_utc": 2.0 }} ] }}"#
        )
        .unwrap();
        assert!(matches!(
            LeapSecondTable::from_path(bad.path()),
            Err(MarsTimeError::UnsortedTable { index: 1 })
        ));

        let builtin = LeapSecondTable::builtin();
        assert_eq!(LeapSecondTable::from_override(Some(bad.path().as_os_str())), builtin);
        let missing = OsStr::new("/nonexistent/leap_seconds.json");
        assert_eq!(LeapSecondTable::from_override(Some(missing)), builtin);
        assert_eq!(LeapSecondTable::from_override(None), builtin);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = LeapSecondTable::from_path("/nonexistent/leap_seconds.json").unwrap_err();
        assert!(matches!(err, MarsTimeError::Io(_)));
    }
}
