// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Mars year numbering from tabulated epochs
//!
//! Mars years are numbered from the northern spring equinox (Ls = 0) of
//! 1955-04-11, Mars year 1. Each year starts at a zero crossing of
//! [`mars_ls`](crate::mars_ls); those crossings were located numerically
//! for years 1–79 and are tabulated here, together with each year's length.
//!
//! Unlike [`clancy_year`](crate::clancy_year), which assumes a constant mean
//! year, this table tracks the actual crossings, so the two schemes can
//! disagree for a few days around each new year.
//!
//! Outside the tabulated span the count is extrapolated with the first (or
//! last) year's length, counting from 1 at that entry's start. Past the last
//! entry the numbering therefore restarts at 1 instead of continuing at 80.

use qtty::Days;

use crate::broadcast::Broadcast;
use crate::search::{Bracket, TableSearch};

/// Number of tabulated Mars years.
const YEARS: usize = 79;

/// Start of one Mars year.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarsYearEpoch {
    /// J2000 TT offset of Ls = 0, days.
    pub start: f64,
    /// Mars year number.
    pub year: i64,
    /// Days until the next Ls = 0.
    pub length: Days,
}

impl MarsYearEpoch {
    const fn new(start: f64, year: i64, length: f64) -> Self {
        Self {
            start,
            year,
            length: Days::new(length),
        }
    }
}

/// A Mars year number together with the length of that year.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarsYear {
    pub number: i64,
    pub length: Days,
}

/// Tabulated Ls = 0 crossings for Mars years 1–79 (1955–2103).
#[rustfmt::skip]
pub const MARS_YEAR_EPOCHS: [MarsYearEpoch; YEARS] = [
    MarsYearEpoch::new(-16336.044076, 1, 686.95252),
    MarsYearEpoch::new(-15649.093471, 2, 686.950605),
    MarsYearEpoch::new(-14962.0892946, 3, 687.0041764),
    MarsYearEpoch::new(-14275.0960023, 4, 686.9932923),
    MarsYearEpoch::new(-13588.1458658, 5, 686.9501365),
    MarsYearEpoch::new(-12901.1772635, 6, 686.9686023),
    MarsYearEpoch::new(-12214.2082215, 7, 686.969042),
    MarsYearEpoch::new(-11527.2637345, 8, 686.944487),
    MarsYearEpoch::new(-10840.2842249, 9, 686.9795096),
    MarsYearEpoch::new(-10153.2828749, 10, 687.00135),
    MarsYearEpoch::new(-9466.3114025, 11, 686.9714724),
    MarsYearEpoch::new(-8779.3356111, 12, 686.9757914),
    MarsYearEpoch::new(-8092.3607738, 13, 686.9748373),
    MarsYearEpoch::new(-7405.4236452, 14, 686.9371286),
    MarsYearEpoch::new(-6718.4615347, 15, 686.9621105),
    MarsYearEpoch::new(-6031.4574604, 16, 687.0040743),
    MarsYearEpoch::new(-5344.4876509, 17, 686.9698095),
    MarsYearEpoch::new(-4657.5318339, 18, 686.955817),
    MarsYearEpoch::new(-3970.5474528, 19, 686.9843811),
    MarsYearEpoch::new(-3283.5848372, 20, 686.9626156),
    MarsYearEpoch::new(-2596.6329362, 21, 686.951901),
    MarsYearEpoch::new(-1909.6426682, 22, 686.990268),
    MarsYearEpoch::new(-1222.6617049, 23, 686.9809633),
    MarsYearEpoch::new(-535.7040268, 24, 686.9576781),
    MarsYearEpoch::new(151.2736522, 25, 686.977679),
    MarsYearEpoch::new(838.2369682, 26, 686.963316),
    MarsYearEpoch::new(1525.1834712, 27, 686.946503),
    MarsYearEpoch::new(2212.1799182, 28, 686.996447),
    MarsYearEpoch::new(2899.1848518, 29, 687.0049336),
    MarsYearEpoch::new(3586.1403058, 30, 686.955454),
    MarsYearEpoch::new(4273.1024234, 31, 686.9621176),
    MarsYearEpoch::new(4960.0765368, 32, 686.9741134),
    MarsYearEpoch::new(5647.0207838, 33, 686.944247),
    MarsYearEpoch::new(6333.986502, 34, 686.9657182),
    MarsYearEpoch::new(7020.9875066, 35, 687.0010046),
    MarsYearEpoch::new(7707.9629132, 36, 686.9754066),
    MarsYearEpoch::new(8394.9318782, 37, 686.968965),
    MarsYearEpoch::new(9081.9102062, 38, 686.978328),
    MarsYearEpoch::new(9768.8526533, 39, 686.9424471),
    MarsYearEpoch::new(10455.8028354, 40, 686.9501821),
    MarsYearEpoch::new(11142.8050514, 41, 687.002216),
    MarsYearEpoch::new(11829.7873254, 42, 686.982274),
    MarsYearEpoch::new(12516.7417734, 43, 686.954448),
    MarsYearEpoch::new(13203.725449, 44, 686.9836756),
    MarsYearEpoch::new(13890.6991502, 45, 686.9737012),
    MarsYearEpoch::new(14577.6484912, 46, 686.949341),
    MarsYearEpoch::new(15264.6324865, 47, 686.9839953),
    MarsYearEpoch::new(15951.6217969, 48, 686.9893104),
    MarsYearEpoch::new(16638.5798914, 49, 686.9580945),
    MarsYearEpoch::new(17325.5517216, 50, 686.9718302),
    MarsYearEpoch::new(18012.5209097, 51, 686.9691881),
    MarsYearEpoch::new(18699.4628887, 52, 686.941979),
    MarsYearEpoch::new(19386.4443201, 53, 686.9814314),
    MarsYearEpoch::new(20073.4534421, 54, 687.009122),
    MarsYearEpoch::new(20760.4152811, 55, 686.961839),
    MarsYearEpoch::new(21447.3696661, 56, 686.954385),
    MarsYearEpoch::new(22134.3466251, 57, 686.976959),
    MarsYearEpoch::new(22821.2966642, 58, 686.9500391),
    MarsYearEpoch::new(23508.2529432, 59, 686.956279),
    MarsYearEpoch::new(24195.2539572, 60, 687.001014),
    MarsYearEpoch::new(24882.2400506, 61, 686.9860934),
    MarsYearEpoch::new(25569.2081296, 62, 686.968079),
    MarsYearEpoch::new(26256.1902459, 63, 686.9821163),
    MarsYearEpoch::new(26943.1429481, 64, 686.9527022),
    MarsYearEpoch::new(27630.0847446, 65, 686.9417965),
    MarsYearEpoch::new(28317.0793316, 66, 686.994587),
    MarsYearEpoch::new(29004.0710936, 67, 686.991762),
    MarsYearEpoch::new(29691.0238241, 68, 686.9527305),
    MarsYearEpoch::new(30377.9991486, 69, 686.9753245),
    MarsYearEpoch::new(31064.9784277, 70, 686.9792791),
    MarsYearEpoch::new(31751.9249377, 71, 686.94651),
    MarsYearEpoch::new(32438.896907, 72, 686.9719693),
    MarsYearEpoch::new(33125.8902412, 73, 686.9933342),
    MarsYearEpoch::new(33812.8520242, 74, 686.961783),
    MarsYearEpoch::new(34499.8183442, 75, 686.96632),
    MarsYearEpoch::new(35186.7944595, 76, 686.9761153),
    MarsYearEpoch::new(35873.740573, 77, 686.9461135),
    MarsYearEpoch::new(36560.7112423, 78, 686.9706693),
    MarsYearEpoch::new(37247.7247318, 79, 687.0134895),
];

const STARTS: [f64; YEARS] = {
    let mut out = [0.0; YEARS];
    let mut i = 0;
    while i < YEARS {
        out[i] = MARS_YEAR_EPOCHS[i].start;
        i += 1;
    }
    out
};

/// Year number (as `f64`) and length in days at `t`. NaN in, NaN out.
fn locate(t: f64, search: TableSearch) -> (f64, f64) {
    let extrapolate = |epoch: &MarsYearEpoch| {
        let length = epoch.length.value();
        (1.0 + ((t - epoch.start) / length).floor(), length)
    };
    match search.bracket(&STARTS, t) {
        Bracket::Before => extrapolate(&MARS_YEAR_EPOCHS[0]),
        Bracket::After => extrapolate(&MARS_YEAR_EPOCHS[YEARS - 1]),
        Bracket::Within(i) => {
            let epoch = &MARS_YEAR_EPOCHS[i];
            (epoch.year as f64, epoch.length.value())
        }
    }
}

/// Mars year containing the J2000 TT offset `t`.
pub fn mars_year<T: Broadcast>(j2000_ott: T) -> T {
    mars_year_with(TableSearch::default(), j2000_ott)
}

/// [`mars_year`] with an explicit search strategy.
pub fn mars_year_with<T: Broadcast>(search: TableSearch, j2000_ott: T) -> T {
    j2000_ott.map_each(|t| locate(t, search).0)
}

/// Mars year and its length at `t`, or `None` if `t` is not finite.
pub fn mars_year_with_length(search: TableSearch, j2000_ott: f64) -> Option<MarsYear> {
    if !j2000_ott.is_finite() {
        return None;
    }
    let (number, length) = locate(j2000_ott, search);
    Some(MarsYear {
        number: number as i64,
        length: Days::new(length),
    })
}
