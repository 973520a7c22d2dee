// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bracketing a value in a sorted breakpoint list.
//!
//! Both lookup tables in this crate (leap seconds and Mars-year epochs) are
//! step functions: the value at `x` belongs to the last breakpoint that does
//! not exceed `x`. Two interchangeable strategies are provided so that the
//! plain control-flow scan and the vectorisable bisection can be checked
//! against each other.

/// How a table locates the bucket for a key.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum TableSearch {
    /// Walk the breakpoints in order. O(n), branch-per-entry.
    Linear,
    /// Binary search via [`slice::partition_point`]. O(log n).
    #[default]
    Bisect,
}

/// Where a key falls relative to a breakpoint list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Bracket {
    /// Strictly before the first breakpoint.
    Before,
    /// In bucket `i`, i.e. `keys[i] <= x < keys[i + 1]`.
    Within(usize),
    /// At or after the last breakpoint.
    After,
}

impl TableSearch {
    /// Locate `x` among ascending `keys` (non-empty).
    ///
    /// A NaN `x` lands in [`Bracket::Before`] with either strategy.
    pub(crate) fn bracket(self, keys: &[f64], x: f64) -> Bracket {
        let n = keys.len();
        debug_assert!(n > 0);
        if x.is_nan() || x < keys[0] {
            return Bracket::Before;
        }
        if x >= keys[n - 1] {
            return Bracket::After;
        }
        match self {
            TableSearch::Linear => {
                let mut i = 0;
                while i + 1 < n && keys[i + 1] <= x {
                    i += 1;
                }
                Bracket::Within(i)
            }
            TableSearch::Bisect => {
                // insertion point minus one, clipped to a valid bucket
                let idx = keys.partition_point(|&k| k <= x);
                Bracket::Within(idx.clamp(1, n) - 1)
            }
        }
    }
}
