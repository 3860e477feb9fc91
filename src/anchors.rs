// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed reference instants and calendar geometry.
//!
//! Every conversion in the crate is measured from one of the anchors defined
//! here. They are compiled-in constants: changing any of them changes the
//! meaning of every previously computed CGT or SWET value, so it is a
//! breaking change and never a patch.
//!
//! # Instant anchors
//!
//! | Anchor | UTC instant | Unix seconds |
//! |--------|-------------|--------------|
//! | [`EpochMode::Current`] | 1998-12-03T07:00:00Z | 912 668 400 |
//! | [`EpochMode::Legacy`] | 1998-12-03T00:00:00Z | 912 643 200 |
//! | SWET zero | 1977-05-25T00:00:00Z | 233 366 400 |
//!
//! # Year anchors
//!
//! Secondary calendars are year-only. Each one is pinned to the real-world
//! year of its year zero, derived from its distance to the Battle of Yavin
//! (placed at 1977, the same year as the SWET anchor).
//!
//! | System | Year zero | Real-world year |
//! |--------|-----------|-----------------|
//! | Battle of Yavin | 0 BBY | 1977 |
//! | Great ReSynchronization | 35 BBY | 1942 |
//! | Ruusan Reformation | 1 000 BBY | 977 |
//! | Lothal Years | 3 277 BBY | −1 300 |
//! | Treaty of Coruscant | 3 653 BBY | −1 676 |
//! | Galactic Standard Calendar | 25 043 BBY | −23 066 |
//! | Tho Yor Arrival | 36 453 BBY | −34 476 |

use crate::error::{Result, TimeError};
use chrono::{DateTime, TimeDelta, Utc};
use qtty::{Day, Days, Seconds};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Calendar geometry
// ---------------------------------------------------------------------------

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
/// CGT has no leap years.
pub const DAYS_PER_CGT_YEAR: i64 = 365;
pub const SECONDS_PER_CGT_YEAR: i64 = DAYS_PER_CGT_YEAR * SECONDS_PER_DAY;

/// One CGT year expressed in days.
pub const CGT_YEAR: Days = Days::new(365.0);

/// One CGT day expressed in seconds.
pub const CGT_DAY: Seconds = Seconds::new(86_400.0);

// ---------------------------------------------------------------------------
// Instant anchors
// ---------------------------------------------------------------------------

/// Unix seconds of CGT year 0, day 1, 00:00:00 in [`EpochMode::Current`].
pub const CGT_EPOCH_CURRENT_UNIX: i64 = 912_668_400;

/// Unix seconds of CGT year 0, day 1, 00:00:00 in [`EpochMode::Legacy`].
pub const CGT_EPOCH_LEGACY_UNIX: i64 = 912_643_200;

/// Unix seconds of SWET 0 (1977-05-25T00:00:00Z).
pub const SWET_ANCHOR_UNIX: i64 = 233_366_400;

/// UTC instant of SWET 0.
#[inline]
pub fn swet_anchor() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(SWET_ANCHOR_UNIX)
}

/// Build an instant from whole Unix seconds.
pub(crate) fn instant_from_unix(unix_seconds: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(unix_seconds, 0).ok_or_else(|| {
        tracing::debug!(unix_seconds, "instant outside the representable range");
        TimeError::OutOfRange
    })
}

/// Which fixed instant defines CGT year 0, day 1, 00:00:00.
///
/// The two modes differ by exactly 25 200 s: the current anchor is the
/// legacy anchor plus seven hours.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EpochMode {
    /// Anchored at 1998-12-03T07:00:00Z.
    #[default]
    Current,
    /// Anchored at 1998-12-03T00:00:00Z.
    Legacy,
}

impl EpochMode {
    pub const ALL: [EpochMode; 2] = [EpochMode::Current, EpochMode::Legacy];

    /// Unix seconds of this mode's CGT epoch.
    #[inline]
    pub const fn anchor_unix(self) -> i64 {
        match self {
            EpochMode::Current => CGT_EPOCH_CURRENT_UNIX,
            EpochMode::Legacy => CGT_EPOCH_LEGACY_UNIX,
        }
    }

    /// UTC instant of this mode's CGT epoch.
    #[inline]
    pub fn anchor(self) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(self.anchor_unix())
    }

    /// Name used on the wire and in [`FromStr`].
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            EpochMode::Current => "current",
            EpochMode::Legacy => "legacy",
        }
    }

    /// Whole seconds from this mode's anchor to `other`'s anchor.
    #[inline]
    pub const fn offset_seconds_to(self, other: EpochMode) -> i64 {
        other.anchor_unix() - self.anchor_unix()
    }

    /// [`offset_seconds_to`](Self::offset_seconds_to) as a typed quantity.
    #[inline]
    pub fn offset_to(self, other: EpochMode) -> Seconds {
        Seconds::new(self.offset_seconds_to(other) as f64)
    }

    /// Anchor offset from the Unix epoch, in days.
    #[inline]
    pub fn anchor_days(self) -> Days {
        Seconds::new(self.anchor_unix() as f64).to::<Day>()
    }
}

impl fmt::Display for EpochMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EpochMode {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        EpochMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                tracing::debug!(mode = s, "rejected epoch mode");
                TimeError::UnknownEpochMode(s.to_owned())
            })
    }
}

// ---------------------------------------------------------------------------
// Year anchors
// ---------------------------------------------------------------------------

/// Whether a calendar's year zero is numbered 0 or 1 on its "after" side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum YearIndexing {
    /// The anchor year is year 0 of the after side.
    ZeroBased,
    /// The anchor year is year 1 of the after side.
    OneBased,
}

/// Static description of a year-only secondary calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SecondaryCalendarAnchor {
    /// Canonical system name.
    pub name: &'static str,
    /// Short key accepted by name lookup.
    pub abbreviation: &'static str,
    /// Real-world (proleptic Gregorian, astronomical) year of the anchor.
    pub anchor_year: i64,
    /// Label for years before the anchor.
    pub before_label: &'static str,
    /// Label for the anchor year and later.
    pub after_label: &'static str,
    pub indexing: YearIndexing,
}

/// Year of the Battle of Yavin on the real-world axis.
pub const BATTLE_OF_YAVIN_YEAR: i64 = 1977;

/// Battle of Yavin: the battle year is 0 BBY and 0 ABY at once, so the
/// after side starts at ABY 0.
pub const BATTLE_OF_YAVIN: SecondaryCalendarAnchor = SecondaryCalendarAnchor {
    name: "Battle of Yavin",
    abbreviation: "BBY/ABY",
    anchor_year: BATTLE_OF_YAVIN_YEAR,
    before_label: "BBY",
    after_label: "ABY",
    indexing: YearIndexing::ZeroBased,
};

/// Treaty of Coruscant, 3 653 BBY. Year zero is 0 ATC.
pub const TREATY_OF_CORUSCANT: SecondaryCalendarAnchor = SecondaryCalendarAnchor {
    name: "Treaty of Coruscant",
    abbreviation: "BTC/ATC",
    anchor_year: BATTLE_OF_YAVIN_YEAR - 3_653,
    before_label: "BTC",
    after_label: "ATC",
    indexing: YearIndexing::ZeroBased,
};

/// Great ReSynchronization, 35 BBY. Year zero is 0 GrS.
pub const GREAT_RESYNCHRONIZATION: SecondaryCalendarAnchor = SecondaryCalendarAnchor {
    name: "Great ReSynchronization",
    abbreviation: "GrS",
    anchor_year: BATTLE_OF_YAVIN_YEAR - 35,
    before_label: "Pre-GrS",
    after_label: "GrS",
    indexing: YearIndexing::ZeroBased,
};

/// Galactic Standard Calendar, 25 043 BBY. Year zero is 0 GSC.
pub const GALACTIC_STANDARD_CALENDAR: SecondaryCalendarAnchor = SecondaryCalendarAnchor {
    name: "Galactic Standard Calendar",
    abbreviation: "GSC",
    anchor_year: BATTLE_OF_YAVIN_YEAR - 25_043,
    before_label: "Pre-GSC",
    after_label: "GSC",
    indexing: YearIndexing::ZeroBased,
};

/// Tho Yor Arrival, 36 453 BBY. Year zero is 0 TYA.
pub const THO_YOR_ARRIVAL: SecondaryCalendarAnchor = SecondaryCalendarAnchor {
    name: "Tho Yor Arrival",
    abbreviation: "TYA",
    anchor_year: BATTLE_OF_YAVIN_YEAR - 36_453,
    before_label: "Pre-TYA",
    after_label: "TYA",
    indexing: YearIndexing::ZeroBased,
};

/// Ruusan Reformation, 1 000 BBY. Year zero is 0 ARR.
pub const RUUSAN_REFORMATION: SecondaryCalendarAnchor = SecondaryCalendarAnchor {
    name: "Ruusan Reformation",
    abbreviation: "BRR/ARR",
    anchor_year: BATTLE_OF_YAVIN_YEAR - 1_000,
    before_label: "BRR",
    after_label: "ARR",
    indexing: YearIndexing::ZeroBased,
};

/// Lothal Years, 3 277 BBY. Year zero is 0 LY.
pub const LOTHAL_YEARS: SecondaryCalendarAnchor = SecondaryCalendarAnchor {
    name: "Lothal Years",
    abbreviation: "LY",
    anchor_year: BATTLE_OF_YAVIN_YEAR - 3_277,
    before_label: "Pre-LY",
    after_label: "LY",
    indexing: YearIndexing::ZeroBased,
};
