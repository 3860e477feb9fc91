// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Year-only secondary calendars.
//!
//! Each [`CalendarSystem`] labels a UTC instant by the distance between its
//! UTC calendar year and the system's anchor year, using the system's own
//! before/after labels and year-indexing convention (see
//! [`anchors`](crate::anchors) for the table of anchors). Months, days and
//! leap years play no part.
//!
//! | Marker | Before | After |
//! |--------|--------|-------|
//! | [`BattleOfYavin`](CalendarSystem::BattleOfYavin) | BBY | ABY |
//! | [`TreatyOfCoruscant`](CalendarSystem::TreatyOfCoruscant) | BTC | ATC |
//! | [`GreatResynchronization`](CalendarSystem::GreatResynchronization) | Pre-GrS | GrS |
//! | [`GalacticStandard`](CalendarSystem::GalacticStandard) | Pre-GSC | GSC |
//! | [`ThoYorArrival`](CalendarSystem::ThoYorArrival) | Pre-TYA | TYA |
//! | [`RuusanReformation`](CalendarSystem::RuusanReformation) | BRR | ARR |
//! | [`LothalYears`](CalendarSystem::LothalYears) | Pre-LY | LY |

use crate::anchors::{
    SecondaryCalendarAnchor, YearIndexing, BATTLE_OF_YAVIN, GALACTIC_STANDARD_CALENDAR,
    GREAT_RESYNCHRONIZATION, LOTHAL_YEARS, RUUSAN_REFORMATION, THO_YOR_ARRIVAL,
    TREATY_OF_CORUSCANT,
};
use crate::error::{Result, TimeError};
use chrono::{DateTime, Datelike, Utc};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported secondary calendar systems.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CalendarSystem {
    BattleOfYavin,
    TreatyOfCoruscant,
    GreatResynchronization,
    GalacticStandard,
    ThoYorArrival,
    RuusanReformation,
    LothalYears,
}

impl CalendarSystem {
    pub const ALL: [CalendarSystem; 7] = [
        CalendarSystem::BattleOfYavin,
        CalendarSystem::TreatyOfCoruscant,
        CalendarSystem::GreatResynchronization,
        CalendarSystem::GalacticStandard,
        CalendarSystem::ThoYorArrival,
        CalendarSystem::RuusanReformation,
        CalendarSystem::LothalYears,
    ];

    /// The fixed anchor of this system.
    #[inline]
    pub const fn anchor(self) -> SecondaryCalendarAnchor {
        match self {
            CalendarSystem::BattleOfYavin => BATTLE_OF_YAVIN,
            CalendarSystem::TreatyOfCoruscant => TREATY_OF_CORUSCANT,
            CalendarSystem::GreatResynchronization => GREAT_RESYNCHRONIZATION,
            CalendarSystem::GalacticStandard => GALACTIC_STANDARD_CALENDAR,
            CalendarSystem::ThoYorArrival => THO_YOR_ARRIVAL,
            CalendarSystem::RuusanReformation => RUUSAN_REFORMATION,
            CalendarSystem::LothalYears => LOTHAL_YEARS,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        self.anchor().name
    }

    /// Signed year of `instant` on this system's axis (anchor year = 0).
    #[inline]
    pub fn year_of(self, instant: DateTime<Utc>) -> i64 {
        i64::from(instant.year()) - self.anchor().anchor_year
    }

    /// Label of `instant`'s UTC calendar year.
    pub fn offset_for(self, instant: DateTime<Utc>) -> CalendarOffsetLabel {
        self.anchor().label_for_year(i64::from(instant.year()))
    }

    /// Re-express a signed year of this system on `to`'s axis.
    ///
    /// Years are raw signed offsets from each anchor, e.g. year 0 of the
    /// Galactic Standard Calendar is year −25 043 on the Battle of Yavin
    /// axis (25 043 BBY).
    #[inline]
    pub const fn convert_year(self, year: i64, to: CalendarSystem) -> i64 {
        year + self.anchor().anchor_year - to.anchor().anchor_year
    }

    fn matches(self, key: &str) -> bool {
        let anchor = self.anchor();
        [
            anchor.name,
            anchor.abbreviation,
            anchor.before_label,
            anchor.after_label,
        ]
        .into_iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarSystem {
    type Err = TimeError;

    /// Accepts the canonical name, the abbreviation (`"BBY/ABY"`, `"GSC"`,
    /// ...) or either label, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        CalendarSystem::ALL
            .into_iter()
            .find(|system| system.matches(key))
            .ok_or_else(|| {
                tracing::debug!(system = s, "rejected calendar system");
                TimeError::UnknownSystem(s.to_owned())
            })
    }
}

/// A year label such as `"BBY 20"` or `"ABY 5"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarOffsetLabel {
    pub system_name: String,
    pub label: String,
    /// Signed year number on the system's axis, negative before the anchor.
    pub numeric_offset: i64,
}

impl fmt::Display for CalendarOffsetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl SecondaryCalendarAnchor {
    /// Label a real-world calendar year.
    ///
    /// Years before the anchor count down from 1 under `before_label`; the
    /// anchor year is 0 or 1 under `after_label` depending on `indexing`.
    pub fn label_for_year(&self, utc_year: i64) -> CalendarOffsetLabel {
        let delta = utc_year - self.anchor_year;
        let (side, numeric_offset) = match (delta < 0, self.indexing) {
            (true, _) => (self.before_label, delta),
            (false, YearIndexing::ZeroBased) => (self.after_label, delta),
            (false, YearIndexing::OneBased) => (self.after_label, delta + 1),
        };
        CalendarOffsetLabel {
            system_name: self.name.to_owned(),
            label: format!("{side} {}", numeric_offset.unsigned_abs()),
            numeric_offset,
        }
    }
}

/// Label `instant` in the calendar named `system_name`.
///
/// This is the string-keyed entry point for callers that receive the
/// system name from outside; unknown names fail with
/// [`TimeError::UnknownSystem`].
pub fn offset_for(system_name: &str, instant: DateTime<Utc>) -> Result<CalendarOffsetLabel> {
    let system: CalendarSystem = system_name.parse()?;
    Ok(system.offset_for(instant))
}

/// Labels of `instant` in every supported system, in [`CalendarSystem::ALL`] order.
pub fn all_offsets(instant: DateTime<Utc>) -> Vec<CalendarOffsetLabel> {
    CalendarSystem::ALL
        .into_iter()
        .map(|system| system.offset_for(instant))
        .collect()
}
