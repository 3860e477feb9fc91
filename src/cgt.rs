// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Combine Galactic Time.
//!
//! CGT is a uniform calendar of 365-day years and 24-hour days with no leap
//! rules. A [`Cgt`] stores the decomposed fields together with the
//! [`EpochMode`] that anchors them, and converts to and from UTC through the
//! signed count of whole seconds elapsed since that anchor:
//!
//! ```text
//! elapsed = year·31 536 000 + (day_of_year − 1)·86 400 + hour·3 600 + minute·60 + second
//! ```
//!
//! Decomposition uses floor division (`div_euclid` / `rem_euclid`), so for
//! instants before the anchor the sign lands entirely in `year` and every
//! other field keeps its non-negative range. Truncating division would break
//! the UTC round trip for every pre-anchor instant.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use holochron::{utc_to_cgt, EpochMode};
//!
//! let release = Utc.with_ymd_and_hms(1977, 5, 25, 0, 0, 0).unwrap();
//! let cgt = utc_to_cgt(release, EpochMode::Current);
//! assert_eq!(cgt.to_string(), "CGT -22 168 17:00:00");
//! ```

use crate::anchors::{
    instant_from_unix, EpochMode, DAYS_PER_CGT_YEAR, SECONDS_PER_CGT_YEAR, SECONDS_PER_DAY,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::error::{CgtField, Result, TimeError};
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A CGT timestamp.
///
/// Fields are private: every constructor range-checks them, so a `Cgt`
/// with `day_of_year` outside `1..=365` or a time of day outside
/// `00:00:00..=23:59:59` cannot exist.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCgt", into = "RawCgt"))]
pub struct Cgt {
    year: i64,
    day_of_year: u16,
    hour: u8,
    minute: u8,
    second: u8,
    mode: EpochMode,
}

impl Cgt {
    // ── constructors ──────────────────────────────────────────────────

    /// Build a timestamp from its fields.
    ///
    /// Fails with [`TimeError::InvalidField`] for the first field outside
    /// its range (checked in day, hour, minute, second order).
    pub fn new(
        year: i64,
        day_of_year: u32,
        hour: u32,
        minute: u32,
        second: u32,
        mode: EpochMode,
    ) -> Result<Self> {
        Self::from_raw(
            year,
            i64::from(day_of_year),
            i64::from(hour),
            i64::from(minute),
            i64::from(second),
            mode,
        )
    }

    fn from_raw(
        year: i64,
        day_of_year: i64,
        hour: i64,
        minute: i64,
        second: i64,
        mode: EpochMode,
    ) -> Result<Self> {
        Ok(Self {
            year,
            day_of_year: checked(CgtField::DayOfYear, day_of_year)? as u16,
            hour: checked(CgtField::Hour, hour)? as u8,
            minute: checked(CgtField::Minute, minute)? as u8,
            second: checked(CgtField::Second, second)? as u8,
            mode,
        })
    }

    /// Year 0, day 1, 00:00:00 of `mode`.
    #[inline]
    pub const fn epoch(mode: EpochMode) -> Self {
        Self {
            year: 0,
            day_of_year: 1,
            hour: 0,
            minute: 0,
            second: 0,
            mode,
        }
    }

    /// Decompose a signed count of seconds since `mode`'s anchor.
    pub const fn from_elapsed_seconds(elapsed: i64, mode: EpochMode) -> Self {
        let total_days = elapsed.div_euclid(SECONDS_PER_DAY);
        let second_of_day = elapsed.rem_euclid(SECONDS_PER_DAY);

        // rem_euclid keeps every cast below within its field range.
        Self {
            year: total_days.div_euclid(DAYS_PER_CGT_YEAR),
            day_of_year: (total_days.rem_euclid(DAYS_PER_CGT_YEAR) + 1) as u16,
            hour: (second_of_day / SECONDS_PER_HOUR) as u8,
            minute: (second_of_day % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
            second: (second_of_day % SECONDS_PER_MINUTE) as u8,
            mode,
        }
    }

    /// The current instant in `mode`.
    pub fn now(mode: EpochMode) -> Self {
        utc_to_cgt(Utc::now(), mode)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Day of the year, `1..=365`.
    #[inline]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year as u32
    }

    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour as u32
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute as u32
    }

    #[inline]
    pub const fn second(&self) -> u32 {
        self.second as u32
    }

    #[inline]
    pub const fn mode(&self) -> EpochMode {
        self.mode
    }

    /// Seconds since midnight of the CGT day.
    #[inline]
    pub const fn second_of_day(&self) -> i64 {
        self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64
    }

    // ── conversions ───────────────────────────────────────────────────

    /// Signed whole seconds since the anchor of [`mode`](Self::mode).
    ///
    /// Fails with [`TimeError::OutOfRange`] when `year` is so large that the
    /// count overflows `i64`.
    pub fn elapsed_seconds(&self) -> Result<i64> {
        let day_seconds = (self.day_of_year as i64 - 1) * SECONDS_PER_DAY + self.second_of_day();
        self.year
            .checked_mul(SECONDS_PER_CGT_YEAR)
            .and_then(|year_seconds| year_seconds.checked_add(day_seconds))
            .ok_or_else(|| {
                tracing::debug!(year = self.year, "CGT year overflows elapsed seconds");
                TimeError::OutOfRange
            })
    }

    /// UTC instant of this timestamp. See [`cgt_to_utc`].
    #[inline]
    pub fn to_utc(&self) -> Result<DateTime<Utc>> {
        cgt_to_utc(self)
    }

    /// Whole Unix seconds of this timestamp.
    pub(crate) fn unix_seconds(&self) -> Result<i64> {
        self.elapsed_seconds()?
            .checked_add(self.mode.anchor_unix())
            .ok_or(TimeError::OutOfRange)
    }

    /// The same instant expressed against another epoch anchor.
    pub fn with_mode(&self, mode: EpochMode) -> Result<Self> {
        let elapsed = self
            .elapsed_seconds()?
            .checked_sub(self.mode.offset_seconds_to(mode))
            .ok_or(TimeError::OutOfRange)?;
        Ok(Self::from_elapsed_seconds(elapsed, mode))
    }
}

fn checked(field: CgtField, value: i64) -> Result<i64> {
    if field.accepts(value) {
        Ok(value)
    } else {
        tracing::debug!(%field, value, "rejected CGT field");
        Err(TimeError::InvalidField { field, value })
    }
}

/// Convert a UTC instant to CGT.
///
/// Sub-second precision is dropped: the instant is floored to the whole
/// second before decomposition.
pub fn utc_to_cgt(instant: DateTime<Utc>, mode: EpochMode) -> Cgt {
    // chrono timestamps stay far inside i64.
    Cgt::from_elapsed_seconds(instant.timestamp() - mode.anchor_unix(), mode)
}

/// Convert a CGT timestamp back to its UTC instant.
///
/// Fails with [`TimeError::OutOfRange`] when the instant lies outside
/// `chrono::DateTime<Utc>`'s representable range.
pub fn cgt_to_utc(cgt: &Cgt) -> Result<DateTime<Utc>> {
    instant_from_unix(cgt.unix_seconds()?)
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for Cgt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CGT {:02} {:03} {:02}:{:02}:{:02}",
            self.year, self.day_of_year, self.hour, self.minute, self.second
        )
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

/// Unchecked wire form; fields are wide so that negative or oversized
/// values reach validation instead of failing as type errors.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawCgt {
    year: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    #[serde(default)]
    mode: EpochMode,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCgt> for Cgt {
    type Error = TimeError;

    fn try_from(raw: RawCgt) -> Result<Self> {
        Cgt::from_raw(
            raw.year, raw.day, raw.hour, raw.minute, raw.second, raw.mode,
        )
    }
}

#[cfg(feature = "serde")]
impl From<Cgt> for RawCgt {
    fn from(cgt: Cgt) -> Self {
        RawCgt {
            year: cgt.year,
            day: cgt.day_of_year.into(),
            hour: cgt.hour.into(),
            minute: cgt.minute.into(),
            second: cgt.second.into(),
            mode: cgt.mode,
        }
    }
}
