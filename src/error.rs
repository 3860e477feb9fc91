// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every conversion in the crate.
//!
//! | Variant | Raised by | Recoverable? |
//! |---------|-----------|--------------|
//! | [`InvalidField`](TimeError::InvalidField) | [`Cgt::new`](crate::Cgt::new), CGT deserialization | No |
//! | [`UnknownEpochMode`](TimeError::UnknownEpochMode) | [`EpochMode::from_str`](crate::EpochMode) | No |
//! | [`UnknownSystem`](TimeError::UnknownSystem) | [`offset_for`](crate::offset_for), [`CalendarSystem::from_str`](crate::CalendarSystem) | No |
//! | [`OutOfRange`](TimeError::OutOfRange) | any conversion producing an instant | No |
//!
//! Nothing in the crate retries or substitutes a default: errors are handed
//! to the immediate caller unchanged.

use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimeError>;

/// The range-checked fields of a [`Cgt`](crate::Cgt) timestamp.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CgtField {
    DayOfYear,
    Hour,
    Minute,
    Second,
}

impl CgtField {
    /// Smallest accepted value.
    #[inline]
    pub const fn min(self) -> i64 {
        match self {
            CgtField::DayOfYear => 1,
            _ => 0,
        }
    }

    /// Largest accepted value.
    #[inline]
    pub const fn max(self) -> i64 {
        match self {
            CgtField::DayOfYear => 365,
            CgtField::Hour => 23,
            CgtField::Minute | CgtField::Second => 59,
        }
    }

    /// Whether `value` lies in `min()..=max()`.
    #[inline]
    pub const fn accepts(self, value: i64) -> bool {
        value >= self.min() && value <= self.max()
    }
}

impl fmt::Display for CgtField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CgtField::DayOfYear => "day of year",
            CgtField::Hour => "hour",
            CgtField::Minute => "minute",
            CgtField::Second => "second",
        };
        write!(f, "{name} ({}..={})", self.min(), self.max())
    }
}

/// Failure of a time conversion.
#[derive(Error, Debug)]
pub enum TimeError {
    /// A CGT field lies outside its declared range.
    #[error("{value} is not a valid CGT {field}")]
    InvalidField { field: CgtField, value: i64 },

    /// An epoch mode name other than `current` or `legacy`.
    #[error("unknown epoch mode {0:?}, expected \"current\" or \"legacy\"")]
    UnknownEpochMode(String),

    /// A secondary calendar name that matches no supported system.
    #[error("unknown calendar system {0:?}")]
    UnknownSystem(String),

    /// The result cannot be represented as an instant (or overflows `i64` seconds).
    #[error("result is outside the representable time range")]
    OutOfRange,

    /// The zone database rejected the identifier; the resolver's error is kept as is.
    #[cfg(feature = "tz")]
    #[error(transparent)]
    Zone(#[from] chrono_tz::ParseError),

    /// Local wall-clock time skipped by a DST transition.
    #[cfg(feature = "tz")]
    #[error("local time {local} does not exist in {zone}")]
    NonexistentLocalTime {
        local: chrono::NaiveDateTime,
        zone: chrono_tz::Tz,
    },
}
