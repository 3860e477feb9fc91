// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Star Wars Epoch Time.
//!
//! SWET is a signed count of whole seconds since 1977-05-25T00:00:00Z,
//! negative for earlier instants. Like Unix time it ignores leap seconds.

use crate::anchors::{instant_from_unix, SWET_ANCHOR_UNIX};
use crate::error::{Result, TimeError};
use chrono::{DateTime, Utc};
use qtty::{Day, Days, Seconds};

/// Whole seconds from the SWET anchor to `instant` (sub-second part floored).
#[inline]
pub fn utc_to_swet(instant: DateTime<Utc>) -> i64 {
    instant.timestamp() - SWET_ANCHOR_UNIX
}

/// UTC instant `value` seconds after the SWET anchor.
///
/// Fails with [`TimeError::OutOfRange`] outside chrono's representable range.
pub fn swet_to_utc(value: i64) -> Result<DateTime<Utc>> {
    let unix_seconds = value
        .checked_add(SWET_ANCHOR_UNIX)
        .ok_or(TimeError::OutOfRange)?;
    instant_from_unix(unix_seconds)
}

/// SWET of the current instant.
pub fn swet_now() -> i64 {
    utc_to_swet(Utc::now())
}

/// A SWET value expressed as days since the anchor.
#[inline]
pub fn swet_days(value: i64) -> Days {
    Seconds::new(value as f64).to::<Day>()
}
