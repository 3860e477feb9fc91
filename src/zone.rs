// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil-time adapter over the IANA zone database (feature `tz`).
//!
//! Zones only affect presentation: CGT and SWET are always computed from
//! UTC, and the zone rules (including DST) come entirely from `chrono-tz`.
//! Unknown zone identifiers surface as [`TimeError::Zone`] carrying the
//! resolver's own error.

use crate::anchors::EpochMode;
use crate::cgt::{utc_to_cgt, Cgt};
use crate::error::{Result, TimeError};
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Look up an IANA zone such as `"America/Los_Angeles"`.
pub fn resolve_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|err| {
        tracing::debug!(zone = name, "unknown time zone");
        TimeError::Zone(err)
    })
}

/// Wall-clock time of a CGT timestamp in `zone`.
pub fn cgt_to_zone(cgt: &Cgt, zone: &str) -> Result<DateTime<Tz>> {
    let tz = resolve_zone(zone)?;
    Ok(cgt.to_utc()?.with_timezone(&tz))
}

/// CGT timestamp of a wall-clock time in `zone`.
///
/// A time repeated by a backward DST shift resolves to its earlier
/// occurrence; a time skipped by a forward shift fails with
/// [`TimeError::NonexistentLocalTime`].
pub fn zone_to_cgt(local: NaiveDateTime, zone: &str, mode: EpochMode) -> Result<Cgt> {
    let tz = resolve_zone(zone)?;
    let instant = match tz.from_local_datetime(&local) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            tracing::debug!(%local, zone, "local time falls in a DST gap");
            return Err(TimeError::NonexistentLocalTime { local, zone: tz });
        }
    };
    Ok(utc_to_cgt(instant.with_timezone(&Utc), mode))
}
