// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Galactic Time Module
//!
//! This crate converts real-world UTC instants to and from the galactic time
//! systems used by Holonet timestamps. Every conversion is a pure function
//! of its inputs, exact to the second, and measured from compiled-in anchors.
//!
//! # Core types
//!
//! - [`Cgt`]: a Combine Galactic Time timestamp (365-day years, 24-hour days).
//! - [`EpochMode`]: which fixed instant anchors CGT year 0, day 1.
//! - [`CalendarSystem`]: a year-only secondary calendar (BBY/ABY, GSC, ...).
//! - [`CalendarOffsetLabel`]: a derived year label such as `"ABY 5"`.
//! - [`TimeError`]: the single error type of the crate.
//!
//! # Conversions
//!
//! | From | To | Function |
//! |------|----|----------|
//! | UTC | CGT | [`utc_to_cgt`] |
//! | CGT | UTC | [`cgt_to_utc`] |
//! | UTC | SWET | [`utc_to_swet`] |
//! | SWET | UTC | [`swet_to_utc`] |
//! | CGT | SWET | [`cgt_to_swet`] |
//! | SWET | CGT | [`swet_to_cgt`] |
//! | UTC | year label | [`offset_for`], [`CalendarSystem::offset_for`] |
//!
//! # Anchors
//!
//! | Anchor | UTC |
//! |--------|-----|
//! | CGT epoch, [`EpochMode::Current`] | 1998-12-03T07:00:00Z |
//! | CGT epoch, [`EpochMode::Legacy`] | 1998-12-03T00:00:00Z |
//! | SWET 0 | 1977-05-25T00:00:00Z |
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use holochron::{offset_for, utc_to_cgt, utc_to_swet, EpochMode};
//!
//! let instant = Utc.with_ymd_and_hms(1977, 5, 25, 0, 0, 0).unwrap();
//! assert_eq!(utc_to_swet(instant), 0);
//! assert_eq!(
//!     utc_to_cgt(instant, EpochMode::Current).to_string(),
//!     "CGT -22 168 17:00:00"
//! );
//! assert_eq!(offset_for("BBY/ABY", instant).unwrap().label, "ABY 0");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the value types. Deserializing a
//!   [`Cgt`] range-checks its fields.
//! - `tz`: civil-time rendering in IANA zones through `chrono-tz`
//!   (`cgt_to_zone`, `zone_to_cgt`).

pub mod anchors;
mod bridge;
mod calendars;
mod cgt;
mod error;
mod swet;
#[cfg(feature = "tz")]
mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use anchors::{swet_anchor, EpochMode, SecondaryCalendarAnchor, YearIndexing};
pub use bridge::{cgt_to_swet, swet_to_cgt};
pub use calendars::{all_offsets, offset_for, CalendarOffsetLabel, CalendarSystem};
pub use cgt::{cgt_to_utc, utc_to_cgt, Cgt};
pub use error::{CgtField, Result, TimeError};
pub use swet::{swet_days, swet_now, swet_to_utc, utc_to_swet};
#[cfg(feature = "tz")]
pub use zone::{cgt_to_zone, resolve_zone, zone_to_cgt};
