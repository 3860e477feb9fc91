// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Direct CGT ↔ SWET conversion.
//!
//! Both counters are whole seconds from fixed anchors, so the conversion is
//! a constant shift on the Unix-second axis and never builds a
//! `DateTime`. This keeps it exact even for values chrono cannot represent.

use crate::anchors::{EpochMode, SWET_ANCHOR_UNIX};
use crate::cgt::Cgt;
use crate::error::{Result, TimeError};

/// SWET of a CGT timestamp.
pub fn cgt_to_swet(cgt: &Cgt) -> Result<i64> {
    cgt.unix_seconds()?
        .checked_sub(SWET_ANCHOR_UNIX)
        .ok_or(TimeError::OutOfRange)
}

/// CGT timestamp (in `mode`) of a SWET value.
pub fn swet_to_cgt(value: i64, mode: EpochMode) -> Result<Cgt> {
    let elapsed = value
        .checked_add(SWET_ANCHOR_UNIX - mode.anchor_unix())
        .ok_or(TimeError::OutOfRange)?;
    Ok(Cgt::from_elapsed_seconds(elapsed, mode))
}
