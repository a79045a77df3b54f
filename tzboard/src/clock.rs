// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! UTC offset math and the "viewed from" reference selection.
//!
//! Displayed clocks are the reference instant shifted by the difference
//! between the entry zone's UTC offset and the viewed-from zone's UTC
//! offset. Offsets vary with DST, and both are evaluated at a single
//! instant, by default "now" rather than the displayed instant.
//!
//! The viewed-from selection travels as a wire string: a bare
//! `"<identifier>"` pins a fixed zone, while `"<identifier>-Current"` tracks
//! the live system zone. Parsing splits on `'-'` and takes the first segment
//! as the identifier candidate; anything unresolvable falls back to the
//! system zone.

use chrono::{DateTime, Duration, Offset, Utc};
use chrono_tz::Tz;

use crate::entry::{parse_zone, UserZone};

/// Suffix marking a viewed-from wire string that tracks the live system zone.
pub const CURRENT_SUFFIX: &str = "-Current";

/// Drift from "now" beyond which a reference instant counts as customized.
const CUSTOM_DRIFT_SECS: i64 = 60;

/// UTC offset of `zone` in seconds east of UTC, at `at`.
pub fn zone_offset_at(zone: &Tz, at: DateTime<Utc>) -> i32 {
    at.with_timezone(zone).offset().fix().local_minus_utc()
}

/// Present-moment UTC offset of `zone` in seconds east of UTC.
pub fn zone_offset_now(zone: &Tz) -> i32 {
    zone_offset_at(zone, Utc::now())
}

/// Difference between the entry zone's UTC offset and `reference`'s UTC
/// offset, both evaluated at `at`.
pub fn seconds_offset_at(entry: &UserZone, reference: &Tz, at: DateTime<Utc>) -> i64 {
    i64::from(zone_offset_at(&entry.zone(), at) - zone_offset_at(reference, at))
}

/// As [`seconds_offset_at`], evaluated at the present moment.
pub fn seconds_offset(entry: &UserZone, reference: &Tz) -> i64 {
    seconds_offset_at(entry, reference, Utc::now())
}

/// The system's current zone. Falls back to UTC when detection fails or the
/// reported name is not in the bundled database.
pub fn system_zone() -> Tz {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse().ok())
        .unwrap_or(chrono_tz::UTC)
}

/// Wire string selecting the live system zone as the viewing reference.
pub fn current_wire(zone: &Tz) -> String {
    format!("{}{}", zone.name(), CURRENT_SUFFIX)
}

/// Whether a viewed-from wire string tracks the live system zone.
pub fn is_current(wire: &str) -> bool {
    wire.contains(CURRENT_SUFFIX)
}

/// Resolve a viewed-from wire string to a zone, falling back to the system
/// zone when the identifier candidate does not parse.
pub fn resolve_viewed_from(wire: &str) -> Tz {
    let candidate = wire.split('-').next().unwrap_or("");
    parse_zone(candidate).unwrap_or_else(|_| system_zone())
}

/// Display instant for `entry`: the reference instant shifted by the
/// entry-vs-viewed-from offset, with both offsets evaluated at `at`.
pub fn display_time_at(
    entry: &UserZone,
    reference: DateTime<Utc>,
    viewed_from: &str,
    at: DateTime<Utc>,
) -> DateTime<Utc> {
    let viewed = resolve_viewed_from(viewed_from);
    reference + Duration::seconds(seconds_offset_at(entry, &viewed, at))
}

/// As [`display_time_at`], with the offsets evaluated at the present moment.
pub fn display_time(entry: &UserZone, reference: DateTime<Utc>, viewed_from: &str) -> DateTime<Utc> {
    display_time_at(entry, reference, viewed_from, Utc::now())
}

/// Ephemeral view selection: the reference instant, the viewed-from wire and
/// whether the user has customized away from "now".
///
/// Not persisted. Mutators take the current instant explicitly so state
/// transitions stay deterministic under test.
#[derive(Debug, Clone)]
pub struct ViewState {
    reference: DateTime<Utc>,
    viewed_from: String,
    customized: bool,
}

impl ViewState {
    /// Start at `now`, viewing from the live system zone.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            reference: now,
            viewed_from: current_wire(&system_zone()),
            customized: false,
        }
    }

    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    pub fn viewed_from(&self) -> &str {
        &self.viewed_from
    }

    pub fn is_customized(&self) -> bool {
        self.customized
    }

    /// Move the reference instant. Counts as customized once the instant
    /// drifts more than a minute from `now`, or while viewing from a fixed
    /// zone.
    pub fn set_reference(&mut self, instant: DateTime<Utc>, now: DateTime<Utc>) {
        self.reference = instant;
        self.customized = drifted(instant, now) || !is_current(&self.viewed_from);
    }

    /// Select a viewed-from zone and re-anchor the reference instant to that
    /// zone's wall clock at `now`.
    pub fn set_viewed_from<S: Into<String>>(&mut self, wire: S, now: DateTime<Utc>) {
        let wire = wire.into();
        self.customized = !is_current(&wire) || drifted(self.reference, now);
        let selected = UserZone::new(resolve_viewed_from(&wire));
        self.reference = now + Duration::seconds(seconds_offset_at(&selected, &system_zone(), now));
        self.viewed_from = wire;
    }

    /// Back to "now" in the live system zone.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.reference = now;
        self.viewed_from = current_wire(&system_zone());
        self.customized = false;
    }
}

fn drifted(instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (instant - now).num_seconds().abs() > CUSTOM_DRIFT_SECS
}
