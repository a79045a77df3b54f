// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Human-readable labels and clock strings.

use chrono::{DateTime, Local, Utc};

use crate::clock::display_time_at;
use crate::entry::UserZone;

/// City name for an entry: the identifier's trailing path segment with
/// underscores as spaces (`"America/New_York"` -> `"New York"`). A nickname
/// wins unless `suppress_nickname` is set.
pub fn city_label(zone: &UserZone, suppress_nickname: bool) -> String {
    if !suppress_nickname {
        if let Some(nickname) = zone.nickname() {
            return nickname.to_string();
        }
    }
    city_of(zone.identifier())
}

/// `"Country - City"` label from the identifier's path segments
/// (`"Asia/Tokyo"` -> `"Asia - Tokyo"`). A nickname wins unless
/// `suppress_nickname` is set.
pub fn country_city_label(zone: &UserZone, suppress_nickname: bool) -> String {
    if !suppress_nickname {
        if let Some(nickname) = zone.nickname() {
            return nickname.to_string();
        }
    }
    let identifier = zone.identifier();
    let country = identifier.split('/').next().unwrap_or(identifier);
    format!("{} - {}", country, city_of(identifier))
}

fn city_of(identifier: &str) -> String {
    identifier
        .rsplit('/')
        .next()
        .unwrap_or(identifier)
        .replace('_', " ")
}

/// Clock string for an entry: the display instant rendered in the
/// system-local zone as zero-padded 12-hour time, truncated to hours and
/// minutes plus the AM/PM marker (`"09:32 AM"`).
pub fn clock_label(entry: &UserZone, reference: DateTime<Utc>, viewed_from: &str) -> String {
    clock_label_at(entry, reference, viewed_from, Utc::now())
}

/// As [`clock_label`], with the offset-evaluation instant made explicit.
pub fn clock_label_at(
    entry: &UserZone,
    reference: DateTime<Utc>,
    viewed_from: &str,
    at: DateTime<Utc>,
) -> String {
    let shifted = display_time_at(entry, reference, viewed_from, at);
    truncate_seconds(&shifted.with_timezone(&Local).format("%I:%M:%S %p").to_string())
}

/// Drop the seconds field from a formatted time, keeping any 12-hour
/// marker. The truncation runs on the formatted string, not the instant.
fn truncate_seconds(formatted: &str) -> String {
    let marker = if formatted.contains("AM") {
        " AM"
    } else if formatted.contains("PM") {
        " PM"
    } else {
        ""
    };
    let clock: Vec<&str> = formatted.split(':').take(2).collect();
    format!("{}{}", clock.join(":"), marker)
}

/// Copy snippet pairing the clock string with the plain city name,
/// `"09:32 AM in New York"`. The nickname is always suppressed here.
pub fn share_text(entry: &UserZone, reference: DateTime<Utc>, viewed_from: &str) -> String {
    format!(
        "{} in {}",
        clock_label(entry, reference, viewed_from),
        city_label(entry, true)
    )
}

/// Chat timestamp markup for the reference instant, `"<t:1704067200:t>"`.
/// Used by the copy action while viewing from the live system zone, where
/// the system-vs-system shift is zero.
pub fn timestamp_markup(reference: DateTime<Utc>) -> String {
    format!("<t:{}:t>", reference.timestamp())
}
