// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Enumeration of every zone the bundled IANA database knows, as candidates
//! for the add picker.

use chrono_tz::TZ_VARIANTS;

use crate::entry::UserZone;
use crate::format::country_city_label;

/// All known IANA timezone names, each wrapped with no nickname, in
/// database order.
pub fn all_zones() -> Vec<UserZone> {
    TZ_VARIANTS.iter().map(|tz| UserZone::new(*tz)).collect()
}

/// Case-insensitive substring search over the `"Country - City"` labels.
/// An empty query returns every zone.
pub fn search_zones(query: &str) -> Vec<UserZone> {
    if query.is_empty() {
        return all_zones();
    }
    let needle = query.to_lowercase();
    all_zones()
        .into_iter()
        .filter(|zone| country_city_label(zone, false).to_lowercase().contains(&needle))
        .collect()
}
