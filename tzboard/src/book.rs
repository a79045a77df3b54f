// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! CRUD over the user's saved zone list.

use chrono::Utc;
use tracing::warn;
use tzboard_store::{PreferenceStore, StoreError};

use crate::clock::zone_offset_at;
use crate::entry::UserZone;

/// Preference-store key holding the persisted zone list.
pub const TIMEZONES_KEY: &str = "timezones";

/// The saved zone list behind an injected preference store.
///
/// Every mutation is a read-modify-write of the whole list under
/// [`TIMEZONES_KEY`]; there is no locking, the last save wins. The in-memory
/// list is a transient value, callers reload after each mutation.
#[derive(Debug)]
pub struct ZoneBook<S> {
    store: S,
}

impl<S: PreferenceStore> ZoneBook<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The saved list, sorted ascending by present-moment UTC offset.
    ///
    /// Persisted entries whose identifier no longer resolves against the
    /// zone database are skipped and logged, not fatal. The sort is stable,
    /// equal-offset zones keep their stored order.
    pub fn zones(&self) -> Result<Vec<UserZone>, StoreError> {
        let raw = self.store.get(TIMEZONES_KEY)?.unwrap_or_default();
        let mut zones = Vec::with_capacity(raw.len());
        for line in &raw {
            match UserZone::decode(line) {
                Ok(zone) => zones.push(zone),
                Err(err) => warn!("skipping persisted entry {:?}: {}", line, err),
            }
        }
        let now = Utc::now();
        zones.sort_by_key(|zone| zone_offset_at(&zone.zone(), now));
        Ok(zones)
    }

    /// Overwrite the saved list.
    pub fn set_zones(&mut self, zones: &[UserZone]) -> Result<(), StoreError> {
        let raw: Vec<String> = zones.iter().map(UserZone::encode).collect();
        self.store.set(TIMEZONES_KEY, &raw)
    }

    /// Append `zone` unless an entry with the same identifier already
    /// exists, in which case the list is left untouched. Returns the
    /// resulting list; a fresh append lands at the end and is re-sorted on
    /// the next load.
    pub fn add(&mut self, zone: UserZone) -> Result<Vec<UserZone>, StoreError> {
        let mut zones = self.zones()?;
        if zones.iter().all(|z| z.identifier() != zone.identifier()) {
            zones.push(zone);
            self.set_zones(&zones)?;
        }
        Ok(zones)
    }

    /// Drop any entry matching `zone`'s identifier and persist the result.
    /// Removing an absent identifier is a no-op on the list contents.
    pub fn remove(&mut self, zone: &UserZone) -> Result<Vec<UserZone>, StoreError> {
        let zones: Vec<UserZone> = self
            .zones()?
            .into_iter()
            .filter(|z| z.identifier() != zone.identifier())
            .collect();
        self.set_zones(&zones)?;
        Ok(zones)
    }
}

/// Replace any entry in `zones` sharing `zone`'s identifier, appending the
/// replacement at the end. Pure, the caller persists the result.
pub fn replace(zones: Vec<UserZone>, zone: UserZone) -> Vec<UserZone> {
    let mut zones: Vec<UserZone> = zones
        .into_iter()
        .filter(|z| z.identifier() != zone.identifier())
        .collect();
    zones.push(zone);
    zones
}
