// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Scenario tests over the saved list, driven through a memory store.
//!
//! Zones that do not observe DST (Tokyo, Dubai, Phoenix) carry the
//! offset-sensitive assertions so nothing here depends on the date the
//! suite runs.

use tzboard_store::{MemoryStore, PreferenceStore};

use crate::clock::zone_offset_now;
use crate::{replace, UserZone, ZoneBook, TIMEZONES_KEY};

fn book() -> ZoneBook<MemoryStore> {
    ZoneBook::new(MemoryStore::new())
}

fn seeded(raw: &[&str]) -> ZoneBook<MemoryStore> {
    let mut store = MemoryStore::new();
    let raw: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
    store.set(TIMEZONES_KEY, &raw).unwrap();
    ZoneBook::new(store)
}

fn zone(identifier: &str) -> UserZone {
    UserZone::with_nickname(identifier, "").unwrap()
}

#[test]
fn test_empty_store_is_empty_list() {
    assert!(book().zones().unwrap().is_empty());
}

#[test]
fn test_persisted_scenario() {
    let book = seeded(&["America/New_York|", "Europe/London|UK Office"]);
    let zones = book.zones().unwrap();

    assert_eq!(zones.len(), 2);
    // New York's offset (UTC-5/-4) is below London's (UTC+0/+1) year-round.
    assert_eq!(zones[0].identifier(), "America/New_York");
    assert_eq!(zones[0].nickname(), None);
    assert_eq!(zones[1].identifier(), "Europe/London");
    assert_eq!(zones[1].nickname(), Some("UK Office"));
}

#[test]
fn test_zones_sorted_ascending_by_offset() {
    let book = seeded(&["Asia/Tokyo|", "America/Phoenix|", "UTC|"]);
    let zones = book.zones().unwrap();

    let identifiers: Vec<&str> = zones.iter().map(|z| z.identifier()).collect();
    assert_eq!(identifiers, ["America/Phoenix", "UTC", "Asia/Tokyo"]);

    for pair in zones.windows(2) {
        assert!(zone_offset_now(&pair[0].zone()) <= zone_offset_now(&pair[1].zone()));
    }
}

#[test]
fn test_round_trip_is_idempotent() {
    let mut book = seeded(&["Asia/Tokyo|", "America/Phoenix|Office", "UTC|"]);

    let loaded = book.zones().unwrap();
    book.set_zones(&loaded).unwrap();
    let first = book.store().get(TIMEZONES_KEY).unwrap().unwrap();

    let reloaded = book.zones().unwrap();
    assert_eq!(reloaded, loaded);
    book.set_zones(&reloaded).unwrap();
    let second = book.store().get(TIMEZONES_KEY).unwrap().unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first,
        ["America/Phoenix|Office", "UTC|", "Asia/Tokyo|"]
    );
}

#[test]
fn test_add_is_idempotent() {
    let mut book = book();
    assert_eq!(book.add(zone("Asia/Tokyo")).unwrap().len(), 1);
    assert_eq!(book.add(zone("Asia/Tokyo")).unwrap().len(), 1);
    assert_eq!(book.zones().unwrap().len(), 1);
}

#[test]
fn test_add_keeps_existing_entry() {
    let mut book = book();
    book.add(UserZone::with_nickname("Asia/Tokyo", "HQ").unwrap()).unwrap();

    // A duplicate identifier is ignored even with a different nickname.
    let zones = book.add(zone("Asia/Tokyo")).unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].nickname(), Some("HQ"));
}

#[test]
fn test_add_appends_unsorted_until_reload() {
    let mut book = book();
    book.add(zone("Asia/Tokyo")).unwrap();
    let zones = book.add(zone("America/Phoenix")).unwrap();

    // The returned list carries the append at the end; the next load sorts.
    assert_eq!(zones.last().unwrap().identifier(), "America/Phoenix");
    assert_eq!(book.zones().unwrap()[0].identifier(), "America/Phoenix");
}

#[test]
fn test_remove_drops_entry() {
    let mut book = seeded(&["Asia/Tokyo|", "UTC|"]);
    let zones = book.remove(&zone("Asia/Tokyo")).unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].identifier(), "UTC");
    assert_eq!(book.zones().unwrap().len(), 1);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut book = seeded(&["UTC|"]);
    let zones = book.remove(&zone("Asia/Tokyo")).unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].identifier(), "UTC");
}

#[test]
fn test_replace_swaps_single_entry() {
    let book = seeded(&["America/Phoenix|", "UTC|", "Asia/Tokyo|"]);
    let zones = book.zones().unwrap();

    let renamed = UserZone::with_nickname("UTC", "Reference").unwrap();
    let replaced = replace(zones, renamed);

    assert_eq!(replaced.len(), 3);
    let matching: Vec<&UserZone> = replaced.iter().filter(|z| z.identifier() == "UTC").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].nickname(), Some("Reference"));
    // The replacement lands at the end, other entries keep their order.
    assert_eq!(replaced.last().unwrap().identifier(), "UTC");
    assert_eq!(replaced[0].identifier(), "America/Phoenix");
    assert_eq!(replaced[1].identifier(), "Asia/Tokyo");
}

#[test]
fn test_rename_persists_through_replace() {
    let mut book = seeded(&["Asia/Tokyo|", "UTC|"]);
    let zones = book.zones().unwrap();
    let replaced = replace(zones, UserZone::with_nickname("Asia/Tokyo", "HQ").unwrap());
    book.set_zones(&replaced).unwrap();

    let reloaded = book.zones().unwrap();
    let tokyo = reloaded.iter().find(|z| z.identifier() == "Asia/Tokyo").unwrap();
    assert_eq!(tokyo.nickname(), Some("HQ"));
}

#[test]
fn test_malformed_entries_are_skipped() {
    let book = seeded(&["Not/AZone|x", "Asia/Tokyo|", "garbage"]);
    let zones = book.zones().unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].identifier(), "Asia/Tokyo");
}
