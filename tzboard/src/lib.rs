// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Core logic for a personal time-zone board.
//!
//! A user keeps a short list of IANA time zones, each with an optional
//! nickname, and reads every zone's clock against a reference instant that
//! defaults to "now". The pieces:
//!
//! - [`UserZone`] - one tracked zone plus the `"<identifier>|<nickname>"`
//!   wire codec used for persistence
//! - [`registry`] - enumeration and search of every zone the bundled IANA
//!   database knows
//! - [`ZoneBook`] - CRUD over the saved list, behind an injected
//!   [`tzboard_store::PreferenceStore`]
//! - [`clock`] - UTC offset math, the `"<identifier>-Current"` viewed-from
//!   wire format and the ephemeral [`ViewState`]
//! - [`format`] - city/country labels, truncated 12-hour clock strings and
//!   copy snippets
//!
//! Offsets are evaluated with each zone's present-moment rule, not the rule
//! in force at the displayed instant. Around DST transitions the shifted
//! clocks can therefore be off by the transition amount; callers that need
//! historically exact conversion should render through
//! [`chrono::DateTime::with_timezone`] instead.
//!
//! # Example
//!
//! ```
//! use tzboard::{UserZone, ZoneBook};
//! use tzboard_store::MemoryStore;
//!
//! let mut book = ZoneBook::new(MemoryStore::new());
//! book.add(UserZone::with_nickname("Europe/London", "UK Office").unwrap()).unwrap();
//! let zones = book.zones().unwrap();
//! assert_eq!(zones[0].nickname(), Some("UK Office"));
//! ```

mod book;
pub mod clock;
mod entry;
pub mod format;
pub mod registry;

pub use book::{replace, ZoneBook, TIMEZONES_KEY};
pub use clock::ViewState;
pub use entry::{ParseZoneError, UserZone};

#[cfg(test)]
mod tests;
