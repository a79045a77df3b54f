// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The user-tracked zone entry and its persistence codec.

use std::fmt;

use chrono_tz::Tz;

/// One tracked time zone with an optional display nickname.
///
/// A missing nickname means "derive the city label from the identifier". An
/// empty nickname, or one equal to the identifier itself, collapses to
/// missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserZone {
    zone: Tz,
    nickname: Option<String>,
}

impl UserZone {
    /// Wrap a zone with no nickname.
    pub fn new(zone: Tz) -> Self {
        Self {
            zone,
            nickname: None,
        }
    }

    /// Build an entry from an identifier and nickname, the rename flow.
    /// An empty nickname clears the override.
    pub fn with_nickname(identifier: &str, nickname: &str) -> Result<Self, ParseZoneError> {
        let zone = parse_zone(identifier)?;
        Ok(Self {
            zone,
            nickname: normalize_nickname(nickname, identifier),
        })
    }

    /// Decode a persisted `"<identifier>|<nickname-or-empty>"` string.
    pub fn decode(raw: &str) -> Result<Self, ParseZoneError> {
        let (identifier, nickname) = raw.split_once('|').unwrap_or((raw, ""));
        let zone = parse_zone(identifier)?;
        Ok(Self {
            zone,
            nickname: normalize_nickname(nickname, identifier),
        })
    }

    /// Encode for persistence. A missing nickname encodes as an empty field.
    pub fn encode(&self) -> String {
        format!(
            "{}|{}",
            self.identifier(),
            self.nickname.as_deref().unwrap_or("")
        )
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// The canonical IANA identifier, e.g. `"America/New_York"`.
    pub fn identifier(&self) -> &'static str {
        self.zone.name()
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }
}

fn normalize_nickname(nickname: &str, identifier: &str) -> Option<String> {
    if nickname.is_empty() || nickname == identifier {
        None
    } else {
        Some(nickname.to_string())
    }
}

pub(crate) fn parse_zone(identifier: &str) -> Result<Tz, ParseZoneError> {
    identifier.parse().map_err(|_| ParseZoneError {
        name: identifier.to_string(),
    })
}

/// Error returned when an identifier does not name a known zone.
#[derive(Debug, Clone)]
pub struct ParseZoneError {
    name: String,
}

impl ParseZoneError {
    /// The identifier that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid timezone: {}", self.name)
    }
}

impl std::error::Error for ParseZoneError {}
