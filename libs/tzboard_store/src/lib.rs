// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Preference store abstractions for tzboard.
//!
//! The saved zone list lives in a key-value store of string lists, the shape
//! exposed by platform preference stores. The store is injected into the
//! consuming service rather than reached as ambient global state, so every
//! backend stays swappable:
//!
//! - [`MemoryStore`] - ephemeral map, used by tests and as a stand-in store
//! - [`FileStore`] - a single JSON file on disk (feature `file`, default on)
//!
//! A missing key is not an error; [`PreferenceStore::get`] returns `Ok(None)`
//! and callers treat it as an empty list. Writes overwrite the whole value
//! under the key, last write wins.

use std::fmt;
use std::io;

mod memory;

#[cfg(feature = "file")]
mod file;

pub use memory::MemoryStore;

#[cfg(feature = "file")]
pub use file::FileStore;

/// Key-value store of string lists.
pub trait PreferenceStore {
    /// Read the list stored under `key`. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<Vec<String>>, StoreError>;

    /// Overwrite the list stored under `key`.
    fn set(&mut self, key: &str, values: &[String]) -> Result<(), StoreError>;
}

/// Store error types
#[derive(Debug)]
pub enum StoreError {
    /// Error reading or writing the backing file
    Io(io::Error),
    /// Error encoding or decoding the backing file
    #[cfg(feature = "file")]
    Serde(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Store io error: {}", err),
            #[cfg(feature = "file")]
            Self::Serde(err) => write!(f, "Store encoding error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            #[cfg(feature = "file")]
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(feature = "file")]
impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err)
    }
}
