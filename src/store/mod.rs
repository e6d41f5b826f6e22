// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persisted per-connection records.
//!
//! Records carry identities, attachment parameters, and the style snapshot,
//! so a host can re-associate visuals with logical connections across
//! reloads.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Connection, ConnectionId, EdgePreference, Style};

/// Entry cap enforced by the storage collaborator; encoding checks it up
/// front so an oversized write never reaches the host.
pub const MAX_RECORD_BYTES: usize = 100 * 1024;

/// Serialized form of one logical connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRecord {
    pub connection_id: String,
    pub from_node_id: String,
    pub to_node_id: String,
    pub from_edge: EdgePreference,
    pub from_offset: f64,
    pub to_edge: EdgePreference,
    pub to_offset: f64,
    pub style: Style,
}

impl ConnectionRecord {
    pub fn for_connection(connection: &Connection) -> Self {
        Self {
            connection_id: connection.connection_id().to_string(),
            from_node_id: connection.from().node_id().to_string(),
            to_node_id: connection.to().node_id().to_string(),
            from_edge: connection.from().edge(),
            from_offset: connection.from().offset(),
            to_edge: connection.to().edge(),
            to_offset: connection.to().offset(),
            style: connection.style().clone(),
        }
    }
}

/// Storage key for one connection's record.
pub fn record_key(connection_id: &ConnectionId) -> String {
    format!("flow/{connection_id}")
}

pub fn encode_record(record: &ConnectionRecord) -> Result<String, StoreError> {
    let encoded =
        serde_json::to_string(record).map_err(|source| StoreError::Json { source })?;
    if encoded.len() > MAX_RECORD_BYTES {
        return Err(StoreError::EntryTooLarge {
            bytes: encoded.len(),
        });
    }
    Ok(encoded)
}

pub fn decode_record(encoded: &str) -> Result<ConnectionRecord, StoreError> {
    serde_json::from_str(encoded).map_err(|source| StoreError::Json { source })
}

#[derive(Debug)]
pub enum StoreError {
    Json { source: serde_json::Error },
    EntryTooLarge { bytes: usize },
    Backend { detail: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "record serialization failed: {source}"),
            Self::EntryTooLarge { bytes } => write!(
                f,
                "record is {bytes} bytes, over the {MAX_RECORD_BYTES}-byte entry cap"
            ),
            Self::Backend { detail } => write!(f, "storage backend failed: {detail}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            _ => None,
        }
    }
}

/// Get/set-by-key surface the storage collaborator implements.
pub trait RecordStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store used by tests and hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    entries: BTreeMap<String, String>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl RecordStore for MemoryRecordStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if value.len() > MAX_RECORD_BYTES {
            return Err(StoreError::EntryTooLarge { bytes: value.len() });
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
