// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Host-facing dispatch: UI commands and scene feeds in, notifications out.
//!
//! Persistence is best-effort; a storage failure never degrades the live
//! canvas.

pub mod types;

pub use types::{UiCommand, UiNotification};

use crate::engine::FlowEngine;
use crate::model::{ConnectionId, Style, StyleDefaults};
use crate::scene::{ChangeEvent, SceneGraph, SelectionEvent};
use crate::store::{encode_record, record_key, ConnectionRecord, RecordStore};

#[derive(Debug, Default)]
pub struct FlowBridge {
    engine: FlowEngine,
    defaults: StyleDefaults,
}

impl FlowBridge {
    pub fn new() -> Self {
        Self {
            engine: FlowEngine::new(),
            defaults: StyleDefaults::new(Style::default()),
        }
    }

    pub fn engine(&self) -> &FlowEngine {
        &self.engine
    }

    pub fn defaults(&self) -> &StyleDefaults {
        &self.defaults
    }

    /// Dispatch one inbound panel command.
    pub fn handle_command(
        &mut self,
        scene: &mut dyn SceneGraph,
        store: &mut dyn RecordStore,
        command: UiCommand,
    ) -> Vec<UiNotification> {
        match command {
            UiCommand::ToggleActive { active } => {
                self.engine.set_active(active);
                vec![self.stats()]
            }
            UiCommand::ClearAll => {
                let removed = self.engine.clear(scene);
                for connection_id in &removed {
                    let _ = store.delete(&record_key(connection_id));
                }
                vec![self.stats()]
            }
            UiCommand::GetStats => vec![self.stats()],
            UiCommand::UpdateStyle(patch) => {
                self.defaults.apply_style(&patch);
                Vec::new()
            }
            UiCommand::UpdateRouting(patch) => {
                self.defaults.apply_routing(&patch);
                Vec::new()
            }
        }
    }

    /// Feed one host selection snapshot; each qualifying pair becomes a
    /// connection and a `flow-created` notification.
    pub fn handle_selection(
        &mut self,
        scene: &mut dyn SceneGraph,
        store: &mut dyn RecordStore,
        event: &SelectionEvent,
    ) -> Vec<UiNotification> {
        let outcomes = self
            .engine
            .handle_selection(scene, event, &self.defaults);

        let mut notifications = Vec::with_capacity(outcomes.len() + 1);
        let mut any_created = false;
        for outcome in outcomes {
            if outcome.success {
                any_created = true;
                self.persist(store, &outcome.connection_id);
            }
            notifications.push(UiNotification::FlowCreated {
                flow_id: outcome.connection_id.to_string(),
                success: outcome.success,
            });
        }
        if any_created {
            notifications.push(self.stats());
        }
        notifications
    }

    /// Feed one scene change batch.
    pub fn handle_changes(
        &mut self,
        scene: &mut dyn SceneGraph,
        store: &mut dyn RecordStore,
        events: Vec<ChangeEvent>,
    ) -> Vec<UiNotification> {
        let summary = self.engine.handle_changes(scene, events);

        for connection_id in &summary.removed {
            let _ = store.delete(&record_key(connection_id));
        }

        if summary.removed.is_empty() {
            Vec::new()
        } else {
            vec![self.stats()]
        }
    }

    fn persist(&self, store: &mut dyn RecordStore, connection_id: &ConnectionId) {
        let Some(connection) = self.engine.connection(connection_id) else {
            return;
        };
        let record = ConnectionRecord::for_connection(connection);
        if let Ok(encoded) = encode_record(&record) {
            let _ = store.set(&record_key(connection_id), &encoded);
        }
    }

    fn stats(&self) -> UiNotification {
        UiNotification::StatsUpdate {
            count: self.engine.connection_count() as u64,
            is_active: self.engine.is_active(),
        }
    }
}
