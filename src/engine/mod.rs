// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connection registry and change tracker.
//!
//! Change batches are processed strictly serially, and per-connection
//! failures never abort the rest of a batch.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use smallvec::SmallVec;

use crate::model::{
    BoundingBox, Connection, ConnectionId, Endpoint, NodeId, RoutedPath, Style, StyleDefaults,
    VisualId,
};
use crate::routing::{
    find_obstacles, plan_path, select_anchors, terminal_decoration, AnchorPlan, Obstacle,
    MAX_OBSTACLES,
};
use crate::scene::{
    is_geometry_property, ChangeEvent, LineSpec, SceneError, SceneGraph, SelectionEvent,
};

/// Scheduling discipline for the update pass. Only `Idle` accepts a new pass;
/// anything arriving during `Recomputing` is deferred, never interleaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingState {
    #[default]
    Idle,
    Recomputing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    IdenticalEndpoints { node_id: NodeId },
    EndpointMissing { node_id: NodeId },
    Scene { source: SceneError },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdenticalEndpoints { node_id } => {
                write!(f, "connection endpoints both reference {node_id}")
            }
            Self::EndpointMissing { node_id } => {
                write!(f, "endpoint object {node_id} is missing from the scene")
            }
            Self::Scene { source } => write!(f, "scene call failed: {source}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scene { source } => Some(source),
            _ => None,
        }
    }
}

/// Outcome of one attempted connection creation from a selection pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowCreated {
    pub connection_id: ConnectionId,
    pub success: bool,
}

/// What one change pass did, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSummary {
    pub recomputed: Vec<ConnectionId>,
    pub removed: Vec<ConnectionId>,
    pub skipped: Vec<(ConnectionId, EngineError)>,
    /// True when the batch arrived mid-pass and was queued for the pass
    /// already in flight.
    pub deferred: bool,
}

#[derive(Debug, Default)]
pub struct FlowEngine {
    connections: BTreeMap<ConnectionId, Connection>,
    tracked: BTreeSet<NodeId>,
    state: ProcessingState,
    pending: VecDeque<ChangeEvent>,
    next_serial: u64,
    active: bool,
    parent_id: Option<NodeId>,
}

impl FlowEngine {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    /// Scene node new visuals are appended to. When unset, visuals stay where
    /// the host's `create*` calls put them.
    pub fn set_parent(&mut self, parent_id: Option<NodeId>) {
        self.parent_id = parent_id;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn state(&self) -> ProcessingState {
        self.state
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn connection(&self, connection_id: &ConnectionId) -> Option<&Connection> {
        self.connections.get(connection_id)
    }

    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Derived set of every endpoint identity referenced by a live
    /// connection. Rebuilt wholesale after each registry mutation.
    pub fn tracked_identities(&self) -> &BTreeSet<NodeId> {
        &self.tracked
    }

    /// Create a connection between two distinct scene objects.
    pub fn connect(
        &mut self,
        scene: &mut dyn SceneGraph,
        from: Endpoint,
        to: Endpoint,
        style: Style,
    ) -> Result<ConnectionId, EngineError> {
        let connection_id = self.next_connection_id();
        self.connect_as(scene, connection_id.clone(), from, to, style)?;
        Ok(connection_id)
    }

    /// Connect consecutive pairs of an ordered selection, snapshotting the
    /// current style defaults per connection. Inactive engines ignore
    /// selections entirely.
    pub fn handle_selection(
        &mut self,
        scene: &mut dyn SceneGraph,
        event: &SelectionEvent,
        defaults: &StyleDefaults,
    ) -> Vec<FlowCreated> {
        let mut outcomes = Vec::new();
        if !self.active {
            return outcomes;
        }

        for pair in event.selected_ids().windows(2) {
            let (from_id, to_id) = (&pair[0], &pair[1]);
            if from_id == to_id {
                continue;
            }

            let connection_id = self.next_connection_id();
            let success = self
                .connect_as(
                    scene,
                    connection_id.clone(),
                    Endpoint::new(from_id.clone()),
                    Endpoint::new(to_id.clone()),
                    defaults.snapshot(),
                )
                .is_ok();
            outcomes.push(FlowCreated {
                connection_id,
                success,
            });
        }

        outcomes
    }

    /// Process one change batch from the host.
    ///
    /// The processing-state guard makes overlapping passes unrepresentable: a
    /// batch arriving during a pass is queued and drained right after the
    /// current one, and the state always returns to `Idle` before this
    /// function hands control back, even when individual connections failed.
    pub fn handle_changes(
        &mut self,
        scene: &mut dyn SceneGraph,
        events: Vec<ChangeEvent>,
    ) -> ChangeSummary {
        let mut summary = ChangeSummary::default();

        if self.state == ProcessingState::Recomputing {
            self.pending.extend(events);
            summary.deferred = true;
            return summary;
        }

        self.state = ProcessingState::Recomputing;

        let mut batch: VecDeque<ChangeEvent> = events.into();
        loop {
            while let Some(event) = batch.pop_front() {
                self.apply_event(scene, event, &mut summary);
            }
            if self.pending.is_empty() {
                break;
            }
            batch = std::mem::take(&mut self.pending);
        }

        self.state = ProcessingState::Idle;
        summary
    }

    /// Remove one connection, releasing its line and every decoration.
    /// Returns false (a no-op, not an error) when the connection is already
    /// gone.
    pub fn remove_connection(
        &mut self,
        scene: &mut dyn SceneGraph,
        connection_id: &ConnectionId,
    ) -> bool {
        let Some(connection) = self.connections.remove(connection_id) else {
            return false;
        };

        self.release_visuals(scene, &connection);
        self.rebuild_tracked();
        true
    }

    /// Bulk clear: removes every live connection and its visuals.
    pub fn clear(&mut self, scene: &mut dyn SceneGraph) -> Vec<ConnectionId> {
        let ids = self.connections.keys().cloned().collect::<Vec<_>>();
        for connection_id in &ids {
            self.remove_connection(scene, connection_id);
        }
        ids
    }

    fn apply_event(
        &mut self,
        scene: &mut dyn SceneGraph,
        event: ChangeEvent,
        summary: &mut ChangeSummary,
    ) {
        match event {
            // A freshly created object cannot be referenced by a live
            // connection yet.
            ChangeEvent::Created { .. } => {}
            ChangeEvent::Deleted { node_id } => {
                if !self.tracked.contains(&node_id) {
                    return;
                }
                // Only a deletion the scene confirms is terminal; a stale
                // notification for a still-present object changes nothing.
                if scene.exists(&node_id) {
                    return;
                }
                for connection_id in self.affected_by(&node_id) {
                    if self.remove_connection(scene, &connection_id) {
                        summary.removed.push(connection_id);
                    }
                }
            }
            ChangeEvent::PropertyChanged {
                node_id,
                properties,
            } => {
                if !self.tracked.contains(&node_id) {
                    return;
                }
                if !properties.iter().any(|name| is_geometry_property(name)) {
                    return;
                }
                for connection_id in self.affected_by(&node_id) {
                    match self.recompute(scene, &connection_id) {
                        Ok(true) => summary.recomputed.push(connection_id),
                        Ok(false) => {}
                        Err(error) => summary.skipped.push((connection_id, error)),
                    }
                }
            }
        }
    }

    /// Recompute one connection's geometry against fresh bounding boxes.
    ///
    /// Returns `Ok(false)` when the routed path is unchanged (nothing is
    /// swapped, keeping recomputation idempotent and write-free). On change,
    /// the replacement line is created and appended *before* the old one is
    /// removed, so there is never a frame without a visible line.
    fn recompute(
        &mut self,
        scene: &mut dyn SceneGraph,
        connection_id: &ConnectionId,
    ) -> Result<bool, EngineError> {
        let Some(connection) = self.connections.get(connection_id) else {
            return Ok(false);
        };
        let from = connection.from().clone();
        let to = connection.to().clone();
        let style = connection.style().clone();
        let previous_path = connection.path().clone();

        let (a, b) = self.endpoint_bounds(&*scene, &from, &to)?;
        let (plan, path) = route(&*scene, &from, &to, &a, &b, &style);

        if path == previous_path {
            return Ok(false);
        }

        let new_line = self.materialize_line(scene, &path, &style)?;
        let new_decorations = match self.materialize_decorations(scene, &plan, &style) {
            Ok(decorations) => decorations,
            Err(error) => {
                // Creation failed midway: drop what we just made and keep the
                // old visuals in place.
                let _ = scene.remove(&new_line);
                return Err(error);
            }
        };

        let connection = self
            .connections
            .get_mut(connection_id)
            .expect("connection checked above");
        let old_line = connection.replace_line(new_line);
        let old_decorations = connection.replace_decorations(new_decorations);
        connection.set_path(path);
        connection.from_mut().set_resolved_edge(plan.start_edge);
        connection.to_mut().set_resolved_edge(plan.end_edge);

        // Old visuals may already be gone; double removal is benign.
        let _ = scene.remove(&old_line);
        for decoration in old_decorations {
            let _ = scene.remove(&decoration);
        }

        Ok(true)
    }

    fn connect_as(
        &mut self,
        scene: &mut dyn SceneGraph,
        connection_id: ConnectionId,
        mut from: Endpoint,
        mut to: Endpoint,
        style: Style,
    ) -> Result<(), EngineError> {
        if from.node_id() == to.node_id() {
            return Err(EngineError::IdenticalEndpoints {
                node_id: from.node_id().clone(),
            });
        }

        let (a, b) = self.endpoint_bounds(&*scene, &from, &to)?;
        let (plan, path) = route(&*scene, &from, &to, &a, &b, &style);

        let line = self.materialize_line(scene, &path, &style)?;
        let decorations = match self.materialize_decorations(scene, &plan, &style) {
            Ok(decorations) => decorations,
            Err(error) => {
                let _ = scene.remove(&line);
                return Err(error);
            }
        };

        from.set_resolved_edge(plan.start_edge);
        to.set_resolved_edge(plan.end_edge);

        self.connections.insert(
            connection_id.clone(),
            Connection::new(connection_id, from, to, style, line, decorations, path),
        );
        self.rebuild_tracked();
        Ok(())
    }

    fn endpoint_bounds(
        &self,
        scene: &dyn SceneGraph,
        from: &Endpoint,
        to: &Endpoint,
    ) -> Result<(BoundingBox, BoundingBox), EngineError> {
        let a = scene
            .bounding_box(from.node_id())
            .ok_or_else(|| EngineError::EndpointMissing {
                node_id: from.node_id().clone(),
            })?;
        let b = scene
            .bounding_box(to.node_id())
            .ok_or_else(|| EngineError::EndpointMissing {
                node_id: to.node_id().clone(),
            })?;
        Ok((a, b))
    }

    fn materialize_line(
        &self,
        scene: &mut dyn SceneGraph,
        path: &RoutedPath,
        style: &Style,
    ) -> Result<VisualId, EngineError> {
        let spec = LineSpec {
            path: path.clone(),
            stroke_width: style.stroke_width,
            stroke_color: style.stroke_color.clone(),
            dash_pattern: style.line_kind.dash_pattern(style.stroke_width),
        };
        let line = scene
            .create_line(&spec)
            .map_err(|source| EngineError::Scene { source })?;
        if let Err(source) = self.append(scene, &line) {
            let _ = scene.remove(&line);
            return Err(EngineError::Scene { source });
        }
        Ok(line)
    }

    fn materialize_decorations(
        &self,
        scene: &mut dyn SceneGraph,
        plan: &AnchorPlan,
        style: &Style,
    ) -> Result<Vec<VisualId>, EngineError> {
        let terminals = [
            (plan.start, style.start_terminal, plan.start_edge),
            (plan.end, style.end_terminal, plan.end_edge),
        ];

        let mut decorations = Vec::new();
        for (point, kind, edge) in terminals {
            let Some(spec) = terminal_decoration(point, kind, style, edge) else {
                continue;
            };
            let decoration = match scene.create_decoration(&spec) {
                Ok(decoration) => decoration,
                Err(source) => {
                    for created in &decorations {
                        let _ = scene.remove(created);
                    }
                    return Err(EngineError::Scene { source });
                }
            };
            if let Err(source) = self.append(scene, &decoration) {
                let _ = scene.remove(&decoration);
                for created in &decorations {
                    let _ = scene.remove(created);
                }
                return Err(EngineError::Scene { source });
            }
            decorations.push(decoration);
        }
        Ok(decorations)
    }

    fn append(
        &self,
        scene: &mut dyn SceneGraph,
        visual_id: &VisualId,
    ) -> Result<(), SceneError> {
        match &self.parent_id {
            Some(parent_id) => scene.append_to_parent(visual_id, parent_id),
            None => Ok(()),
        }
    }

    fn release_visuals(&self, scene: &mut dyn SceneGraph, connection: &Connection) {
        // Tolerate visuals the host already deleted.
        let _ = scene.remove(connection.line());
        for decoration in connection.decorations() {
            let _ = scene.remove(decoration);
        }
    }

    fn affected_by(&self, node_id: &NodeId) -> Vec<ConnectionId> {
        self.connections
            .values()
            .filter(|connection| connection.references(node_id))
            .map(|connection| connection.connection_id().clone())
            .collect()
    }

    fn rebuild_tracked(&mut self) {
        self.tracked = self
            .connections
            .values()
            .flat_map(|connection| {
                [
                    connection.from().node_id().clone(),
                    connection.to().node_id().clone(),
                ]
            })
            .collect();
    }

    fn next_connection_id(&mut self) -> ConnectionId {
        self.next_serial += 1;
        ConnectionId::new(format!("flow-{}", self.next_serial)).expect("generated connection id")
    }
}

/// One routing pass: anchors, obstacle probe (when the style asks for it),
/// then the planned path.
fn route(
    scene: &dyn SceneGraph,
    from: &Endpoint,
    to: &Endpoint,
    a: &BoundingBox,
    b: &BoundingBox,
    style: &Style,
) -> (AnchorPlan, RoutedPath) {
    let plan = select_anchors(a, b, from.edge(), to.edge(), from.offset(), to.offset());

    let obstacles: SmallVec<[Obstacle; MAX_OBSTACLES]> = if style.auto_avoid_obstacles {
        let exclude = [from.node_id().clone(), to.node_id().clone()]
            .into_iter()
            .collect();
        find_obstacles(scene, plan.start, plan.end, &exclude)
    } else {
        SmallVec::new()
    };

    let path = plan_path(&plan, style, &obstacles);
    (plan, path)
}
