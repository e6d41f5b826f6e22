// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory scene double used by unit tests, the integration suite, and the
//! routing bench.

use std::collections::BTreeMap;

use crate::model::{BoundingBox, NodeId, VisualId};

use super::{DecorationSpec, LineSpec, SceneError, SceneGraph};

#[derive(Debug, Clone, PartialEq)]
pub enum VisualKind {
    Line(LineSpec),
    Decoration(DecorationSpec),
}

/// Journal entry recording one mutating call, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneOp {
    CreateLine(VisualId),
    CreateDecoration(VisualId),
    Append(VisualId),
    Remove(VisualId),
}

#[derive(Debug, Default)]
pub struct CanvasFixture {
    nodes: BTreeMap<NodeId, BoundingBox>,
    visuals: BTreeMap<VisualId, VisualKind>,
    journal: Vec<SceneOp>,
    next_visual: u64,
    fail_visible_bounds: bool,
}

impl CanvasFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node_id: NodeId, bounds: BoundingBox) {
        self.nodes.insert(node_id, bounds);
    }

    pub fn move_node(&mut self, node_id: &NodeId, bounds: BoundingBox) {
        if let Some(existing) = self.nodes.get_mut(node_id) {
            *existing = bounds;
        }
    }

    pub fn delete_node(&mut self, node_id: &NodeId) {
        self.nodes.remove(node_id);
    }

    /// Simulate the obstacle probe failing (collaborator returns no data).
    pub fn set_fail_visible_bounds(&mut self, fail: bool) {
        self.fail_visible_bounds = fail;
    }

    pub fn visual(&self, visual_id: &VisualId) -> Option<&VisualKind> {
        self.visuals.get(visual_id)
    }

    pub fn line_spec(&self, visual_id: &VisualId) -> Option<&LineSpec> {
        match self.visuals.get(visual_id) {
            Some(VisualKind::Line(spec)) => Some(spec),
            _ => None,
        }
    }

    pub fn visual_count(&self) -> usize {
        self.visuals.len()
    }

    pub fn decoration_count(&self) -> usize {
        self.visuals
            .values()
            .filter(|kind| matches!(kind, VisualKind::Decoration(_)))
            .count()
    }

    pub fn journal(&self) -> &[SceneOp] {
        &self.journal
    }

    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    /// Remove a visual behind the engine's back, to exercise the benign
    /// double-removal path.
    pub fn drop_visual(&mut self, visual_id: &VisualId) {
        self.visuals.remove(visual_id);
    }

    fn next_visual_id(&mut self) -> VisualId {
        self.next_visual += 1;
        VisualId::new(format!("v{}", self.next_visual)).expect("generated visual id")
    }
}

impl SceneGraph for CanvasFixture {
    fn bounding_box(&self, node_id: &NodeId) -> Option<BoundingBox> {
        self.nodes.get(node_id).copied()
    }

    fn exists(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    fn visible_bounds(&self) -> Result<Vec<(NodeId, BoundingBox)>, SceneError> {
        if self.fail_visible_bounds {
            return Err(SceneError::Unavailable {
                detail: "visible bounds probe disabled".to_owned(),
            });
        }
        Ok(self
            .nodes
            .iter()
            .map(|(node_id, bounds)| (node_id.clone(), *bounds))
            .collect())
    }

    fn create_line(&mut self, spec: &LineSpec) -> Result<VisualId, SceneError> {
        let visual_id = self.next_visual_id();
        self.visuals
            .insert(visual_id.clone(), VisualKind::Line(spec.clone()));
        self.journal.push(SceneOp::CreateLine(visual_id.clone()));
        Ok(visual_id)
    }

    fn create_decoration(&mut self, spec: &DecorationSpec) -> Result<VisualId, SceneError> {
        let visual_id = self.next_visual_id();
        self.visuals
            .insert(visual_id.clone(), VisualKind::Decoration(spec.clone()));
        self.journal
            .push(SceneOp::CreateDecoration(visual_id.clone()));
        Ok(visual_id)
    }

    fn append_to_parent(
        &mut self,
        visual_id: &VisualId,
        parent_id: &NodeId,
    ) -> Result<(), SceneError> {
        if !self.visuals.contains_key(visual_id) {
            return Err(SceneError::VisualMissing {
                visual_id: visual_id.clone(),
            });
        }
        if !self.nodes.contains_key(parent_id) {
            return Err(SceneError::NodeMissing {
                node_id: parent_id.clone(),
            });
        }
        self.journal.push(SceneOp::Append(visual_id.clone()));
        Ok(())
    }

    fn remove(&mut self, visual_id: &VisualId) -> Result<(), SceneError> {
        if self.visuals.remove(visual_id).is_none() {
            return Err(SceneError::VisualMissing {
                visual_id: visual_id.clone(),
            });
        }
        self.journal.push(SceneOp::Remove(visual_id.clone()));
        Ok(())
    }
}
