// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The scene-graph collaborator surface.
//!
//! The engine decides geometry and asks the host canvas, behind
//! [`SceneGraph`], to materialize or remove visuals.

pub mod fixtures;

use std::fmt;

use smol_str::SmolStr;

use crate::model::{BoundingBox, NodeId, Point, RoutedPath, VisualId};

/// Materialization request for a connector line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub path: RoutedPath,
    pub stroke_width: f64,
    pub stroke_color: String,
    /// Alternating dash/gap lengths; empty means solid.
    pub dash_pattern: Vec<f64>,
}

/// Materialization request for a terminal decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationSpec {
    pub shape: DecorationShape,
    pub fill_color: String,
}

/// Decoration geometry, already positioned in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DecorationShape {
    Circle { center: Point, diameter: f64 },
    Square { center: Point, size: f64 },
    Diamond { points: [Point; 4] },
    Arrow { points: [Point; 3] },
}

/// Change feed entry delivered by the host, one batch at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    Created {
        node_id: NodeId,
    },
    Deleted {
        node_id: NodeId,
    },
    PropertyChanged {
        node_id: NodeId,
        properties: Vec<SmolStr>,
    },
}

impl ChangeEvent {
    pub fn node_id(&self) -> &NodeId {
        match self {
            Self::Created { node_id }
            | Self::Deleted { node_id }
            | Self::PropertyChanged { node_id, .. } => node_id,
        }
    }
}

/// Ordered selection snapshot delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    selected_ids: Vec<NodeId>,
}

impl SelectionEvent {
    pub fn new(selected_ids: Vec<NodeId>) -> Self {
        Self { selected_ids }
    }

    pub fn selected_ids(&self) -> &[NodeId] {
        &self.selected_ids
    }
}

/// Only these properties can move an anchor; everything else is ignored by
/// the change tracker for cost reasons.
pub const GEOMETRY_PROPERTIES: [&str; 4] = ["x", "y", "width", "height"];

pub fn is_geometry_property(name: &str) -> bool {
    GEOMETRY_PROPERTIES.contains(&name)
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    NodeMissing { node_id: NodeId },
    VisualMissing { visual_id: VisualId },
    Unavailable { detail: String },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeMissing { node_id } => write!(f, "scene node {node_id} is missing"),
            Self::VisualMissing { visual_id } => {
                write!(f, "scene visual {visual_id} is missing")
            }
            Self::Unavailable { detail } => write!(f, "scene unavailable: {detail}"),
        }
    }
}

impl std::error::Error for SceneError {}

/// What the engine needs from the host canvas.
///
/// `remove` on an already-absent visual must be reported as
/// [`SceneError::VisualMissing`]; the engine treats that as a benign no-op.
pub trait SceneGraph {
    /// Current bounds of a node, or `None` if it no longer exists.
    fn bounding_box(&self, node_id: &NodeId) -> Option<BoundingBox>;

    /// Whether the node is currently present in the scene.
    fn exists(&self, node_id: &NodeId) -> bool;

    /// Bounds of every visible, connectable object. Used only as an obstacle
    /// probe; a failure here degrades routing, never aborts it.
    fn visible_bounds(&self) -> Result<Vec<(NodeId, BoundingBox)>, SceneError>;

    fn create_line(&mut self, spec: &LineSpec) -> Result<VisualId, SceneError>;

    fn create_decoration(&mut self, spec: &DecorationSpec) -> Result<VisualId, SceneError>;

    fn append_to_parent(&mut self, visual_id: &VisualId, parent_id: &NodeId)
        -> Result<(), SceneError>;

    fn remove(&mut self, visual_id: &VisualId) -> Result<(), SceneError>;
}

#[cfg(test)]
mod tests {
    use super::is_geometry_property;

    #[test]
    fn only_bounds_properties_are_geometric() {
        assert!(is_geometry_property("x"));
        assert!(is_geometry_property("height"));
        assert!(!is_geometry_property("fills"));
        assert!(!is_geometry_property("name"));
    }
}
