// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::geometry::{Edge, RoutedPath};
use super::ids::{ConnectionId, NodeId, VisualId};
use super::style::Style;

/// Which boundary edge an endpoint should attach to.
///
/// `Auto` resolves by relative position at routing time; the other variants
/// pin the edge regardless of where the partner object sits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum EdgePreference {
    #[default]
    Auto,
    Top,
    Bottom,
    Left,
    Right,
}

impl EdgePreference {
    pub fn pinned(self) -> Option<Edge> {
        match self {
            Self::Auto => None,
            Self::Top => Some(Edge::Top),
            Self::Bottom => Some(Edge::Bottom),
            Self::Left => Some(Edge::Left),
            Self::Right => Some(Edge::Right),
        }
    }
}

/// One end of a connection: a reference to an external object identity plus
/// attachment parameters.
///
/// Immutable except for `resolved_edge`, which routing rewrites on every
/// recomputation.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    node_id: NodeId,
    edge: EdgePreference,
    offset: f64,
    resolved_edge: Option<Edge>,
}

impl Endpoint {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            edge: EdgePreference::Auto,
            offset: 0.0,
            resolved_edge: None,
        }
    }

    pub fn with_edge(mut self, edge: EdgePreference) -> Self {
        self.edge = edge;
        self
    }

    /// Offset distance from the object boundary; negative values are clamped
    /// to zero.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset.max(0.0);
        self
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn edge(&self) -> EdgePreference {
        self.edge
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn resolved_edge(&self) -> Option<Edge> {
        self.resolved_edge
    }

    pub(crate) fn set_resolved_edge(&mut self, edge: Edge) {
        self.resolved_edge = Some(edge);
    }
}

/// A live connector.
///
/// The connection exclusively owns its visual line and decorations: nothing
/// else mutates them, and they are released exactly when the connection is
/// removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    connection_id: ConnectionId,
    from: Endpoint,
    to: Endpoint,
    style: Style,
    line: VisualId,
    decorations: Vec<VisualId>,
    path: RoutedPath,
}

impl Connection {
    pub fn new(
        connection_id: ConnectionId,
        from: Endpoint,
        to: Endpoint,
        style: Style,
        line: VisualId,
        decorations: Vec<VisualId>,
        path: RoutedPath,
    ) -> Self {
        debug_assert_ne!(from.node_id(), to.node_id());
        Self {
            connection_id,
            from,
            to,
            style,
            line,
            decorations,
            path,
        }
    }

    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn from(&self) -> &Endpoint {
        &self.from
    }

    pub fn to(&self) -> &Endpoint {
        &self.to
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn line(&self) -> &VisualId {
        &self.line
    }

    pub fn decorations(&self) -> &[VisualId] {
        &self.decorations
    }

    pub fn path(&self) -> &RoutedPath {
        &self.path
    }

    /// Whether either endpoint references the given identity.
    pub fn references(&self, node_id: &NodeId) -> bool {
        self.from.node_id() == node_id || self.to.node_id() == node_id
    }

    pub(crate) fn from_mut(&mut self) -> &mut Endpoint {
        &mut self.from
    }

    pub(crate) fn to_mut(&mut self) -> &mut Endpoint {
        &mut self.to
    }

    /// Swap in a freshly materialized line, returning the previous one so the
    /// caller can remove it after the replacement is in the scene.
    pub(crate) fn replace_line(&mut self, line: VisualId) -> VisualId {
        std::mem::replace(&mut self.line, line)
    }

    pub(crate) fn replace_decorations(&mut self, decorations: Vec<VisualId>) -> Vec<VisualId> {
        std::mem::replace(&mut self.decorations, decorations)
    }

    pub(crate) fn set_path(&mut self, path: RoutedPath) {
        self.path = path;
    }
}

#[cfg(test)]
mod tests {
    use super::{Endpoint, EdgePreference};
    use crate::model::NodeId;

    #[test]
    fn endpoint_clamps_negative_offsets() {
        let node_id = NodeId::new("n1").expect("node id");
        let endpoint = Endpoint::new(node_id).with_offset(-3.0);
        assert_eq!(endpoint.offset(), 0.0);
    }

    #[test]
    fn pinned_edges_resolve_only_for_non_auto() {
        assert_eq!(EdgePreference::Auto.pinned(), None);
        assert!(EdgePreference::Left.pinned().is_some());
    }
}
