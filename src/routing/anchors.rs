// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Anchor selection: which edge of each object a connector attaches to, and
//! the exact boundary points.

use crate::model::{BoundingBox, Edge, EdgePreference, Point};

/// Resolved attachment for one connector: boundary points plus facing edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPlan {
    pub start: Point,
    pub end: Point,
    pub start_edge: Edge,
    pub end_edge: Edge,
}

/// Anchor point on a given edge, pushed outward by `offset`.
pub fn anchor_on_edge(bounds: &BoundingBox, edge: Edge, offset: f64) -> Point {
    let base = bounds.edge_midpoint(edge);
    let (dx, dy) = edge.outward();
    base.offset(dx * offset, dy * offset)
}

/// Pick facing edges and anchor points for a connector from `a` to `b`.
///
/// Auto endpoints resolve by center-to-center delta dominance: when
/// `|dx| >= |dy|` the relation is horizontal ({right,left} or {left,right}),
/// otherwise vertical ({bottom,top} or {top,bottom}). The `>=` makes exact
/// ties resolve horizontally, so edge selection never flaps on diagonal
/// drags. Pinned endpoints keep their edge regardless of the delta.
pub fn select_anchors(
    a: &BoundingBox,
    b: &BoundingBox,
    start_pref: EdgePreference,
    end_pref: EdgePreference,
    start_offset: f64,
    end_offset: f64,
) -> AnchorPlan {
    let delta_x = b.center().x - a.center().x;
    let delta_y = b.center().y - a.center().y;

    let (auto_start, auto_end) = if delta_x.abs() >= delta_y.abs() {
        if delta_x >= 0.0 {
            (Edge::Right, Edge::Left)
        } else {
            (Edge::Left, Edge::Right)
        }
    } else if delta_y >= 0.0 {
        (Edge::Bottom, Edge::Top)
    } else {
        (Edge::Top, Edge::Bottom)
    };

    let start_edge = start_pref.pinned().unwrap_or(auto_start);
    let end_edge = end_pref.pinned().unwrap_or(auto_end);

    AnchorPlan {
        start: anchor_on_edge(a, start_edge, start_offset),
        end: anchor_on_edge(b, end_edge, end_offset),
        start_edge,
        end_edge,
    }
}
