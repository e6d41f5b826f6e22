// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Obstacle detection over the corridor between two anchors.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::model::{BoundingBox, NodeId, Point};
use crate::scene::SceneGraph;

/// Hard cap on reported obstacles; bounds probe cost on dense canvases.
pub const MAX_OBSTACLES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub node_id: NodeId,
    pub bounds: BoundingBox,
}

/// Find scene objects intersecting the corridor between `start` and `end`.
///
/// The two endpoint objects (and any connection-owned artifacts the host
/// exposes) are excluded via `exclude`. A failed probe is treated as "no
/// obstacles found": routing falls open to the plain orthogonal path.
pub fn find_obstacles(
    scene: &dyn SceneGraph,
    start: Point,
    end: Point,
    exclude: &BTreeSet<NodeId>,
) -> SmallVec<[Obstacle; MAX_OBSTACLES]> {
    let corridor = BoundingBox::span(start, end);
    let mut found = SmallVec::new();

    let Ok(candidates) = scene.visible_bounds() else {
        return found;
    };

    for (node_id, bounds) in candidates {
        if exclude.contains(&node_id) {
            continue;
        }
        if !bounds.intersects(&corridor) {
            continue;
        }
        found.push(Obstacle { node_id, bounds });
        if found.len() == MAX_OBSTACLES {
            break;
        }
    }

    found
}
