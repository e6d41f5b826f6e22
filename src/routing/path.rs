// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Path planning between two resolved anchors: straight, or orthogonal with
//! one or two bends and a single fixed-clearance obstacle detour.

use smallvec::SmallVec;

use crate::model::{PathVertex, Point, RoutedPath, Style, TerminalKind, VertexCap};

use super::anchors::AnchorPlan;
use super::obstacles::Obstacle;

/// Fixed midline clearance added when an obstacle sits in the corridor.
pub const OBSTACLE_CLEARANCE: f64 = 50.0;

/// Plan the polyline for one connector.
///
/// Pure: identical inputs always produce an identical polyline. The first and
/// last vertices are exactly the supplied anchors. Coincident anchors yield a
/// minimal two-point path rather than an error, so visual creation downstream
/// never sees malformed input.
pub fn plan_path(plan: &AnchorPlan, style: &Style, obstacles: &[Obstacle]) -> RoutedPath {
    let points = route_points(plan, style, obstacles);

    let mut vertices: SmallVec<[PathVertex; 4]> =
        points.iter().map(|&point| PathVertex::plain(point)).collect();

    apply_corner_radii(&mut vertices, style.corner_radius);
    apply_arrow_caps(&mut vertices, style);

    RoutedPath::from_vertices(vertices)
}

fn route_points(plan: &AnchorPlan, style: &Style, obstacles: &[Obstacle]) -> SmallVec<[Point; 4]> {
    let start = plan.start;
    let end = plan.end;

    let mut points: SmallVec<[Point; 4]> = SmallVec::new();

    if !style.orthogonal_only || start == end {
        points.push(start);
        points.push(end);
        return points;
    }

    let same_axis = plan.start_edge.is_horizontal() == plan.end_edge.is_horizontal();
    if same_axis {
        if plan.start_edge.is_horizontal() {
            let mid_x = detoured_midline(
                (start.x + end.x) / 2.0,
                obstacles,
                start.midpoint(end),
                true,
            );
            points.push(start);
            points.push(Point::new(mid_x, start.y));
            points.push(Point::new(mid_x, end.y));
            points.push(end);
        } else {
            let mid_y = detoured_midline(
                (start.y + end.y) / 2.0,
                obstacles,
                start.midpoint(end),
                false,
            );
            points.push(start);
            points.push(Point::new(start.x, mid_y));
            points.push(Point::new(end.x, mid_y));
            points.push(end);
        }
    } else {
        // Perpendicular combination: leave the start edge along its axis,
        // arrive at the end edge along the other.
        let bend = if plan.start_edge.is_horizontal() {
            Point::new(end.x, start.y)
        } else {
            Point::new(start.x, end.y)
        };
        points.push(start);
        points.push(bend);
        points.push(end);
    }

    dedupe_consecutive(&mut points);
    if points.len() < 2 {
        points.clear();
        points.push(start);
        points.push(end);
    }
    points
}

/// Midline coordinate, shifted by [`OBSTACLE_CLEARANCE`] away from the
/// nearest obstacle's side when one sits in the corridor.
fn detoured_midline(
    mid: f64,
    obstacles: &[Obstacle],
    corridor_center: Point,
    horizontal: bool,
) -> f64 {
    let Some(nearest) = obstacles.iter().min_by(|a, b| {
        let da = a.bounds.center().distance(corridor_center);
        let db = b.bounds.center().distance(corridor_center);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return mid;
    };

    let center = nearest.bounds.center();
    let obstacle_coord = if horizontal { center.x } else { center.y };
    if obstacle_coord <= mid {
        mid + OBSTACLE_CLEARANCE
    } else {
        mid - OBSTACLE_CLEARANCE
    }
}

fn dedupe_consecutive(points: &mut SmallVec<[Point; 4]>) {
    let mut idx = 1;
    while idx < points.len() {
        if points[idx] == points[idx - 1] {
            points.remove(idx);
        } else {
            idx += 1;
        }
    }
}

/// Round interior bends only, clipping so rounding never exceeds half of an
/// adjacent segment (a short segment must not invert).
fn apply_corner_radii(vertices: &mut [PathVertex], corner_radius: f64) {
    if corner_radius <= 0.0 || vertices.len() < 3 {
        return;
    }

    for idx in 1..vertices.len() - 1 {
        let before = vertices[idx - 1].point.distance(vertices[idx].point);
        let after = vertices[idx].point.distance(vertices[idx + 1].point);
        vertices[idx].corner_radius = corner_radius.min(before / 2.0).min(after / 2.0);
    }
}

fn apply_arrow_caps(vertices: &mut [PathVertex], style: &Style) {
    if !style.arrow_line_caps || vertices.is_empty() {
        return;
    }

    if style.start_terminal == TerminalKind::Arrow {
        vertices[0].cap = VertexCap::Arrow;
    }
    if style.end_terminal == TerminalKind::Arrow {
        let last = vertices.len() - 1;
        vertices[last].cap = VertexCap::Arrow;
    }
}
