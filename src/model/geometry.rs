// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pure geometry for the routing passes. Canvas coordinates: `x` grows
//! right, `y` grows down.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The side of an object's boundary a connector attaches to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Unit vector pointing away from the object through this edge.
    pub fn outward(self) -> (f64, f64) {
        match self {
            Self::Top => (0.0, -1.0),
            Self::Bottom => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }

    /// Whether the edge faces along the horizontal axis (left/right).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Axis-aligned bounding box as reported by the host scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Midpoint of the given boundary edge.
    pub fn edge_midpoint(&self, edge: Edge) -> Point {
        let center = self.center();
        match edge {
            Edge::Top => Point::new(center.x, self.top()),
            Edge::Bottom => Point::new(center.x, self.bottom()),
            Edge::Left => Point::new(self.left(), center.y),
            Edge::Right => Point::new(self.right(), center.y),
        }
    }

    /// Inclusive overlap test: touching counts, so a degenerate corridor
    /// (zero height between aligned anchors) still reports intersections.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// The axis-aligned rectangle spanning two points (the obstacle corridor).
    pub fn span(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }
}

/// One vertex of a routed polyline.
///
/// `corner_radius` is zero at the two anchors and clipped at interior bends so
/// rounding never overshoots half of an adjacent segment. `cap` is
/// [`VertexCap::None`] everywhere except the first/last vertex when the style
/// bakes arrow terminals into the line itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathVertex {
    pub point: Point,
    pub corner_radius: f64,
    pub cap: VertexCap,
}

impl PathVertex {
    pub fn plain(point: Point) -> Self {
        Self {
            point,
            corner_radius: 0.0,
            cap: VertexCap::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexCap {
    #[default]
    None,
    Arrow,
}

/// An ordered polyline produced by the path planner.
///
/// Straight segments only; tangents are left neutral so the host can feed the
/// vertices into a vector network unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoutedPath {
    vertices: SmallVec<[PathVertex; 4]>,
}

impl RoutedPath {
    pub fn from_vertices(vertices: SmallVec<[PathVertex; 4]>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[PathVertex] {
        &self.vertices
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.iter().map(|v| v.point)
    }

    pub fn first_point(&self) -> Option<Point> {
        self.vertices.first().map(|v| v.point)
    }

    pub fn last_point(&self) -> Option<Point> {
        self.vertices.last().map(|v| v.point)
    }

    /// Number of interior bend vertices (excludes the two anchors).
    pub fn bend_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }
}
