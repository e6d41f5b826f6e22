// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal decoration geometry, oriented by the anchor edge rather than the
//! path tangent.

use crate::model::{Edge, Point, Style, TerminalKind};
use crate::scene::{DecorationShape, DecorationSpec};

/// Build the decoration for one terminal, if the kind calls for one.
///
/// `None` kinds and arrows baked into the line as caps yield no separate
/// decoration object.
pub fn terminal_decoration(
    point: Point,
    kind: TerminalKind,
    style: &Style,
    edge: Edge,
) -> Option<DecorationSpec> {
    let shape = match kind {
        TerminalKind::None => return None,
        TerminalKind::Arrow => {
            if style.arrow_line_caps {
                return None;
            }
            DecorationShape::Arrow {
                points: arrow_points(point, edge, style.stroke_width),
            }
        }
        TerminalKind::Circle => DecorationShape::Circle {
            center: point,
            diameter: style.stroke_width * 2.5,
        },
        TerminalKind::Square => DecorationShape::Square {
            center: point,
            size: style.stroke_width * 2.5,
        },
        TerminalKind::Diamond => {
            let half = style.stroke_width * 1.25;
            DecorationShape::Diamond {
                points: [
                    point.offset(0.0, -half),
                    point.offset(half, 0.0),
                    point.offset(0.0, half),
                    point.offset(-half, 0.0),
                ],
            }
        }
    };

    Some(DecorationSpec {
        shape,
        fill_color: style.stroke_color.clone(),
    })
}

/// Filled triangle: apex away from the connected object along the edge's
/// outward direction, base perpendicular through the anchor.
fn arrow_points(anchor: Point, edge: Edge, stroke_width: f64) -> [Point; 3] {
    let length = stroke_width * 2.0;
    let half_width = stroke_width * 1.6;

    let (out_x, out_y) = edge.outward();
    let (perp_x, perp_y) = (-out_y, out_x);

    let apex = anchor.offset(out_x * length, out_y * length);
    let base_a = anchor.offset(perp_x * half_width, perp_y * half_width);
    let base_b = anchor.offset(-perp_x * half_width, -perp_y * half_width);

    [apex, base_a, base_b]
}
