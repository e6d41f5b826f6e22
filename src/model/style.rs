// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector styling. A [`Style`] is snapshotted into every connection at
//! creation time; absent patch fields mean "no change".

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineKind {
    /// Dash pattern in stroke-width multiples, scaled by the emitter.
    pub fn dash_pattern(self, stroke_width: f64) -> Vec<f64> {
        match self {
            Self::Solid => Vec::new(),
            Self::Dashed => vec![stroke_width * 10.0, stroke_width * 5.0],
            Self::Dotted => vec![stroke_width * 2.0, stroke_width * 4.0],
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TerminalKind {
    #[default]
    None,
    Arrow,
    Circle,
    Diamond,
    Square,
}

/// Immutable style snapshot carried by every connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub line_kind: LineKind,
    pub stroke_width: f64,
    pub stroke_color: String,
    pub start_terminal: TerminalKind,
    pub end_terminal: TerminalKind,
    pub corner_radius: f64,
    pub orthogonal_only: bool,
    pub auto_avoid_obstacles: bool,
    /// When true, arrow terminals are baked into the line as vertex caps and
    /// produce no separate decoration object.
    pub arrow_line_caps: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_kind: LineKind::Solid,
            stroke_width: 2.0,
            stroke_color: "#4d4dff".to_owned(),
            start_terminal: TerminalKind::None,
            end_terminal: TerminalKind::Arrow,
            corner_radius: 5.0,
            orthogonal_only: true,
            auto_avoid_obstacles: false,
            arrow_line_caps: false,
        }
    }
}

/// Partial update for the visual style fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StylePatch {
    pub line_kind: Option<LineKind>,
    pub stroke_width: Option<f64>,
    pub stroke_color: Option<String>,
    pub start_terminal: Option<TerminalKind>,
    pub end_terminal: Option<TerminalKind>,
    pub arrow_line_caps: Option<bool>,
}

/// Partial update for the routing behavior fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutingPatch {
    pub orthogonal_only: Option<bool>,
    pub auto_avoid_obstacles: Option<bool>,
    pub corner_radius: Option<f64>,
}

/// The explicit "current defaults" holder new connections snapshot from.
///
/// Owned by the bridge and threaded into creation calls; there is no ambient
/// global style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDefaults {
    current: Style,
}

impl StyleDefaults {
    pub fn new(current: Style) -> Self {
        Self { current }
    }

    pub fn current(&self) -> &Style {
        &self.current
    }

    /// Snapshot for a new connection.
    pub fn snapshot(&self) -> Style {
        self.current.clone()
    }

    pub fn apply_style(&mut self, patch: &StylePatch) {
        if let Some(line_kind) = patch.line_kind {
            self.current.line_kind = line_kind;
        }
        if let Some(stroke_width) = patch.stroke_width {
            if stroke_width > 0.0 {
                self.current.stroke_width = stroke_width;
            }
        }
        if let Some(stroke_color) = &patch.stroke_color {
            self.current.stroke_color = stroke_color.clone();
        }
        if let Some(start_terminal) = patch.start_terminal {
            self.current.start_terminal = start_terminal;
        }
        if let Some(end_terminal) = patch.end_terminal {
            self.current.end_terminal = end_terminal;
        }
        if let Some(arrow_line_caps) = patch.arrow_line_caps {
            self.current.arrow_line_caps = arrow_line_caps;
        }
    }

    pub fn apply_routing(&mut self, patch: &RoutingPatch) {
        if let Some(orthogonal_only) = patch.orthogonal_only {
            self.current.orthogonal_only = orthogonal_only;
        }
        if let Some(auto_avoid_obstacles) = patch.auto_avoid_obstacles {
            self.current.auto_avoid_obstacles = auto_avoid_obstacles;
        }
        if let Some(corner_radius) = patch.corner_radius {
            if corner_radius >= 0.0 {
                self.current.corner_radius = corner_radius;
            }
        }
    }
}
