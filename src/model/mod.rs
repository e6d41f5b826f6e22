// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types: identities, geometry, style, and connections.

pub mod connection;
pub mod geometry;
pub mod ids;
pub mod style;

pub use connection::{Connection, EdgePreference, Endpoint};
pub use geometry::{BoundingBox, Edge, PathVertex, Point, RoutedPath, VertexCap};
pub use ids::{ConnectionId, Id, IdError, NodeId, VisualId};
pub use style::{LineKind, RoutingPatch, Style, StyleDefaults, StylePatch, TerminalKind};
