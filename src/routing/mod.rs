// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Routing pipeline: anchor selection, obstacle probing, path planning, and
//! terminal decoration. Every pass is a pure function over model values; the
//! engine composes them per connection.

pub mod anchors;
pub mod obstacles;
pub mod path;
pub mod terminals;

pub use anchors::{anchor_on_edge, select_anchors, AnchorPlan};
pub use obstacles::{find_obstacles, Obstacle, MAX_OBSTACLES};
pub use path::{plan_path, OBSTACLE_CLEARANCE};
pub use terminals::terminal_decoration;
