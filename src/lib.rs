// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Filament — connector routing and auto-update engine for 2D design
//! canvases.
//!
//! The host canvas is abstracted behind [`scene::SceneGraph`]; the engine
//! decides anchors, paths, and terminal decorations, and keeps live
//! connections in sync with scene changes.

pub mod bridge;
pub mod engine;
pub mod model;
pub mod routing;
pub mod scene;
pub mod store;
