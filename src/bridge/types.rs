// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire types for the UI panel channel. Both directions are tagged on a
//! `type` field; absent fields in a partial update mean "no change".

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{RoutingPatch, StylePatch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiCommand {
    ToggleActive { active: bool },
    ClearAll,
    GetStats,
    UpdateStyle(StylePatch),
    UpdateRouting(RoutingPatch),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiNotification {
    #[serde(rename_all = "camelCase")]
    StatsUpdate { count: u64, is_active: bool },
    #[serde(rename_all = "camelCase")]
    FlowCreated { flow_id: String, success: bool },
}
