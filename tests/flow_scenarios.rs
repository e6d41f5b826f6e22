// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Filament-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Filament and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end scenarios through the bridge: selection feeds, panel commands,
//! scene changes, and the persisted record store all in one loop.

use filament::bridge::{FlowBridge, UiCommand, UiNotification};
use filament::model::{BoundingBox, NodeId, Point};
use filament::scene::fixtures::CanvasFixture;
use filament::scene::{ChangeEvent, SelectionEvent};
use filament::store::{MemoryRecordStore, RecordStore};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

/// Three connectable objects: `a` and `b` side by side, `c` below `a`.
fn canvas() -> CanvasFixture {
    let mut scene = CanvasFixture::new();
    scene.add_node(nid("a"), BoundingBox::new(0.0, 0.0, 100.0, 60.0));
    scene.add_node(nid("b"), BoundingBox::new(300.0, 0.0, 100.0, 60.0));
    scene.add_node(nid("c"), BoundingBox::new(0.0, 200.0, 100.0, 60.0));
    scene
}

fn command(json: &str) -> UiCommand {
    serde_json::from_str(json).expect("command json")
}

#[test]
fn selection_chain_creates_connections_visuals_and_records() {
    let mut scene = canvas();
    let mut store = MemoryRecordStore::new();
    let mut bridge = FlowBridge::new();

    let notifications = bridge.handle_selection(
        &mut scene,
        &mut store,
        &SelectionEvent::new(vec![nid("a"), nid("b"), nid("c")]),
    );

    // Consecutive pairs: a-b and b-c, then one stats update.
    assert_eq!(notifications.len(), 3);
    assert!(matches!(
        notifications[0],
        UiNotification::FlowCreated { ref flow_id, success: true } if flow_id == "flow-1"
    ));
    assert!(matches!(
        notifications[1],
        UiNotification::FlowCreated { ref flow_id, success: true } if flow_id == "flow-2"
    ));
    assert_eq!(
        notifications[2],
        UiNotification::StatsUpdate {
            count: 2,
            is_active: true,
        }
    );

    // One line plus one end-arrow decoration per connection.
    assert_eq!(scene.visual_count(), 4);
    assert_eq!(scene.decoration_count(), 2);

    assert_eq!(store.len(), 2);
    assert!(store.get("flow/flow-1").expect("get").is_some());
    assert!(store.get("flow/flow-2").expect("get").is_some());
}

#[test]
fn moving_an_endpoint_reroutes_without_leaking_visuals() {
    let mut scene = canvas();
    let mut store = MemoryRecordStore::new();
    let mut bridge = FlowBridge::new();
    bridge.handle_selection(
        &mut scene,
        &mut store,
        &SelectionEvent::new(vec![nid("a"), nid("b")]),
    );
    assert_eq!(scene.visual_count(), 2);

    scene.move_node(&nid("b"), BoundingBox::new(300.0, 200.0, 100.0, 60.0));
    let notifications = bridge.handle_changes(
        &mut scene,
        &mut store,
        vec![ChangeEvent::PropertyChanged {
            node_id: nid("b"),
            properties: vec!["x".into(), "y".into()],
        }],
    );

    // Recomputation replaces visuals one-for-one and removes nothing logical.
    assert!(notifications.is_empty());
    assert_eq!(scene.visual_count(), 2);

    let connection = bridge
        .engine()
        .connection(&"flow-1".parse().expect("id"))
        .expect("connection survives the move");
    assert_eq!(
        connection.path().last_point(),
        Some(Point::new(300.0, 230.0))
    );
}

#[test]
fn deleting_a_shared_endpoint_removes_both_connections() {
    let mut scene = canvas();
    let mut store = MemoryRecordStore::new();
    let mut bridge = FlowBridge::new();
    bridge.handle_selection(
        &mut scene,
        &mut store,
        &SelectionEvent::new(vec![nid("a"), nid("b"), nid("c")]),
    );

    scene.delete_node(&nid("b"));
    let notifications = bridge.handle_changes(
        &mut scene,
        &mut store,
        vec![ChangeEvent::Deleted { node_id: nid("b") }],
    );

    assert_eq!(bridge.engine().connection_count(), 0);
    assert_eq!(scene.visual_count(), 0);
    assert!(store.is_empty());
    assert_eq!(
        notifications,
        vec![UiNotification::StatsUpdate {
            count: 0,
            is_active: true,
        }]
    );
}

#[test]
fn routing_defaults_change_only_future_connections() {
    let mut scene = canvas();
    let mut store = MemoryRecordStore::new();
    let mut bridge = FlowBridge::new();

    bridge.handle_selection(
        &mut scene,
        &mut store,
        &SelectionEvent::new(vec![nid("a"), nid("b")]),
    );
    bridge.handle_command(
        &mut scene,
        &mut store,
        command(r#"{"type":"update-routing","orthogonalOnly":false}"#),
    );
    bridge.handle_selection(
        &mut scene,
        &mut store,
        &SelectionEvent::new(vec![nid("a"), nid("c")]),
    );

    let orthogonal = bridge
        .engine()
        .connection(&"flow-1".parse().expect("id"))
        .expect("first connection");
    let straight = bridge
        .engine()
        .connection(&"flow-2".parse().expect("id"))
        .expect("second connection");

    assert!(orthogonal.style().orthogonal_only);
    // Straight mode is a direct anchor-to-anchor segment.
    assert_eq!(straight.path().vertices().len(), 2);
    assert_eq!(straight.path().bend_count(), 0);
}

#[test]
fn inactive_engine_ignores_selections_until_reactivated() {
    let mut scene = canvas();
    let mut store = MemoryRecordStore::new();
    let mut bridge = FlowBridge::new();

    bridge.handle_command(
        &mut scene,
        &mut store,
        command(r#"{"type":"toggle-active","active":false}"#),
    );
    let ignored = bridge.handle_selection(
        &mut scene,
        &mut store,
        &SelectionEvent::new(vec![nid("a"), nid("b")]),
    );
    assert!(ignored.is_empty());
    assert_eq!(scene.visual_count(), 0);

    bridge.handle_command(
        &mut scene,
        &mut store,
        command(r#"{"type":"toggle-active","active":true}"#),
    );
    let created = bridge.handle_selection(
        &mut scene,
        &mut store,
        &SelectionEvent::new(vec![nid("a"), nid("b")]),
    );
    assert_eq!(created.len(), 2);
}

#[test]
fn clear_all_releases_every_visual_and_record() {
    let mut scene = canvas();
    let mut store = MemoryRecordStore::new();
    let mut bridge = FlowBridge::new();
    bridge.handle_selection(
        &mut scene,
        &mut store,
        &SelectionEvent::new(vec![nid("a"), nid("b"), nid("c")]),
    );

    let notifications =
        bridge.handle_command(&mut scene, &mut store, command(r#"{"type":"clear-all"}"#));

    assert_eq!(bridge.engine().connection_count(), 0);
    assert_eq!(scene.visual_count(), 0);
    assert!(store.is_empty());
    assert_eq!(
        notifications,
        vec![UiNotification::StatsUpdate {
            count: 0,
            is_active: true,
        }]
    );
}

#[test]
fn failed_creation_still_reports_an_outcome() {
    let mut scene = canvas();
    let mut store = MemoryRecordStore::new();
    let mut bridge = FlowBridge::new();

    let notifications = bridge.handle_selection(
        &mut scene,
        &mut store,
        &SelectionEvent::new(vec![nid("a"), nid("ghost")]),
    );

    assert_eq!(
        notifications,
        vec![UiNotification::FlowCreated {
            flow_id: "flow-1".to_owned(),
            success: false,
        }]
    );
    assert!(store.is_empty());
    assert_eq!(scene.visual_count(), 0);
}
