// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pointer handling for one node: port presses, resizing, dragging and hover.
//!
//! A [`NodeInteraction`] is built by the scene for a single event and dropped
//! when the handler returns.

use crate::connection::{make_incomplete_connection_id, ConnectionId};
use crate::connection_interaction::ConnectionInteraction;
use crate::event::{PointerEvent, SceneEvent};
use crate::geometry::node_transform;
use crate::node::{NodeFlags, NodeId};
use crate::port::{ConnectionPolicy, DisconnectionPolicy, PortIndex, PortType};
use crate::scene::SceneContext;
use egui::{CursorIcon, Pos2, Rect, Vec2};

/// Canonical `out -> in` id of the connection between a port and one of its peers
fn connection_to_peer(
    port_type: PortType,
    node_id: NodeId,
    port_index: PortIndex,
    peer: (NodeId, PortIndex),
) -> ConnectionId {
    let id = ConnectionId::new(node_id, port_index, peer.0, peer.1);
    match port_type {
        PortType::Out => id,
        _ => id.inverted(),
    }
}

/// Short-lived controller for pointer events on one node
pub struct NodeInteraction<'a, S: SceneContext + ?Sized> {
    scene: &'a mut S,
    node_id: NodeId,
}

impl<'a, S: SceneContext + ?Sized> NodeInteraction<'a, S> {
    /// Create a controller for one event
    pub fn new(scene: &'a mut S, node_id: NodeId) -> Self {
        Self { scene, node_id }
    }

    /// Node this controller acts on
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// Port under `scene_pos`; inputs are tested before outputs
    pub fn find_port_at(&self, scene_pos: Pos2) -> Option<(PortType, PortIndex)> {
        let model = self.scene.model();
        let geometry = self.scene.geometry();
        let transform = node_transform(model, self.node_id);

        [PortType::In, PortType::Out].into_iter().find_map(|port_type| {
            geometry
                .hit_test_port(model, self.node_id, port_type, scene_pos, transform)
                .map(|index| (port_type, index))
        })
    }

    /// Whether `scene_pos` is on the resize handle of a resizable node
    pub fn over_resize_handle(&self, scene_pos: Pos2) -> bool {
        let model = self.scene.model();
        if !model.node_flags(self.node_id).contains(NodeFlags::RESIZABLE) {
            return false;
        }
        let local = node_transform(model, self.node_id).inverse().mul_pos(scene_pos);
        self.scene
            .geometry()
            .resize_handle_rect(model, self.node_id)
            .contains(local)
    }

    /// Pointer pressed on the node
    pub fn mouse_press(&mut self, event: &PointerEvent) {
        if !self.scene.is_selected(self.node_id) && !event.multi_select() {
            self.scene.clear_selection();
        }

        match self.find_port_at(event.scene_pos) {
            Some((port_type, port_index)) => self.press_port(port_type, port_index),
            None => {
                let resizing = self.over_resize_handle(event.scene_pos);
                if resizing {
                    tracing::debug!("Resizing node {}", self.node_id);
                }
                if let Some(state) = self.scene.node_state_mut(self.node_id) {
                    state.resizing = resizing;
                }
            }
        }

        self.scene.select_node(self.node_id, true);
        if self.scene.is_selected(self.node_id) {
            self.scene.notify(SceneEvent::NodeSelected(self.node_id));
        }
    }

    fn press_port(&mut self, port_type: PortType, port_index: PortIndex) {
        let node_id = self.node_id;
        let model = self.scene.model();
        let connection_policy = model.connection_policy(node_id, port_type, port_index);
        let policy = model
            .disconnection_policy(node_id, port_type, port_index)
            .resolve(port_type);
        let peers = model.connected_nodes(node_id, port_type, port_index);

        if peers.is_empty() || policy == DisconnectionPolicy::Create {
            if connection_policy != ConnectionPolicy::Many {
                for peer in &peers {
                    self.scene
                        .delete_connection(connection_to_peer(port_type, node_id, port_index, *peer));
                }
            }
            self.scene
                .make_draft_connection(make_incomplete_connection_id(port_type, node_id, port_index));
            return;
        }

        if policy != DisconnectionPolicy::Move {
            return;
        }

        let Some(first) = peers.first().copied() else {
            return;
        };
        if connection_policy != ConnectionPolicy::Many {
            for peer in peers.iter().skip(1) {
                self.scene
                    .delete_connection(connection_to_peer(port_type, node_id, port_index, *peer));
            }
        }

        let moved = connection_to_peer(port_type, node_id, port_index, first);
        ConnectionInteraction::new(&mut *self.scene, node_id, moved).disconnect(port_type);
    }

    /// Pointer moved by `delta` while the node holds it
    pub fn mouse_move(&mut self, delta: Vec2) {
        let resizing = self
            .scene
            .node_state(self.node_id)
            .is_some_and(|s| s.resizing);

        if resizing {
            self.resize_by(delta);
        } else {
            self.drag_by(delta);
        }

        let rect = self.scene.node_scene_rect(self.node_id);
        self.scene.grow_scene_rect(rect);
    }

    fn resize_by(&mut self, delta: Vec2) {
        let node_id = self.node_id;
        let Some(current) = self.scene.model().widget_size(node_id) else {
            return;
        };
        let size = (current + delta).max(Vec2::ZERO);

        let (model, geometry) = self.scene.model_and_geometry();
        model.set_widget_size(node_id, size);
        geometry.recalculate_size(model, node_id);
        let origin = geometry.widget_position(model, node_id);

        if let Some(state) = self.scene.node_state_mut(node_id) {
            state.widget_rect = Some(Rect::from_min_size(origin, size));
        }
        self.scene.request_repaint(node_id);
        self.move_connections();
    }

    fn drag_by(&mut self, delta: Vec2) {
        let mut moved = self.scene.selected_nodes();
        if !moved.contains(&self.node_id) {
            moved.push(self.node_id);
        }

        for node_id in moved {
            let model = self.scene.model();
            if model.node_flags(node_id).contains(NodeFlags::LOCKED) {
                continue;
            }
            let Some(position) = model.node_position(node_id) else {
                continue;
            };
            self.scene.model_mut().set_node_position(node_id, position + delta);
            self.move_connections_of(node_id);
        }
    }

    /// Pointer released
    pub fn mouse_release(&mut self) {
        if let Some(state) = self.scene.node_state_mut(self.node_id) {
            state.resizing = false;
        }
        self.move_connections();
        self.scene.notify(SceneEvent::NodeClicked(self.node_id));
    }

    /// Snap every shown connection of this node to its ports
    pub fn move_connections(&mut self) {
        self.move_connections_of(self.node_id);
    }

    fn move_connections_of(&mut self, node_id: NodeId) {
        for port_type in [PortType::In, PortType::Out] {
            let count = self.scene.model().port_count(node_id, port_type);
            for port_index in 0..count {
                let peers = self.scene.model().connected_nodes(node_id, port_type, port_index);
                for peer in peers {
                    let id = connection_to_peer(port_type, node_id, port_index, peer);
                    if !self.scene.move_connection(id) {
                        tracing::trace!("No item for connection {}", id);
                    }
                }
            }
        }
    }

    /// Pointer entered the node
    pub fn hover_enter(&mut self, event: &PointerEvent) {
        let base_z = self.scene.config().base_z;
        let hovered_z = self.scene.config().hovered_z;

        for other in self.scene.colliding_nodes(self.node_id) {
            if let Some(state) = self.scene.node_state_mut(other) {
                if state.z_value > base_z {
                    state.z_value = base_z;
                }
            }
        }

        if let Some(state) = self.scene.node_state_mut(self.node_id) {
            state.z_value = hovered_z;
            state.hovered = true;
        }
        self.scene.request_repaint(self.node_id);
        self.scene.notify(SceneEvent::NodeHovered {
            node_id: self.node_id,
            screen_pos: event.screen_pos,
        });
    }

    /// Pointer left the node
    pub fn hover_leave(&mut self) {
        if let Some(state) = self.scene.node_state_mut(self.node_id) {
            state.hovered = false;
            state.cursor = CursorIcon::Default;
        }
        self.scene.request_repaint(self.node_id);
        self.scene.notify(SceneEvent::NodeHoverLeft(self.node_id));
    }

    /// Pointer moved over the node without holding it
    pub fn hover_move(&mut self, event: &PointerEvent) {
        let cursor = if self.over_resize_handle(event.scene_pos) {
            CursorIcon::ResizeNwSe
        } else {
            CursorIcon::Default
        };
        if let Some(state) = self.scene.node_state_mut(self.node_id) {
            state.cursor = cursor;
        }
    }

    /// Node double-clicked
    pub fn mouse_double_click(&mut self) {
        self.scene.notify(SceneEvent::NodeDoubleClicked(self.node_id));
    }

    /// Context menu requested on the node
    pub fn context_menu(&mut self, event: &PointerEvent) {
        self.scene.notify(SceneEvent::NodeContextMenu {
            node_id: self.node_id,
            scene_pos: event.scene_pos,
        });
    }
}
