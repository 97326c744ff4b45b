// SPDX-License-Identifier: MIT OR Apache-2.0
//! Completing and splitting connections against one node.

use crate::connection::{make_complete_connection_id, required_port, ConnectionId};
use crate::geometry::node_transform;
use crate::node::NodeId;
use crate::port::{PortIndex, PortType};
use crate::scene::SceneContext;

/// Short-lived controller pairing a connection with a node
pub struct ConnectionInteraction<'a, S: SceneContext + ?Sized> {
    scene: &'a mut S,
    node_id: NodeId,
    connection_id: ConnectionId,
}

impl<'a, S: SceneContext + ?Sized> ConnectionInteraction<'a, S> {
    /// Create a controller for one event
    pub fn new(scene: &'a mut S, node_id: NodeId, connection_id: ConnectionId) -> Self {
        Self {
            scene,
            node_id,
            connection_id,
        }
    }

    /// Port on this node the draft's loose end can attach to.
    ///
    /// The connection must be the active draft, the node must not be the one
    /// it is anchored at, the loose end must lie over a port of the required
    /// side, and the model must accept the completed connection.
    pub fn can_connect(&self) -> Option<PortIndex> {
        let required = required_port(&self.connection_id);
        if required == PortType::None {
            return None;
        }
        if self.connection_id.node_id(required.opposite()) == self.node_id {
            return None;
        }

        let draft = self
            .scene
            .draft_connection()
            .filter(|d| d.id() == self.connection_id)?;
        let loose_end = draft.end_point(required);

        let model = self.scene.model();
        let transform = node_transform(model, self.node_id);
        let port_index = self
            .scene
            .geometry()
            .hit_test_port(model, self.node_id, required, loose_end, transform)?;

        let complete = make_complete_connection_id(self.connection_id, self.node_id, port_index);
        model.connection_possible(complete).then_some(port_index)
    }

    /// Complete the draft on this node. Returns `false` and leaves the draft
    /// alone when no port fits.
    pub fn try_connect(&mut self) -> bool {
        let Some(port_index) = self.can_connect() else {
            return false;
        };

        let complete = make_complete_connection_id(self.connection_id, self.node_id, port_index);
        self.scene.reset_draft_connection();
        match self.scene.add_connection(complete) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Rejected connection {}: {}", complete, e);
                false
            }
        }
    }

    /// Detach the connection at `port_type` and turn it into the active draft
    pub fn disconnect(&mut self, port_type: PortType) {
        let id = self.connection_id;
        let node_id = id.node_id(port_type);
        let port_index = id.port_index(port_type);

        let model = self.scene.model();
        let point = self
            .scene
            .geometry()
            .port_scene_position(model, node_id, port_type, port_index);

        self.scene.delete_connection(id);
        let draft = self.scene.make_draft_connection(id.detached(port_type));
        draft.set_end_point(port_type, point);
        tracing::debug!("Connection {} detached at {:?}", id, port_type);
    }
}
