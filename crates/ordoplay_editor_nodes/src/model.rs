// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph model contract consumed by the editor scene.
//!
//! The scene never owns node or connection data itself. Everything it shows
//! is read from a [`GraphModel`], and every edit the user makes is written
//! back through it.

use crate::connection::ConnectionId;
use crate::graph::ConnectionError;
use crate::node::{NodeFlags, NodeId};
use crate::port::{ConnectionPolicy, DisconnectionPolicy, PortIndex, PortType};
use egui::{Pos2, Vec2};
use indexmap::IndexSet;

/// Storage of nodes, ports and connections
pub trait GraphModel {
    /// All node ids in iteration order
    fn node_ids(&self) -> Vec<NodeId>;

    /// Whether a node exists
    fn node_exists(&self, node_id: NodeId) -> bool;

    /// Create a node of the model's default type
    fn add_node(&mut self) -> NodeId;

    /// Remove a node and all of its connections
    fn delete_node(&mut self, node_id: NodeId) -> bool;

    /// Whether a complete connection is stored
    fn connection_exists(&self, connection_id: ConnectionId) -> bool;

    /// Whether `connection_id` could be added right now
    fn connection_possible(&self, connection_id: ConnectionId) -> bool;

    /// Commit a complete connection
    fn add_connection(&mut self, connection_id: ConnectionId) -> Result<(), ConnectionError>;

    /// Remove a connection; returns whether it existed
    fn delete_connection(&mut self, connection_id: ConnectionId) -> bool;

    /// Every connection attached to a node
    fn all_connection_ids(&self, node_id: NodeId) -> Vec<ConnectionId>;

    /// Peers `(node, port)` attached to one port, in connection order
    fn connected_nodes(
        &self,
        node_id: NodeId,
        port_type: PortType,
        port_index: PortIndex,
    ) -> IndexSet<(NodeId, PortIndex)>;

    /// Top-left corner of the node in scene coordinates
    fn node_position(&self, node_id: NodeId) -> Option<Pos2>;

    /// Move a node
    fn set_node_position(&mut self, node_id: NodeId, position: Pos2);

    /// Size of the embedded widget, `None` when the node has no widget
    fn widget_size(&self, node_id: NodeId) -> Option<Vec2>;

    /// Resize the embedded widget
    fn set_widget_size(&mut self, node_id: NodeId, size: Vec2);

    /// Node size as last computed by the geometry provider
    fn node_size(&self, node_id: NodeId) -> Option<Vec2>;

    /// Store a computed node size
    fn set_node_size(&mut self, node_id: NodeId, size: Vec2);

    /// Number of ports on one side
    fn port_count(&self, node_id: NodeId, port_type: PortType) -> PortIndex;

    /// Connection policy of a port
    fn connection_policy(
        &self,
        node_id: NodeId,
        port_type: PortType,
        port_index: PortIndex,
    ) -> ConnectionPolicy;

    /// Disconnection policy of a port, possibly `Unset`
    fn disconnection_policy(
        &self,
        node_id: NodeId,
        port_type: PortType,
        port_index: PortIndex,
    ) -> DisconnectionPolicy;

    /// Behavior flags of a node
    fn node_flags(&self, node_id: NodeId) -> NodeFlags;
}
