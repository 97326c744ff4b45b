// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-memory graph model containing nodes and connections.

use crate::connection::ConnectionId;
use crate::model::GraphModel;
use crate::node::{Node, NodeFlags, NodeId, NodeType};
use crate::port::{ConnectionPolicy, DisconnectionPolicy, Port, PortIndex, PortType};
use egui::{Pos2, Vec2};
use indexmap::{IndexMap, IndexSet};

/// A node graph
#[derive(Debug, Clone)]
pub struct Graph {
    /// Graph name
    pub name: String,
    /// Nodes in the graph
    nodes: IndexMap<NodeId, Node>,
    /// Connections between nodes, in insertion order
    connections: IndexSet<ConnectionId>,
    /// Type used by [`GraphModel::add_node`]
    default_node_type: NodeType,
}

impl Graph {
    /// Create a new empty graph
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: IndexMap::new(),
            connections: IndexSet::new(),
            default_node_type: NodeType::default(),
        }
    }

    /// Use `node_type` for nodes created without an explicit type
    pub fn with_default_node_type(mut self, node_type: NodeType) -> Self {
        self.default_node_type = node_type;
        self
    }

    /// Insert a node instance
    pub fn insert_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Create a node of the given type
    pub fn add_node_of_type(&mut self, node_type: &NodeType) -> NodeId {
        self.insert_node(Node::new(node_type))
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get a mutable node by ID
    pub fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&node_id)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get all connections
    pub fn connections(&self) -> impl Iterator<Item = &ConnectionId> {
        self.connections.iter()
    }

    /// Get the number of connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    fn port(&self, node_id: NodeId, port_type: PortType, index: PortIndex) -> Option<&Port> {
        self.nodes.get(&node_id)?.port(port_type, index)
    }

    fn port_in_use(&self, node_id: NodeId, port_type: PortType, index: PortIndex) -> bool {
        self.connections
            .iter()
            .any(|c| c.node_id(port_type) == node_id && c.port_index(port_type) == index)
    }

    /// Check whether a connection could be committed
    pub fn validate(&self, id: ConnectionId) -> Result<(), ConnectionError> {
        if !id.is_complete() {
            return Err(ConnectionError::Incomplete(id));
        }

        if id.out_node_id == id.in_node_id {
            return Err(ConnectionError::SelfLoop);
        }

        for side in [PortType::Out, PortType::In] {
            let node_id = id.node_id(side);
            if !self.nodes.contains_key(&node_id) {
                return Err(ConnectionError::NodeNotFound(node_id));
            }
        }

        let source = self
            .port(id.out_node_id, PortType::Out, id.out_port_index)
            .ok_or(ConnectionError::PortNotFound(id.out_node_id, PortType::Out, id.out_port_index))?;
        let target = self
            .port(id.in_node_id, PortType::In, id.in_port_index)
            .ok_or(ConnectionError::PortNotFound(id.in_node_id, PortType::In, id.in_port_index))?;

        if self.connections.contains(&id) {
            return Err(ConnectionError::AlreadyConnected(id));
        }

        if !source.data_type.can_connect_to(&target.data_type) {
            return Err(ConnectionError::IncompatiblePorts);
        }

        for (side, port) in [(PortType::Out, source), (PortType::In, target)] {
            let node_id = id.node_id(side);
            let index = id.port_index(side);
            if port.connection_policy == ConnectionPolicy::One && self.port_in_use(node_id, side, index) {
                return Err(ConnectionError::PortOccupied(node_id, side, index));
            }
        }

        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl GraphModel for Graph {
    fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    fn node_exists(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    fn add_node(&mut self) -> NodeId {
        let node = Node::new(&self.default_node_type);
        self.insert_node(node)
    }

    fn delete_node(&mut self, node_id: NodeId) -> bool {
        self.connections.retain(|c| !c.involves_node(node_id));
        self.nodes.shift_remove(&node_id).is_some()
    }

    fn connection_exists(&self, connection_id: ConnectionId) -> bool {
        self.connections.contains(&connection_id)
    }

    fn connection_possible(&self, connection_id: ConnectionId) -> bool {
        self.validate(connection_id).is_ok()
    }

    fn add_connection(&mut self, connection_id: ConnectionId) -> Result<(), ConnectionError> {
        self.validate(connection_id)?;
        self.connections.insert(connection_id);
        Ok(())
    }

    fn delete_connection(&mut self, connection_id: ConnectionId) -> bool {
        self.connections.shift_remove(&connection_id)
    }

    fn all_connection_ids(&self, node_id: NodeId) -> Vec<ConnectionId> {
        self.connections
            .iter()
            .filter(|c| c.involves_node(node_id))
            .copied()
            .collect()
    }

    fn connected_nodes(
        &self,
        node_id: NodeId,
        port_type: PortType,
        port_index: PortIndex,
    ) -> IndexSet<(NodeId, PortIndex)> {
        let peer = port_type.opposite();
        self.connections
            .iter()
            .filter(|c| c.node_id(port_type) == node_id && c.port_index(port_type) == port_index)
            .map(|c| (c.node_id(peer), c.port_index(peer)))
            .collect()
    }

    fn node_position(&self, node_id: NodeId) -> Option<Pos2> {
        self.nodes.get(&node_id).map(|n| n.position)
    }

    fn set_node_position(&mut self, node_id: NodeId, position: Pos2) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.position = position;
        }
    }

    fn widget_size(&self, node_id: NodeId) -> Option<Vec2> {
        self.nodes.get(&node_id)?.widget_size
    }

    fn set_widget_size(&mut self, node_id: NodeId, size: Vec2) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.widget_size = Some(size);
        }
    }

    fn node_size(&self, node_id: NodeId) -> Option<Vec2> {
        self.nodes.get(&node_id)?.size
    }

    fn set_node_size(&mut self, node_id: NodeId, size: Vec2) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.size = Some(size);
        }
    }

    fn port_count(&self, node_id: NodeId, port_type: PortType) -> PortIndex {
        self.nodes
            .get(&node_id)
            .map_or(0, |n| n.ports(port_type).len() as PortIndex)
    }

    fn connection_policy(
        &self,
        node_id: NodeId,
        port_type: PortType,
        port_index: PortIndex,
    ) -> ConnectionPolicy {
        self.port(node_id, port_type, port_index)
            .map(|p| p.connection_policy)
            .unwrap_or_default()
    }

    fn disconnection_policy(
        &self,
        node_id: NodeId,
        port_type: PortType,
        port_index: PortIndex,
    ) -> DisconnectionPolicy {
        self.port(node_id, port_type, port_index)
            .map(|p| p.disconnection_policy)
            .unwrap_or_default()
    }

    fn node_flags(&self, node_id: NodeId) -> NodeFlags {
        self.nodes.get(&node_id).map_or(NodeFlags::empty(), |n| n.flags)
    }
}

/// Error when committing a connection
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// One side is still unresolved
    #[error("Connection is incomplete: {0}")]
    Incomplete(ConnectionId),

    /// Node not found
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Port not found
    #[error("Port not found: {0} {1:?} {2}")]
    PortNotFound(NodeId, PortType, PortIndex),

    /// Incompatible port types
    #[error("Incompatible port types")]
    IncompatiblePorts,

    /// Connection already stored
    #[error("Already connected: {0}")]
    AlreadyConnected(ConnectionId),

    /// Port accepts a single connection and already has one
    #[error("Port already occupied: {0} {1:?} {2}")]
    PortOccupied(NodeId, PortType, PortIndex),

    /// Self-loop not allowed
    #[error("Self-loop not allowed")]
    SelfLoop,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::DataType;

    fn float_node() -> NodeType {
        NodeType::new("float", "Float")
            .with_input(Port::input("In", DataType::Float))
            .with_output(Port::output("Out", DataType::Float))
    }

    #[test]
    fn test_connect_and_query_peers() {
        let mut graph = Graph::default();
        let a = graph.add_node_of_type(&float_node());
        let b = graph.add_node_of_type(&float_node());
        let c = graph.add_node_of_type(&float_node());

        graph.add_connection(ConnectionId::new(a, 0, b, 0)).unwrap();
        graph.add_connection(ConnectionId::new(a, 0, c, 0)).unwrap();

        let peers = graph.connected_nodes(a, PortType::Out, 0);
        assert_eq!(peers.iter().copied().collect::<Vec<_>>(), vec![(b, 0), (c, 0)]);
        assert_eq!(graph.connected_nodes(b, PortType::In, 0).first(), Some(&(a, 0)));
        assert_eq!(graph.all_connection_ids(a).len(), 2);
    }

    #[test]
    fn test_rejects_invalid_connections() {
        let mut graph = Graph::default();
        let a = graph.add_node_of_type(&float_node());
        let b = graph.add_node_of_type(&float_node());
        let c = graph.add_node_of_type(&float_node());

        let draft = crate::connection::make_incomplete_connection_id(PortType::Out, a, 0);
        assert!(matches!(graph.add_connection(draft), Err(ConnectionError::Incomplete(_))));
        assert!(matches!(
            graph.add_connection(ConnectionId::new(a, 0, a, 0)),
            Err(ConnectionError::SelfLoop)
        ));
        assert!(matches!(
            graph.add_connection(ConnectionId::new(a, 4, b, 0)),
            Err(ConnectionError::PortNotFound(_, PortType::Out, 4))
        ));

        graph.add_connection(ConnectionId::new(a, 0, b, 0)).unwrap();
        assert!(matches!(
            graph.add_connection(ConnectionId::new(a, 0, b, 0)),
            Err(ConnectionError::AlreadyConnected(_))
        ));
        assert!(matches!(
            graph.add_connection(ConnectionId::new(c, 0, b, 0)),
            Err(ConnectionError::PortOccupied(_, PortType::In, 0))
        ));
        assert!(!graph.connection_possible(ConnectionId::new(c, 0, b, 0)));
        assert!(graph.connection_possible(ConnectionId::new(c, 0, a, 0)));
    }

    #[test]
    fn test_incompatible_types() {
        let mut graph = Graph::default();
        let text = NodeType::new("text", "Text").with_output(Port::output("Out", DataType::String));
        let a = graph.add_node_of_type(&text);
        let b = graph.add_node_of_type(&float_node());
        assert!(matches!(
            graph.add_connection(ConnectionId::new(a, 0, b, 0)),
            Err(ConnectionError::IncompatiblePorts)
        ));
    }

    #[test]
    fn test_delete_node_removes_connections() {
        let mut graph = Graph::default();
        let a = graph.add_node_of_type(&float_node());
        let b = graph.add_node_of_type(&float_node());
        graph.add_connection(ConnectionId::new(a, 0, b, 0)).unwrap();

        assert!(graph.delete_node(a));
        assert_eq!(graph.connection_count(), 0);
        assert!(!graph.delete_node(a));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_default_node_type() {
        let mut graph = Graph::default();
        let id = graph.add_node();
        assert_eq!(graph.port_count(id, PortType::In), 1);
        assert_eq!(graph.port_count(id, PortType::Out), 1);
        assert_eq!(graph.connection_policy(id, PortType::Out, 0), ConnectionPolicy::Many);
        assert_eq!(graph.disconnection_policy(id, PortType::In, 0), DisconnectionPolicy::Unset);
    }
}
