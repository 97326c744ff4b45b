// SPDX-License-Identifier: MIT OR Apache-2.0
//! Materialized on-screen representation of a connection.

use crate::connection::ConnectionId;
use crate::connection_state::ConnectionState;
use crate::geometry::GeometryProvider;
use crate::model::GraphModel;
use crate::port::PortType;
use egui::Pos2;

/// A connection as the scene shows it: id, transient state and the two end
/// points in scene coordinates.
#[derive(Debug, Clone)]
pub struct ConnectionItem {
    id: ConnectionId,
    state: ConnectionState,
    out_point: Pos2,
    in_point: Pos2,
}

impl ConnectionItem {
    /// Create an item with both ends at the scene origin
    pub fn new(id: ConnectionId) -> Self {
        Self {
            id,
            state: ConnectionState::new(),
            out_point: Pos2::ZERO,
            in_point: Pos2::ZERO,
        }
    }

    /// Create an item and place its attached ends
    pub fn placed(id: ConnectionId, model: &dyn GraphModel, geometry: &dyn GeometryProvider) -> Self {
        let mut item = Self::new(id);
        item.move_endpoints(model, geometry);
        item
    }

    /// Connection id
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Transient state
    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Mutable transient state
    pub fn state_mut(&mut self) -> &mut ConnectionState {
        &mut self.state
    }

    /// Side still missing a port
    pub fn required_port(&self) -> PortType {
        self.state.required_port(&self.id)
    }

    /// Whether this is a draft
    pub fn requires_port(&self) -> bool {
        self.state.requires_port(&self.id)
    }

    /// End point on one side
    pub fn end_point(&self, port_type: PortType) -> Pos2 {
        match port_type {
            PortType::Out => self.out_point,
            _ => self.in_point,
        }
    }

    /// Place one end point
    pub fn set_end_point(&mut self, port_type: PortType, point: Pos2) {
        match port_type {
            PortType::Out => self.out_point = point,
            PortType::In => self.in_point = point,
            PortType::None => {}
        }
    }

    /// Snap attached ends to their ports. A draft's loose end stays put.
    pub fn move_endpoints(&mut self, model: &dyn GraphModel, geometry: &dyn GeometryProvider) {
        for side in [PortType::Out, PortType::In] {
            let node_id = self.id.node_id(side);
            if node_id.is_valid() && model.node_exists(node_id) {
                let point = geometry.port_scene_position(model, node_id, side, self.id.port_index(side));
                self.set_end_point(side, point);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::make_incomplete_connection_id;
    use crate::geometry::NodeGeometry;
    use crate::graph::Graph;
    use crate::node::{Node, NodeType};

    #[test]
    fn test_draft_keeps_loose_end() {
        let mut graph = Graph::default();
        let id = graph.insert_node(Node::new(&NodeType::default()).with_position(10.0, 10.0));
        let geometry = NodeGeometry::default();

        let draft = make_incomplete_connection_id(PortType::Out, id, 0);
        let mut item = ConnectionItem::placed(draft, &graph, &geometry);
        item.set_end_point(PortType::In, Pos2::new(400.0, 300.0));

        graph.set_node_position(id, Pos2::new(20.0, 10.0));
        item.move_endpoints(&graph, &geometry);

        assert_eq!(item.end_point(PortType::Out), Pos2::new(200.0, 45.0));
        assert_eq!(item.end_point(PortType::In), Pos2::new(400.0, 300.0));
        assert!(item.requires_port());
        assert_eq!(item.required_port(), PortType::In);
    }

    #[test]
    fn test_complete_connection_tracks_both_nodes() {
        let mut graph = Graph::default();
        let a = graph.insert_node(Node::new(&NodeType::default()));
        let b = graph.insert_node(Node::new(&NodeType::default()).with_position(300.0, 0.0));
        let geometry = NodeGeometry::default();

        let item = ConnectionItem::placed(ConnectionId::new(a, 0, b, 0), &graph, &geometry);
        assert_eq!(item.end_point(PortType::Out), Pos2::new(180.0, 35.0));
        assert_eq!(item.end_point(PortType::In), Pos2::new(300.0, 35.0));
        assert!(!item.requires_port());
    }
}
