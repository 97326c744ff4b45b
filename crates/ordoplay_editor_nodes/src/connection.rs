// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection identifiers and the helpers that build, complete and split them.
//!
//! A [`ConnectionId`] is always stored in canonical `out -> in` form. A draft
//! connection has exactly one side set to [`NodeId::INVALID`] and
//! [`INVALID_PORT_INDEX`].

use crate::node::NodeId;
use crate::port::{PortIndex, PortType, INVALID_PORT_INDEX};
use serde::{Deserialize, Serialize};

/// Identifier of a connection between an output port and an input port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId {
    /// Node owning the output port
    pub out_node_id: NodeId,
    /// Output port index
    pub out_port_index: PortIndex,
    /// Node owning the input port
    pub in_node_id: NodeId,
    /// Input port index
    pub in_port_index: PortIndex,
}

impl ConnectionId {
    /// Create a connection id from both sides
    pub fn new(
        out_node_id: NodeId,
        out_port_index: PortIndex,
        in_node_id: NodeId,
        in_port_index: PortIndex,
    ) -> Self {
        Self {
            out_node_id,
            out_port_index,
            in_node_id,
            in_port_index,
        }
    }

    /// Node on the given side
    pub fn node_id(&self, port_type: PortType) -> NodeId {
        match port_type {
            PortType::Out => self.out_node_id,
            PortType::In => self.in_node_id,
            PortType::None => NodeId::INVALID,
        }
    }

    /// Port index on the given side
    pub fn port_index(&self, port_type: PortType) -> PortIndex {
        match port_type {
            PortType::Out => self.out_port_index,
            PortType::In => self.in_port_index,
            PortType::None => INVALID_PORT_INDEX,
        }
    }

    /// Exactly one side is unresolved
    pub fn is_draft(&self) -> bool {
        self.out_node_id.is_valid() != self.in_node_id.is_valid()
    }

    /// Both sides are resolved
    pub fn is_complete(&self) -> bool {
        self.out_node_id.is_valid() && self.in_node_id.is_valid()
    }

    /// Whether either side is the given node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.out_node_id == node_id || self.in_node_id == node_id
    }

    /// Swap the two sides
    pub fn inverted(self) -> Self {
        Self {
            out_node_id: self.in_node_id,
            out_port_index: self.in_port_index,
            in_node_id: self.out_node_id,
            in_port_index: self.out_port_index,
        }
    }

    /// The same connection with one side cleared
    pub fn detached(self, port_type: PortType) -> Self {
        let mut id = self;
        match port_type {
            PortType::Out => {
                id.out_node_id = NodeId::INVALID;
                id.out_port_index = INVALID_PORT_INDEX;
            }
            PortType::In => {
                id.in_node_id = NodeId::INVALID;
                id.in_port_index = INVALID_PORT_INDEX;
            }
            PortType::None => {}
        }
        id
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} -> {}:{}",
            self.out_node_id, self.out_port_index, self.in_node_id, self.in_port_index
        )
    }
}

/// Side of `id` still waiting for a port, or `None` when both sides are set
pub fn required_port(id: &ConnectionId) -> PortType {
    if !id.in_node_id.is_valid() {
        PortType::In
    } else if !id.out_node_id.is_valid() {
        PortType::Out
    } else {
        PortType::None
    }
}

/// Draft anchored at `(node_id, port_index)` on `port_type`, the far side unresolved
pub fn make_incomplete_connection_id(
    port_type: PortType,
    node_id: NodeId,
    port_index: PortIndex,
) -> ConnectionId {
    match port_type {
        PortType::Out => ConnectionId::new(node_id, port_index, NodeId::INVALID, INVALID_PORT_INDEX),
        _ => ConnectionId::new(NodeId::INVALID, INVALID_PORT_INDEX, node_id, port_index),
    }
}

/// Fill the unresolved side of `draft` with `(node_id, port_index)`
pub fn make_complete_connection_id(
    draft: ConnectionId,
    node_id: NodeId,
    port_index: PortIndex,
) -> ConnectionId {
    let mut id = draft;
    match required_port(&draft) {
        PortType::In => {
            id.in_node_id = node_id;
            id.in_port_index = port_index;
        }
        PortType::Out => {
            id.out_node_id = node_id;
            id.out_port_index = port_index;
        }
        PortType::None => {}
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_from_out_port() {
        let node = NodeId::new();
        let draft = make_incomplete_connection_id(PortType::Out, node, 2);
        assert!(draft.is_draft());
        assert!(!draft.is_complete());
        assert_eq!(required_port(&draft), PortType::In);
        assert_eq!(draft.node_id(PortType::Out), node);
        assert_eq!(draft.port_index(PortType::In), INVALID_PORT_INDEX);
    }

    #[test]
    fn test_complete_fills_missing_side() {
        let a = NodeId::new();
        let b = NodeId::new();
        let draft = make_incomplete_connection_id(PortType::In, b, 1);
        assert_eq!(required_port(&draft), PortType::Out);

        let id = make_complete_connection_id(draft, a, 0);
        assert_eq!(id, ConnectionId::new(a, 0, b, 1));
        assert!(id.is_complete());
        assert!(!id.is_draft());
        assert_eq!(required_port(&id), PortType::None);
    }

    #[test]
    fn test_detach_and_invert() {
        let a = NodeId::new();
        let b = NodeId::new();
        let id = ConnectionId::new(a, 0, b, 3);

        let detached = id.detached(PortType::In);
        assert_eq!(detached, ConnectionId::new(a, 0, NodeId::INVALID, INVALID_PORT_INDEX));
        assert!(detached.is_draft());

        let inverted = id.inverted();
        assert_eq!(inverted.out_node_id, b);
        assert_eq!(inverted.in_port_index, 0);
        assert_eq!(inverted.inverted(), id);
        assert!(id.involves_node(a) && id.involves_node(b));
    }
}
