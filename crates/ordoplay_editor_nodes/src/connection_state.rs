// SPDX-License-Identifier: MIT OR Apache-2.0
//! Transient UI state of one connection.

use crate::connection::{required_port, ConnectionId};
use crate::node::NodeId;
use crate::port::PortType;
use crate::scene::RepaintQueue;

/// Hover flag and drag-target bookkeeping of a connection item.
///
/// Dropping a state has no side effects; callers reset the hovered node
/// explicitly before discarding a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionState {
    hovered: bool,
    last_hovered_node: NodeId,
}

impl ConnectionState {
    /// Fresh state: not hovered, no node under the loose end
    pub fn new() -> Self {
        Self {
            hovered: false,
            last_hovered_node: NodeId::INVALID,
        }
    }

    /// Side of `id` still missing a port
    pub fn required_port(&self, id: &ConnectionId) -> PortType {
        required_port(id)
    }

    /// Whether `id` is a draft
    pub fn requires_port(&self, id: &ConnectionId) -> bool {
        id.is_draft()
    }

    /// Whether the pointer is over the connection
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Set the hover flag. Repainting is the caller's job.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Record the node the dragged loose end rests over
    pub fn set_last_hovered_node(&mut self, node_id: NodeId) {
        self.last_hovered_node = node_id;
    }

    /// Node the dragged loose end rests over, or [`NodeId::INVALID`]
    pub fn last_hovered_node(&self) -> NodeId {
        self.last_hovered_node
    }

    /// Repaint the recorded node, if any, and forget it
    pub fn reset_last_hovered_node(&mut self, repaints: &mut RepaintQueue) {
        if self.last_hovered_node.is_valid() {
            repaints.request(self.last_hovered_node);
        }
        self.last_hovered_node = NodeId::INVALID;
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::make_incomplete_connection_id;

    #[test]
    fn test_required_port() {
        let state = ConnectionState::new();
        let node = NodeId::new();

        let from_out = make_incomplete_connection_id(PortType::Out, node, 0);
        assert!(state.requires_port(&from_out));
        assert_eq!(state.required_port(&from_out), PortType::In);

        let from_in = make_incomplete_connection_id(PortType::In, node, 0);
        assert_eq!(state.required_port(&from_in), PortType::Out);

        let complete = ConnectionId::new(node, 0, NodeId::new(), 0);
        assert!(!state.requires_port(&complete));
        assert_eq!(state.required_port(&complete), PortType::None);
    }

    #[test]
    fn test_hover_flag() {
        let mut state = ConnectionState::default();
        assert!(!state.hovered());
        state.set_hovered(true);
        assert!(state.hovered());
    }

    #[test]
    fn test_reset_last_hovered_node_is_idempotent() {
        let mut state = ConnectionState::new();
        let mut repaints = RepaintQueue::default();
        let node = NodeId::new();

        state.set_last_hovered_node(node);
        assert_eq!(state.last_hovered_node(), node);

        state.reset_last_hovered_node(&mut repaints);
        state.reset_last_hovered_node(&mut repaints);

        assert_eq!(state.last_hovered_node(), NodeId::INVALID);
        assert_eq!(repaints.take(), vec![node]);
    }

    #[test]
    fn test_reset_without_node_requests_nothing() {
        let mut state = ConnectionState::new();
        let mut repaints = RepaintQueue::default();
        state.reset_last_hovered_node(&mut repaints);
        assert!(repaints.is_empty());
    }
}
