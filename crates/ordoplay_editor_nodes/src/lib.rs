// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node editor interaction layer for `OrdoPlay` Editor.
//!
//! This crate drives the interactive part of a node graph view:
//! - Dragging new connections out of ports
//! - Re-homing or replacing existing connections per port policy
//! - Completing drafts on a node or on empty canvas
//! - Moving, resizing and hovering nodes
//!
//! ## Architecture
//!
//! The view is built on a [`GraphModel`] contract with:
//! - A [`GraphScene`] owning per-node and per-connection UI state
//! - Short-lived controllers ([`NodeInteraction`], [`ConnectionInteraction`])
//!   that act through the [`SceneContext`] capability
//! - A pluggable [`GeometryProvider`] for sizes and hit-testing
//! - A reference in-memory [`Graph`] model

pub mod config;
pub mod connection;
pub mod connection_interaction;
pub mod connection_item;
pub mod connection_state;
pub mod event;
pub mod geometry;
pub mod graph;
pub mod model;
pub mod node;
pub mod node_interaction;
pub mod node_state;
pub mod port;
pub mod scene;

pub use config::{ConfigError, EditorConfig};
pub use connection::{
    make_complete_connection_id, make_incomplete_connection_id, required_port, ConnectionId,
};
pub use connection_interaction::ConnectionInteraction;
pub use connection_item::ConnectionItem;
pub use connection_state::ConnectionState;
pub use event::{PointerEvent, SceneEvent};
pub use geometry::{GeometryProvider, NodeGeometry};
pub use graph::{ConnectionError, Graph};
pub use model::GraphModel;
pub use node::{Node, NodeFlags, NodeId, NodeType};
pub use node_interaction::NodeInteraction;
pub use node_state::NodeState;
pub use port::{
    ConnectionPolicy, DataType, DisconnectionPolicy, Port, PortIndex, PortType, INVALID_PORT_INDEX,
};
pub use scene::{DropPrompt, GraphScene, PromptResponse, RepaintQueue, SceneContext};
