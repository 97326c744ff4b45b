// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the node editor.

use crate::port::{Port, PortIndex, PortType};
use bitflags::bitflags;
use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Reserved id marking the unresolved side of a draft connection
    pub const INVALID: NodeId = NodeId(Uuid::nil());

    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Whether this id refers to a real node
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.0)
        } else {
            f.write_str("<invalid>")
        }
    }
}

bitflags! {
    /// Per-node behavior flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u32 {
        /// The embedded widget can be resized through the corner handle
        const RESIZABLE = 1 << 0;
        /// The node cannot be dragged
        const LOCKED = 1 << 1;
    }
}

/// Node type definition
#[derive(Debug, Clone)]
pub struct NodeType {
    /// Unique type identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Default input ports
    pub inputs: Vec<Port>,
    /// Default output ports
    pub outputs: Vec<Port>,
    /// Size of the embedded widget, if the node carries one
    pub widget_size: Option<Vec2>,
    /// Behavior flags
    pub flags: NodeFlags,
}

impl NodeType {
    /// Create a node type without ports
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            widget_size: None,
            flags: NodeFlags::empty(),
        }
    }

    /// Add an input port
    pub fn with_input(mut self, port: Port) -> Self {
        self.inputs.push(port);
        self
    }

    /// Add an output port
    pub fn with_output(mut self, port: Port) -> Self {
        self.outputs.push(port);
        self
    }

    /// Embed a widget of the given size
    pub fn with_widget(mut self, size: Vec2) -> Self {
        self.widget_size = Some(size);
        self
    }

    /// Set behavior flags
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl Default for NodeType {
    /// One `Any` input and one `Any` output, used for nodes created from a drop.
    fn default() -> Self {
        Self::new("default", "Node")
            .with_input(Port::input("In", crate::port::DataType::Any))
            .with_output(Port::output("Out", crate::port::DataType::Any))
    }
}

/// A node instance held by the in-memory graph model
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Node type ID
    pub node_type: String,
    /// Display name
    pub name: String,
    /// Position of the top-left corner in scene coordinates
    pub position: Pos2,
    /// Size last computed by the geometry provider
    pub size: Option<Vec2>,
    /// Embedded widget size
    pub widget_size: Option<Vec2>,
    /// Input ports
    pub inputs: Vec<Port>,
    /// Output ports
    pub outputs: Vec<Port>,
    /// Behavior flags
    pub flags: NodeFlags,
}

impl Node {
    /// Create a new node from a type definition
    pub fn new(node_type: &NodeType) -> Self {
        Self {
            id: NodeId::new(),
            node_type: node_type.id.clone(),
            name: node_type.name.clone(),
            position: Pos2::ZERO,
            size: None,
            widget_size: node_type.widget_size,
            inputs: node_type.inputs.clone(),
            outputs: node_type.outputs.clone(),
            flags: node_type.flags,
        }
    }

    /// Set the position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = Pos2::new(x, y);
        self
    }

    /// Ports on one side of the node
    pub fn ports(&self, port_type: PortType) -> &[Port] {
        match port_type {
            PortType::In => &self.inputs,
            PortType::Out => &self.outputs,
            PortType::None => &[],
        }
    }

    /// Get a port by side and index
    pub fn port(&self, port_type: PortType, index: PortIndex) -> Option<&Port> {
        self.ports(port_type).get(index as usize)
    }
}
