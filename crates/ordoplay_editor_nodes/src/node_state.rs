// SPDX-License-Identifier: MIT OR Apache-2.0
//! Transient UI state of one node.

use egui::{CursorIcon, Rect};

/// Per-node interaction state kept by the scene
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    /// Pointer is over the node
    pub hovered: bool,
    /// The resize handle is being dragged
    pub resizing: bool,
    /// Stacking order; higher draws on top
    pub z_value: f32,
    /// Cursor to show while the pointer is over the node
    pub cursor: CursorIcon,
    /// Area of the embedded widget in node-local coordinates
    pub widget_rect: Option<Rect>,
}

impl NodeState {
    /// Resting state at the given stacking order
    pub fn new(z_value: f32) -> Self {
        Self {
            hovered: false,
            resizing: false,
            z_value,
            cursor: CursorIcon::Default,
            widget_rect: None,
        }
    }
}

impl Default for NodeState {
    fn default() -> Self {
        Self::new(0.0)
    }
}
