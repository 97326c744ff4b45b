// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pointer input fed into the scene and notifications it emits.

use crate::node::NodeId;
use egui::{Modifiers, Pos2};

/// A pointer event in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in scene coordinates
    pub scene_pos: Pos2,
    /// Pointer position on screen, forwarded in notifications
    pub screen_pos: Pos2,
    /// Held modifier keys
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Event at a scene position, no modifiers, screen position equal to
    /// the scene position
    pub fn at(scene_pos: Pos2) -> Self {
        Self {
            scene_pos,
            screen_pos: scene_pos,
            modifiers: Modifiers::NONE,
        }
    }

    /// Set held modifiers
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the screen position
    pub fn with_screen_pos(mut self, screen_pos: Pos2) -> Self {
        self.screen_pos = screen_pos;
        self
    }

    /// Whether the multi-select modifier is held
    pub fn multi_select(&self) -> bool {
        self.modifiers.command
    }
}

/// Notification for the surrounding UI layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// A node became (or stayed) selected after a press
    NodeSelected(NodeId),
    /// The pointer entered a node
    NodeHovered {
        /// Hovered node
        node_id: NodeId,
        /// Pointer position on screen
        screen_pos: Pos2,
    },
    /// The pointer left a node
    NodeHoverLeft(NodeId),
    /// A node was double-clicked
    NodeDoubleClicked(NodeId),
    /// The pointer was released over a node it pressed
    NodeClicked(NodeId),
    /// A context menu was requested on a node
    NodeContextMenu {
        /// Target node
        node_id: NodeId,
        /// Request position in scene coordinates
        scene_pos: Pos2,
    },
}
