// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node geometry: sizes, port positions and hit-testing.
//!
//! Positions returned by [`GeometryProvider`] are node-local (origin at the
//! node's top-left corner) unless the method says otherwise. Scene points are
//! mapped into node space through the node's scene transform.

use crate::config::EditorConfig;
use crate::model::GraphModel;
use crate::node::NodeId;
use crate::port::{PortIndex, PortType};
use egui::emath::TSTransform;
use egui::{Pos2, Rect, Vec2};

/// Node-local to scene transform of a node
pub fn node_transform(model: &dyn GraphModel, node_id: NodeId) -> TSTransform {
    let position = model.node_position(node_id).unwrap_or(Pos2::ZERO);
    TSTransform::from_translation(position.to_vec2())
}

/// Geometry and hit-testing of nodes
pub trait GeometryProvider {
    /// Size the node needs for its ports and embedded widget
    fn size(&self, model: &dyn GraphModel, node_id: NodeId) -> Vec2;

    /// Recompute the node size and store it in the model
    fn recalculate_size(&self, model: &mut dyn GraphModel, node_id: NodeId) -> Vec2 {
        let size = self.size(model, node_id);
        model.set_node_size(node_id, size);
        size
    }

    /// Area covered by the node, ports included
    fn bounding_rect(&self, model: &dyn GraphModel, node_id: NodeId) -> Rect;

    /// Center of a port
    fn port_position(
        &self,
        model: &dyn GraphModel,
        node_id: NodeId,
        port_type: PortType,
        port_index: PortIndex,
    ) -> Pos2;

    /// Center of a port in scene coordinates
    fn port_scene_position(
        &self,
        model: &dyn GraphModel,
        node_id: NodeId,
        port_type: PortType,
        port_index: PortIndex,
    ) -> Pos2 {
        node_transform(model, node_id).mul_pos(self.port_position(model, node_id, port_type, port_index))
    }

    /// Port of `port_type` under `scene_point`, if any
    fn hit_test_port(
        &self,
        model: &dyn GraphModel,
        node_id: NodeId,
        port_type: PortType,
        scene_point: Pos2,
        transform: TSTransform,
    ) -> Option<PortIndex>;

    /// Corner handle used to resize the embedded widget
    fn resize_handle_rect(&self, model: &dyn GraphModel, node_id: NodeId) -> Rect;

    /// Top-left corner of the embedded widget
    fn widget_position(&self, model: &dyn GraphModel, node_id: NodeId) -> Pos2;
}

/// Default node layout: title bar, inputs on the left edge, outputs on the
/// right edge, embedded widget between the port columns.
#[derive(Debug, Clone, Default)]
pub struct NodeGeometry {
    config: EditorConfig,
}

impl NodeGeometry {
    /// Create a layout from configured metrics
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }

    /// Configured metrics
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    fn current_size(&self, model: &dyn GraphModel, node_id: NodeId) -> Vec2 {
        model
            .node_size(node_id)
            .unwrap_or_else(|| self.size(model, node_id))
    }
}

impl GeometryProvider for NodeGeometry {
    fn size(&self, model: &dyn GraphModel, node_id: NodeId) -> Vec2 {
        let c = &self.config;
        let rows = model
            .port_count(node_id, PortType::In)
            .max(model.port_count(node_id, PortType::Out));
        let ports_height = c.header_height + rows as f32 * c.port_height;

        let widget = model.widget_size(node_id).unwrap_or(Vec2::ZERO);
        let width = c.node_width.max(widget.x + 2.0 * c.widget_padding);
        let height = ports_height.max(c.header_height + widget.y) + c.resize_handle_size;

        Vec2::new(width, height)
    }

    fn bounding_rect(&self, model: &dyn GraphModel, node_id: NodeId) -> Rect {
        // Must cover every port hit area, or presses near a port miss the node.
        let margin = self.config.port_radius.max(self.config.port_hit_radius());
        Rect::from_min_size(Pos2::ZERO, self.current_size(model, node_id)).expand(margin)
    }

    fn port_position(
        &self,
        model: &dyn GraphModel,
        node_id: NodeId,
        port_type: PortType,
        port_index: PortIndex,
    ) -> Pos2 {
        let c = &self.config;
        let y = c.header_height + port_index as f32 * c.port_height + c.port_height / 2.0;
        let x = match port_type {
            PortType::Out => self.current_size(model, node_id).x,
            _ => 0.0,
        };
        Pos2::new(x, y)
    }

    fn hit_test_port(
        &self,
        model: &dyn GraphModel,
        node_id: NodeId,
        port_type: PortType,
        scene_point: Pos2,
        transform: TSTransform,
    ) -> Option<PortIndex> {
        if port_type == PortType::None {
            return None;
        }

        let local = transform.inverse().mul_pos(scene_point);
        let radius = self.config.port_hit_radius();

        // Overlapping hit areas resolve to the closest port, then the lowest index.
        let mut best: Option<(PortIndex, f32)> = None;
        for index in 0..model.port_count(node_id, port_type) {
            let distance = self.port_position(model, node_id, port_type, index).distance(local);
            if distance < radius && best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    fn resize_handle_rect(&self, model: &dyn GraphModel, node_id: NodeId) -> Rect {
        let size = self.current_size(model, node_id);
        let side = self.config.resize_handle_size;
        Rect::from_min_size(Pos2::new(size.x - side, size.y - side), Vec2::splat(side))
    }

    fn widget_position(&self, _model: &dyn GraphModel, _node_id: NodeId) -> Pos2 {
        Pos2::new(self.config.widget_padding, self.config.header_height)
    }
}
