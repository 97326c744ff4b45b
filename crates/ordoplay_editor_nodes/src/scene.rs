// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene coordinator.
//!
//! [`GraphScene`] owns the per-node and per-connection UI state for one graph
//! model, routes pointer input to the node and connection controllers, and
//! holds the single draft connection slot.
//!
//! Controllers never see the concrete scene type. They receive a
//! [`SceneContext`], the set of capabilities they are allowed to use, when
//! they are constructed for an event.

use crate::config::EditorConfig;
use crate::connection::{make_complete_connection_id, required_port, ConnectionId};
use crate::connection_interaction::ConnectionInteraction;
use crate::connection_item::ConnectionItem;
use crate::event::{PointerEvent, SceneEvent};
use crate::geometry::{GeometryProvider, NodeGeometry};
use crate::graph::ConnectionError;
use crate::model::GraphModel;
use crate::node::NodeId;
use crate::node_interaction::NodeInteraction;
use crate::node_state::NodeState;
use egui::{Pos2, Rect};
use indexmap::{IndexMap, IndexSet};

/// Nodes waiting to be repainted, in request order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepaintQueue {
    nodes: Vec<NodeId>,
}

impl RepaintQueue {
    /// Ask for a node to be repainted
    pub fn request(&mut self, node_id: NodeId) {
        self.nodes.push(node_id);
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of pending requests
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Drain pending requests
    pub fn take(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.nodes)
    }
}

/// Answer to the offer made when a draft is dropped on empty canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResponse {
    /// Create a node at the drop point and connect the draft to it
    Accepted,
    /// The user dismissed the offer
    Declined,
    /// There is no view to show the offer in
    Unavailable,
}

/// Synchronous prompt shown when a draft connection is dropped on empty canvas
pub trait DropPrompt {
    /// Offer to create a node at `scene_pos`, labelled `label`
    fn offer_new_node(&mut self, scene_pos: Pos2, label: &str) -> PromptResponse;
}

impl<F> DropPrompt for F
where
    F: FnMut(Pos2, &str) -> PromptResponse,
{
    fn offer_new_node(&mut self, scene_pos: Pos2, label: &str) -> PromptResponse {
        self(scene_pos, label)
    }
}

/// Capabilities the node and connection controllers get from the scene
pub trait SceneContext {
    /// Graph model
    fn model(&self) -> &dyn GraphModel;

    /// Mutable graph model. Connection edits should go through
    /// [`SceneContext::add_connection`] and [`SceneContext::delete_connection`]
    /// so items stay in sync.
    fn model_mut(&mut self) -> &mut dyn GraphModel;

    /// Geometry provider
    fn geometry(&self) -> &dyn GeometryProvider;

    /// Mutable model and geometry together
    fn model_and_geometry(&mut self) -> (&mut dyn GraphModel, &dyn GeometryProvider);

    /// Editor configuration
    fn config(&self) -> &EditorConfig;

    /// UI state of a node
    fn node_state(&self, node_id: NodeId) -> Option<&NodeState>;

    /// Mutable UI state of a node
    fn node_state_mut(&mut self, node_id: NodeId) -> Option<&mut NodeState>;

    /// Area a node covers in scene coordinates
    fn node_scene_rect(&self, node_id: NodeId) -> Rect;

    /// Other nodes whose area overlaps this node's
    fn colliding_nodes(&self, node_id: NodeId) -> Vec<NodeId>;

    /// Whether a node is selected
    fn is_selected(&self, node_id: NodeId) -> bool;

    /// Selected nodes in selection order
    fn selected_nodes(&self) -> Vec<NodeId>;

    /// Select a node, keeping the current selection when `add` is set
    fn select_node(&mut self, node_id: NodeId, add: bool);

    /// Deselect everything
    fn clear_selection(&mut self);

    /// Commit a complete connection to the model and show it
    fn add_connection(&mut self, connection_id: ConnectionId) -> Result<(), ConnectionError>;

    /// Remove a connection from the model and the scene
    fn delete_connection(&mut self, connection_id: ConnectionId) -> bool;

    /// Recompute the end points of a shown connection; `false` if it has no item
    fn move_connection(&mut self, connection_id: ConnectionId) -> bool;

    /// Start a draft connection, replacing any active one
    fn make_draft_connection(&mut self, connection_id: ConnectionId) -> &mut ConnectionItem;

    /// Discard the active draft connection, if any
    fn reset_draft_connection(&mut self);

    /// Active draft connection
    fn draft_connection(&self) -> Option<&ConnectionItem>;

    /// Grow the scene rectangle to include `rect`
    fn grow_scene_rect(&mut self, rect: Rect);

    /// Ask for a node to be repainted
    fn request_repaint(&mut self, node_id: NodeId);

    /// Emit a notification
    fn notify(&mut self, event: SceneEvent);
}

/// Interactive view state over a graph model
pub struct GraphScene<M: GraphModel, G: GeometryProvider = NodeGeometry> {
    model: M,
    geometry: G,
    config: EditorConfig,
    node_states: IndexMap<NodeId, NodeState>,
    connections: IndexMap<ConnectionId, ConnectionItem>,
    draft: Option<ConnectionItem>,
    selection: IndexSet<NodeId>,
    scene_rect: Rect,
    grabbed_node: Option<NodeId>,
    hovered_node: Option<NodeId>,
    last_pointer_pos: Pos2,
    events: Vec<SceneEvent>,
    repaints: RepaintQueue,
    drop_prompt: Option<Box<dyn DropPrompt>>,
}

impl<M: GraphModel> GraphScene<M, NodeGeometry> {
    /// Scene with the default node layout built from `config`
    pub fn with_config(model: M, config: EditorConfig) -> Self {
        let geometry = NodeGeometry::new(config.clone());
        Self::new(model, geometry, config)
    }
}

impl<M: GraphModel, G: GeometryProvider> GraphScene<M, G> {
    /// Create a scene and show every node and connection already in `model`
    pub fn new(model: M, geometry: G, config: EditorConfig) -> Self {
        let mut scene = Self {
            model,
            geometry,
            config,
            node_states: IndexMap::new(),
            connections: IndexMap::new(),
            draft: None,
            selection: IndexSet::new(),
            scene_rect: Rect::NOTHING,
            grabbed_node: None,
            hovered_node: None,
            last_pointer_pos: Pos2::ZERO,
            events: Vec::new(),
            repaints: RepaintQueue::default(),
            drop_prompt: None,
        };

        for node_id in scene.model.node_ids() {
            scene.show_node(node_id);
        }
        for node_id in scene.model.node_ids() {
            for connection_id in scene.model.all_connection_ids(node_id) {
                scene.show_connection(connection_id);
            }
        }

        tracing::debug!(
            "Scene created with {} nodes and {} connections",
            scene.node_states.len(),
            scene.connections.len()
        );
        scene
    }

    /// Underlying graph model
    pub fn graph_model(&self) -> &M {
        &self.model
    }

    /// Geometry provider
    pub fn geometry_provider(&self) -> &G {
        &self.geometry
    }

    /// Install the prompt shown when a draft is dropped on empty canvas
    pub fn set_drop_prompt(&mut self, prompt: impl DropPrompt + 'static) {
        self.drop_prompt = Some(Box::new(prompt));
    }

    /// Remove the drop prompt; drafts dropped on empty canvas are discarded
    pub fn clear_drop_prompt(&mut self) {
        self.drop_prompt = None;
    }

    /// Scene bounds; only ever grows
    pub fn scene_rect(&self) -> Rect {
        self.scene_rect
    }

    /// Node under the pointer, if any
    pub fn hovered_node(&self) -> Option<NodeId> {
        self.hovered_node
    }

    /// Node currently following the pointer, if any
    pub fn grabbed_node(&self) -> Option<NodeId> {
        self.grabbed_node
    }

    /// Item of a shown connection
    pub fn connection_item(&self, connection_id: ConnectionId) -> Option<&ConnectionItem> {
        self.connections.get(&connection_id)
    }

    /// All shown connections
    pub fn connection_items(&self) -> impl Iterator<Item = &ConnectionItem> {
        self.connections.values()
    }

    /// Drain queued notifications
    pub fn take_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain queued repaint requests
    pub fn take_repaints(&mut self) -> Vec<NodeId> {
        self.repaints.take()
    }

    /// Create a node of the model's default type at `position`
    pub fn add_node_at(&mut self, position: Pos2) -> NodeId {
        let node_id = self.model.add_node();
        self.model.set_node_position(node_id, position);
        self.show_node(node_id);
        tracing::debug!("Node {} added at {:?}", node_id, position);
        node_id
    }

    /// Remove a node with its connections
    pub fn remove_node(&mut self, node_id: NodeId) -> bool {
        if self
            .draft
            .as_ref()
            .is_some_and(|d| d.id().involves_node(node_id))
        {
            self.reset_draft_connection();
        }
        self.connections.retain(|id, _| !id.involves_node(node_id));
        self.node_states.shift_remove(&node_id);
        self.selection.shift_remove(&node_id);
        if self.hovered_node == Some(node_id) {
            self.hovered_node = None;
        }
        if self.grabbed_node == Some(node_id) {
            self.grabbed_node = None;
        }
        self.model.delete_node(node_id)
    }

    /// Topmost node whose area contains `scene_pos`
    pub fn node_at(&self, scene_pos: Pos2) -> Option<NodeId> {
        // Equal stacking order resolves to the later node, which draws on top.
        self.node_states
            .iter()
            .filter(|(id, _)| self.node_scene_rect(**id).contains(scene_pos))
            .max_by(|(_, a), (_, b)| a.z_value.total_cmp(&b.z_value))
            .map(|(id, _)| *id)
    }

    /// Pointer pressed
    pub fn pointer_press(&mut self, event: PointerEvent) {
        self.last_pointer_pos = event.scene_pos;

        let Some(node_id) = self.node_at(event.scene_pos) else {
            if !event.multi_select() {
                self.clear_selection();
            }
            return;
        };

        NodeInteraction::new(self, node_id).mouse_press(&event);

        // A started draft takes the pointer instead of the node.
        if self.draft.is_none() {
            self.grabbed_node = Some(node_id);
        }
    }

    /// Pointer moved
    pub fn pointer_move(&mut self, event: PointerEvent) {
        let delta = event.scene_pos - self.last_pointer_pos;
        self.last_pointer_pos = event.scene_pos;

        if self.draft.is_some() {
            self.drag_draft(event.scene_pos);
        } else if let Some(node_id) = self.grabbed_node {
            NodeInteraction::new(self, node_id).mouse_move(delta);
        } else {
            self.update_hover(&event);
        }
    }

    /// Pointer released
    pub fn pointer_release(&mut self, event: PointerEvent) {
        self.last_pointer_pos = event.scene_pos;

        if self.draft.is_some() {
            self.drop_draft(event.scene_pos);
            self.grabbed_node = None;
        } else if let Some(node_id) = self.grabbed_node.take() {
            NodeInteraction::new(self, node_id).mouse_release();
        }
    }

    /// Pointer double-clicked
    pub fn double_click(&mut self, event: PointerEvent) {
        if let Some(node_id) = self.node_at(event.scene_pos) {
            NodeInteraction::new(self, node_id).mouse_double_click();
        }
    }

    /// Context menu requested
    pub fn context_menu(&mut self, event: PointerEvent) {
        if let Some(node_id) = self.node_at(event.scene_pos) {
            NodeInteraction::new(self, node_id).context_menu(&event);
        }
    }

    fn show_node(&mut self, node_id: NodeId) {
        let size = self.geometry.recalculate_size(&mut self.model, node_id);
        let mut state = NodeState::new(self.config.base_z);
        if let Some(widget) = self.model.widget_size(node_id) {
            let origin = self.geometry.widget_position(&self.model, node_id);
            state.widget_rect = Some(Rect::from_min_size(origin, widget));
        }
        self.node_states.insert(node_id, state);
        tracing::trace!("Node {} shown with size {:?}", node_id, size);

        let rect = self.node_scene_rect(node_id);
        self.grow_scene_rect(rect);
    }

    fn show_connection(&mut self, connection_id: ConnectionId) {
        let item = ConnectionItem::placed(connection_id, &self.model, &self.geometry);
        self.connections.insert(connection_id, item);
    }

    fn update_hover(&mut self, event: &PointerEvent) {
        let target = self.node_at(event.scene_pos);

        if target != self.hovered_node {
            if let Some(previous) = self.hovered_node.take() {
                if self.node_states.contains_key(&previous) {
                    NodeInteraction::new(self, previous).hover_leave();
                }
            }
            if let Some(node_id) = target {
                NodeInteraction::new(self, node_id).hover_enter(event);
            }
            self.hovered_node = target;
        }

        if let Some(node_id) = target {
            NodeInteraction::new(self, node_id).hover_move(event);
        }
    }

    fn drag_draft(&mut self, scene_pos: Pos2) {
        let located = self.node_at(scene_pos);
        let Some(draft) = self.draft.as_mut() else {
            return;
        };

        let last = draft.state().last_hovered_node();
        match located {
            Some(node_id) if node_id == last => {}
            Some(node_id) => {
                draft.state_mut().reset_last_hovered_node(&mut self.repaints);
                draft.state_mut().set_last_hovered_node(node_id);
                self.repaints.request(node_id);
            }
            None => draft.state_mut().reset_last_hovered_node(&mut self.repaints),
        }

        let loose_end = draft.required_port();
        draft.set_end_point(loose_end, scene_pos);
    }

    fn drop_draft(&mut self, scene_pos: Pos2) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        let loose_end = draft.required_port();
        draft.set_end_point(loose_end, scene_pos);
        draft.state_mut().reset_last_hovered_node(&mut self.repaints);
        let draft_id = draft.id();

        match self.node_at(scene_pos) {
            Some(node_id) => {
                if !ConnectionInteraction::new(self, node_id, draft_id).try_connect() {
                    tracing::debug!("Draft {} dropped on node {} without a free compatible port", draft_id, node_id);
                    self.reset_draft_connection();
                }
            }
            None => self.handle_dropped_draft_connection(scene_pos, draft_id),
        }
    }

    /// Offer to create a node where a draft was dropped on empty canvas
    fn handle_dropped_draft_connection(&mut self, scene_pos: Pos2, draft_id: ConnectionId) {
        let response = match self.drop_prompt.as_mut() {
            Some(prompt) => prompt.offer_new_node(scene_pos, &self.config.add_node_label),
            None => PromptResponse::Unavailable,
        };

        if response == PromptResponse::Accepted {
            let node_id = self.add_node_at(scene_pos);
            let connection_id = make_complete_connection_id(draft_id, node_id, 0);
            self.reset_draft_connection();
            if let Err(e) = self.add_connection(connection_id) {
                tracing::warn!("Failed to connect dropped draft to new node: {}", e);
            }
        } else {
            tracing::debug!("Draft {} discarded ({:?})", draft_id, response);
            self.reset_draft_connection();
        }
    }
}

impl<M: GraphModel, G: GeometryProvider> SceneContext for GraphScene<M, G> {
    fn model(&self) -> &dyn GraphModel {
        &self.model
    }

    fn model_mut(&mut self) -> &mut dyn GraphModel {
        &mut self.model
    }

    fn geometry(&self) -> &dyn GeometryProvider {
        &self.geometry
    }

    fn model_and_geometry(&mut self) -> (&mut dyn GraphModel, &dyn GeometryProvider) {
        (&mut self.model, &self.geometry)
    }

    fn config(&self) -> &EditorConfig {
        &self.config
    }

    fn node_state(&self, node_id: NodeId) -> Option<&NodeState> {
        self.node_states.get(&node_id)
    }

    fn node_state_mut(&mut self, node_id: NodeId) -> Option<&mut NodeState> {
        self.node_states.get_mut(&node_id)
    }

    fn node_scene_rect(&self, node_id: NodeId) -> Rect {
        let position = self.model.node_position(node_id).unwrap_or(Pos2::ZERO);
        self.geometry
            .bounding_rect(&self.model, node_id)
            .translate(position.to_vec2())
    }

    fn colliding_nodes(&self, node_id: NodeId) -> Vec<NodeId> {
        let rect = self.node_scene_rect(node_id);
        self.node_states
            .keys()
            .copied()
            .filter(|other| *other != node_id && self.node_scene_rect(*other).intersects(rect))
            .collect()
    }

    fn is_selected(&self, node_id: NodeId) -> bool {
        self.selection.contains(&node_id)
    }

    fn selected_nodes(&self) -> Vec<NodeId> {
        self.selection.iter().copied().collect()
    }

    fn select_node(&mut self, node_id: NodeId, add: bool) {
        if !add {
            self.selection.clear();
        }
        self.selection.insert(node_id);
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn add_connection(&mut self, connection_id: ConnectionId) -> Result<(), ConnectionError> {
        self.model.add_connection(connection_id)?;
        self.show_connection(connection_id);
        self.repaints.request(connection_id.out_node_id);
        self.repaints.request(connection_id.in_node_id);
        tracing::debug!("Connection {} committed", connection_id);
        Ok(())
    }

    fn delete_connection(&mut self, connection_id: ConnectionId) -> bool {
        self.connections.shift_remove(&connection_id);
        let existed = self.model.delete_connection(connection_id);
        if existed {
            tracing::debug!("Connection {} deleted", connection_id);
        }
        existed
    }

    fn move_connection(&mut self, connection_id: ConnectionId) -> bool {
        match self.connections.get_mut(&connection_id) {
            Some(item) => {
                item.move_endpoints(&self.model, &self.geometry);
                true
            }
            None => false,
        }
    }

    fn make_draft_connection(&mut self, connection_id: ConnectionId) -> &mut ConnectionItem {
        debug_assert!(connection_id.is_draft(), "draft id must have exactly one open side");

        if self.draft.is_some() {
            tracing::debug!("Replacing active draft connection");
            self.reset_draft_connection();
        }

        let mut item = ConnectionItem::placed(connection_id, &self.model, &self.geometry);
        let loose_end = required_port(&connection_id);
        let anchor = item.end_point(loose_end.opposite());
        item.set_end_point(loose_end, anchor);

        self.grabbed_node = None;
        tracing::debug!("Draft connection started: {}", connection_id);
        self.draft.insert(item)
    }

    fn reset_draft_connection(&mut self) {
        if let Some(mut draft) = self.draft.take() {
            draft.state_mut().reset_last_hovered_node(&mut self.repaints);
            tracing::trace!("Draft connection {} cleared", draft.id());
        }
    }

    fn draft_connection(&self) -> Option<&ConnectionItem> {
        self.draft.as_ref()
    }

    fn grow_scene_rect(&mut self, rect: Rect) {
        self.scene_rect = self.scene_rect.union(rect);
    }

    fn request_repaint(&mut self, node_id: NodeId) {
        self.repaints.request(node_id);
    }

    fn notify(&mut self, event: SceneEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::make_incomplete_connection_id;
    use crate::graph::Graph;
    use crate::node::{Node, NodeType};
    use crate::port::PortType;
    use egui::{Modifiers, Vec2};

    fn scene_with_two_nodes() -> (GraphScene<Graph>, NodeId, NodeId) {
        let mut graph = Graph::default();
        let a = graph.insert_node(Node::new(&NodeType::default()).with_position(0.0, 0.0));
        let b = graph.insert_node(Node::new(&NodeType::default()).with_position(400.0, 0.0));
        let scene = GraphScene::with_config(graph, EditorConfig::default());
        (scene, a, b)
    }

    #[test]
    fn test_scene_shows_existing_connections() {
        let mut graph = Graph::default();
        let a = graph.insert_node(Node::new(&NodeType::default()));
        let b = graph.insert_node(Node::new(&NodeType::default()).with_position(300.0, 0.0));
        let id = ConnectionId::new(a, 0, b, 0);
        graph.add_connection(id).unwrap();

        let scene = GraphScene::with_config(graph, EditorConfig::default());
        assert!(scene.connection_item(id).is_some());
        assert_eq!(scene.connection_items().count(), 1);
        assert!(scene.scene_rect().contains(Pos2::new(450.0, 20.0)));
        assert_eq!(scene.graph_model().node_size(a), Some(Vec2::new(180.0, 56.0)));
    }

    #[test]
    fn test_add_node_uses_default_type_and_layout() {
        let wide = NodeType::new("wide", "Wide").with_widget(Vec2::new(300.0, 20.0));
        let graph = Graph::new("custom").with_default_node_type(wide);
        let config = EditorConfig {
            node_width: 120.0,
            ..EditorConfig::default()
        };
        let mut scene = GraphScene::with_config(graph, config);
        assert_eq!(scene.geometry_provider().config().node_width, 120.0);

        let id = scene.add_node_at(Pos2::new(50.0, 50.0));
        let node = scene.graph_model().node(id).unwrap();
        assert_eq!(node.node_type, "wide");
        assert_eq!(scene.graph_model().node_size(id), Some(Vec2::new(324.0, 54.0)));
        assert_eq!(
            scene.node_state(id).unwrap().widget_rect,
            Some(Rect::from_min_size(Pos2::new(12.0, 24.0), Vec2::new(300.0, 20.0)))
        );
        assert!(scene.scene_rect().contains(Pos2::new(370.0, 100.0)));
    }

    #[test]
    fn test_repaint_queue_drains_in_order() {
        let mut queue = RepaintQueue::default();
        let a = NodeId::new();
        let b = NodeId::new();
        queue.request(a);
        queue.request(b);
        queue.request(a);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.take(), vec![a, b, a]);
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_single_draft_slot() {
        let (mut scene, a, b) = scene_with_two_nodes();
        scene.make_draft_connection(make_incomplete_connection_id(PortType::Out, a, 0));
        scene.make_draft_connection(make_incomplete_connection_id(PortType::In, b, 0));

        let draft = scene.draft_connection().unwrap();
        assert_eq!(draft.id().in_node_id, b);
        assert_eq!(draft.end_point(PortType::Out), draft.end_point(PortType::In));

        scene.reset_draft_connection();
        assert!(scene.draft_connection().is_none());
        scene.reset_draft_connection();
    }

    #[test]
    fn test_node_at_prefers_higher_stacking() {
        let mut graph = Graph::default();
        let a = graph.insert_node(Node::new(&NodeType::default()));
        let b = graph.insert_node(Node::new(&NodeType::default()).with_position(50.0, 10.0));
        let mut scene = GraphScene::with_config(graph, EditorConfig::default());

        let overlap = Pos2::new(100.0, 30.0);
        assert_eq!(scene.node_at(overlap), Some(b));

        scene.node_state_mut(a).unwrap().z_value = 1.0;
        assert_eq!(scene.node_at(overlap), Some(a));
        assert_eq!(scene.node_at(Pos2::new(-100.0, -100.0)), None);
    }

    #[test]
    fn test_press_on_empty_canvas_clears_selection() {
        let (mut scene, a, b) = scene_with_two_nodes();
        scene.select_node(a, false);
        scene.select_node(b, true);

        let empty = Pos2::new(300.0, 300.0);
        scene.pointer_press(PointerEvent::at(empty).with_modifiers(Modifiers::COMMAND));
        assert_eq!(scene.selected_nodes(), vec![a, b]);

        scene.pointer_press(PointerEvent::at(empty));
        assert!(scene.selected_nodes().is_empty());
    }

    #[test]
    fn test_remove_node_drops_items_and_draft() {
        let (mut scene, a, b) = scene_with_two_nodes();
        let id = ConnectionId::new(a, 0, b, 0);
        scene.add_connection(id).unwrap();
        scene.make_draft_connection(make_incomplete_connection_id(PortType::Out, a, 0));

        assert!(scene.remove_node(a));
        assert!(scene.connection_item(id).is_none());
        assert!(scene.draft_connection().is_none());
        assert_eq!(scene.graph_model().connection_count(), 0);
        assert!(scene.node_state(a).is_none());
    }

    #[test]
    fn test_move_connection_skips_missing_items() {
        let (mut scene, a, b) = scene_with_two_nodes();
        assert!(!scene.move_connection(ConnectionId::new(a, 0, b, 0)));
    }

    #[test]
    fn test_context_menu_and_double_click() {
        let (mut scene, a, _) = scene_with_two_nodes();
        let inside = Pos2::new(90.0, 10.0);
        scene.double_click(PointerEvent::at(inside));
        scene.context_menu(PointerEvent::at(inside));
        scene.context_menu(PointerEvent::at(Pos2::new(300.0, 300.0)));

        assert_eq!(
            scene.take_events(),
            vec![
                SceneEvent::NodeDoubleClicked(a),
                SceneEvent::NodeContextMenu {
                    node_id: a,
                    scene_pos: inside
                },
            ]
        );
    }
}
