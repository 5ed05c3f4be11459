// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene: a tree of elements plus everything needed to run frames over it.

use arbor_responder::types::InputQueue;
use arbor_tree::{NodeFlags, NodeId, Tree, TreeError};
use kurbo::{Point, Rect, Size};
use tracing::debug;

use crate::element::{Control, Element, Widget, WidgetKind};
use crate::paint::{Painter, RenderTargetId, ResourceHandle};
use crate::signal::{Emission, Signal};
use crate::text::{FontId, MonospaceShaper, TextShaper};
use crate::theme::Theme;
use crate::widgets::{Button, ButtonGroupId, Label, ProgressBar, SpinBox, TextureRect};

mod content;
mod draw;
mod input;
mod layout;

/// Retained UI scene.
///
/// ## Frames
///
/// [`Scene::process`] runs one frame: every queued input event is propagated
/// (topmost node first), then the update pass lays out dirty containers, then the
/// draw pass paints the visible tree. Structural edits between frames only mark
/// layout dirty; nothing is recomputed until the next update.
///
/// ## Identity
///
/// Nodes are addressed by generational [`NodeId`]s. Setters given a stale id are
/// no-ops and return `false`; getters return `None`.
pub struct Scene {
    tree: Tree<Element>,
    root: NodeId,
    theme: Theme,
    shaper: Box<dyn TextShaper>,
    default_font: Option<FontId>,
    window_size: Size,
    groups: Vec<Vec<NodeId>>,
    outbox: Vec<Emission>,
    released: Vec<ResourceHandle>,
    next_render_target: u32,
    elapsed: f64,
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scene")
            .field("tree", &self.tree)
            .field("root", &self.root)
            .field("window_size", &self.window_size)
            .field("pending_signals", &self.outbox.len())
            .field("released", &self.released.len())
            .finish_non_exhaustive()
    }
}

impl Scene {
    /// A scene with the stock theme and a [`MonospaceShaper`].
    pub fn new(window_size: Size) -> Self {
        Self::with_parts(window_size, Theme::default(), Box::new(MonospaceShaper::default()))
    }

    /// A scene with an explicit theme and shaper.
    pub fn with_parts(window_size: Size, theme: Theme, shaper: Box<dyn TextShaper>) -> Self {
        let mut tree = Tree::new();
        let mut root = Element::new(Widget::Node);
        root.name = Some(String::from("root"));
        let root = tree
            .insert(None, root)
            .expect("inserting a root cannot fail");
        Self {
            tree,
            root,
            theme,
            shaper,
            default_font: Some(FontId::default()),
            window_size,
            groups: Vec::new(),
            outbox: Vec::new(),
            released: Vec::new(),
            next_render_target: 0,
            elapsed: 0.0,
        }
    }

    /// The root node. It is a plain node named `root` and cannot be removed.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Current theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme. Every node is re-measured and laid out on the next update.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        for id in self.tree.pre_order(self.root) {
            self.measure(id);
            if let Some(el) = self.tree.get_mut(id) {
                el.layout_dirty = true;
            }
        }
    }

    /// Font given to labels added without one and used for button text.
    pub fn set_default_font(&mut self, font: Option<FontId>) {
        self.default_font = font;
    }

    /// Last reported window size.
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    /// Total time fed to [`Scene::propagate_update`].
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    // --- structure ---

    /// Append a new node under `parent`.
    ///
    /// Fires [`Signal::SubtreeChanged`] from `parent` up to the root.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        widget: impl Into<Widget>,
    ) -> Result<NodeId, TreeError> {
        let mut element = Element::new(widget.into());
        if let Some(slot) = element.widget.render_target_slot() {
            *slot = Some(RenderTargetId(self.next_render_target));
            self.next_render_target += 1;
        }
        match &mut element.widget {
            Widget::Label(label) if label.font.is_none() => label.font = self.default_font,
            // Group ids are only meaningful inside the scene that issued them.
            Widget::Button(button) => button.group = None,
            _ => {}
        }
        let is_viewport = matches!(element.widget, Widget::Viewport(_));
        let id = self.tree.insert(Some(parent), element)?;
        if is_viewport {
            let flags = self.tree.flags(id).unwrap_or_default() | NodeFlags::VIEWPORT;
            self.tree.set_flags(id, flags);
        }
        self.measure(id);
        debug!(?id, ?parent, kind = ?self.kind(id), "add child");
        self.when_subtree_changed(parent);
        Ok(id)
    }

    /// Remove the child at `index` of `parent` and its whole subtree.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn remove_child(&mut self, parent: NodeId, index: usize) -> bool {
        match self.tree.child(parent, index) {
            Some(child) => self.remove(child),
            None => false,
        }
    }

    /// Remove `id` and its subtree after running the cleanup pass over it.
    ///
    /// Returns `false` for stale ids and for the root.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root || !self.tree.is_alive(id) {
            return false;
        }
        let parent = self.tree.parent(id);
        self.propagate_cleanup(id);
        self.tree.remove(id);
        debug!(?id, ?parent, "remove");
        if let Some(parent) = parent {
            self.when_subtree_changed(parent);
        }
        true
    }

    /// Move `id` to the end of `new_parent`'s children.
    pub fn reparent(&mut self, id: NodeId, new_parent: NodeId) -> Result<(), TreeError> {
        let old_parent = self.tree.parent(id);
        self.tree.reparent(id, Some(new_parent))?;
        debug!(?id, ?old_parent, ?new_parent, "reparent");
        if let Some(old) = old_parent {
            self.when_subtree_changed(old);
        }
        self.when_subtree_changed(new_parent);
        Ok(())
    }

    /// Teardown pass over `id`'s subtree, children before parents.
    ///
    /// Releases textures and render targets into the queue drained by
    /// [`Scene::take_released_resources`] and leaves radio groups. Running it twice
    /// releases nothing the second time.
    pub fn propagate_cleanup(&mut self, id: NodeId) {
        for n in self.tree.post_order(id) {
            if let Some(el) = self.tree.get_mut(n) {
                el.widget.take_resources(&mut self.released);
                if let Widget::Button(b) = &mut el.widget
                    && let Some(group) = b.group.take()
                    && let Some(members) = self.groups.get_mut(group.0)
                {
                    members.retain(|m| *m != n);
                }
            }
        }
    }

    /// Resources released by removals since the last call.
    pub fn take_released_resources(&mut self) -> Vec<ResourceHandle> {
        core::mem::take(&mut self.released)
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.tree.is_alive(id)
    }

    /// Parent of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent(id)
    }

    /// Children of `id` in order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.tree.children(id)
    }

    /// Child of `id` at `index`.
    pub fn get_child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.tree.child(id, index)
    }

    /// Nearest viewport above `id`, `None` if only the root is above it.
    pub fn get_viewport(&self, id: NodeId) -> Option<NodeId> {
        self.tree.viewport_of(id)
    }

    /// Size of the viewport `id` renders into, or the window size without one.
    pub fn viewport_size(&self, id: NodeId) -> Size {
        self.get_viewport(id)
            .and_then(|vp| match self.widget(vp) {
                Some(Widget::Viewport(v)) => Some(v.size),
                _ => None,
            })
            .unwrap_or(self.window_size)
    }

    /// `/seg/seg/...` from the root, each segment the node's name or its kind name.
    pub fn node_path(&self, id: NodeId) -> String {
        let mut out = String::new();
        for n in self.tree.path_to_root(id) {
            if let Some(el) = self.tree.get(n) {
                out.push('/');
                out.push_str(el.name.as_deref().unwrap_or(el.widget.kind().name()));
            }
        }
        out
    }

    /// Set or clear the node's name.
    pub fn set_name(&mut self, id: NodeId, name: Option<&str>) -> bool {
        let Some(el) = self.tree.get_mut(id) else {
            return false;
        };
        el.name = name.map(String::from);
        true
    }

    /// The node's name.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.tree.get(id).and_then(|el| el.name.as_deref())
    }

    /// The node's own visibility flag.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.tree
            .flags(id)
            .is_some_and(|f| f.contains(NodeFlags::VISIBLE))
    }

    /// Whether the node and every ancestor are visible.
    pub fn is_visible_in_tree(&self, id: NodeId) -> bool {
        self.tree.is_visible_in_tree(id)
    }

    /// Show or hide a node. Hidden nodes are skipped by layout, input, and drawing.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> bool {
        let Some(flags) = self.tree.flags(id) else {
            return false;
        };
        if flags.contains(NodeFlags::VISIBLE) == visible {
            return true;
        }
        self.tree.set_flags(id, flags ^ NodeFlags::VISIBLE);
        self.when_subtree_changed(id);
        true
    }

    // --- payload access ---

    /// Kind of a node.
    pub fn kind(&self, id: NodeId) -> Option<WidgetKind> {
        self.widget(id).map(Widget::kind)
    }

    /// Kind-specific state of a node.
    pub fn widget(&self, id: NodeId) -> Option<&Widget> {
        self.tree.get(id).map(|el| &el.widget)
    }

    /// Control state, for UI-capable nodes.
    pub fn control(&self, id: NodeId) -> Option<&Control> {
        self.tree.get(id).and_then(|el| el.control.as_ref())
    }

    pub(crate) fn control_mut(&mut self, id: NodeId) -> Option<&mut Control> {
        self.tree.get_mut(id).and_then(|el| el.control.as_mut())
    }

    /// Button state.
    pub fn button(&self, id: NodeId) -> Option<&Button> {
        match self.widget(id)? {
            Widget::Button(b) => Some(b),
            _ => None,
        }
    }

    /// Label state.
    pub fn label(&self, id: NodeId) -> Option<&Label> {
        match self.widget(id)? {
            Widget::Label(l) => Some(l),
            _ => None,
        }
    }

    /// Progress bar state.
    pub fn progress_bar(&self, id: NodeId) -> Option<&ProgressBar> {
        match self.widget(id)? {
            Widget::ProgressBar(p) => Some(p),
            _ => None,
        }
    }

    /// Spin box state.
    pub fn spin_box(&self, id: NodeId) -> Option<&SpinBox> {
        match self.widget(id)? {
            Widget::SpinBox(s) => Some(s),
            _ => None,
        }
    }

    /// Texture rect state.
    pub fn texture_rect(&self, id: NodeId) -> Option<&TextureRect> {
        match self.widget(id)? {
            Widget::TextureRect(t) => Some(t),
            _ => None,
        }
    }

    // --- geometry ---

    /// Local position.
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.control(id).map(|c| c.position)
    }

    /// Assigned size.
    pub fn size(&self, id: NodeId) -> Option<Size> {
        self.control(id).map(|c| c.size)
    }

    /// Move a control relative to its parent. Does not trigger layout.
    pub fn set_position(&mut self, id: NodeId, position: Point) -> bool {
        let Some(c) = self.control_mut(id) else {
            return false;
        };
        c.position = position;
        true
    }

    /// Position in window (or viewport) space.
    ///
    /// Sums local positions up the parent chain, stopping at the first ancestor that
    /// is not a control.
    pub fn global_position(&self, id: NodeId) -> Option<Point> {
        let mut pos = self.position(id)?;
        for a in self.tree.ancestors(id) {
            match self.control(a) {
                Some(c) => pos += c.position.to_vec2(),
                None => break,
            }
        }
        Some(pos)
    }

    /// Global position and size as a rectangle.
    pub fn global_rect(&self, id: NodeId) -> Option<Rect> {
        Some(Rect::from_origin_size(
            self.global_position(id)?,
            self.size(id)?,
        ))
    }

    // --- signals ---

    /// Register `callback` for `signal` on `id`. Callbacks run in registration order.
    pub fn connect(
        &mut self,
        id: NodeId,
        signal: Signal,
        callback: impl FnMut() + 'static,
    ) -> bool {
        let Some(el) = self.tree.get_mut(id) else {
            return false;
        };
        el.subscriptions.connect(signal, Box::new(callback));
        true
    }

    /// Number of callbacks registered for `signal` on `id`.
    pub fn connections(&self, id: NodeId, signal: Signal) -> usize {
        self.tree
            .get(id)
            .map_or(0, |el| el.subscriptions.count(signal))
    }

    /// Run `id`'s callbacks for `signal` and record the emission.
    pub fn emit(&mut self, id: NodeId, signal: Signal) {
        let Some(el) = self.tree.get_mut(id) else {
            return;
        };
        el.subscriptions.emit(signal);
        self.outbox.push(Emission { node: id, signal });
        debug!(?id, ?signal, "emit");
    }

    /// Emit `signal` on every node of `id`'s subtree, parents before children.
    pub fn propagate_notify(&mut self, id: NodeId, signal: Signal) {
        for n in self.tree.pre_order(id) {
            self.emit(n, signal);
        }
    }

    /// Emissions recorded since the last call, in order.
    pub fn take_signals(&mut self) -> Vec<Emission> {
        core::mem::take(&mut self.outbox)
    }

    // --- button groups ---

    /// Create an empty radio group.
    pub fn new_button_group(&mut self) -> ButtonGroupId {
        self.groups.push(Vec::new());
        ButtonGroupId(self.groups.len() - 1)
    }

    /// Move a button into `group`, or out of any group with `None`.
    pub fn set_button_group(&mut self, id: NodeId, group: Option<ButtonGroupId>) -> bool {
        if group.is_some_and(|g| g.0 >= self.groups.len()) {
            return false;
        }
        let Some(Widget::Button(b)) = self.tree.get_mut(id).map(|el| &mut el.widget) else {
            return false;
        };
        let old = core::mem::replace(&mut b.group, group);
        if let Some(members) = old.and_then(|g| self.groups.get_mut(g.0)) {
            members.retain(|m| *m != id);
        }
        if let Some(members) = group.and_then(|g| self.groups.get_mut(g.0)) {
            members.push(id);
        }
        true
    }

    /// Members of `group` in join order.
    pub fn button_group_members(&self, group: ButtonGroupId) -> &[NodeId] {
        self.groups.get(group.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The pressed member of `group`, if any.
    pub fn pressed_in_group(&self, group: ButtonGroupId) -> Option<NodeId> {
        self.button_group_members(group)
            .iter()
            .copied()
            .find(|m| self.button(*m).is_some_and(Button::is_pressed))
    }

    // --- frames ---

    /// Run one frame: input, then update, then draw.
    ///
    /// The queue is left as is; its owner clears it.
    pub fn process(&mut self, input: &mut InputQueue, dt: f64, painter: &mut dyn Painter) {
        for event in input.events_mut() {
            self.propagate_input(event);
        }
        self.propagate_update(dt);
        self.propagate_draw(painter);
    }
}

#[cfg(test)]
mod tests;
