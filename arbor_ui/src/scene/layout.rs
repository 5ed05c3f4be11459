// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout protocol.
//!
//! ## Phases
//!
//! 1) [`Scene::calc_minimum_size`] is pure and bottom-up: a container's minimum is
//!    derived from its visible children's minimums and its own floor.
//! 2) [`Scene::adjust_layout`] is top-down: a container first grows to its minimum,
//!    then gives each child a position and a size through [`Scene::set_size`],
//!    which lays out nested containers in turn.
//!
//! ## Invalidation
//!
//! Content changes call [`Scene::when_subtree_changed`], which marks the node and
//! all of its ancestors dirty. The update pass walks the tree parents first and
//! lays out each dirty container once; laying out a container clears the flag on
//! every node it places, so a subtree is never laid out twice in one pass.

use arbor_tree::{NodeFlags, NodeId};
use kurbo::{Point, Size};
use tracing::trace;

use super::Scene;
use crate::containers::{BoxItem, box_minimum, distribute};
use crate::element::Widget;
use crate::signal::Signal;
use crate::sizing::SizingDirective;

fn max_size(a: Size, b: Size) -> Size {
    Size::new(a.width.max(b.width), a.height.max(b.height))
}

impl Scene {
    /// Visible UI-capable children of `id`, in order.
    pub(crate) fn layout_children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .children(id)
            .iter()
            .copied()
            .filter(|&c| {
                self.control(c).is_some()
                    && self
                        .tree
                        .flags(c)
                        .is_some_and(|f| f.contains(NodeFlags::VISIBLE))
            })
            .collect()
    }

    /// Separation a box container uses: its own, else the theme's.
    fn separation_of(&self, explicit: Option<f64>) -> f64 {
        explicit.unwrap_or(self.theme.separation)
    }

    /// Smallest size `id` can be given. Zero for nodes without control state.
    pub fn calc_minimum_size(&self, id: NodeId) -> Size {
        let Some(el) = self.tree.get(id) else {
            return Size::ZERO;
        };
        let Some(control) = &el.control else {
            return Size::ZERO;
        };
        let content = match &el.widget {
            Widget::Container => self
                .layout_children(id)
                .into_iter()
                .fold(Size::ZERO, |acc, c| max_size(acc, self.calc_minimum_size(c))),
            Widget::Margin(m) => {
                let extra = m.extra();
                self.layout_children(id)
                    .into_iter()
                    .fold(Size::ZERO, |acc, c| {
                        max_size(acc, self.calc_minimum_size(c) + extra)
                    })
            }
            Widget::Box(b) => box_minimum(
                b.axis,
                self.separation_of(b.separation),
                self.layout_children(id)
                    .into_iter()
                    .map(|c| self.calc_minimum_size(c)),
            ),
            Widget::Button(b) => b.content_size(),
            Widget::Label(l) => l.content_size(),
            Widget::ProgressBar(p) => p.shaped.size,
            Widget::SpinBox(s) => {
                Size::new(
                    s.shaped.size.width + self.theme.spin_box_arrow_width,
                    s.shaped.size.height,
                )
            }
            Widget::TextureRect(t) => t.content_size(),
            Widget::Scroll(_) | Widget::Control | Widget::Node | Widget::Viewport(_) => {
                Size::ZERO
            }
        };
        max_size(control.minimum_size, content)
    }

    /// Assign a size, never below [`Scene::calc_minimum_size`].
    ///
    /// Negative components clamp to zero. Setting the current size, or a size that
    /// resolves to it, does nothing. Otherwise containers lay out at once and
    /// [`Signal::Resized`] fires. Returns `true` if the size changed.
    pub fn set_size(&mut self, id: NodeId, size: Size) -> bool {
        let requested = Size::new(size.width.max(0.0), size.height.max(0.0));
        let Some(current) = self.size(id) else {
            return false;
        };
        if requested == current {
            return false;
        }
        let resolved = max_size(requested, self.calc_minimum_size(id));
        if resolved == current {
            return false;
        }
        if let Some(c) = self.control_mut(id) {
            c.size = resolved;
        }
        trace!(?id, ?requested, ?resolved, "set size");
        if self.kind(id).is_some_and(|k| k.is_container()) {
            self.adjust_layout(id);
        }
        self.emit(id, Signal::Resized);
        true
    }

    /// Set the caller floor for the minimum size.
    pub fn set_minimum_size(&mut self, id: NodeId, minimum_size: Size) -> bool {
        let minimum_size = Size::new(minimum_size.width.max(0.0), minimum_size.height.max(0.0));
        let Some(c) = self.control_mut(id) else {
            return false;
        };
        if c.minimum_size != minimum_size {
            c.minimum_size = minimum_size;
            self.when_subtree_changed(id);
        }
        true
    }

    /// Caller floor for the minimum size.
    pub fn minimum_size(&self, id: NodeId) -> Option<Size> {
        self.control(id).map(|c| c.minimum_size)
    }

    /// Replace the sizing directive read by the parent container.
    pub fn set_sizing(&mut self, id: NodeId, sizing: SizingDirective) -> bool {
        let Some(c) = self.control_mut(id) else {
            return false;
        };
        if c.sizing != sizing {
            c.sizing = sizing;
            self.when_subtree_changed(id);
        }
        true
    }

    /// Sizing directive.
    pub fn sizing(&self, id: NodeId) -> Option<SizingDirective> {
        self.control(id).map(|c| c.sizing)
    }

    /// Make the control follow its parent's area on [`Scene::when_parent_size_changed`].
    pub fn set_anchor_full_rect(&mut self, id: NodeId, anchored: bool) -> bool {
        let Some(c) = self.control_mut(id) else {
            return false;
        };
        c.anchor_full_rect = anchored;
        true
    }

    /// Whether `id` waits for the next update pass to be laid out.
    pub fn is_layout_dirty(&self, id: NodeId) -> bool {
        self.tree.get(id).is_some_and(|el| el.layout_dirty)
    }

    pub(crate) fn set_layout_dirty(&mut self, id: NodeId, dirty: bool) {
        if let Some(el) = self.tree.get_mut(id) {
            el.layout_dirty = dirty;
        }
    }

    /// Mark `id` and every ancestor dirty, running [`Signal::SubtreeChanged`] on each,
    /// nearest first.
    pub fn when_subtree_changed(&mut self, id: NodeId) {
        let mut cur = Some(id);
        while let Some(n) = cur {
            self.set_layout_dirty(n, true);
            self.emit(n, Signal::SubtreeChanged);
            cur = self.tree.parent(n);
        }
    }

    /// Lay out the children of container `id` now.
    ///
    /// The container first grows to its minimum size. Non-container nodes only
    /// have their dirty flag cleared.
    pub fn adjust_layout(&mut self, id: NodeId) {
        self.set_layout_dirty(id, false);
        let Some(current) = self.size(id) else {
            return;
        };
        let Some(kind) = self.kind(id).filter(|k| k.is_container()) else {
            return;
        };
        let size = max_size(current, self.calc_minimum_size(id));
        if size != current {
            if let Some(c) = self.control_mut(id) {
                c.size = size;
            }
            self.emit(id, Signal::Resized);
        }
        let children = self.layout_children(id);
        trace!(?id, ?kind, ?size, children = children.len(), "adjust layout");

        match self.widget(id) {
            Some(Widget::Container) => {
                for c in children {
                    self.place_child(c, Point::ZERO, size);
                }
            }
            Some(Widget::Margin(m)) => {
                let margins = m.margins;
                let inner = Size::new(
                    (size.width - margins.x0 - margins.x1).max(0.0),
                    (size.height - margins.y0 - margins.y1).max(0.0),
                );
                for c in children {
                    self.place_child(c, Point::new(margins.x0, margins.y0), inner);
                }
            }
            Some(Widget::Box(b)) => {
                let axis = b.axis;
                let separation = self.separation_of(b.separation);
                let items: Vec<BoxItem> = children
                    .iter()
                    .map(|&c| BoxItem {
                        min: self.calc_minimum_size(c),
                        sizing: self.sizing(c).unwrap_or_default(),
                    })
                    .collect();
                let rects = distribute(axis, size, separation, &items);
                for (c, r) in children.into_iter().zip(rects) {
                    self.place_child(c, r.origin(), r.size());
                }
            }
            Some(Widget::Scroll(s)) => {
                let scroll = *s;
                if let Some(&content) = children.first() {
                    let content_size =
                        scroll.content_size(size, self.calc_minimum_size(content));
                    let origin =
                        Point::new(-f64::from(scroll.hscroll), -f64::from(scroll.vscroll));
                    self.place_child(content, origin, content_size);
                }
            }
            _ => {}
        }
    }

    /// Position and size a child during its parent's layout, and settle its flag.
    fn place_child(&mut self, child: NodeId, position: Point, size: Size) {
        self.set_position(child, position);
        let resized = self.set_size(child, size);
        if !resized && self.is_layout_dirty(child) {
            self.adjust_layout(child);
        }
        self.set_layout_dirty(child, false);
    }

    /// React to the parent area changing to `size`.
    ///
    /// Full-rect anchored controls take position zero and `size`. Every node then
    /// forwards `size` to its children, except viewports, which forward their own size.
    pub fn when_parent_size_changed(&mut self, id: NodeId, size: Size) {
        let (forward, anchored) = match self.tree.get(id) {
            None => return,
            Some(el) => match (&el.widget, &el.control) {
                (Widget::Viewport(v), _) => (v.size, false),
                (_, Some(c)) => (size, c.anchor_full_rect),
                (_, None) => (size, false),
            },
        };
        if anchored {
            self.set_position(id, Point::ZERO);
            self.set_size(id, size);
        }
        for c in self.tree.children(id).to_vec() {
            self.when_parent_size_changed(c, forward);
        }
    }

    /// Resize a viewport and forward the new size to its children.
    pub fn set_viewport_size(&mut self, id: NodeId, size: Size) -> bool {
        let Some(Widget::Viewport(v)) = self.tree.get_mut(id).map(|el| &mut el.widget) else {
            return false;
        };
        v.size = size;
        for c in self.tree.children(id).to_vec() {
            self.when_parent_size_changed(c, size);
        }
        true
    }

    /// Record a new window size and forward it down from the root.
    pub fn when_window_size_changed(&mut self, size: Size) {
        debug_assert!(
            size.width >= 0.0 && size.height >= 0.0,
            "window size must not be negative"
        );
        self.window_size = size;
        self.when_parent_size_changed(self.root, size);
    }

    /// Update pass: lay out dirty containers, parents first.
    pub fn propagate_update(&mut self, dt: f64) {
        self.elapsed += dt;
        for id in self.tree.pre_order(self.root) {
            if !self.is_layout_dirty(id) {
                continue;
            }
            if self.tree.is_visible_in_tree(id) {
                self.adjust_layout(id);
            } else {
                self.set_layout_dirty(id, false);
            }
        }
    }
}
