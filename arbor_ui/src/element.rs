// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node payloads: the closed set of widget kinds and the shared control state.

use kurbo::{Point, Size};

use crate::containers::{BoxContainer, MarginContainer, ScrollContainer};
use crate::paint::{RenderTargetId, ResourceHandle};
use crate::signal::Subscriptions;
use crate::sizing::SizingDirective;
use crate::widgets::{Button, Label, ProgressBar, SpinBox, TextureRect};

/// How a control treats pointer events.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseFilter {
    /// Handle pointer events and consume those inside the rect.
    #[default]
    Stop,
    /// Never handle pointer events.
    Ignore,
    /// Observe unconsumed pointer events without consuming them.
    PassThrough,
}

/// Discriminant of a [`Widget`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Plain node without geometry.
    Node,
    /// Independent coordinate space with its own render target.
    Viewport,
    /// Bare control.
    Control,
    /// Gives every child its full size.
    Container,
    /// Insets its children.
    MarginContainer,
    /// Stacks its children.
    BoxContainer,
    /// Scrolls and clips one child.
    ScrollContainer,
    /// [`Button`].
    Button,
    /// [`Label`].
    Label,
    /// [`ProgressBar`].
    ProgressBar,
    /// [`SpinBox`].
    SpinBox,
    /// [`TextureRect`].
    TextureRect,
}

impl WidgetKind {
    /// Name used in node paths.
    pub fn name(self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::Viewport => "Viewport",
            Self::Control => "Control",
            Self::Container => "Container",
            Self::MarginContainer => "MarginContainer",
            Self::BoxContainer => "BoxContainer",
            Self::ScrollContainer => "ScrollContainer",
            Self::Button => "Button",
            Self::Label => "Label",
            Self::ProgressBar => "ProgressBar",
            Self::SpinBox => "SpinBox",
            Self::TextureRect => "TextureRect",
        }
    }

    /// Whether nodes of this kind carry [`Control`] state.
    pub fn is_ui(self) -> bool {
        !matches!(self, Self::Node | Self::Viewport)
    }

    /// Whether nodes of this kind lay out their children.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::Container | Self::MarginContainer | Self::BoxContainer | Self::ScrollContainer
        )
    }

    fn default_mouse_filter(self) -> MouseFilter {
        match self {
            Self::Label => MouseFilter::Ignore,
            Self::Container | Self::MarginContainer | Self::BoxContainer => {
                MouseFilter::PassThrough
            }
            _ => MouseFilter::Stop,
        }
    }
}

/// Viewport state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    pub(crate) size: Size,
    pub(crate) render_target: Option<RenderTargetId>,
}

impl Viewport {
    /// A viewport of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            render_target: None,
        }
    }

    /// Size of the coordinate space.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Render target, assigned when the viewport joins a scene.
    pub fn render_target(&self) -> Option<RenderTargetId> {
        self.render_target
    }
}

/// Kind-specific node state.
#[derive(Clone, Debug)]
pub enum Widget {
    /// See [`WidgetKind::Node`].
    Node,
    /// See [`WidgetKind::Viewport`].
    Viewport(Viewport),
    /// See [`WidgetKind::Control`].
    Control,
    /// See [`WidgetKind::Container`].
    Container,
    /// See [`WidgetKind::MarginContainer`].
    Margin(MarginContainer),
    /// See [`WidgetKind::BoxContainer`].
    Box(BoxContainer),
    /// See [`WidgetKind::ScrollContainer`].
    Scroll(ScrollContainer),
    /// See [`WidgetKind::Button`].
    Button(Button),
    /// See [`WidgetKind::Label`].
    Label(Label),
    /// See [`WidgetKind::ProgressBar`].
    ProgressBar(ProgressBar),
    /// See [`WidgetKind::SpinBox`].
    SpinBox(SpinBox),
    /// See [`WidgetKind::TextureRect`].
    TextureRect(TextureRect),
}

impl Widget {
    /// Discriminant.
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::Node => WidgetKind::Node,
            Self::Viewport(_) => WidgetKind::Viewport,
            Self::Control => WidgetKind::Control,
            Self::Container => WidgetKind::Container,
            Self::Margin(_) => WidgetKind::MarginContainer,
            Self::Box(_) => WidgetKind::BoxContainer,
            Self::Scroll(_) => WidgetKind::ScrollContainer,
            Self::Button(_) => WidgetKind::Button,
            Self::Label(_) => WidgetKind::Label,
            Self::ProgressBar(_) => WidgetKind::ProgressBar,
            Self::SpinBox(_) => WidgetKind::SpinBox,
            Self::TextureRect(_) => WidgetKind::TextureRect,
        }
    }

    /// Whether positional input outside this node's rect skips its descendants.
    pub fn clips_input(&self) -> bool {
        matches!(self, Self::Scroll(_))
    }

    /// Render target to allocate on insertion, if this kind owns one.
    pub(crate) fn render_target_slot(&mut self) -> Option<&mut Option<RenderTargetId>> {
        match self {
            Self::Scroll(s) => Some(&mut s.render_target),
            Self::Viewport(v) => Some(&mut v.render_target),
            _ => None,
        }
    }

    /// Move every renderer resource out, so cleanup never releases twice.
    pub(crate) fn take_resources(&mut self, out: &mut Vec<ResourceHandle>) {
        match self {
            Self::TextureRect(t) => {
                out.extend(t.texture.take().map(|t| ResourceHandle::Texture(t.id)));
            }
            Self::Button(b) => {
                out.extend(b.icon.take().map(|t| ResourceHandle::Texture(t.id)));
            }
            _ => {}
        }
        if let Some(slot) = self.render_target_slot() {
            out.extend(slot.take().map(ResourceHandle::RenderTarget));
        }
    }
}

macro_rules! widget_from {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Widget {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

widget_from! {
    Viewport => Viewport,
    MarginContainer => Margin,
    BoxContainer => Box,
    ScrollContainer => Scroll,
    Button => Button,
    Label => Label,
    ProgressBar => ProgressBar,
    SpinBox => SpinBox,
    TextureRect => TextureRect,
}

/// Geometry and input policy shared by every UI-capable node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Control {
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) minimum_size: Size,
    pub(crate) mouse_filter: MouseFilter,
    pub(crate) sizing: SizingDirective,
    pub(crate) anchor_full_rect: bool,
}

impl Control {
    fn new(mouse_filter: MouseFilter) -> Self {
        Self {
            position: Point::ZERO,
            size: Size::ZERO,
            minimum_size: Size::ZERO,
            mouse_filter,
            sizing: SizingDirective::default(),
            anchor_full_rect: false,
        }
    }

    /// Offset from the parent control.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Assigned size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Caller-provided floor for the minimum size.
    pub fn minimum_size(&self) -> Size {
        self.minimum_size
    }

    /// Pointer policy.
    pub fn mouse_filter(&self) -> MouseFilter {
        self.mouse_filter
    }

    /// Sizing request read by the parent container.
    pub fn sizing(&self) -> SizingDirective {
        self.sizing
    }

    /// Whether the control fills its parent's area on resize.
    pub fn anchor_full_rect(&self) -> bool {
        self.anchor_full_rect
    }
}

/// One tree slot.
#[derive(Debug)]
pub(crate) struct Element {
    pub(crate) widget: Widget,
    pub(crate) name: Option<String>,
    pub(crate) control: Option<Control>,
    pub(crate) subscriptions: Subscriptions,
    pub(crate) layout_dirty: bool,
}

impl Element {
    pub(crate) fn new(widget: Widget) -> Self {
        let kind = widget.kind();
        Self {
            control: kind
                .is_ui()
                .then(|| Control::new(kind.default_mouse_filter())),
            widget,
            name: None,
            subscriptions: Subscriptions::default(),
            layout_dirty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Texture, TextureId};

    #[test]
    fn control_state_only_for_ui_kinds() {
        assert!(Element::new(Widget::Node).control.is_none());
        assert!(Element::new(Viewport::new(Size::ZERO).into()).control.is_none());
        let label = Element::new(Label::new("x").into());
        assert_eq!(
            label.control.map(|c| c.mouse_filter),
            Some(MouseFilter::Ignore)
        );
        let button = Element::new(Button::new("x").into());
        assert_eq!(
            button.control.map(|c| c.mouse_filter),
            Some(MouseFilter::Stop)
        );
    }

    #[test]
    fn resources_are_taken_once() {
        let tex = Texture::new(TextureId(3), Size::new(1.0, 1.0));
        let mut w: Widget = TextureRect::new().with_texture(tex).into();
        let mut out = Vec::new();
        w.take_resources(&mut out);
        w.take_resources(&mut out);
        assert_eq!(out, vec![ResourceHandle::Texture(TextureId(3))]);

        let mut s: Widget = ScrollContainer::new().into();
        if let Some(slot) = s.render_target_slot() {
            *slot = Some(RenderTargetId(9));
        }
        s.take_resources(&mut out);
        assert_eq!(out[1], ResourceHandle::RenderTarget(RenderTargetId(9)));
    }
}
