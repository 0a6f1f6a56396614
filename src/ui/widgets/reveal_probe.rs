// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports when its content scrolls into view.
//!
//! Placed inside a scrollable, the probe compares its layout bounds with the
//! visible region the scrollable hands to its content. It publishes the
//! reveal message once, when the visible fraction first reaches the
//! threshold, and reports its layout top whenever it changes so the page can
//! scroll to it.

use crate::config::REVEAL_THRESHOLD;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size, Vector};

#[derive(Debug, Default)]
struct State {
    revealed: bool,
    reported_top: Option<f32>,
}

pub struct RevealProbe<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_reveal: Option<Message>,
    on_measure: Option<Box<dyn Fn(f32) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> RevealProbe<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_reveal: None,
            on_measure: None,
        }
    }

    /// Message published once when the content becomes visible enough.
    #[must_use]
    pub fn on_reveal(mut self, message: Message) -> Self {
        self.on_reveal = Some(message);
        self
    }

    /// Message built from the content's layout top, published on change.
    #[must_use]
    pub fn on_measure(mut self, f: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_measure = Some(Box::new(f));
        self
    }
}

/// Share of `bounds` height covered by `viewport`, in `0.0..=1.0`.
#[must_use]
pub fn visible_fraction(bounds: Rectangle, viewport: Rectangle) -> f32 {
    if bounds.height <= 0.0 {
        return 0.0;
    }
    let top = bounds.y.max(viewport.y);
    let bottom = (bounds.y + bounds.height).min(viewport.y + viewport.height);
    ((bottom - top).max(0.0) / bounds.height).min(1.0)
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for RevealProbe<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();

        if let Some(on_measure) = &self.on_measure {
            if state.reported_top != Some(bounds.y) {
                state.reported_top = Some(bounds.y);
                shell.publish(on_measure(bounds.y));
            }
        }

        if let Some(on_reveal) = &self.on_reveal {
            if !state.revealed && visible_fraction(bounds, *viewport) >= REVEAL_THRESHOLD {
                state.revealed = true;
                shell.publish(on_reveal.clone());
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<RevealProbe<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(probe: RevealProbe<'a, Message, Theme, Renderer>) -> Self {
        Self::new(probe)
    }
}

pub fn reveal_probe<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> RevealProbe<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    RevealProbe::new(content)
}
