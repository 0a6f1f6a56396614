// SPDX-License-Identifier: MPL-2.0
//! Poster viewer: a full-window overlay with click zoom, wheel zoom and
//! drag-to-pan.
//!
//! At most one poster is active. Every close path (background click,
//! Escape, Back) resets scale and offset because the active poster is
//! dropped as a whole.

pub mod view;

use crate::ui::state::{Press, PosterScale, Route};
use iced::mouse::ScrollDelta;
use iced::{Point, Vector};

#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery trigger was activated.
    Open(String),
    /// Pointer (or finger) went down on the poster image.
    ImagePressed,
    /// Pointer position in window coordinates.
    CursorMoved(Point),
    /// Pointer button released or touch ended, anywhere in the window.
    PointerReleased,
    /// Wheel over the poster image.
    Wheel(ScrollDelta),
    /// Press inside the overlay but outside the image.
    BackgroundPressed,
    EscapePressed,
}

/// Side effects the app applies after a poster message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// A poster was opened; record it in the navigation history.
    PushRoute(Route),
    /// A poster was closed from inside the overlay; drop its history entry.
    PopRoute(Route),
}

/// Which native event listeners the viewer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listeners {
    /// No poster open: nothing is routed to the viewer.
    None,
    /// Poster open: Escape, pointer position and releases.
    Open,
}

#[derive(Debug, Clone, PartialEq)]
struct Active {
    id: String,
    scale: PosterScale,
    offset: Vector,
    press: Option<Press>,
}

impl Active {
    fn new(id: String) -> Self {
        Self {
            id,
            scale: PosterScale::default(),
            offset: Vector::ZERO,
            press: None,
        }
    }

    fn reset_zoom(&mut self) {
        self.scale = PosterScale::default();
        self.offset = Vector::ZERO;
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    active: Option<Active>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(id) => self.open(id),
            Message::ImagePressed => {
                self.press();
                Effect::None
            }
            Message::CursorMoved(position) => {
                if let Some(active) = self.active.as_mut() {
                    if let Some(offset) = active.press.as_mut().and_then(|p| p.moved_to(position))
                    {
                        active.offset = offset;
                    }
                }
                Effect::None
            }
            Message::PointerReleased => {
                self.release();
                Effect::None
            }
            Message::Wheel(delta) => {
                if let Some(active) = self.active.as_mut() {
                    active.scale = active.scale.scrolled(delta);
                    if active.scale.is_unzoomed() {
                        active.reset_zoom();
                    }
                }
                Effect::None
            }
            Message::BackgroundPressed | Message::EscapePressed => match self.close() {
                Some(id) => Effect::PopRoute(Route::Poster(id)),
                None => Effect::None,
            },
        }
    }

    fn open(&mut self, id: String) -> Effect {
        if self.active.as_ref().is_some_and(|active| active.id == id) {
            return Effect::None;
        }
        if let Some(previous) = self.close() {
            log::debug!("poster {} replaced", previous);
        }
        log::debug!("poster {} opened", id);
        self.active = Some(Active::new(id.clone()));
        Effect::PushRoute(Route::Poster(id))
    }

    fn press(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        active.press = Some(Press::begin(active.offset, !active.scale.is_unzoomed()));
    }

    fn release(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let Some(press) = active.press.take() else {
            return;
        };
        if press.is_click() {
            if active.scale.is_unzoomed() {
                active.scale = PosterScale::click_zoom();
                active.offset = Vector::ZERO;
            } else {
                active.reset_zoom();
            }
        }
    }

    /// Closes the active poster. Returns its id if one was open.
    pub fn close(&mut self) -> Option<String> {
        let id = self.active.take().map(|active| active.id)?;
        log::debug!("poster {} closed", id);
        Some(id)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.id.as_str())
    }

    /// Whether the open poster is magnified.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.scale.is_unzoomed())
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.active
            .as_ref()
            .and_then(|active| active.press.as_ref())
            .is_some_and(Press::is_panning)
    }

    /// Current scale; 1.0 when closed.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.active
            .as_ref()
            .map_or(PosterScale::default(), |active| active.scale)
            .value()
    }

    /// Current pan offset; zero when closed.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.active
            .as_ref()
            .map_or(Vector::ZERO, |active| active.offset)
    }

    #[must_use]
    pub fn listeners(&self) -> Listeners {
        if self.is_open() {
            Listeners::Open
        } else {
            Listeners::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn opened(id: &str) -> State {
        let mut state = State::new();
        state.handle(Message::Open(id.to_string()));
        state
    }

    fn press_at(state: &mut State, position: Point) {
        state.handle(Message::ImagePressed);
        state.handle(Message::CursorMoved(position));
    }

    fn click_at(state: &mut State, position: Point) {
        press_at(state, position);
        state.handle(Message::PointerReleased);
    }

    #[test]
    fn open_pushes_route_and_starts_unzoomed() {
        let mut state = State::new();
        let effect = state.handle(Message::Open("gvs".into()));

        assert_eq!(effect, Effect::PushRoute(Route::Poster("gvs".into())));
        assert!(state.is_open());
        assert!(!state.is_zoomed());
        assert_abs_diff_eq!(state.scale(), 1.0);
        assert_eq!(state.listeners(), Listeners::Open);
    }

    #[test]
    fn opening_another_poster_leaves_one_active() {
        let mut state = opened("a");
        state.handle(Message::Open("b".into()));

        assert_eq!(state.active_id(), Some("b"));
    }

    #[test]
    fn reopening_the_active_poster_is_noop() {
        let mut state = opened("a");
        assert_eq!(state.handle(Message::Open("a".into())), Effect::None);
    }

    #[test]
    fn click_toggles_between_zoomed_and_unzoomed() {
        let mut state = opened("gvs");

        click_at(&mut state, Point::new(200.0, 200.0));
        assert!(state.is_zoomed());
        assert_abs_diff_eq!(state.scale(), 2.0);
        assert_eq!(state.offset(), Vector::ZERO);

        click_at(&mut state, Point::new(201.0, 202.0));
        assert!(!state.is_zoomed());
        assert_abs_diff_eq!(state.scale(), 1.0);
    }

    #[test]
    fn drag_pans_without_toggling_zoom() {
        let mut state = opened("gvs");
        click_at(&mut state, Point::new(100.0, 100.0));

        press_at(&mut state, Point::new(100.0, 100.0));
        state.handle(Message::CursorMoved(Point::new(140.0, 70.0)));
        assert!(state.is_panning());
        assert_eq!(state.offset(), Vector::new(40.0, -30.0));

        state.handle(Message::PointerReleased);
        assert!(!state.is_panning());
        assert!(state.is_zoomed());
        assert_eq!(state.offset(), Vector::new(40.0, -30.0));
    }

    #[test]
    fn second_drag_continues_from_current_offset() {
        let mut state = opened("gvs");
        click_at(&mut state, Point::new(0.0, 0.0));

        press_at(&mut state, Point::new(0.0, 0.0));
        state.handle(Message::CursorMoved(Point::new(20.0, 0.0)));
        state.handle(Message::PointerReleased);

        press_at(&mut state, Point::new(20.0, 0.0));
        state.handle(Message::CursorMoved(Point::new(20.0, 30.0)));
        state.handle(Message::PointerReleased);

        assert_eq!(state.offset(), Vector::new(20.0, 30.0));
    }

    #[test]
    fn pan_starts_where_the_pointer_lands_after_the_press() {
        let mut state = opened("gvs");
        click_at(&mut state, Point::new(0.0, 0.0));

        state.handle(Message::ImagePressed);
        state.handle(Message::CursorMoved(Point::new(500.0, 500.0)));
        assert_eq!(state.offset(), Vector::ZERO);

        state.handle(Message::CursorMoved(Point::new(510.0, 500.0)));
        assert_eq!(state.offset(), Vector::new(10.0, 0.0));
    }

    #[test]
    fn unzoomed_drag_neither_pans_nor_zooms() {
        let mut state = opened("gvs");
        press_at(&mut state, Point::new(0.0, 0.0));
        state.handle(Message::CursorMoved(Point::new(50.0, 0.0)));
        state.handle(Message::PointerReleased);

        assert!(!state.is_zoomed());
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn wheel_zoom_is_clamped_and_resets_offset_at_one() {
        let mut state = opened("gvs");
        for _ in 0..40 {
            state.handle(Message::Wheel(ScrollDelta::Lines { x: 0.0, y: 1.0 }));
        }
        assert_abs_diff_eq!(state.scale(), 3.0);

        press_at(&mut state, Point::new(0.0, 0.0));
        state.handle(Message::CursorMoved(Point::new(60.0, 60.0)));
        state.handle(Message::PointerReleased);
        assert_ne!(state.offset(), Vector::ZERO);

        for _ in 0..40 {
            state.handle(Message::Wheel(ScrollDelta::Lines { x: 0.0, y: -1.0 }));
        }
        assert_abs_diff_eq!(state.scale(), 1.0);
        assert_eq!(state.offset(), Vector::ZERO);
        assert!(!state.is_zoomed());
    }

    #[test]
    fn escape_and_background_close_and_pop_route() {
        for close in [Message::EscapePressed, Message::BackgroundPressed] {
            let mut state = opened("gvs");
            click_at(&mut state, Point::new(10.0, 10.0));

            let effect = state.handle(close);

            assert_eq!(effect, Effect::PopRoute(Route::Poster("gvs".into())));
            assert!(!state.is_open());
            assert_abs_diff_eq!(state.scale(), 1.0);
            assert_eq!(state.offset(), Vector::ZERO);
            assert_eq!(state.listeners(), Listeners::None);
        }
    }

    #[test]
    fn reopening_after_close_starts_fresh() {
        let mut state = opened("gvs");
        click_at(&mut state, Point::new(10.0, 10.0));
        state.close();

        state.handle(Message::Open("gvs".into()));
        assert!(!state.is_zoomed());
        assert_eq!(state.offset(), Vector::ZERO);
    }

    #[test]
    fn messages_while_closed_are_ignored() {
        let mut state = State::new();
        assert_eq!(state.handle(Message::EscapePressed), Effect::None);
        state.handle(Message::ImagePressed);
        state.handle(Message::Wheel(ScrollDelta::Lines { x: 0.0, y: 2.0 }));
        state.handle(Message::PointerReleased);

        assert!(!state.is_open());
        assert_abs_diff_eq!(state.scale(), 1.0);
    }
}
