// SPDX-License-Identifier: MPL-2.0
//! In-app navigation history driven by the Back gesture.

/// A navigation entry the Back gesture can undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// A poster overlay, by poster id.
    Poster(String),
}

#[derive(Debug, Clone, Default)]
pub struct History {
    stack: Vec<Route>,
}

impl History {
    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Removes the top route, if any.
    pub fn pop(&mut self) -> Option<Route> {
        self.stack.pop()
    }

    /// Removes the top route only if it equals `route`.
    pub fn pop_if(&mut self, route: &Route) -> bool {
        if self.stack.last() == Some(route) {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn top(&self) -> Option<&Route> {
        self.stack.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
