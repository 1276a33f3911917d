//! A single screen history.

use super::route::{NavigationError, Route, StackKind};

/// Screen-to-screen transition requested by a screen action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Push(Route),
    /// Go back one screen. A no-op at the root.
    Pop,
    /// Replace the whole history with one screen.
    Reset(Route),
}

/// Ordered, never-empty history of screens belonging to one [`StackKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    kind: StackKind,
    routes: Vec<Route>,
}

impl Stack {
    /// A stack holding only its initial screen.
    pub fn new(kind: StackKind) -> Self {
        Self {
            kind,
            routes: vec![kind.initial_route()],
        }
    }

    pub fn kind(&self) -> StackKind {
        self.kind
    }

    pub fn current(&self) -> &Route {
        // `routes` is never empty: pop keeps the root and reset replaces it.
        &self.routes[self.routes.len() - 1]
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn push(&mut self, route: Route) -> Result<(), NavigationError> {
        self.check(&route)?;
        self.routes.push(route);
        Ok(())
    }

    /// Returns `false` when already at the root.
    pub fn pop(&mut self) -> bool {
        if self.routes.len() > 1 {
            self.routes.pop();
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self, route: Route) -> Result<(), NavigationError> {
        self.check(&route)?;
        self.routes = vec![route];
        Ok(())
    }

    pub fn apply(&mut self, action: NavAction) -> Result<(), NavigationError> {
        match action {
            NavAction::Push(route) => self.push(route),
            NavAction::Pop => {
                self.pop();
                Ok(())
            }
            NavAction::Reset(route) => self.reset(route),
        }
    }

    fn check(&self, route: &Route) -> Result<(), NavigationError> {
        if route.stack() == self.kind {
            Ok(())
        } else {
            Err(NavigationError::WrongStack {
                route: route.name(),
                stack: self.kind,
            })
        }
    }
}
