//! Chooses which stack is mounted from the session state.

use tracing::debug;

use super::route::{NavigationError, Route, StackKind};
use super::stack::{NavAction, Stack};

/// What the router currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mounted {
    /// Session restore is still in flight; neither stack is shown.
    Loading,
    Stack(Stack),
}

/// Two mutually exclusive stacks, selected by session presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    mounted: Mounted,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            mounted: Mounted::Loading,
        }
    }

    /// Re-evaluate the mounted stack.
    ///
    /// Switching stacks mounts the new one fresh at its initial screen; if
    /// the right stack is already mounted its history is kept. Returns
    /// whether anything changed.
    pub fn sync(&mut self, signed_in: bool, loading: bool) -> bool {
        if loading {
            let changed = self.mounted != Mounted::Loading;
            self.mounted = Mounted::Loading;
            return changed;
        }

        let wanted = if signed_in { StackKind::App } else { StackKind::Auth };
        if self.kind() == Some(wanted) {
            return false;
        }

        debug!("Mounting {} stack", wanted);
        self.mounted = Mounted::Stack(Stack::new(wanted));
        true
    }

    pub fn mounted(&self) -> &Mounted {
        &self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.mounted == Mounted::Loading
    }

    pub fn kind(&self) -> Option<StackKind> {
        self.stack().map(Stack::kind)
    }

    pub fn stack(&self) -> Option<&Stack> {
        match &self.mounted {
            Mounted::Stack(stack) => Some(stack),
            Mounted::Loading => None,
        }
    }

    pub fn current(&self) -> Option<&Route> {
        self.stack().map(Stack::current)
    }

    /// Apply a transition to the mounted stack.
    pub fn apply(&mut self, action: NavAction) -> Result<(), NavigationError> {
        match &mut self.mounted {
            Mounted::Stack(stack) => stack.apply(action),
            Mounted::Loading => Err(NavigationError::NotMounted),
        }
    }
}
