//! Reverse-order cleanup stack.
//!
//! Producers register deferred actions as they go; the actions run when the
//! stack is dropped, last-registered first. Because dropping happens on
//! normal return, on early stop, and during unwinding alike, a producer gets
//! the same cleanup guarantee on every exit path.

/// A stack of deferred actions, run in reverse registration order on drop.
pub struct Cleanup<'a> {
    actions: Vec<Box<dyn FnOnce() + 'a>>,
}

impl<'a> Cleanup<'a> {
    pub fn new() -> Self {
        Cleanup {
            actions: Vec::new(),
        }
    }

    /// Registers an action to run when this stack is dropped.
    pub fn defer<F>(&mut self, action: F)
    where
        F: FnOnce() + 'a,
    {
        self.actions.push(Box::new(action));
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for Cleanup<'_> {
    fn default() -> Self {
        Cleanup::new()
    }
}

impl Drop for Cleanup<'_> {
    fn drop(&mut self) {
        while let Some(action) = self.actions.pop() {
            action();
        }
    }
}
