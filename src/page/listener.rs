use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
};

/// Events that bubble up to the document itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DocumentEvent {
    Click,
}

/// Registry of the document-level listeners currently alive.
///
/// The page only lives on the event loop thread, hence the `Rc`.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    active: Rc<RefCell<BTreeMap<DocumentEvent, usize>>>,
}

/// Handle of a document-level listener.
///
/// The listener stays registered as long as the handle is alive.
#[derive(Debug)]
pub struct Subscription {
    event: DocumentEvent,
    registry: Weak<RefCell<BTreeMap<DocumentEvent, usize>>>,
}

impl Listeners {
    pub fn subscribe(&self, event: DocumentEvent) -> Subscription {
        *self.active.borrow_mut().entry(event).or_default() += 1;

        Subscription {
            event,
            registry: Rc::downgrade(&self.active),
        }
    }

    pub fn is_subscribed(&self, event: DocumentEvent) -> bool {
        self.active.borrow().get(&event).is_some_and(|&n| n > 0)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // The registry may already be gone if the page was torn down first
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.borrow_mut();
            if let Some(count) = registry.get_mut(&self.event) {
                *count -= 1;
                if *count == 0 {
                    registry.remove(&self.event);
                }
            }
        }
    }
}
