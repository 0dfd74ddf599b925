//! A document plus its document-level event listeners.
//!
//! Widgets register one delegated listener on the page rather than one per
//! element, so elements added later are handled without re-registration.

use std::fmt;

use log::trace;
use pagedom::{Dom, Event};

/// Identifies a registered listener so it can be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<D> = Box<dyn FnMut(&mut D, &Event) + Send>;

pub struct Page<D> {
    dom: D,
    listeners: Vec<(ListenerId, Listener<D>)>,
    next_listener: u64,
}

impl<D: Dom> Page<D> {
    pub fn new(dom: D) -> Self {
        Self {
            dom,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn into_dom(self) -> D {
        self.dom
    }

    /// Register a listener for every event dispatched to this page.
    pub fn add_listener(
        &mut self,
        listener: impl FnMut(&mut D, &Event) + Send + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver an event to every listener, in registration order.
    pub fn dispatch(&mut self, event: &Event) {
        trace!("dispatch {event:?} to {} listeners", self.listeners.len());
        for (_, listener) in &mut self.listeners {
            listener(&mut self.dom, event);
        }
    }

    /// Dispatch a left click on the element with the given id.
    pub fn click(&mut self, target: &str) {
        self.dispatch(&Event::click(target));
    }
}

impl<D: fmt::Debug> fmt::Debug for Page<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("dom", &self.dom)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
