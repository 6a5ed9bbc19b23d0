use indexmap::IndexMap;

/// Payload passed to event listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentEvent<'a> {
    /// Event name the listener was registered under.
    pub name: &'a str,
    /// Class name of the component that emitted the event.
    pub class_name: &'a str,
}

pub type EventListener = Box<dyn FnMut(&ComponentEvent<'_>)>;

/// Named listener lists with ordered dispatch.
#[derive(Default)]
pub struct EventSet {
    listeners: IndexMap<String, Vec<EventListener>>,
}

impl EventSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener for `name`; listeners fire in registration order.
    pub fn on(&mut self, name: impl Into<String>, listener: impl FnMut(&ComponentEvent<'_>) + 'static) {
        self.listeners
            .entry(name.into())
            .or_default()
            .push(Box::new(listener));
    }

    pub fn emit(&mut self, name: &str, class_name: &str) {
        let Some(chain) = self.listeners.get_mut(name) else {
            return;
        };
        let event = ComponentEvent { name, class_name };
        for listener in chain {
            listener(&event);
        }
    }

    #[must_use]
    pub fn has_listeners(&self, name: &str) -> bool {
        self.listener_count(name) > 0
    }

    #[must_use]
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.get(name).map_or(0, Vec::len)
    }
}
