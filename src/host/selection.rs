use crate::*;
use std::fmt;

pub type ListenerId = usize;

type Listener = Box<dyn Fn(Dialect)>;

/// Per-buffer dialect choice that announces every change to its listeners.
///
/// The capitalization core subscribes when it is enabled for a buffer so that
/// its cached keyword set is dropped whenever the dialect changes.
#[derive(Default)]
pub struct DialectSelection {
    active: Option<Dialect>,
    listeners: Vec<(ListenerId, Listener)>,
    next_id: ListenerId,
}

impl DialectSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(dialect: Dialect) -> Self {
        Self {
            active: Some(dialect),
            ..Self::default()
        }
    }

    /// The dialect in effect, falling back to ANSI when none is configured.
    pub fn active(&self) -> Dialect {
        self.active.unwrap_or_default()
    }

    /// Select `dialect` and notify every listener, even if it did not change.
    pub fn set(&mut self, dialect: Dialect) {
        debug!("Dialect selection changed to {dialect}");
        self.active = Some(dialect);
        for (_, listener) in &self.listeners {
            listener(dialect);
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(Dialect) + 'static) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        before != self.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for DialectSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialectSelection")
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
