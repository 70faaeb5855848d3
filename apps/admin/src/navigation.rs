use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

/// Navigation capability injected into resolvers and workflows.
pub trait Navigator: Send + Sync {
    /// Navigates to the route made of `commands`, e.g. `["404"]`.
    fn navigate(&self, commands: &[&str]);

    /// Returns to the previous view.
    fn back(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Navigate(Vec<String>),
    Back,
}

/// Navigator that records every request instead of acting on it.
/// Hosts replay the log against their own router.
#[derive(Debug, Default)]
pub struct NavigationLog {
    events: Mutex<Vec<NavigationEvent>>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NavigationEvent> {
        self.lock().clone()
    }

    fn push(&self, event: NavigationEvent) {
        debug!("navigation: {:?}", event);
        self.lock().push(event);
    }

    /// Poisoning is logged; the recorded events are kept.
    fn lock(&self) -> MutexGuard<'_, Vec<NavigationEvent>> {
        self.events.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("navigation log lock was poisoned; keeping recorded events");
            poisoned.into_inner()
        })
    }
}

impl Navigator for NavigationLog {
    fn navigate(&self, commands: &[&str]) {
        self.push(NavigationEvent::Navigate(
            commands.iter().map(|c| c.to_string()).collect(),
        ));
    }

    fn back(&self) {
        self.push(NavigationEvent::Back);
    }
}
