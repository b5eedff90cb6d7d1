use std::sync::Arc;

use datasource::events::EventChannel;
use datasource::memory::{InMemoryBirthdayService, InMemoryNameService, InMemoryUserService};
use datasource::services::{BirthdayService, NameService, UserManagementService};

/// Shared request context: the injected data-source capabilities plus
/// the event channel backing subscriptions.
///
/// Available in resolvers via `ctx.data::<AppState>()`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserManagementService>,
    pub names: Arc<dyn NameService>,
    pub birthdays: Arc<dyn BirthdayService>,
    pub events: Arc<EventChannel>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserManagementService>,
        names: Arc<dyn NameService>,
        birthdays: Arc<dyn BirthdayService>,
        events: Arc<EventChannel>,
    ) -> Self {
        Self {
            users,
            names,
            birthdays,
            events,
        }
    }

    /// Wire the in-memory reference services to a fresh event channel.
    pub fn in_memory() -> Self {
        let events = Arc::new(EventChannel::new());
        Self {
            users: Arc::new(InMemoryUserService::new(events.clone())),
            names: Arc::new(InMemoryNameService::new(events.clone())),
            birthdays: Arc::new(InMemoryBirthdayService::new(events.clone())),
            events,
        }
    }
}
