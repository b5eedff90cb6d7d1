use std::collections::HashMap;

use chrono::NaiveDate;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Topic names on the event channel.
pub mod topics {
    pub const USER_UPDATES: &str = "userUpdates";
}

const CHANNEL_CAPACITY: usize = 100;

/// Payload published whenever a user, name or birthday changes.
///
/// The reference services set exactly one of `email`/`name`/`birthday`;
/// subscribers discriminate the concrete variant from whichever
/// attribute is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl UserUpdate {
    pub fn email(user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: Some(email.into()),
            name: None,
            birthday: None,
        }
    }

    pub fn name(user_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            user_id,
            email: None,
            name: Some(name.into()),
            birthday: None,
        }
    }

    pub fn birthday(user_id: Uuid, birthday: NaiveDate) -> Self {
        Self {
            user_id,
            email: None,
            name: None,
            birthday: Some(birthday),
        }
    }
}

/// Topic-keyed publish/subscribe channel for live updates.
///
/// Owned by the application state and injected into resolvers through
/// the request context; there is no module-level shared instance.
/// Publishing to a topic with no subscribers is a no-op.
#[derive(Default)]
pub struct EventChannel {
    topics: Mutex<HashMap<String, broadcast::Sender<UserUpdate>>>,
}

impl EventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    fn sender(&self, topic: &str) -> broadcast::Sender<UserUpdate> {
        self.topics
            .lock()
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .clone()
    }

    pub fn publish(&self, topic: &str, payload: UserUpdate) {
        tracing::debug!("Publishing to {topic}: {payload:?}");
        let _ = self.sender(topic).send(payload);
    }

    pub fn subscribe(&self, topic: &str) -> broadcast::Receiver<UserUpdate> {
        self.sender(topic).subscribe()
    }
}
