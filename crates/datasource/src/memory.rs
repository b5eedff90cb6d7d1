//! In-memory reference implementations of the three backend services.
//!
//! Each successful mutation publishes a [`UserUpdate`] to the
//! `userUpdates` topic, so live subscribers see every change without
//! the resolver layer publishing anything itself.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::events::{topics, EventChannel, UserUpdate};
use crate::models::{BirthdayRecord, NameRecord, UserRecord};
use crate::services::{
    BirthdayService, NameService, UpdateBirthdayData, UpdateNameData, UserManagementService,
};

pub struct InMemoryUserService {
    users: RwLock<HashMap<Uuid, UserRecord>>,
    events: Arc<EventChannel>,
}

impl InMemoryUserService {
    pub fn new(events: Arc<EventChannel>) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// Insert a record directly, bypassing event publication. Test and
    /// demo seeding only.
    pub fn seed(&self, record: UserRecord) {
        self.users.write().insert(record.id, record);
    }
}

#[async_trait]
impl UserManagementService for InMemoryUserService {
    async fn get_user_by_id(&self, id: Uuid) -> ServiceResult<Option<UserRecord>> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn get_all_users(&self) -> ServiceResult<Vec<UserRecord>> {
        Ok(self.users.read().values().cloned().collect())
    }

    async fn create_user(&self, email: String) -> ServiceResult<UserRecord> {
        let record = UserRecord {
            id: Uuid::new_v4(),
            email,
        };
        self.users.write().insert(record.id, record.clone());
        self.events.publish(
            topics::USER_UPDATES,
            UserUpdate::email(record.id, record.email.clone()),
        );
        Ok(record)
    }

    async fn delete_user(&self, id: Uuid) -> ServiceResult<Option<UserRecord>> {
        let removed = self.users.write().remove(&id);
        if let Some(record) = &removed {
            self.events.publish(
                topics::USER_UPDATES,
                UserUpdate::email(record.id, record.email.clone()),
            );
        }
        Ok(removed)
    }
}

pub struct InMemoryNameService {
    names: RwLock<HashMap<Uuid, NameRecord>>,
    events: Arc<EventChannel>,
}

impl InMemoryNameService {
    pub fn new(events: Arc<EventChannel>) -> Self {
        Self {
            names: RwLock::new(HashMap::new()),
            events,
        }
    }

    pub fn seed(&self, user_id: Uuid, name: impl Into<String>) {
        self.names.write().insert(
            user_id,
            NameRecord {
                user_id,
                name: name.into(),
            },
        );
    }
}

#[async_trait]
impl NameService for InMemoryNameService {
    async fn get_name_by_id(&self, id: Uuid) -> ServiceResult<Option<NameRecord>> {
        Ok(self.names.read().get(&id).cloned())
    }

    async fn get_all_names(&self) -> ServiceResult<Vec<NameRecord>> {
        Ok(self.names.read().values().cloned().collect())
    }

    async fn update_name(&self, id: Uuid, update: UpdateNameData) -> ServiceResult<bool> {
        let updated = match self.names.write().get_mut(&id) {
            Some(record) => {
                record.name = update.name.clone();
                true
            }
            None => false,
        };
        if updated {
            self.events
                .publish(topics::USER_UPDATES, UserUpdate::name(id, update.name));
        }
        Ok(updated)
    }
}

pub struct InMemoryBirthdayService {
    birthdays: RwLock<HashMap<Uuid, BirthdayRecord>>,
    events: Arc<EventChannel>,
}

impl InMemoryBirthdayService {
    pub fn new(events: Arc<EventChannel>) -> Self {
        Self {
            birthdays: RwLock::new(HashMap::new()),
            events,
        }
    }

    pub fn seed(&self, user_id: Uuid, birthday: NaiveDate) {
        self.birthdays
            .write()
            .insert(user_id, BirthdayRecord { user_id, birthday });
    }
}

#[async_trait]
impl BirthdayService for InMemoryBirthdayService {
    async fn get_birthday_by_id(&self, id: Uuid) -> ServiceResult<Option<BirthdayRecord>> {
        Ok(self.birthdays.read().get(&id).cloned())
    }

    async fn get_all_birthdays(&self) -> ServiceResult<Vec<BirthdayRecord>> {
        Ok(self.birthdays.read().values().cloned().collect())
    }

    async fn update_birthday(&self, id: Uuid, update: UpdateBirthdayData) -> ServiceResult<bool> {
        let updated = match self.birthdays.write().get_mut(&id) {
            Some(record) => {
                record.birthday = update.birthday;
                true
            }
            None => false,
        };
        if updated {
            self.events.publish(
                topics::USER_UPDATES,
                UserUpdate::birthday(id, update.birthday),
            );
        }
        Ok(updated)
    }
}
