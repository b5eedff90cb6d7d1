use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::models::{BirthdayRecord, NameRecord, UserRecord};

#[derive(Debug, Clone)]
pub struct UpdateNameData {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct UpdateBirthdayData {
    pub birthday: NaiveDate,
}

/// Capability contract of the user-management service.
///
/// Implementations are owned by the surrounding context and injected
/// as `Arc<dyn UserManagementService>`; the resolver layer never
/// constructs them.
#[async_trait]
pub trait UserManagementService: Send + Sync {
    async fn get_user_by_id(&self, id: Uuid) -> ServiceResult<Option<UserRecord>>;

    async fn get_all_users(&self) -> ServiceResult<Vec<UserRecord>>;

    async fn create_user(&self, email: String) -> ServiceResult<UserRecord>;

    /// Returns the deleted record, or `None` when no user had this id.
    async fn delete_user(&self, id: Uuid) -> ServiceResult<Option<UserRecord>>;
}

/// Capability contract of the name service.
#[async_trait]
pub trait NameService: Send + Sync {
    async fn get_name_by_id(&self, id: Uuid) -> ServiceResult<Option<NameRecord>>;

    async fn get_all_names(&self) -> ServiceResult<Vec<NameRecord>>;

    /// Returns `false` when no name exists for this id. Updates never
    /// create a record implicitly.
    async fn update_name(&self, id: Uuid, update: UpdateNameData) -> ServiceResult<bool>;
}

/// Capability contract of the birthday service.
#[async_trait]
pub trait BirthdayService: Send + Sync {
    async fn get_birthday_by_id(&self, id: Uuid) -> ServiceResult<Option<BirthdayRecord>>;

    async fn get_all_birthdays(&self) -> ServiceResult<Vec<BirthdayRecord>>;

    async fn update_birthday(&self, id: Uuid, update: UpdateBirthdayData) -> ServiceResult<bool>;
}
