use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity record mastered by the user-management service.
///
/// `id` is assigned once at creation and never changes. Name and
/// birthday are not stored here; they live in their own services,
/// keyed by the same id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameRecord {
    pub user_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthdayRecord {
    pub user_id: Uuid,
    pub birthday: NaiveDate,
}
