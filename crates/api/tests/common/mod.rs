#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;

use async_graphql::{Request, Response, Variables};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use api::gql::schema::AppSchema;
use api::AppState;
use datasource::error::{ServiceError, ServiceResult};
use datasource::events::EventChannel;
use datasource::memory::{InMemoryBirthdayService, InMemoryNameService, InMemoryUserService};
use datasource::models::{BirthdayRecord, NameRecord, UserRecord};
use datasource::services::{
    BirthdayService, NameService, UpdateBirthdayData, UpdateNameData, UserManagementService,
};

/// In-memory services with concrete handles kept around for seeding.
pub struct TestContext {
    pub state: AppState,
    pub users: Arc<InMemoryUserService>,
    pub names: Arc<InMemoryNameService>,
    pub birthdays: Arc<InMemoryBirthdayService>,
    pub events: Arc<EventChannel>,
}

pub fn setup() -> TestContext {
    let events = Arc::new(EventChannel::new());
    let users = Arc::new(InMemoryUserService::new(events.clone()));
    let names = Arc::new(InMemoryNameService::new(events.clone()));
    let birthdays = Arc::new(InMemoryBirthdayService::new(events.clone()));

    let state = AppState::new(
        users.clone(),
        names.clone(),
        birthdays.clone(),
        events.clone(),
    );

    TestContext {
        state,
        users,
        names,
        birthdays,
        events,
    }
}

/// Helper function to execute GraphQL queries and mutations
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

pub fn seed_user(ctx: &TestContext, email: &str) -> Uuid {
    let id = Uuid::new_v4();
    ctx.users.seed(UserRecord {
        id,
        email: email.to_string(),
    });
    id
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Service stub that fails every call with a fixed error.
pub struct FailingUserService(pub ServiceError);

#[async_trait]
impl UserManagementService for FailingUserService {
    async fn get_user_by_id(&self, _id: Uuid) -> ServiceResult<Option<UserRecord>> {
        Err(self.0.clone())
    }

    async fn get_all_users(&self) -> ServiceResult<Vec<UserRecord>> {
        Err(self.0.clone())
    }

    async fn create_user(&self, _email: String) -> ServiceResult<UserRecord> {
        Err(self.0.clone())
    }

    async fn delete_user(&self, _id: Uuid) -> ServiceResult<Option<UserRecord>> {
        Err(self.0.clone())
    }
}

pub struct FailingNameService(pub ServiceError);

#[async_trait]
impl NameService for FailingNameService {
    async fn get_name_by_id(&self, _id: Uuid) -> ServiceResult<Option<NameRecord>> {
        Err(self.0.clone())
    }

    async fn get_all_names(&self) -> ServiceResult<Vec<NameRecord>> {
        Err(self.0.clone())
    }

    async fn update_name(&self, _id: Uuid, _update: UpdateNameData) -> ServiceResult<bool> {
        Err(self.0.clone())
    }
}

pub struct FailingBirthdayService(pub ServiceError);

#[async_trait]
impl BirthdayService for FailingBirthdayService {
    async fn get_birthday_by_id(&self, _id: Uuid) -> ServiceResult<Option<BirthdayRecord>> {
        Err(self.0.clone())
    }

    async fn get_all_birthdays(&self) -> ServiceResult<Vec<BirthdayRecord>> {
        Err(self.0.clone())
    }

    async fn update_birthday(
        &self,
        _id: Uuid,
        _update: UpdateBirthdayData,
    ) -> ServiceResult<bool> {
        Err(self.0.clone())
    }
}

/// State where every service call fails with `err`.
pub fn failing_state(err: ServiceError) -> AppState {
    let events = Arc::new(EventChannel::new());
    AppState::new(
        Arc::new(FailingUserService(err.clone())),
        Arc::new(FailingNameService(err.clone())),
        Arc::new(FailingBirthdayService(err)),
        events,
    )
}
