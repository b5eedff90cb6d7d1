use async_graphql::{ComplexObject, Context, Result, SimpleObject, Union, ID};
use chrono::NaiveDate;
use uuid::Uuid;

use datasource::events::UserUpdate;
use datasource::models::{BirthdayRecord, NameRecord, UserRecord};

use crate::gql::error::{log_error, GqlError};
use crate::state::AppState;

#[derive(SimpleObject, Debug, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub email: String,
}

#[ComplexObject]
impl User {
    /// The user's name, or null when unset. Lookup failures degrade to
    /// null instead of failing the surrounding query.
    async fn name(&self, ctx: &Context<'_>) -> Option<Name> {
        let result: Result<Option<NameRecord>> = async {
            let state = ctx.data::<AppState>()?;
            let user_id = Uuid::parse_str(self.id.as_str()).map_err(GqlError::from)?;
            Ok(state.names.get_name_by_id(user_id).await.map_err(GqlError::from)?)
        }
        .await;

        match result {
            Ok(record) => record.map(Name::from),
            Err(e) => {
                log_error(
                    &format!("Error fetching name for user with ID {}", self.id.as_str()),
                    &e.message,
                );
                None
            }
        }
    }

    /// The user's birthday, or null when unset. Same degrade-to-null
    /// policy as `name`.
    async fn birthday(&self, ctx: &Context<'_>) -> Option<Birthday> {
        let result: Result<Option<BirthdayRecord>> = async {
            let state = ctx.data::<AppState>()?;
            let user_id = Uuid::parse_str(self.id.as_str()).map_err(GqlError::from)?;
            Ok(state
                .birthdays
                .get_birthday_by_id(user_id)
                .await
                .map_err(GqlError::from)?)
        }
        .await;

        match result {
            Ok(record) => record.map(Birthday::from),
            Err(e) => {
                log_error(
                    &format!(
                        "Error fetching birthday for user with ID {}",
                        self.id.as_str()
                    ),
                    &e.message,
                );
                None
            }
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.to_string().into(),
            email: record.email,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct Name {
    pub user_id: ID,
    pub name: String,
}

impl From<NameRecord> for Name {
    fn from(record: NameRecord) -> Self {
        Self {
            user_id: record.user_id.to_string().into(),
            name: record.name,
        }
    }
}

#[derive(SimpleObject, Debug, Clone)]
pub struct Birthday {
    pub user_id: ID,
    pub birthday: NaiveDate,
}

impl From<BirthdayRecord> for Birthday {
    fn from(record: BirthdayRecord) -> Self {
        Self {
            user_id: record.user_id.to_string().into(),
            birthday: record.birthday,
        }
    }
}

/// Concrete variant of a `userUpdates` payload.
#[derive(Union, Debug, Clone)]
pub enum UserUpdateData {
    User(User),
    Name(Name),
    Birthday(Birthday),
}

impl From<UserUpdate> for UserUpdateData {
    /// Ordered discrimination over whichever attribute the payload
    /// carries: email wins over name, name over birthday, and a payload
    /// with none of them falls back to `User`. A payload carrying both
    /// email and name therefore resolves as `User`, never `Name`.
    fn from(update: UserUpdate) -> Self {
        let id: ID = update.user_id.to_string().into();
        match update {
            UserUpdate {
                email: Some(email), ..
            } if !email.is_empty() => UserUpdateData::User(User { id, email }),
            UserUpdate {
                name: Some(name), ..
            } if !name.is_empty() => UserUpdateData::Name(Name { user_id: id, name }),
            UserUpdate {
                birthday: Some(birthday),
                ..
            } => UserUpdateData::Birthday(Birthday {
                user_id: id,
                birthday,
            }),
            _ => UserUpdateData::User(User {
                id,
                email: String::new(),
            }),
        }
    }
}
