use async_graphql::{Context, Object, Result, ID};
use chrono::NaiveDate;
use uuid::Uuid;

use datasource::services::{UpdateBirthdayData, UpdateNameData};

use crate::gql::error::{log_error, not_found, GqlError, ResultExt};
use crate::gql::types::{Birthday, Name, User};
use crate::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user. Deliberately returns no payload on success, even
    /// though the backend hands back the created record; failures are
    /// logged and also surface as null.
    async fn create_user(&self, ctx: &Context<'_>, email: String) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;
        match state.users.create_user(email).await {
            Ok(record) => {
                tracing::info!("Created user {}", record.id);
                Ok(None)
            }
            Err(e) => {
                log_error("Error creating user", &e);
                Ok(None)
            }
        }
    }

    /// Update a user's birthday. Null on success; an unknown id is
    /// logged and swallowed to null, while a backend failure is raised
    /// to the caller.
    async fn update_birthday(
        &self,
        ctx: &Context<'_>,
        id: ID,
        birthday: NaiveDate,
    ) -> Result<Option<Birthday>> {
        let state = ctx.data::<AppState>()?;
        let user_id = Uuid::parse_str(id.as_str()).gql_err("Invalid user ID")?;

        match state
            .birthdays
            .update_birthday(user_id, UpdateBirthdayData { birthday })
            .await
        {
            Ok(true) => Ok(None),
            Ok(false) => {
                // Logged as not-found but not raised; only the log line
                // distinguishes this from a successful update.
                let _ = not_found("Birthday update", id.as_str());
                Ok(None)
            }
            Err(e) => {
                log_error(
                    &format!("Error updating birthday for user with ID {}", id.as_str()),
                    &e,
                );
                Err(GqlError::new(format!("Error updating birthday: {e}")).into())
            }
        }
    }

    /// Update a user's name. Same policy as `updateBirthday`.
    async fn update_name(&self, ctx: &Context<'_>, id: ID, name: String) -> Result<Option<Name>> {
        let state = ctx.data::<AppState>()?;
        let user_id = Uuid::parse_str(id.as_str()).gql_err("Invalid user ID")?;

        match state
            .names
            .update_name(user_id, UpdateNameData { name })
            .await
        {
            Ok(true) => Ok(None),
            Ok(false) => {
                let _ = not_found("Name update", id.as_str());
                Ok(None)
            }
            Err(e) => {
                log_error(
                    &format!("Error updating name for user with ID {}", id.as_str()),
                    &e,
                );
                Err(GqlError::new(format!("Error updating name: {e}")).into())
            }
        }
    }

    /// Delete a user. Unlike the update mutations, an unknown id raises
    /// the classified not-found error, and a backend failure is
    /// re-raised with its original message.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;
        let user_id = Uuid::parse_str(id.as_str()).gql_err("Invalid user ID")?;

        match state.users.delete_user(user_id).await {
            Ok(Some(_)) => Ok(None),
            Ok(None) => Err(not_found("User", id.as_str())),
            Err(e) => {
                log_error(&format!("Error deleting user with ID {}", id.as_str()), &e);
                Err(GqlError::from(e).into())
            }
        }
    }
}
