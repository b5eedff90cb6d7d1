use async_graphql::{Context, Object, Result, ID};
use uuid::Uuid;

use crate::gql::error::{log_error, not_found, GqlError};
use crate::gql::types::{Birthday, Name, User};
use crate::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetch a single user. Misses and backend failures both resolve to
    /// null; reads never fail the query.
    async fn get_user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;

        let fetched: Result<User> = async {
            let user_id = Uuid::parse_str(id.as_str()).map_err(GqlError::from)?;
            let record = state
                .users
                .get_user_by_id(user_id)
                .await
                .map_err(GqlError::from)?;
            match record {
                Some(record) => Ok(record.into()),
                None => Err(not_found("User", id.as_str())),
            }
        }
        .await;

        match fetched {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                log_error(
                    &format!("Error fetching user with ID {}", id.as_str()),
                    &e.message,
                );
                Ok(None)
            }
        }
    }

    /// All users, or an empty list when the backing call fails.
    async fn get_all_users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let state = ctx.data::<AppState>()?;
        match state.users.get_all_users().await {
            Ok(records) => Ok(records.into_iter().map(User::from).collect()),
            Err(e) => {
                log_error("Error fetching all users", &e);
                Ok(Vec::new())
            }
        }
    }

    /// All birthdays, or an empty list when the backing call fails.
    async fn get_all_birthdays(&self, ctx: &Context<'_>) -> Result<Vec<Birthday>> {
        let state = ctx.data::<AppState>()?;
        match state.birthdays.get_all_birthdays().await {
            Ok(records) => Ok(records.into_iter().map(Birthday::from).collect()),
            Err(e) => {
                log_error("Error fetching all birthdays", &e);
                Ok(Vec::new())
            }
        }
    }

    /// All names, or an empty list when the backing call fails.
    async fn get_all_names(&self, ctx: &Context<'_>) -> Result<Vec<Name>> {
        let state = ctx.data::<AppState>()?;
        match state.names.get_all_names().await {
            Ok(records) => Ok(records.into_iter().map(Name::from).collect()),
            Err(e) => {
                log_error("Error fetching all names", &e);
                Ok(Vec::new())
            }
        }
    }
}
