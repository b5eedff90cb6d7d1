use async_graphql::{Context, Result, Subscription};
use futures_util::{Stream, StreamExt};
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};

use datasource::events::topics;

use crate::gql::types::UserUpdateData;
use crate::state::AppState;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Live feed of user, name and birthday changes, straight off the
    /// event channel. No filtering; items arrive as published.
    async fn user_updates(
        &self,
        ctx: &Context<'_>,
    ) -> Result<impl Stream<Item = Result<UserUpdateData, BroadcastStreamRecvError>>> {
        let state = ctx.data::<AppState>()?;

        tracing::info!("Subscribing to {}", topics::USER_UPDATES);
        let receiver = state.events.subscribe(topics::USER_UPDATES);

        Ok(BroadcastStream::new(receiver).map(|item| item.map(UserUpdateData::from)))
    }
}
