mod common;

use std::time::Duration;

use futures_util::StreamExt;
use uuid::Uuid;

use api::gql::build_schema;
use common::*;
use datasource::events::{topics, UserUpdate};

const USER_UPDATES_SUBSCRIPTION: &str = r#"
    subscription {
        userUpdates {
            __typename
            ... on User { email }
            ... on Name { name }
            ... on Birthday { birthday }
        }
    }
"#;

#[tokio::test]
async fn subscription_receives_published_updates_in_order() {
    let ctx = setup();
    let schema = build_schema(ctx.state.clone());

    let mut stream = schema.execute_stream(USER_UPDATES_SUBSCRIPTION);

    let events = ctx.events.clone();
    let user_id = Uuid::new_v4();
    let birthday = date(2000, 1, 1);
    tokio::spawn(async move {
        // Give the subscription a moment to establish before publishing.
        tokio::time::sleep(Duration::from_millis(100)).await;
        events.publish(topics::USER_UPDATES, UserUpdate::name(user_id, "Ada"));
        events.publish(topics::USER_UPDATES, UserUpdate::birthday(user_id, birthday));
    });

    let response = stream.next().await.expect("stream ended early");
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["userUpdates"]["__typename"], "Name");
    assert_eq!(data["userUpdates"]["name"], "Ada");

    let response = stream.next().await.expect("stream ended early");
    let data = response.data.into_json().unwrap();
    assert_eq!(data["userUpdates"]["__typename"], "Birthday");
    assert_eq!(data["userUpdates"]["birthday"], "2000-01-01");
}

#[tokio::test]
async fn mutations_feed_the_subscription_stream() {
    let ctx = setup();
    let schema = build_schema(ctx.state.clone());

    let mut stream = schema.execute_stream(USER_UPDATES_SUBSCRIPTION);

    let mutation_schema = schema.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let response = mutation_schema
            .execute(r#"mutation { createUser(email: "live@example.com") { id } }"#)
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
    });

    let response = stream.next().await.expect("stream ended early");
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["userUpdates"]["__typename"], "User");
    assert_eq!(data["userUpdates"]["email"], "live@example.com");
}

#[tokio::test]
async fn subscribers_only_see_events_after_subscribing() {
    let ctx = setup();
    let schema = build_schema(ctx.state.clone());

    // Published before anyone subscribes; must not be replayed.
    ctx.events.publish(
        topics::USER_UPDATES,
        UserUpdate::name(Uuid::new_v4(), "early"),
    );

    let mut stream = schema.execute_stream(USER_UPDATES_SUBSCRIPTION);

    let events = ctx.events.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        events.publish(topics::USER_UPDATES, UserUpdate::name(Uuid::new_v4(), "late"));
    });

    let response = stream.next().await.expect("stream ended early");
    let data = response.data.into_json().unwrap();
    assert_eq!(data["userUpdates"]["name"], "late");
}
