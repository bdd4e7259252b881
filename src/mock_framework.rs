//! # Mock Framework
//!
//! Utilities for testing clients and dependent actors in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_get_many`] to assert
//! the request and script the response.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// Instead of a running `ResourceActor`, the test owns the receiving end of
/// the channel: it inspects each request and answers it, so every outcome
/// is scripted.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetMany request
pub async fn expect_get_many<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Vec<T::Id>, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Responder<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::UserClient;
    use crate::domain::{User, UserCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let create_task = tokio::spawn(async move { client.create_user(UserCreate::new("test", "pw")).await });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.username, "test");
        let user = User { id: 1, username: params.username, password: params.password };
        responder.send(Ok(user.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(user));
    }

    #[tokio::test]
    async fn test_username_lookup_scans_the_listing() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let lookup = tokio::spawn(async move { client.get_user_by_username("clerk").await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        let users = vec![
            User { id: 1, username: "admin".into(), password: String::new() },
            User { id: 2, username: "clerk".into(), password: String::new() },
        ];
        responder.send(Ok(users)).unwrap();

        let found = lookup.await.unwrap().unwrap();
        assert_eq!(found.map(|user| user.id), Some(2));
    }
}
