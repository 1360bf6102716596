//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of scripted expectations instead of by an actor. It lets you test client and
//! orchestration logic without spawning the actor it talks to.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! 1. **Client logic** - wrap `mock.client()` in your domain client and script the answers.
//! 2. **Single actor** - spawn one real `ResourceActor` and drive it through its client.
//! 3. **Actor with mocked neighbours** - a real actor or orchestrator, with the actors it
//!    depends on replaced by mocks. `verify()` then proves which requests were sent, and
//!    an unexpected extra request fails the test.
//! 4. **Full system** - every actor real, end to end.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//! use std::collections::HashMap;
//!
//! #[derive(Clone, Debug)] struct Dish { id: u64, price: u64 }
//! #[derive(Debug)] struct DishCreate;
//! #[derive(Debug)] struct PriceOf(u64);
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u64; type Create = DishCreate; type Update = std::convert::Infallible;
//!     type Action = std::convert::Infallible; type ActionResult = ();
//!     type Query = PriceOf; type QueryResult = u64; type Context = (); type Error = DishError;
//!     fn from_create_params(id: u64, _: DishCreate, _: &()) -> Result<Self, Self::Error> {
//!         Ok(Self { id, price: 0 })
//!     }
//!     async fn on_update(&mut self, u: Self::Update, _: &()) -> Result<(), Self::Error> { match u {} }
//!     async fn handle_action(&mut self, a: Self::Action, _: &()) -> Result<(), Self::Error> { match a {} }
//!     fn handle_query(store: &HashMap<u64, Self>, q: PriceOf) -> Result<u64, Self::Error> {
//!         store.get(&q.0).map(|d| d.price).ok_or(DishError)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Dish>::new();
//!     mock.expect_query().return_ok(1299);
//!     mock.expect_get(7).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.query(PriceOf(1)).await.unwrap(), 1299);
//!     assert!(matches!(client.get(7).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted request/response pair, consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Query {
        response: Result<T::QueryResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were registered. A request of the
/// wrong kind, or addressed to a different ID, panics the mock task; the caller then sees
/// [`FrameworkError::ActorDropped`] and every later request sees
/// [`FrameworkError::ActorClosed`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Get sent to unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Action sent to unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Query { respond_to, .. },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `query` operation.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<T> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response,
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    /// Sets the expectation to return the stored entity.
    pub fn return_ok(self, created: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(created) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Err(error) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                id: self.id,
                response,
            });
    }
}

/// Builder for `query` expectations.
pub struct QueryExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> QueryExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::QueryResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query { response: Ok(result) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query { response: Err(error) });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when a test needs to inspect the request payload itself (the action or query
/// that was sent), not just script the answer. Pair it with [`expect_action`] and
/// [`expect_query`].
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Query,
    oneshot::Sender<Result<T::QueryResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::convert::Infallible;

    #[derive(Clone, Debug, PartialEq)]
    struct Dish {
        id: u64,
        name: String,
        price: u64,
    }

    #[derive(Debug)]
    struct DishCreate {
        name: String,
    }

    #[derive(Debug)]
    enum DishAction {
        Reprice(u64),
    }

    #[derive(Debug)]
    struct Cheapest;

    #[derive(Debug, thiserror::Error)]
    #[error("Dish error")]
    struct DishError;

    #[async_trait]
    impl ActorEntity for Dish {
        type Id = u64;
        type Create = DishCreate;
        type Update = Infallible;
        type Action = DishAction;
        type ActionResult = u64;
        type Query = Cheapest;
        type QueryResult = Option<u64>;
        type Context = ();
        type Error = DishError;

        fn from_create_params(id: u64, params: DishCreate, _: &()) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
                price: 0,
            })
        }

        async fn on_update(&mut self, update: Infallible, _: &()) -> Result<(), Self::Error> {
            match update {}
        }

        async fn handle_action(&mut self, action: DishAction, _: &()) -> Result<u64, Self::Error> {
            match action {
                DishAction::Reprice(price) => {
                    self.price = price;
                    Ok(price)
                }
            }
        }

        fn handle_query(
            store: &HashMap<u64, Self>,
            _: Cheapest,
        ) -> Result<Option<u64>, Self::Error> {
            Ok(store.values().map(|d| d.price).min())
        }
    }

    #[tokio::test]
    async fn test_channel_helpers_expose_payloads() {
        let (client, mut receiver) = create_mock_client::<Dish>(10);

        let reprice = tokio::spawn(async move {
            let price = client.perform_action(3, DishAction::Reprice(450)).await;
            let cheapest = client.query(Cheapest).await;
            (price, cheapest)
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 3);
        assert!(matches!(action, DishAction::Reprice(450)));
        responder.send(Ok(450)).unwrap();

        let (_, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        responder.send(Ok(Some(399))).unwrap();

        let (price, cheapest) = reprice.await.unwrap();
        assert_eq!(price.unwrap(), 450);
        assert_eq!(cheapest.unwrap(), Some(399));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Dish>::new();

        let fries = Dish {
            id: 1,
            name: "Fries".to_string(),
            price: 0,
        };
        mock.expect_create().return_ok(fries.clone());
        mock.expect_get(1).return_ok(Some(fries.clone()));
        mock.expect_action(1).return_err(FrameworkError::NotFound("1".into()));

        let client = mock.client();

        let created = client
            .create(DishCreate {
                name: "Fries".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created, fries);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Fries");

        let result = client.perform_action(1, DishAction::Reprice(1)).await;
        assert!(matches!(result, Err(FrameworkError::NotFound(_))));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_rejects_wrong_id() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
