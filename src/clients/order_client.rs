//! # Order Client
//!
//! High-level API over the ledger actor. Entity errors raised inside the actor
//! come back as [`OrderError`] values, so callers can match on `AlreadyPaid`
//! and friends directly.
use crate::model::{Order, OrderCreate, OrderId, PaymentStatus};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError, OrderQuery, OrderQueryResult};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(entity) => entity,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::Persistence(other.to_string()),
        }
    }
}

impl OrderClient {
    /// Persists a fully priced order with its line items in one message.
    #[instrument(skip(self, params), fields(lines = params.lines.len()))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, total_cents = order.total_cents, "Order recorded");
        Ok(order)
    }

    /// Like `get`, but a missing order is an error.
    #[instrument(skip(self))]
    pub async fn fetch(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        limit: usize,
        status: Option<PaymentStatus>,
    ) -> Result<Vec<Order>, OrderError> {
        match self.inner.query(OrderQuery::Recent { limit, status }).await {
            Ok(OrderQueryResult::Recent(orders)) => Ok(orders),
            Ok(_) => unreachable!("Recent query must return Recent result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn mark_paid(&self, id: OrderId) -> Result<Order, OrderError> {
        self.transition(id, OrderAction::MarkPaid).await
    }

    #[instrument(skip(self))]
    pub async fn void(&self, id: OrderId) -> Result<Order, OrderError> {
        self.transition(id, OrderAction::Void).await
    }

    async fn transition(&self, id: OrderId, action: OrderAction) -> Result<Order, OrderError> {
        match self.inner.perform_action(id, action).await {
            Ok(OrderActionResult::Order(order)) => Ok(order),
            Ok(_) => unreachable!("payment actions must return Order result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
