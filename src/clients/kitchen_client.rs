//! # Kitchen Client
//!
//! The kitchen's view of the ledger. It shares the ledger actor with
//! [`OrderClient`](crate::clients::OrderClient) but only exposes the ticket board
//! and kitchen status changes.
use crate::kitchen::KitchenError;
use crate::model::{KitchenStatus, LineItemId, Order, OrderId, TicketView};
use crate::order_actor::{
    OrderAction, OrderActionResult, OrderError, OrderQuery, OrderQueryResult,
};
use actor_framework::{FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for reading and bumping kitchen tickets.
#[derive(Clone)]
pub struct KitchenClient {
    ledger: ResourceClient<Order>,
}

impl KitchenClient {
    pub fn new(ledger: ResourceClient<Order>) -> Self {
        Self { ledger }
    }

    fn map_error(e: FrameworkError) -> KitchenError {
        match e.downcast_entity::<OrderError>() {
            Ok(OrderError::LineItemNotFound(id)) => KitchenError::NotFound(id.to_string()),
            Ok(OrderError::NotFound(id)) => KitchenError::NotFound(id),
            Ok(other) => KitchenError::Persistence(other.to_string()),
            Err(FrameworkError::NotFound(id)) => KitchenError::NotFound(id),
            Err(other) => KitchenError::Persistence(other.to_string()),
        }
    }

    /// Queued and prepping tickets of orders that are not void, oldest first.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<TicketView>, KitchenError> {
        match self.ledger.query(OrderQuery::ActiveTickets).await {
            Ok(OrderQueryResult::ActiveTickets(tickets)) => Ok(tickets),
            Ok(_) => unreachable!("ActiveTickets query must return ActiveTickets result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Sets the kitchen status of a line item. The last write wins.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        line_item_id: LineItemId,
        status: KitchenStatus,
    ) -> Result<TicketView, KitchenError> {
        let order_id = match self.ledger.query(OrderQuery::LineItemOwner(line_item_id)).await {
            Ok(OrderQueryResult::LineItemOwner(order_id)) => order_id,
            Ok(_) => unreachable!("LineItemOwner query must return LineItemOwner result"),
            Err(e) => return Err(Self::map_error(e)),
        };
        debug!(%order_id, "Line item owner resolved");

        let action = OrderAction::SetKitchenStatus {
            line_item_id,
            status,
        };
        match self.ledger.perform_action(order_id, action).await {
            Ok(OrderActionResult::Ticket(ticket)) => Ok(ticket),
            Ok(_) => unreachable!("SetKitchenStatus action must return Ticket result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Serves every open ticket of an order and returns all of its tickets.
    #[instrument(skip(self))]
    pub async fn bump_order(&self, order_id: OrderId) -> Result<Vec<TicketView>, KitchenError> {
        match self.ledger.perform_action(order_id, OrderAction::BumpOrder).await {
            Ok(OrderActionResult::Tickets(tickets)) => Ok(tickets),
            Ok(_) => unreachable!("BumpOrder action must return Tickets result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
