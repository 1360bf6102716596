//! # Order Lifecycle Controller
//!
//! Stateless orchestration at the boundary. It turns raw input (text ids,
//! status strings, optional limits) into typed requests. Order creation goes
//! catalog first, ledger second: prices are resolved in one read, then the
//! ledger builds and stores the order in one message. A rejected request
//! never leaves a partial order behind.

use crate::clients::{KitchenClient, MenuClient, OrderClient};
use crate::kitchen::KitchenError;
use crate::model::{
    CreateOrderRequest, KitchenStatus, LineItemId, MenuItemId, Order, OrderCreate, OrderId,
    PaymentStatus, TicketView,
};
use crate::order_actor::OrderError;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct OrderController {
    menu: MenuClient,
    orders: OrderClient,
    kitchen: KitchenClient,
    default_list_limit: usize,
    max_list_limit: usize,
}

impl OrderController {
    pub fn new(
        menu: MenuClient,
        orders: OrderClient,
        kitchen: KitchenClient,
        default_list_limit: usize,
        max_list_limit: usize,
    ) -> Self {
        Self {
            menu,
            orders,
            kitchen,
            default_list_limit,
            max_list_limit,
        }
    }

    /// Prices the requested items against the live catalog and records the order.
    ///
    /// # Errors
    /// - `Validation` if there are no items or an amount overflows
    /// - `InvalidLineItem` if any quantity is zero
    /// - `UnknownMenuItem` if an item is missing or inactive in the catalog
    #[instrument(skip(self, request), fields(lines = request.items.len()))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        if request.items.is_empty() {
            return Err(OrderError::Validation(
                "order must contain at least one item".into(),
            ));
        }
        if let Some(line) = request.items.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::InvalidLineItem(format!(
                "quantity for menu item {} must be positive",
                line.menu_item_id
            )));
        }

        let ids: BTreeSet<MenuItemId> = request
            .items
            .iter()
            .map(|line| line.menu_item_id)
            .collect();
        debug!(distinct_items = ids.len(), "Resolving prices");
        let prices = self.menu.resolve(ids).await?;

        let order = self
            .orders
            .create_order(OrderCreate {
                lines: request.items,
                prices,
                tip_cents: request.tip_cents,
            })
            .await?;
        info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, raw_id: &str) -> Result<Order, OrderError> {
        let id = parse_order_id(raw_id)?;
        self.orders.fetch(id).await
    }

    /// Most recent orders first.
    ///
    /// A missing limit uses the configured default; larger limits are clamped
    /// to the configured maximum.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        limit: Option<usize>,
        raw_status: Option<&str>,
    ) -> Result<Vec<Order>, OrderError> {
        let limit = match limit {
            None => self.default_list_limit,
            Some(0) => return Err(OrderError::Validation("limit must be positive".into())),
            Some(n) => n.min(self.max_list_limit),
        };
        let status = raw_status
            .map(|raw| {
                raw.parse::<PaymentStatus>()
                    .map_err(|e| OrderError::Validation(e.to_string()))
            })
            .transpose()?;
        self.orders.list(limit, status).await
    }

    #[instrument(skip(self))]
    pub async fn pay_order(&self, raw_id: &str) -> Result<Order, OrderError> {
        let id = parse_order_id(raw_id)?;
        let order = self.orders.mark_paid(id).await?;
        info!(order_id = %order.id, total_cents = order.total_cents, "Order paid");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn void_order(&self, raw_id: &str) -> Result<Order, OrderError> {
        let id = parse_order_id(raw_id)?;
        let order = self.orders.void(id).await?;
        info!(order_id = %order.id, "Order voided");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn active_tickets(&self) -> Result<Vec<TicketView>, KitchenError> {
        self.kitchen.list_active().await
    }

    /// Serves every open ticket of the order in one step.
    #[instrument(skip(self))]
    pub async fn bump_order(&self, raw_order_id: &str) -> Result<Vec<TicketView>, KitchenError> {
        let order_id: OrderId = raw_order_id
            .parse()
            .map_err(|_| KitchenError::InvalidIdentifier(raw_order_id.to_string()))?;
        let tickets = self.kitchen.bump_order(order_id).await?;
        info!(%order_id, tickets = tickets.len(), "Order bumped");
        Ok(tickets)
    }

    /// Parses both inputs before touching the ledger, so a bad status leaves
    /// the ticket unchanged.
    #[instrument(skip(self))]
    pub async fn update_ticket_status(
        &self,
        raw_line_item_id: &str,
        raw_status: &str,
    ) -> Result<TicketView, KitchenError> {
        let line_item_id: LineItemId = raw_line_item_id
            .parse()
            .map_err(|_| KitchenError::InvalidIdentifier(raw_line_item_id.to_string()))?;
        let status: KitchenStatus = raw_status
            .parse()
            .map_err(|_| KitchenError::InvalidStatus(raw_status.to_string()))?;
        self.kitchen.set_status(line_item_id, status).await
    }
}

fn parse_order_id(raw: &str) -> Result<OrderId, OrderError> {
    raw.parse()
        .map_err(|_| OrderError::InvalidIdentifier(raw.to_string()))
}
