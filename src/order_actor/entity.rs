//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Order`] to be managed by the generic [`actor_framework::ResourceActor`].
//!
//! An order is built complete in [`ActorEntity::from_create_params`]: every line is
//! validated and priced from the snapshot before any line-item id is drawn, so a
//! rejected order leaves no trace in the ledger or the id sequence.

use super::actions::{OrderAction, OrderActionResult, OrderQuery, OrderQueryResult};
use super::error::OrderError;
use super::LedgerContext;
use crate::model::{
    KitchenStatus, Order, OrderCreate, OrderId, OrderLineItem, OrderTotals, PaymentStatus,
    TicketView,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Query = OrderQuery;
    type QueryResult = OrderQueryResult;
    type Context = LedgerContext;
    type Error = OrderError;

    fn from_create_params(
        id: OrderId,
        params: OrderCreate,
        ctx: &LedgerContext,
    ) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(OrderError::Validation(
                "order must contain at least one item".into(),
            ));
        }

        let mut priced = Vec::with_capacity(params.lines.len());
        for line in &params.lines {
            if line.quantity == 0 {
                return Err(OrderError::InvalidLineItem(format!(
                    "quantity for menu item {} must be positive",
                    line.menu_item_id
                )));
            }
            let snapshot = params.prices.get(&line.menu_item_id).ok_or_else(|| {
                OrderError::InvalidLineItem(format!(
                    "no price captured for menu item {}",
                    line.menu_item_id
                ))
            })?;
            priced.push((line, snapshot));
        }

        let totals = OrderTotals::compute(
            priced
                .iter()
                .map(|(line, snapshot)| (snapshot.unit_price_cents, line.quantity)),
            ctx.tax_rate,
            params.tip_cents,
        )
        .ok_or_else(|| OrderError::Validation("order amount overflows".into()))?;

        let created_at = ctx.clock.now();
        let items = priced
            .into_iter()
            .map(|(line, snapshot)| OrderLineItem {
                id: ctx.line_item_ids.next_id(),
                order_id: id,
                menu_item_id: line.menu_item_id,
                item_name: snapshot.name.clone(),
                category: snapshot.category.clone(),
                quantity: line.quantity,
                unit_price_cents: snapshot.unit_price_cents,
                note: line.normalized_note(),
                kitchen_status: KitchenStatus::Queued,
                created_at,
                bumped_at: None,
            })
            .collect();

        Ok(Self {
            id,
            items,
            subtotal_cents: totals.subtotal_cents,
            tax_cents: totals.tax_cents,
            tip_cents: totals.tip_cents,
            total_cents: totals.total_cents,
            status: PaymentStatus::Open,
            created_at,
        })
    }

    /// Orders are never edited in place.
    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &LedgerContext,
    ) -> Result<(), OrderError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &LedgerContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::MarkPaid => {
                self.transition(PaymentStatus::Paid)?;
                Ok(OrderActionResult::Order(self.clone()))
            }
            OrderAction::Void => {
                self.transition(PaymentStatus::Void)?;
                Ok(OrderActionResult::Order(self.clone()))
            }
            OrderAction::SetKitchenStatus {
                line_item_id,
                status,
            } => {
                let item = self
                    .items
                    .iter_mut()
                    .find(|item| item.id == line_item_id)
                    .ok_or(OrderError::LineItemNotFound(line_item_id))?;
                item.set_kitchen_status(status, ctx.clock.now());
                let item = item.clone();
                Ok(OrderActionResult::Ticket(self.ticket(&item)))
            }
            OrderAction::BumpOrder => {
                let now = ctx.clock.now();
                for item in self
                    .items
                    .iter_mut()
                    .filter(|item| item.kitchen_status.is_active())
                {
                    item.set_kitchen_status(KitchenStatus::Served, now);
                }
                let tickets = self.items.iter().map(|item| self.ticket(item)).collect();
                Ok(OrderActionResult::Tickets(tickets))
            }
        }
    }

    fn handle_query(
        store: &HashMap<OrderId, Self>,
        query: OrderQuery,
    ) -> Result<OrderQueryResult, OrderError> {
        match query {
            OrderQuery::Recent { limit, status } => {
                let mut orders: Vec<Order> = store
                    .values()
                    .filter(|order| status.map_or(true, |s| order.status == s))
                    .cloned()
                    .collect();
                orders.sort_by_key(|order| Reverse((order.created_at, order.id)));
                orders.truncate(limit);
                Ok(OrderQueryResult::Recent(orders))
            }
            OrderQuery::ActiveTickets => {
                let mut tickets: Vec<TicketView> = store
                    .values()
                    .filter(|order| order.status != PaymentStatus::Void)
                    .flat_map(|order| {
                        order
                            .items
                            .iter()
                            .filter(|item| item.kitchen_status.is_active())
                            .map(|item| order.ticket(item))
                    })
                    .collect();
                tickets.sort_by_key(|ticket| (ticket.item_created_at, ticket.line_item_id));
                Ok(OrderQueryResult::ActiveTickets(tickets))
            }
            OrderQuery::LineItemOwner(line_item_id) => store
                .values()
                .find(|order| order.line_item(line_item_id).is_some())
                .map(|order| OrderQueryResult::LineItemOwner(order.id))
                .ok_or(OrderError::LineItemNotFound(line_item_id)),
        }
    }
}

impl Order {
    /// Moves an open order to a terminal payment state.
    fn transition(&mut self, to: PaymentStatus) -> Result<(), OrderError> {
        match self.status {
            PaymentStatus::Open => {
                self.status = to;
                Ok(())
            }
            PaymentStatus::Paid => Err(OrderError::AlreadyPaid(self.id)),
            PaymentStatus::Void => Err(OrderError::OrderVoided(self.id)),
        }
    }
}
