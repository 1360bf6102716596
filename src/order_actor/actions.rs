//! Custom actions and queries for the Order actor.
//!
//! Actions mutate one [`Order`](crate::model::Order) and run as a compare-and-set,
//! because the ledger actor handles one message at a time. Queries read every
//! order at once; the kitchen board is one of them.

use crate::model::{KitchenStatus, LineItemId, Order, OrderId, PaymentStatus, TicketView};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// `open -> paid`.
    ///
    /// # Errors
    /// `AlreadyPaid` if paid, `OrderVoided` if void.
    MarkPaid,
    /// `open -> void`.
    ///
    /// # Errors
    /// `AlreadyPaid` if paid, `OrderVoided` if already void.
    Void,
    /// Sets the kitchen status of one of the order's line items. Any status
    /// may follow any other.
    SetKitchenStatus {
        line_item_id: LineItemId,
        status: KitchenStatus,
    },
    /// Serves every queued or prepping item of the order at once. Items that
    /// are already finished keep their status and bump time.
    BumpOrder,
}

/// Results from OrderActions
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// Returned by `MarkPaid` and `Void`.
    Order(Order),
    /// Returned by `SetKitchenStatus`.
    Ticket(TicketView),
    /// Returned by `BumpOrder`: every item of the order, in order.
    Tickets(Vec<TicketView>),
}

#[derive(Debug, Clone)]
pub enum OrderQuery {
    /// Newest first, ties broken by id, at most `limit` orders.
    Recent {
        limit: usize,
        status: Option<PaymentStatus>,
    },
    /// Queued and prepping items of orders that are not void, oldest first.
    ActiveTickets,
    /// The order that owns a line item.
    LineItemOwner(LineItemId),
}

/// Results from OrderQuery - variants match 1:1 with OrderQuery
#[derive(Debug, Clone)]
pub enum OrderQueryResult {
    Recent(Vec<Order>),
    ActiveTickets(Vec<TicketView>),
    LineItemOwner(OrderId),
}
