//! # Kitchen POS demo
//!
//! Seeds a small menu, places an order, works it through the kitchen board
//! and takes payment.

use kitchen_pos::config::PosConfig;
use kitchen_pos::kitchen::KitchenError;
use kitchen_pos::lifecycle::{setup_tracing, PosSystem};
use kitchen_pos::menu_actor::MenuError;
use kitchen_pos::model::{CreateOrderRequest, LineItemRequest, MenuItemCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = PosConfig::from_env().map_err(|e| e.to_string())?;
    info!(tax_rate = %config.tax_rate, "Starting kitchen POS demo");

    let system = PosSystem::with_config(config);

    let span = tracing::info_span!("menu_setup");
    let (burger, veggie, fries) = async {
        let menu = &system.menu_client;
        let burger = menu
            .create_item(MenuItemCreate::new("Burgers", "Cheeseburger", 1299))
            .await?;
        let veggie = menu
            .create_item(MenuItemCreate::new("Burgers", "Veggie Burger", 1199))
            .await?;
        let fries = menu
            .create_item(MenuItemCreate::new("Sides", "Fries", 399))
            .await?;
        info!(items = 3, "Menu seeded");
        Ok::<_, MenuError>((burger, veggie, fries))
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("place_order");
    let order = async {
        let request = CreateOrderRequest {
            items: vec![
                LineItemRequest::new(burger.id, 2).with_note("no pickles"),
                LineItemRequest::new(fries.id, 1),
                LineItemRequest::new(veggie.id, 1),
            ],
            tip_cents: 300,
        };
        system.controller.create_order(request).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    info!(
        order_id = %order.id,
        subtotal = order.subtotal_cents,
        tax = order.tax_cents,
        tip = order.tip_cents,
        total = order.total_cents,
        "Order placed"
    );

    let span = tracing::info_span!("kitchen");
    async {
        let board = system.controller.active_tickets().await?;
        for ticket in &board {
            info!(
                line_item_id = %ticket.line_item_id,
                item = %ticket.item_name,
                quantity = ticket.quantity,
                status = %ticket.kitchen_status,
                "On the board"
            );
        }
        for ticket in &board {
            let id = ticket.line_item_id.to_string();
            system.controller.update_ticket_status(&id, "prepping").await?;
            system.controller.update_ticket_status(&id, "SERVED").await?;
        }
        if let Err(e) = system.controller.update_ticket_status("1", "burning").await {
            info!(error = %e, "Rejected bad status as expected");
        }
        let remaining = system.controller.active_tickets().await?;
        info!(remaining = remaining.len(), "Board cleared");
        Ok::<_, KitchenError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("payment");
    let order_id = order.id.to_string();
    async {
        match system.controller.pay_order(&order_id).await {
            Ok(paid) => info!(order_id = %paid.id, status = %paid.status, "Payment accepted"),
            Err(e) => error!(error = %e, "Payment failed"),
        }
        if let Err(e) = system.controller.pay_order(&order_id).await {
            info!(error = %e, "Second payment refused");
        }
    }
    .instrument(span)
    .await;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
