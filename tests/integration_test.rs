use kitchen_pos::kitchen::KitchenError;
use kitchen_pos::lifecycle::PosSystem;
use kitchen_pos::model::{
    CreateOrderRequest, KitchenStatus, LineItemId, LineItemRequest, MenuItem, MenuItemCreate,
    MenuItemId, MenuItemUpdate, OrderId, PaymentStatus,
};
use kitchen_pos::order_actor::OrderError;

/// Seeds Cheeseburger (1299) and Fries (399).
async fn seeded() -> (PosSystem, MenuItem, MenuItem) {
    let system = PosSystem::new();
    let burger = system
        .menu_client
        .create_item(MenuItemCreate::new("Burgers", "Cheeseburger", 1299))
        .await
        .expect("Failed to create burger");
    let fries = system
        .menu_client
        .create_item(MenuItemCreate::new("Sides", "Fries", 399))
        .await
        .expect("Failed to create fries");
    (system, burger, fries)
}

fn request(lines: Vec<LineItemRequest>) -> CreateOrderRequest {
    CreateOrderRequest {
        items: lines,
        tip_cents: 0,
    }
}

#[tokio::test]
async fn test_order_totals_and_lifecycle() {
    let (system, burger, fries) = seeded().await;

    let order = system
        .controller
        .create_order(request(vec![
            LineItemRequest::new(burger.id, 2),
            LineItemRequest::new(fries.id, 1),
        ]))
        .await
        .expect("Failed to create order");

    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.subtotal_cents, 2997);
    assert_eq!(order.tax_cents, 187);
    assert_eq!(order.tip_cents, 0);
    assert_eq!(order.total_cents, 3184);
    assert_eq!(order.status, PaymentStatus::Open);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].unit_price_cents, 1299);

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["status"], "open");
    assert_eq!(json["items"][0]["kitchen_status"], "queued");

    let fetched = system.controller.get_order(" 1 ").await.unwrap();
    assert_eq!(fetched, order);

    let paid = system.controller.pay_order("1").await.unwrap();
    assert_eq!(paid.status, PaymentStatus::Paid);
    assert_eq!(paid.total_cents, 3184);

    let again = system.controller.pay_order("1").await.unwrap_err();
    assert_eq!(again, OrderError::AlreadyPaid(OrderId(1)));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_half_cent_tax_rounds_up() {
    let system = PosSystem::new();
    let mint = system
        .menu_client
        .create_item(MenuItemCreate::new("Candy", "Mint", 8))
        .await
        .unwrap();

    let order = system
        .controller
        .create_order(CreateOrderRequest {
            items: vec![LineItemRequest::new(mint.id, 1)],
            tip_cents: 50,
        })
        .await
        .unwrap();
    assert_eq!(order.tax_cents, 1);
    assert_eq!(order.total_cents, 59);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_payment_succeeds_exactly_once() {
    let (system, burger, _) = seeded().await;
    let order = system
        .controller
        .create_order(request(vec![LineItemRequest::new(burger.id, 1)]))
        .await
        .unwrap();
    let id = order.id.to_string();

    let mut handles = vec![];
    for _ in 0..8 {
        let controller = system.controller.clone();
        let id = id.clone();
        handles.push(tokio::spawn(async move { controller.pay_order(&id).await }));
    }

    let mut paid = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(order) => {
                assert_eq!(order.status, PaymentStatus::Paid);
                paid += 1;
            }
            Err(e) => assert_eq!(e, OrderError::AlreadyPaid(order.id)),
        }
    }
    assert_eq!(paid, 1, "exactly one payment must win");

    let stored = system.controller.get_order(&id).await.unwrap();
    assert_eq!(stored.total_cents, order.total_cents);
    assert_eq!(stored.status, PaymentStatus::Paid);
}

#[tokio::test]
async fn test_payment_errors() {
    let (system, burger, _) = seeded().await;

    let missing = system.controller.pay_order("999").await.unwrap_err();
    assert_eq!(missing, OrderError::NotFound("999".into()));

    let malformed = system.controller.pay_order("order-1").await.unwrap_err();
    assert_eq!(malformed, OrderError::InvalidIdentifier("order-1".into()));

    let order = system
        .controller
        .create_order(request(vec![LineItemRequest::new(burger.id, 1)]))
        .await
        .unwrap();
    system.controller.void_order("1").await.unwrap();
    assert_eq!(
        system.controller.pay_order("1").await.unwrap_err(),
        OrderError::OrderVoided(order.id)
    );
    assert_eq!(
        system.controller.void_order("1").await.unwrap_err(),
        OrderError::OrderVoided(order.id)
    );
}

#[tokio::test]
async fn test_ticket_status_updates() {
    let (system, burger, _) = seeded().await;
    let order = system
        .controller
        .create_order(request(vec![LineItemRequest::new(burger.id, 1)]))
        .await
        .unwrap();
    let line_id = order.items[0].id.to_string();

    let ticket = system
        .controller
        .update_ticket_status(&line_id, "PREPPING")
        .await
        .unwrap();
    assert_eq!(ticket.kitchen_status, KitchenStatus::Prepping);
    assert_eq!(ticket.order_id, order.id);
    assert_eq!(ticket.item_name, "Cheeseburger");

    let err = system
        .controller
        .update_ticket_status(&line_id, "burning")
        .await
        .unwrap_err();
    assert_eq!(err, KitchenError::InvalidStatus("burning".into()));

    let board = system.controller.active_tickets().await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].kitchen_status, KitchenStatus::Prepping);

    let err = system
        .controller
        .update_ticket_status("404", "ready")
        .await
        .unwrap_err();
    assert_eq!(err, KitchenError::NotFound("404".into()));

    let err = system
        .controller
        .update_ticket_status("x1", "ready")
        .await
        .unwrap_err();
    assert_eq!(err, KitchenError::InvalidIdentifier("x1".into()));

    // A served item can be sent back.
    system
        .controller
        .update_ticket_status(&line_id, "served")
        .await
        .unwrap();
    let ticket = system
        .controller
        .update_ticket_status(&line_id, "queued")
        .await
        .unwrap();
    assert_eq!(ticket.kitchen_status, KitchenStatus::Queued);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_status_updates_last_write_wins() {
    let (system, burger, _) = seeded().await;
    let order = system
        .controller
        .create_order(request(vec![LineItemRequest::new(burger.id, 1)]))
        .await
        .unwrap();
    let line_id = order.items[0].id.to_string();

    let mut handles = vec![];
    for i in 0..16 {
        let controller = system.controller.clone();
        let line_id = line_id.clone();
        let status = KitchenStatus::ALL[i % KitchenStatus::ALL.len()];
        handles.push(tokio::spawn(async move {
            controller
                .update_ticket_status(&line_id, status.as_str())
                .await
        }));
    }
    for handle in handles {
        let ticket = handle.await.unwrap().expect("every status update succeeds");
        assert_eq!(ticket.line_item_id, order.items[0].id);
    }

    let stored = system.controller.get_order(&order.id.to_string()).await.unwrap();
    let status = stored.items[0].kitchen_status;
    assert!(KitchenStatus::ALL.contains(&status));
    assert_eq!(stored.items[0].bumped_at.is_some(), !status.is_active());

    let board = system.controller.active_tickets().await.unwrap();
    let on_board: Vec<_> = board
        .iter()
        .filter(|t| t.line_item_id == order.items[0].id)
        .collect();
    if status.is_active() {
        assert_eq!(on_board.len(), 1);
        assert_eq!(on_board[0].kitchen_status, status);
    } else {
        assert!(on_board.is_empty());
    }
}

#[tokio::test]
async fn test_bump_time_follows_kitchen_status() {
    let (system, burger, _) = seeded().await;
    let order = system
        .controller
        .create_order(request(vec![LineItemRequest::new(burger.id, 1)]))
        .await
        .unwrap();
    let line_id = order.items[0].id.to_string();
    assert_eq!(order.items[0].bumped_at, None);

    let ready = system
        .controller
        .update_ticket_status(&line_id, "ready")
        .await
        .unwrap();
    let bumped_at = ready.bumped_at.expect("ready ticket is bumped");
    assert!(bumped_at >= order.created_at);

    let json = serde_json::to_value(&ready).unwrap();
    assert!(json["bumped_at"].is_string());

    let served = system
        .controller
        .update_ticket_status(&line_id, "served")
        .await
        .unwrap();
    assert_eq!(served.bumped_at, Some(bumped_at));

    let back = system
        .controller
        .update_ticket_status(&line_id, "prepping")
        .await
        .unwrap();
    assert_eq!(back.bumped_at, None);
    let stored = system.controller.get_order("1").await.unwrap();
    assert_eq!(stored.items[0].bumped_at, None);
}

#[tokio::test]
async fn test_bump_order_clears_its_tickets_from_the_board() {
    let (system, burger, fries) = seeded().await;
    let first = system
        .controller
        .create_order(request(vec![
            LineItemRequest::new(burger.id, 1),
            LineItemRequest::new(fries.id, 2),
        ]))
        .await
        .unwrap();
    let second = system
        .controller
        .create_order(request(vec![LineItemRequest::new(fries.id, 1)]))
        .await
        .unwrap();

    let tickets = system
        .controller
        .bump_order(&first.id.to_string())
        .await
        .unwrap();
    assert_eq!(tickets.len(), 2);
    assert!(tickets
        .iter()
        .all(|t| t.kitchen_status == KitchenStatus::Served && t.bumped_at.is_some()));

    let board = system.controller.active_tickets().await.unwrap();
    let ids: Vec<_> = board.iter().map(|t| t.line_item_id).collect();
    assert_eq!(ids, vec![second.items[0].id]);

    // Bumping does not settle the bill.
    let stored = system.controller.get_order(&first.id.to_string()).await.unwrap();
    assert_eq!(stored.status, PaymentStatus::Open);

    let err = system.controller.bump_order("404").await.unwrap_err();
    assert_eq!(err, KitchenError::NotFound("404".into()));
    let err = system.controller.bump_order("abc").await.unwrap_err();
    assert_eq!(err, KitchenError::InvalidIdentifier("abc".into()));
}

#[tokio::test]
async fn test_active_board_filters_and_orders_tickets() {
    let (system, burger, fries) = seeded().await;

    let first = system
        .controller
        .create_order(request(vec![
            LineItemRequest::new(burger.id, 1),
            LineItemRequest::new(fries.id, 1),
            LineItemRequest::new(burger.id, 1).with_note("  medium rare "),
        ]))
        .await
        .unwrap();
    let second = system
        .controller
        .create_order(request(vec![
            LineItemRequest::new(fries.id, 2),
            LineItemRequest::new(burger.id, 1),
        ]))
        .await
        .unwrap();

    let ready = first.items[0].id.to_string();
    let served = second.items[1].id.to_string();
    system.controller.update_ticket_status(&ready, "ready").await.unwrap();
    system.controller.update_ticket_status(&served, "served").await.unwrap();
    system.controller.pay_order(&first.id.to_string()).await.unwrap();

    let board = system.controller.active_tickets().await.unwrap();
    let ids: Vec<LineItemId> = board.iter().map(|t| t.line_item_id).collect();
    assert_eq!(
        ids,
        vec![first.items[1].id, first.items[2].id, second.items[0].id]
    );
    assert!(board.iter().all(|t| t.kitchen_status.is_active()));
    assert!(board.windows(2).all(|w| {
        (w[0].item_created_at, w[0].line_item_id) < (w[1].item_created_at, w[1].line_item_id)
    }));
    assert_eq!(board[1].note.as_deref(), Some("medium rare"));

    let json = serde_json::to_value(&board[0]).unwrap();
    assert_eq!(json["kitchen_status"], "queued");
    assert_eq!(json["item_name"], "Fries");
    assert_eq!(json["order_id"], first.id.0);
}

#[tokio::test]
async fn test_voided_order_leaves_the_board() {
    let (system, burger, fries) = seeded().await;
    let keep = system
        .controller
        .create_order(request(vec![LineItemRequest::new(burger.id, 1)]))
        .await
        .unwrap();
    let cancel = system
        .controller
        .create_order(request(vec![LineItemRequest::new(fries.id, 1)]))
        .await
        .unwrap();

    let voided = system
        .controller
        .void_order(&cancel.id.to_string())
        .await
        .unwrap();
    assert_eq!(voided.status, PaymentStatus::Void);

    let board = system.controller.active_tickets().await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].order_id, keep.id);
}

#[tokio::test]
async fn test_unknown_item_leaves_nothing_behind() {
    let (system, burger, _) = seeded().await;

    let err = system
        .controller
        .create_order(request(vec![
            LineItemRequest::new(burger.id, 1),
            LineItemRequest::new(MenuItemId(99), 1),
            LineItemRequest::new(MenuItemId(42), 1),
        ]))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::UnknownMenuItem(MenuItemId(42)));

    assert!(system.controller.list_orders(None, None).await.unwrap().is_empty());
    assert!(system.controller.active_tickets().await.unwrap().is_empty());

    let order = system
        .controller
        .create_order(request(vec![LineItemRequest::new(burger.id, 1)]))
        .await
        .unwrap();
    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.items[0].id, LineItemId(1));
}

#[tokio::test]
async fn test_invalid_requests_are_rejected() {
    let (system, burger, _) = seeded().await;

    let empty = system.controller.create_order(request(vec![])).await;
    assert!(matches!(empty, Err(OrderError::Validation(_))));

    let zero = system
        .controller
        .create_order(request(vec![LineItemRequest::new(burger.id, 0)]))
        .await;
    assert!(matches!(zero, Err(OrderError::InvalidLineItem(_))));

    let overflow = system
        .controller
        .create_order(CreateOrderRequest {
            items: vec![LineItemRequest::new(burger.id, 1)],
            tip_cents: u64::MAX,
        })
        .await;
    assert!(matches!(overflow, Err(OrderError::Validation(_))));
}

#[tokio::test]
async fn test_catalog_changes_do_not_touch_existing_orders() {
    let (system, burger, _) = seeded().await;
    let order = system
        .controller
        .create_order(request(vec![LineItemRequest::new(burger.id, 2)]))
        .await
        .unwrap();

    system
        .menu_client
        .update_item(
            burger.id,
            MenuItemUpdate {
                name: Some("Double Cheeseburger".into()),
                price_cents: Some(1899),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let stored = system.controller.get_order("1").await.unwrap();
    assert_eq!(stored.items[0].unit_price_cents, 1299);
    assert_eq!(stored.items[0].item_name, "Cheeseburger");
    assert_eq!(stored.subtotal_cents, order.subtotal_cents);

    let next = system
        .controller
        .create_order(request(vec![LineItemRequest::new(burger.id, 1)]))
        .await
        .unwrap();
    assert_eq!(next.items[0].unit_price_cents, 1899);
}

#[tokio::test]
async fn test_deactivated_item_cannot_be_ordered() {
    let (system, burger, fries) = seeded().await;

    let retired = system.menu_client.deactivate(fries.id).await.unwrap();
    assert!(!retired.active);

    let listed = system.menu_client.list_active().await.unwrap();
    assert_eq!(listed, vec![burger.clone()]);

    let err = system
        .controller
        .create_order(request(vec![LineItemRequest::new(fries.id, 1)]))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::UnknownMenuItem(fries.id));
}

#[tokio::test]
async fn test_list_orders() {
    let (system, burger, _) = seeded().await;
    for _ in 0..3 {
        system
            .controller
            .create_order(request(vec![LineItemRequest::new(burger.id, 1)]))
            .await
            .unwrap();
    }
    system.controller.pay_order("2").await.unwrap();

    let all = system.controller.list_orders(None, None).await.unwrap();
    let ids: Vec<_> = all.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![OrderId(3), OrderId(2), OrderId(1)]);

    let newest = system.controller.list_orders(Some(1), None).await.unwrap();
    assert_eq!(newest[0].id, OrderId(3));

    let open = system
        .controller
        .list_orders(Some(10_000), Some("OPEN"))
        .await
        .unwrap();
    assert_eq!(open.iter().map(|o| o.id).collect::<Vec<_>>(), vec![OrderId(3), OrderId(1)]);

    assert!(matches!(
        system.controller.list_orders(Some(0), None).await,
        Err(OrderError::Validation(_))
    ));
    assert!(matches!(
        system.controller.list_orders(None, Some("refunded")).await,
        Err(OrderError::Validation(_))
    ));
}
