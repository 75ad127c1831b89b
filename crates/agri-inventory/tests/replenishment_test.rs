use actor_framework::mock::MockClient;
use actor_framework::FrameworkError;
use agri_inventory::clients::{OrderClient, ProductClient};
use agri_inventory::lifecycle::InventorySystem;
use agri_inventory::model::{
    LineItem, LineItemInput, Order, OrderCreate, OrderId, OrderLines, OrderStatus, Product,
    ProductCreate, ProductId,
};
use agri_inventory::order_actor::OrderError;
use agri_inventory::product_actor::ProductActionResult;
use agri_inventory::reconcile::{ConversionOutcome, ReconcileError, StockReplenisher};
use chrono::{DateTime, TimeZone, Utc};

fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, minute, 0).unwrap()
}

async fn product(system: &InventorySystem, stock: u32) -> ProductId {
    system
        .product_client
        .create_product(ProductCreate {
            name: "Tomato seedlings (tray)".to_string(),
            price: 6.0,
            stock,
            prebooked: 0,
            sold: 0,
        })
        .await
        .unwrap()
}

async fn prebook(system: &InventorySystem, id: ProductId, quantity: u32, minute: u32) -> OrderId {
    system
        .order_client
        .place_order(
            OrderCreate::prebooking(vec![LineItemInput::new(id, quantity, 6.0)]).placed_at(at(minute)),
        )
        .await
        .unwrap()
}

async fn status(system: &InventorySystem, id: OrderId) -> OrderStatus {
    system.order_client.order(id).await.unwrap().status
}

#[tokio::test]
async fn test_partial_replenishment_serves_what_fits() {
    let system = InventorySystem::new();
    let id = product(&system, 0).await;
    let p1 = prebook(&system, id, 1, 1).await;
    let p2 = prebook(&system, id, 2, 2).await;

    let report = system.replenisher().update_stock(id, 2).await.unwrap();

    assert_eq!(report.prebookings_processed, Some(1));
    assert_eq!(report.remaining_stock, Some(1));
    assert_eq!(
        (report.product.stock, report.product.prebooked, report.product.sold),
        (1, 2, 1)
    );
    assert_eq!(status(&system, p1).await, OrderStatus::Ordered);
    assert_eq!(status(&system, p2).await, OrderStatus::Prebooked);

    let conversions = report.conversions.unwrap();
    assert_eq!(conversions.len(), 2);
    assert_eq!(conversions[0].order_id, p1);
    assert_eq!(conversions[0].outcome, ConversionOutcome::Converted);
    assert_eq!(conversions[1].order_id, p2);
    assert_eq!(conversions[1].quantity, 2);
    assert_eq!(conversions[1].outcome, ConversionOutcome::Skipped);

    let converted = system.order_client.order(p1).await.unwrap();
    assert!(converted.converted_at.is_some());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_enough_stock_converts_every_prebooking() {
    let system = InventorySystem::new();
    let id = product(&system, 0).await;
    let mut orders = Vec::new();
    for minute in 0..4 {
        orders.push(prebook(&system, id, 1, minute).await);
    }

    let report = system.replenisher().update_stock(id, 6).await.unwrap();

    assert_eq!(report.prebookings_processed, Some(4));
    assert_eq!(report.remaining_stock, Some(2));
    assert_eq!(
        (report.product.stock, report.product.prebooked, report.product.sold),
        (2, 0, 4)
    );
    for order in orders {
        assert_eq!(status(&system, order).await, OrderStatus::Ordered);
    }
}

#[tokio::test]
async fn test_scarce_stock_goes_to_earliest_prebookings() {
    let system = InventorySystem::new();
    let id = product(&system, 0).await;
    // placed out of id order on purpose
    let late = prebook(&system, id, 1, 50).await;
    let first = prebook(&system, id, 1, 10).await;
    let latest = prebook(&system, id, 1, 55).await;
    let second = prebook(&system, id, 1, 20).await;
    let third = prebook(&system, id, 1, 30).await;

    let report = system.replenisher().update_stock(id, 3).await.unwrap();

    assert_eq!(report.prebookings_processed, Some(3));
    assert_eq!(report.remaining_stock, Some(0));
    for order in [first, second, third] {
        assert_eq!(status(&system, order).await, OrderStatus::Ordered);
    }
    for order in [late, latest] {
        assert_eq!(status(&system, order).await, OrderStatus::Prebooked);
    }
    let served: Vec<OrderId> = report
        .conversions
        .unwrap()
        .iter()
        .map(|c| c.order_id)
        .collect();
    assert_eq!(served, vec![first, second, third, late, latest]);
    assert_eq!(
        (report.product.stock, report.product.prebooked, report.product.sold),
        (0, 2, 3)
    );
}

#[tokio::test]
async fn test_skipped_prebooking_does_not_block_smaller_ones() {
    let system = InventorySystem::new();
    let id = product(&system, 0).await;
    let big = prebook(&system, id, 3, 1).await;
    let small = prebook(&system, id, 1, 2).await;

    let report = system.replenisher().update_stock(id, 2).await.unwrap();

    assert_eq!(status(&system, big).await, OrderStatus::Prebooked);
    assert_eq!(status(&system, small).await, OrderStatus::Ordered);
    assert_eq!(report.prebookings_processed, Some(1));
    assert_eq!(report.remaining_stock, Some(1));
}

#[tokio::test]
async fn test_repeated_lines_are_converted_together() {
    let system = InventorySystem::new();
    let id = product(&system, 0).await;
    let order_id = system
        .order_client
        .place_order(OrderCreate::prebooking(vec![
            LineItemInput::new(id, 1, 6.0),
            LineItemInput::new(id, 2, 6.0),
        ]))
        .await
        .unwrap();

    let report = system.replenisher().update_stock(id, 3).await.unwrap();

    assert_eq!(report.conversions.unwrap()[0].quantity, 3);
    assert_eq!(status(&system, order_id).await, OrderStatus::Ordered);
    assert_eq!(
        (report.product.stock, report.product.prebooked, report.product.sold),
        (0, 0, 3)
    );
}

#[tokio::test]
async fn test_legacy_prebooking_counts_one_unit_per_listed_id() {
    let system = InventorySystem::new();
    let id = product(&system, 0).await;
    let legacy = system
        .order_client
        .place_order(OrderCreate {
            status: OrderStatus::Prebooked,
            items: OrderLines::LegacyProducts(vec![id, id]),
            placed_at: Some(at(1)),
        })
        .await
        .unwrap();
    let later = prebook(&system, id, 2, 2).await;
    assert_eq!(system.product_client.product(id).await.unwrap().prebooked, 4);

    let report = system.replenisher().update_stock(id, 3).await.unwrap();

    let conversions = report.conversions.unwrap();
    assert_eq!(conversions[0].order_id, legacy);
    assert_eq!(conversions[0].quantity, 2);
    assert_eq!(conversions[0].outcome, ConversionOutcome::Converted);
    assert_eq!(conversions[1].outcome, ConversionOutcome::Skipped);
    assert_eq!(status(&system, legacy).await, OrderStatus::Ordered);
    assert_eq!(status(&system, later).await, OrderStatus::Prebooked);
    assert_eq!(
        (report.product.stock, report.product.prebooked, report.product.sold),
        (1, 2, 2)
    );
}

#[tokio::test]
async fn test_no_scan_unless_stock_rises_from_zero() {
    let system = InventorySystem::new();
    let id = product(&system, 5).await;
    let waiting = prebook(&system, id, 1, 1).await;
    let replenisher = system.replenisher();

    let report = replenisher.update_stock(id, 8).await.unwrap();
    assert!(!report.scanned());
    assert_eq!(report.prebookings_processed, None);
    assert_eq!(report.remaining_stock, None);
    assert_eq!(report.product.stock, 8);
    assert_eq!(status(&system, waiting).await, OrderStatus::Prebooked);

    // down to zero, then zero again: still no scan
    replenisher.update_stock(id, 0).await.unwrap();
    let report = replenisher.update_stock(id, 0).await.unwrap();
    assert!(!report.scanned());
    assert_eq!(status(&system, waiting).await, OrderStatus::Prebooked);

    // 0 -> 1 finally serves it
    let report = replenisher.update_stock(id, 1).await.unwrap();
    assert_eq!(report.prebookings_processed, Some(1));
    assert_eq!(status(&system, waiting).await, OrderStatus::Ordered);
}

#[tokio::test]
async fn test_unknown_product() {
    let system = InventorySystem::new();
    let err = system
        .replenisher()
        .update_stock(ProductId(42), 3)
        .await
        .unwrap_err();
    assert!(matches!(err, ReconcileError::NotFound(msg) if msg.contains("product_42")));
}

/// A conversion refused mid-batch is reported and the batch carries on.
#[tokio::test]
async fn test_failed_conversion_is_reported_not_dropped() {
    let mut product_mock = MockClient::<Product>::new();
    let mut order_mock = MockClient::<Order>::new();

    let mut restocked = Product::new(ProductId(1), "Onion sets", 2.0);
    restocked.stock = 2;
    restocked.prebooked = 2;
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::StockSet {
            previous: 0,
            product: restocked.clone(),
        });

    let waiting = |id: u32, minute: u32| {
        Order::new(
            OrderId(id),
            OrderStatus::Prebooked,
            vec![LineItem {
                product_id: ProductId(1),
                quantity: 1,
                price: 2.0,
            }],
            at(minute),
        )
    };
    order_mock
        .expect_list()
        .return_ok(vec![waiting(2, 5), waiting(1, 1)]);
    order_mock
        .expect_action(OrderId(1))
        .return_err(FrameworkError::EntityError(Box::new(OrderError::NotPrebooked {
            order: "order_1".to_string(),
            status: OrderStatus::Cancelled,
        })));
    let mut converted = waiting(2, 5);
    converted.status = OrderStatus::Ordered;
    order_mock
        .expect_action(OrderId(2))
        .return_ok(agri_inventory::order_actor::OrderActionResult::Converted(converted));
    product_mock.expect_get(ProductId(1)).return_ok(Some(restocked));

    let replenisher = StockReplenisher::new(
        ProductClient::new(product_mock.client()),
        OrderClient::new(order_mock.client()),
    );
    let report = replenisher.update_stock(ProductId(1), 2).await.unwrap();

    assert_eq!(report.prebookings_processed, Some(1));
    assert_eq!(report.remaining_stock, Some(1));
    let conversions = report.conversions.unwrap();
    assert_eq!(conversions[0].order_id, OrderId(1));
    assert!(matches!(
        &conversions[0].outcome,
        ConversionOutcome::Failed { error } if error.contains("cancelled")
    ));
    assert_eq!(conversions[1].outcome, ConversionOutcome::Converted);

    product_mock.verify();
    order_mock.verify();
}
