//! Shared seed data for the integration tests: two warehouses in the Kerala
//! service region, two retailers, a small catalog, and an order book
//! covering the interesting fulfilment and payment states.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use distboard::entities::{
    InventoryRecord, Order, OrderStatus, PaymentMethod, PaymentStatus, Product, ProductCategory,
    Retailer, Warehouse,
};
use distboard::provider::MemoryProvider;

pub struct Fixture {
    pub provider: MemoryProvider,
    pub kochi: Uuid,
    pub calicut: Uuid,
    pub ammu: Uuid,
    pub oil: Uuid,
    pub order_delivered: Uuid,
    pub order_out: Uuid,
    pub order_processing: Uuid,
    pub order_packed: Uuid,
}

pub fn day(d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, h, 0, 0).unwrap()
}

fn warehouse(name: &str, location: &str, lat: f64, lng: f64) -> Warehouse {
    Warehouse {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location: location.to_string(),
        latitude: lat,
        longitude: lng,
        capacity: 10_000,
        coverage_radius_km: 50.0,
        created_at: day(1, 0),
    }
}

fn category(name: &str) -> ProductCategory {
    ProductCategory {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
    }
}

fn product(name: &str, price: Decimal, category: Option<ProductCategory>) -> Product {
    Product {
        id: Uuid::new_v4(),
        category_id: category.as_ref().map(|c| c.id),
        category,
        name: name.to_string(),
        description: None,
        price,
        moq: 1,
        created_at: day(1, 0),
    }
}

fn stock(
    warehouse: &Warehouse,
    product: &Product,
    quantity: i64,
    threshold: i64,
    updated: DateTime<Utc>,
) -> InventoryRecord {
    InventoryRecord {
        id: Uuid::new_v4(),
        warehouse_id: warehouse.id,
        product_id: product.id,
        quantity,
        low_stock_threshold: threshold,
        last_updated: updated,
        product: Some(product.clone()),
        warehouse: Some(warehouse.clone()),
    }
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: Uuid,
    number: &str,
    retailer: &Retailer,
    warehouse: &Warehouse,
    status: OrderStatus,
    payment_status: PaymentStatus,
    total: Decimal,
    order_date: DateTime<Utc>,
    delivered_at: Option<DateTime<Utc>>,
) -> Order {
    Order {
        id,
        order_number: number.to_string(),
        retailer_id: retailer.id,
        warehouse_id: warehouse.id,
        status,
        payment_method: PaymentMethod::Credit,
        payment_status,
        total_amount: total,
        order_date,
        expected_delivery: None,
        delivered_at,
        retailer: Some(retailer.clone()),
        warehouse: Some(warehouse.clone()),
        items: Vec::new(),
    }
}

pub fn fixture() -> Fixture {
    let kochi = warehouse("Kochi Central", "Kochi", 9.93, 76.27);
    let calicut = warehouse("Calicut North", "Calicut", 11.25, 75.78);

    let grains = category("Grains");
    let essentials = category("Essentials");

    let rice = product("Basmati Rice", dec!(120), Some(grains.clone()));
    let oil = product("Sunflower Oil", dec!(180), Some(essentials.clone()));
    // No category: lands in the "Unknown" bucket.
    let soap = product("Bath Soap", dec!(35), None);

    let ammu = Retailer {
        id: Uuid::new_v4(),
        shop_name: "Ammu Stores".to_string(),
        address: "MG Road, Kochi".to_string(),
        latitude: 9.98,
        longitude: 76.28,
        assigned_warehouse_id: Some(kochi.id),
        warehouse: Some(kochi.clone()),
        credit_limit: dec!(10000),
        credit_used: dec!(8000),
        credit_score: 92,
        created_at: day(1, 0),
    };
    let zamorin = Retailer {
        id: Uuid::new_v4(),
        shop_name: "Zamorin Traders".to_string(),
        address: "Beach Road, Calicut".to_string(),
        latitude: 11.26,
        longitude: 75.79,
        assigned_warehouse_id: Some(calicut.id),
        warehouse: Some(calicut.clone()),
        credit_limit: dec!(5000),
        credit_used: dec!(1000),
        credit_score: 70,
        created_at: day(1, 0),
    };

    let inventory = vec![
        stock(&kochi, &rice, 500, 100, day(9, 8)),
        stock(&kochi, &oil, 80, 100, day(9, 9)),
        stock(&kochi, &soap, 150, 100, day(9, 10)),
        stock(&calicut, &rice, 300, 100, day(9, 11)),
    ];

    let order_delivered = Uuid::new_v4();
    let order_out = Uuid::new_v4();
    let order_processing = Uuid::new_v4();
    let order_packed = Uuid::new_v4();

    let orders = vec![
        order(
            order_delivered,
            "ORD-1001",
            &ammu,
            &kochi,
            OrderStatus::Delivered,
            PaymentStatus::Paid,
            dec!(1500),
            day(10, 9),
            Some(day(11, 15)),
        ),
        order(
            order_out,
            "ORD-1002",
            &ammu,
            &kochi,
            OrderStatus::OutForDelivery,
            PaymentStatus::Pending,
            dec!(2500),
            day(12, 9),
            None,
        ),
        order(
            order_processing,
            "ORD-1003",
            &ammu,
            &kochi,
            OrderStatus::Processing,
            PaymentStatus::Pending,
            dec!(1200),
            day(13, 9),
            None,
        ),
        order(
            order_packed,
            "ORD-1004",
            &ammu,
            &kochi,
            OrderStatus::Packed,
            PaymentStatus::Pending,
            dec!(900),
            day(14, 9),
            None,
        ),
        order(
            Uuid::new_v4(),
            "ORD-2001",
            &zamorin,
            &calicut,
            OrderStatus::Pending,
            PaymentStatus::Pending,
            dec!(800),
            day(14, 11),
            None,
        ),
    ];

    Fixture {
        provider: MemoryProvider {
            warehouses: vec![kochi.clone(), calicut.clone()],
            retailers: vec![ammu.clone(), zamorin],
            categories: vec![grains, essentials],
            products: vec![rice, oil.clone(), soap],
            inventory,
            orders,
        },
        kochi: kochi.id,
        calicut: calicut.id,
        ammu: ammu.id,
        oil: oil.id,
        order_delivered,
        order_out,
        order_processing,
        order_packed,
    }
}
