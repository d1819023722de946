use shopkit_cart::{CartError, CartStore};
use shopkit_catalog::{create_item, Item};
use shopkit_core::{area, circle_area, perimeter, say_hello};
use shopkit_store::{telemetry, Config};
use std::f64::consts::PI;

/// Fresh store per test, with logging routed through the workspace subscriber
fn setup() -> CartStore {
    telemetry::init();
    let config = Config::from_toml("").expect("default config");
    CartStore::with_config(config.cart)
}

fn assert_members(actual: &[Item], expected: &[&Item]) {
    assert_eq!(actual.len(), expected.len());
    for item in expected {
        assert!(actual.contains(*item), "missing {}", item.name);
    }
}

#[test]
fn test_say_hello() {
    let hello = say_hello();
    assert_eq!(hello, "Hello");
    assert_eq!(hello.len(), 5);
}

#[test]
fn test_area_of_rectangle() {
    assert_eq!(area(5.0, 10.0), 50.0, "5 * 10 = 50");
    assert_eq!(area(0.0, 0.0), 0.0, "0 * 0 = 0");
    assert_eq!(area(1.0, 1.0), 1.0, "1 * 1 = 1");
}

#[test]
fn test_perimeter_of_quadrilateral() {
    assert_eq!(perimeter(5.0, 10.0), 30.0, "5 + 5 + 10 + 10 = 30");
    assert_eq!(perimeter(0.0, 0.0), 0.0);
    assert_eq!(perimeter(1.0, 1.0), 4.0);
}

#[test]
fn test_area_of_circle() {
    assert!((circle_area(5.0) - 78.5398).abs() < 0.0001);
    assert_eq!(circle_area(0.0), 0.0);
    assert_eq!(circle_area(1.0), PI);
}

#[test]
fn test_create_item_with_name_and_price() {
    let item = create_item("apple", 0.99);
    assert_eq!(item.name, "apple");
    assert_eq!(item.price, 0.99);
    assert_eq!(item.quantity, 1);
}

#[test]
fn test_empty_cart_lists_no_items() {
    let store = setup();
    assert!(store.items().is_empty());
}

#[test]
fn test_add_item_to_cart() {
    let mut store = setup();
    let item = create_item("apple", 0.99);
    store.add_item(item.clone());

    let cart = store.items();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0], item);
    assert_eq!(cart[0].id, item.id);
}

#[test]
fn test_number_of_items_in_cart() {
    let mut store = setup();
    assert_eq!(store.len(), 0);

    store.add_item(create_item("apple", 0.99));
    store.add_item(create_item("banana", 2.99));
    store.add_item(create_item("orange", 1.99));

    assert_eq!(store.len(), 3);
}

#[test]
fn test_remove_items_from_cart() {
    let mut store = setup();
    let item_1 = create_item("apple", 0.99);
    let item_2 = create_item("banana", 2.99);
    let item_3 = create_item("orange", 1.99);

    store.add_item(item_1.clone());
    store.add_item(item_2.clone());
    store.add_item(item_3.clone());

    store.remove_item(&item_1.id).unwrap();
    assert_eq!(store.len(), 2);
    assert_members(store.items(), &[&item_2, &item_3]);

    store.remove_item(&item_2.id).unwrap();
    assert_eq!(store.len(), 1);
    assert_members(store.items(), &[&item_3]);

    store.remove_item(&item_3.id).unwrap();
    assert_eq!(store.len(), 0);
    assert!(store.items().is_empty());
}

#[test]
fn test_update_count_of_items_in_cart() {
    let mut store = setup();
    let apple = create_item("apple", 0.99);
    store.add_item(apple.clone());

    store.update_quantity(&apple.id, 3).unwrap();
    assert_eq!(store.items()[0].quantity, 3);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_empty_cart_has_zero_items() {
    let mut store = setup();
    assert_eq!(store.len(), 0);

    store.add_item(create_item("apple", 0.99));
    store.clear();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
}

#[test]
fn test_total_cost_of_cart() {
    let mut store = setup();
    let apple = create_item("apple", 0.99);
    store.add_item(apple.clone());
    store.add_item(create_item("banana", 2.99));
    store.add_item(create_item("orange", 1.99));
    store.update_quantity(&apple.id, 2).unwrap();

    assert_eq!(store.total_cost(), 6.96);
}

#[test]
fn test_length_tracks_adds_minus_removes() {
    let mut store = setup();
    let items: Vec<Item> = (0..10)
        .map(|i| create_item(format!("item-{}", i), i as f64))
        .collect();

    let mut expected = 0usize;
    for (i, item) in items.iter().enumerate() {
        store.add_item(item.clone());
        expected += 1;
        if i % 3 == 0 {
            store.remove_item(&item.id).unwrap();
            expected -= 1;
        }
        assert_eq!(store.len(), expected);
    }

    // Removing something already gone does not double count
    store.remove_item(&items[0].id).unwrap();
    assert_eq!(store.len(), expected);
}

#[test]
fn test_strict_removal_from_config() {
    telemetry::init();
    let config = Config::from_toml("[cart]\nstrict_removal = true\n").unwrap();
    let mut store = CartStore::with_config(config.cart);

    let ghost = create_item("ghost", 1.0);
    let err = store.remove_item(&ghost.id).unwrap_err();
    assert!(matches!(err, CartError::ItemNotInCart(_)));
    assert!(err.to_string().contains(&ghost.id.to_string()));
}

#[test]
fn test_summary_serializes() {
    let mut store = setup();
    store.add_item(create_item("apple", 0.99));

    let value = serde_json::to_value(store.summary()).unwrap();
    assert_eq!(value["item_count"], 1);
    assert_eq!(value["total_cost"], 0.99);
    assert_eq!(value["currency"], "USD");
}
