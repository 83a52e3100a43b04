use chef_menu::domain::model::RemoveAllOutcome;
use chef_menu::{Course, ItemId, Menu, MenuError};

fn assert_rejected(menu: &mut Menu, name: &str, description: &str, price: &str) {
    let before = menu.items().to_vec();
    let result = menu.add(name, description, Course::Starter, price);
    assert!(
        matches!(result, Err(MenuError::ValidationError { .. })),
        "expected ({:?}, {:?}, {:?}) to be rejected, got {:?}",
        name,
        description,
        price,
        result
    );
    assert_eq!(menu.items(), before.as_slice());
}

#[test]
fn test_valid_prices_are_normalized_to_two_decimals() {
    let mut menu = Menu::new();
    let cases = [
        ("8.5", "8.50"),
        ("15", "15.00"),
        ("0.01", "0.01"),
        ("12.345", "12.35"),
        ("12.344", "12.34"),
        ("99.99", "99.99"),
        ("  7.1  ", "7.10"),
    ];

    for (input, expected) in cases {
        let item = menu.add("Dish", "Tasty", Course::MainMeal, input).unwrap();
        assert_eq!(item.price.to_string(), expected, "input {:?}", input);
    }
    assert_eq!(menu.len(), cases.len());
}

#[test]
fn test_invalid_input_leaves_menu_unchanged() {
    let mut menu = Menu::new();
    menu.add("Soup", "Hot tomato soup", Course::Starter, "8.5").unwrap();

    for price in ["0", "100", "-5", "abc", "", "   ", "100.00", "250"] {
        assert_rejected(&mut menu, "Dish", "Tasty", price);
    }
    assert_rejected(&mut menu, "", "Tasty", "5");
    assert_rejected(&mut menu, "Dish", "", "5");
    assert_rejected(&mut menu, "   ", "Tasty", "5");
    assert_rejected(&mut menu, "Dish", " \t ", "5");
    assert_rejected(&mut menu, &"n".repeat(51), "Tasty", "5");
    assert_rejected(&mut menu, "Dish", &"d".repeat(201), "5");

    assert_eq!(menu.len(), 1);
}

#[test]
fn test_price_boundary_scenario() {
    let mut menu = Menu::new();
    assert!(menu.add("Lobster", "Whole lobster", Course::MainMeal, "99.99").is_ok());
    assert!(menu.add("Caviar", "Beluga", Course::Starter, "100").is_err());
    assert_eq!(menu.len(), 1);
}

#[test]
fn test_insertion_order_is_display_order() {
    let mut menu = Menu::new();
    menu.add("C", "third letter", Course::Dessert, "3").unwrap();
    menu.add("A", "first letter", Course::Starter, "1").unwrap();
    menu.add("B", "second letter", Course::MainMeal, "2").unwrap();

    let names: Vec<&str> = menu.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_rapid_adds_get_unique_ids() {
    let mut menu = Menu::new();
    let mut ids: Vec<ItemId> = (0..500)
        .map(|i| {
            menu.add(&format!("Dish {}", i), "Same time", Course::Starter, "1")
                .unwrap()
                .id
        })
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 500);
}

#[test]
fn test_remove_is_idempotent() {
    let mut menu = Menu::new();
    let soup = menu.add("Soup", "Hot", Course::Starter, "5").unwrap();
    menu.add("Cake", "Sweet", Course::Dessert, "6").unwrap();

    let removed = menu.remove(soup.id).unwrap();
    assert_eq!(removed.name, "Soup");
    let snapshot = menu.items().to_vec();

    assert!(menu.remove(soup.id).is_none());
    assert!(menu.remove(ItemId(12345)).is_none());
    assert_eq!(menu.items(), snapshot.as_slice());
}

#[test]
fn test_remove_all_then_stats_are_zero() {
    let mut menu = Menu::new();
    menu.add("Soup", "Hot", Course::Starter, "5").unwrap();
    menu.add("Steak", "Rare", Course::MainMeal, "25").unwrap();

    assert_eq!(menu.remove_all(), RemoveAllOutcome::Removed(2));
    for stat in menu.per_course_stats() {
        assert_eq!(stat.count, 0);
        assert_eq!(stat.average.to_string(), "0.00");
        assert_eq!(stat.total.to_string(), "0.00");
    }
    assert_eq!(menu.overall_stats().overall_average.to_string(), "0.00");
    assert!(menu.most_expensive().is_none());

    assert_eq!(menu.remove_all(), RemoveAllOutcome::NothingToRemove);
}

#[test]
fn test_soup_and_main_scenario() {
    let mut menu = Menu::new();
    let soup = menu
        .add("Soup", "Hot tomato soup", Course::Starter, "8.5")
        .unwrap();
    assert_eq!(soup.price.to_string(), "8.50");
    menu.add("Chicken", "Roast chicken", Course::MainMeal, "15.00")
        .unwrap();

    let stats = menu.per_course_stats();
    let summary: Vec<(Course, usize, String)> = stats
        .iter()
        .map(|s| (s.course, s.count, s.average.to_string()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Course::Starter, 1, "8.50".to_string()),
            (Course::MainMeal, 1, "15.00".to_string()),
            (Course::Dessert, 0, "0.00".to_string()),
        ]
    );

    let overall = menu.overall_stats();
    assert_eq!(overall.total_items, 2);
    assert_eq!(overall.overall_average.to_string(), "11.75");
    assert_eq!(overall.total_value.to_string(), "23.50");
    assert_eq!(menu.most_expensive().unwrap().name, "Chicken");
}
